use qhub_database::DatabaseError;
use qhub_domain::catalog::CoverageKind;

/// Failures of the intake operations.
///
/// Validation variants render the exact wording surfaced to clients in the
/// response envelope; the store variant forwards the underlying message.
#[derive(Debug, thiserror::Error)]
pub enum UnderwritingError {
    /// Budget below the lower bound of a selected coverage.
    #[error("You cant put less than {bound} budget for {kind} coverage.")]
    BudgetTooLow { kind: CoverageKind, bound: u64 },

    /// Budget above the upper bound of a selected coverage.
    #[error("You cant put more than {bound} budget for {kind} coverage.")]
    BudgetTooHigh { kind: CoverageKind, bound: u64 },

    /// A coverage was selected without any budget (selected-only policy).
    #[error("You cant use a coverage without putting any budget for it.")]
    MissingBudget,

    /// Persistence failures bubbling up from the store.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
