use crate::error::UnderwritingError;
use crate::models::{CoverageRequest, RequestSummary};
use crate::repository::{NewSelection, RequestRepository};
use fxhash::FxHashMap;
use qhub_domain::catalog::CoverageKind;
use qhub_domain::config::SelectionPolicy;
use tracing::{debug, instrument};

/// Intake use cases: validation, persistence, and premium aggregation.
#[derive(Debug, Clone)]
pub struct RequestService {
    repo: RequestRepository,
    policy: SelectionPolicy,
}

impl RequestService {
    #[must_use]
    pub const fn new(repo: RequestRepository, policy: SelectionPolicy) -> Self {
        Self { repo, policy }
    }

    /// Validates the request and persists it together with its budget lines.
    ///
    /// Validation runs before anything touches the store; on failure no
    /// partial state becomes visible to readers. Returns the new record key.
    ///
    /// # Errors
    /// Returns a validation variant with the client-facing message, or
    /// [`UnderwritingError::Database`] if the write fails.
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_request(
        &self,
        request: &CoverageRequest,
    ) -> Result<String, UnderwritingError> {
        validate(request, self.policy)?;

        let lines = selection_lines(request, self.policy);
        let id = self.repo.insert_request(&request.title, &lines).await?;
        debug!(%id, lines = lines.len(), "Request persisted");

        Ok(id)
    }

    /// Loads all requests and reconstructs their coverage summaries.
    ///
    /// Requests, budget lines, and the catalog are read independently and
    /// joined in memory. A kind with no stored line (or no catalog row) is
    /// simply skipped for that request.
    ///
    /// # Errors
    /// Returns [`UnderwritingError::Database`] if any of the reads fail.
    #[instrument(skip(self))]
    pub async fn get_requests(&self) -> Result<Vec<RequestSummary>, UnderwritingError> {
        let requests = self.repo.list_requests().await?;
        let selections = self.repo.list_selections().await?;
        let coverages = self.repo.list_coverages().await?;

        let selection_index: FxHashMap<(&str, i64), f64> =
            selections.iter().map(|s| ((s.request.as_str(), s.coverage), s.budget)).collect();
        let coefficient_index: FxHashMap<i64, f64> =
            coverages.iter().map(|c| (c.id, c.profit_coefficient)).collect();

        let mut list = Vec::with_capacity(requests.len());
        for request in &requests {
            let mut row =
                RequestSummary { title: request.title.clone(), ..RequestSummary::default() };

            for kind in CoverageKind::ALL {
                let Some(&budget) = selection_index.get(&(request.id.as_str(), kind.id())) else {
                    continue;
                };
                let Some(&coefficient) = coefficient_index.get(&kind.id()) else {
                    continue;
                };

                row.set_line(kind, budget);
                row.total_net_premium += budget * coefficient;
            }

            list.push(row);
        }

        Ok(list)
    }
}

/// Checks the per-kind budget rules, first failure wins.
#[allow(clippy::cast_precision_loss)]
fn validate(request: &CoverageRequest, policy: SelectionPolicy) -> Result<(), UnderwritingError> {
    if policy == SelectionPolicy::SelectedOnly {
        for kind in CoverageKind::ALL {
            let (selected, budget) = request.line(kind);
            if selected && budget == 0.0 {
                return Err(UnderwritingError::MissingBudget);
            }
        }
    }

    for kind in CoverageKind::ALL {
        let (selected, budget) = request.line(kind);
        if !selected {
            continue;
        }

        let bounds = kind.budget_bounds();
        if budget < bounds.min as f64 {
            return Err(UnderwritingError::BudgetTooLow { kind, bound: bounds.min });
        }
        if budget > bounds.max as f64 {
            return Err(UnderwritingError::BudgetTooHigh { kind, bound: bounds.max });
        }
    }

    Ok(())
}

/// Budget lines to persist for a validated request, per the active policy.
fn selection_lines(request: &CoverageRequest, policy: SelectionPolicy) -> Vec<NewSelection> {
    CoverageKind::ALL
        .iter()
        .filter_map(|&kind| {
            let (selected, budget) = request.line(kind);
            match policy {
                SelectionPolicy::AllKinds => Some(NewSelection {
                    coverage: kind.id(),
                    budget: if selected { budget } else { 0.0 },
                }),
                SelectionPolicy::SelectedOnly => {
                    selected.then(|| NewSelection { coverage: kind.id(), budget })
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surgery_only(budget: f64) -> CoverageRequest {
        CoverageRequest {
            title: "Surgery only".to_owned(),
            surgery: true,
            surgery_budget: budget,
            ..CoverageRequest::default()
        }
    }

    #[test]
    fn boundary_budgets_are_accepted() {
        for budget in [5_000.0, 500_000_000.0] {
            assert!(validate(&surgery_only(budget), SelectionPolicy::AllKinds).is_ok());
        }
    }

    #[test]
    fn budget_below_minimum_names_coverage_and_bound() {
        let err = validate(&surgery_only(1_000.0), SelectionPolicy::AllKinds).unwrap_err();
        assert_eq!(err.to_string(), "You cant put less than 5000 budget for Surgery coverage.");
    }

    #[test]
    fn budget_above_maximum_names_coverage_and_bound() {
        let err = validate(&surgery_only(600_000_000.0), SelectionPolicy::AllKinds).unwrap_err();
        assert_eq!(
            err.to_string(),
            "You cant put more than 500000000 budget for Surgery coverage."
        );
    }

    #[test]
    fn unselected_budgets_are_ignored_by_validation() {
        let request = CoverageRequest {
            title: "Nothing selected".to_owned(),
            surgery_budget: 1.0,
            ..CoverageRequest::default()
        };
        assert!(validate(&request, SelectionPolicy::AllKinds).is_ok());
        assert!(validate(&request, SelectionPolicy::SelectedOnly).is_ok());
    }

    #[test]
    fn selected_only_policy_rejects_zero_budget() {
        let err = validate(&surgery_only(0.0), SelectionPolicy::SelectedOnly).unwrap_err();
        assert_eq!(
            err.to_string(),
            "You cant use a coverage without putting any budget for it."
        );

        // The all-kinds policy reports the bound violation instead.
        let err = validate(&surgery_only(0.0), SelectionPolicy::AllKinds).unwrap_err();
        assert!(matches!(err, UnderwritingError::BudgetTooLow { .. }));
    }

    #[test]
    fn all_kinds_policy_writes_a_line_per_kind() {
        let lines = selection_lines(&surgery_only(10_000.0), SelectionPolicy::AllKinds);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].coverage, 1);
        assert!((lines[0].budget - 10_000.0).abs() < f64::EPSILON);
        assert_eq!(lines[1].budget, 0.0);
        assert_eq!(lines[2].budget, 0.0);
    }

    #[test]
    fn selected_only_policy_writes_selected_lines() {
        let lines = selection_lines(&surgery_only(10_000.0), SelectionPolicy::SelectedOnly);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].coverage, 1);
    }
}
