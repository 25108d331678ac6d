//! Coverage catalog: the fixed set of coverage kinds the intake API sells.
//!
//! The catalog never changes at runtime. Titles and profit coefficients are
//! seeded into the `coverage` table by the database migration; the constants
//! here are the single source those seeds and the validation rules derive
//! from.

use std::fmt;

/// One of the three insurance coverage categories.
///
/// The discriminants are the stable numeric identifiers used as record keys
/// of the `coverage` table and as the `coverage` field of budget lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum CoverageKind {
    Surgery = 1,
    Dentistry = 2,
    Hospitalization = 3,
}

impl CoverageKind {
    /// All kinds, in the fixed enumeration order used for aggregation.
    pub const ALL: [Self; 3] = [Self::Surgery, Self::Dentistry, Self::Hospitalization];

    /// Stable numeric identifier of this kind.
    #[must_use]
    pub const fn id(self) -> i64 {
        self as i64
    }

    /// Resolves a kind from its numeric identifier.
    #[must_use]
    pub const fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::Surgery),
            2 => Some(Self::Dentistry),
            3 => Some(Self::Hospitalization),
            _ => None,
        }
    }

    /// Human-readable catalog title, as seeded into the `coverage` table.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Surgery => "Surgery",
            Self::Dentistry => "Dentistry",
            Self::Hospitalization => "Hospitalization",
        }
    }

    /// Multiplier converting a budget into its net-premium contribution.
    #[must_use]
    pub const fn profit_coefficient(self) -> f64 {
        match self {
            Self::Surgery => 0.0052,
            Self::Dentistry => 0.0042,
            Self::Hospitalization => 0.0050,
        }
    }

    /// Inclusive budget bounds enforced when this kind is selected.
    #[must_use]
    pub const fn budget_bounds(self) -> BudgetBounds {
        match self {
            Self::Surgery => BudgetBounds { min: 5_000, max: 500_000_000 },
            Self::Dentistry => BudgetBounds { min: 4_000, max: 400_000_000 },
            Self::Hospitalization => BudgetBounds { min: 2_000, max: 200_000_000 },
        }
    }
}

impl fmt::Display for CoverageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Inclusive budget range for a coverage kind.
///
/// The boundary values themselves are valid; only budgets strictly below
/// `min` or strictly above `max` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetBounds {
    pub min: u64,
    pub max: u64,
}

impl BudgetBounds {
    /// Returns true when `budget` lies within the inclusive range.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn contains(self, budget: f64) -> bool {
        budget >= self.min as f64 && budget <= self.max as f64
    }
}
