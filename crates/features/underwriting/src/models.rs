use qhub_domain::catalog::CoverageKind;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Incoming intake request: a title plus one flag/budget pair per coverage kind.
///
/// Unspecified flags default to `false` and unspecified budgets to `0`, so a
/// client may send only the coverages it cares about.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverageRequest {
    pub title: String,
    pub surgery: bool,
    pub dentistry: bool,
    pub hospitalization: bool,
    pub surgery_budget: f64,
    pub dentistry_budget: f64,
    pub hospitalization_budget: f64,
}

impl CoverageRequest {
    /// Flag and budget submitted for one coverage kind.
    #[must_use]
    pub const fn line(&self, kind: CoverageKind) -> (bool, f64) {
        match kind {
            CoverageKind::Surgery => (self.surgery, self.surgery_budget),
            CoverageKind::Dentistry => (self.dentistry, self.dentistry_budget),
            CoverageKind::Hospitalization => (self.hospitalization, self.hospitalization_budget),
        }
    }
}

/// Summarized view of a stored request: selected kinds, their budgets, and
/// the accumulated net premium.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestSummary {
    pub title: String,
    pub surgery: bool,
    pub surgery_budget: f64,
    pub dentistry: bool,
    pub dentistry_budget: f64,
    pub hospitalization: bool,
    pub hospitalization_budget: f64,
    pub total_net_premium: f64,
}

impl RequestSummary {
    /// Marks `kind` as selected and records its budget.
    pub(crate) fn set_line(&mut self, kind: CoverageKind, budget: f64) {
        match kind {
            CoverageKind::Surgery => {
                self.surgery = true;
                self.surgery_budget = budget;
            }
            CoverageKind::Dentistry => {
                self.dentistry = true;
                self.dentistry_budget = budget;
            }
            CoverageKind::Hospitalization => {
                self.hospitalization = true;
                self.hospitalization_budget = budget;
            }
        }
    }
}
