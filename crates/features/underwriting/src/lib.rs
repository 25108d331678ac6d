//! Underwriting feature slice: insurance-request intake and net-premium summaries.
//!
//! The slice owns the only real business rules of the platform: budget
//! validation on intake and premium aggregation on read. Everything it needs
//! at runtime (repository + policy) is initialized once via [`init`] and
//! shared through the API state registry.

mod error;
mod models;
mod repository;
mod routes;
mod service;

pub use error::UnderwritingError;
pub use models::{CoverageRequest, RequestSummary};
pub use repository::{NewSelection, RequestRepository};
pub use routes::{LOADED_MESSAGE, SAVED_MESSAGE, router};
pub use service::RequestService;

use qhub_database::Database;
use qhub_domain::config::ApiConfig;
use qhub_domain::registry::{FeatureSlice, InitializedSlice};
use std::ops::Deref;
use std::sync::Arc;

/// Underwriting feature state
#[derive(Debug, Clone)]
pub struct UnderwritingInner {
    pub service: RequestService,
}

/// Shared handle to the underwriting state, registered in [`ApiState`].
///
/// [`ApiState`]: qhub_kernel::server::ApiState
#[derive(Debug, Clone)]
pub struct Underwriting {
    inner: Arc<UnderwritingInner>,
}

impl Underwriting {
    pub fn new(inner: UnderwritingInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Underwriting {
    type Target = UnderwritingInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Underwriting {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the underwriting feature.
///
/// # Errors
/// Returns an error if the slice cannot be initialized.
pub fn init(config: &ApiConfig, database: &Database) -> Result<InitializedSlice, UnderwritingError> {
    tracing::info!(policy = ?config.underwriting.policy, "Underwriting slice initialized");

    let service = RequestService::new(
        RequestRepository::new(database.clone()),
        config.underwriting.policy,
    );
    let slice = Underwriting::new(UnderwritingInner { service });

    Ok(InitializedSlice::new(slice))
}
