//! Facade crate for `QuoteHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `qhub` as a dependency of the application crate.
//! - Call `qhub::init` to register feature slices; extend as new slices appear.

use qhub_database::Database;
pub use qhub_domain as domain;
use qhub_domain::config::ApiConfig;
pub use qhub_kernel as kernel;

pub mod server {
    pub mod router {
        pub use qhub_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use qhub_underwriting as underwriting;

    /// Features compiled into this build.
    pub const ENABLED: &[&str] = &["server", "underwriting"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
    database: &Database,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Underwriting
    slices.push(features::underwriting::init(config, database)?);

    Ok(slices)
}
