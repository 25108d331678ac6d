/// Persistence table holding intake requests.
pub const REQUEST: &str = "request";
/// Persistence table holding per-coverage budget lines.
pub const REQUEST_TYPE: &str = "request_type";
/// Persistence table holding the seeded coverage catalog.
pub const COVERAGE: &str = "coverage";

/// OpenAPI tag for system endpoints (health and friends).
pub const SYSTEM_TAG: &str = "System";
/// OpenAPI tag for the underwriting intake endpoints.
pub const UNDERWRITING_TAG: &str = "Underwriting";
