//! Convenience re-exports for downstream crates.

pub use crate::safe_nanoid;

#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateBuilder, Envelope};
