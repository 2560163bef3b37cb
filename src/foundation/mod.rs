//! Shared value types and the crate error.

/// Colors, geometry and layout direction.
pub mod core;
/// Crate error type.
pub mod error;
