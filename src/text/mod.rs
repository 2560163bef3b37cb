//! Text styling snapshots and per-character glyph measurement.

/// Measurement trait, width sequences and the built-in estimate backends.
pub mod metrics;
/// Shaping-backed measurement through Parley.
pub mod parley_measure;
/// Style snapshots and the host style query trait.
pub mod style;
