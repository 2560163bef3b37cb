//! Draw instruction sinks.

/// Glyph draw instructions and the surfaces that receive them.
pub mod surface;
