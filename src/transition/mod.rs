//! Old/new text generations and the update protocol between them.

/// Transition state and its update protocol.
pub mod state;
