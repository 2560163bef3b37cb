//! Progress ramp driving and easing curves.

/// Progress ramp state machine.
pub mod controller;
/// Easing curves applied to normalized ramp time.
pub mod ease;
