use std::time::Duration;

use crate::animation::ease::Ease;
use crate::foundation::core::clamp_unit;

/// Whether a ramp is currently advancing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampState {
    /// Progress is static; ticks are ignored.
    Idle,
    /// Progress advances toward 1 on every tick.
    Running,
}

/// Outcome of one [`AnimationController::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// No ramp was running.
    Idle,
    /// The ramp advanced and is still running.
    Advanced,
    /// The ramp reached 1 on this tick and is now idle.
    Completed,
}

/// Drives a progress value from 0 to 1 over a fixed duration.
///
/// The controller never schedules anything itself: the host calls [`tick`](Self::tick) once
/// per frame with the elapsed wall time. An explicit [`set_progress`](Self::set_progress)
/// always wins over ticking and stops the ramp without reporting completion.
#[derive(Clone, Debug)]
pub struct AnimationController {
    state: RampState,
    ease: Ease,
    duration: Duration,
    elapsed: Duration,
    progress: f32,
}

impl AnimationController {
    /// Idle controller resting at progress 1.
    pub fn new(ease: Ease) -> Self {
        Self {
            state: RampState::Idle,
            ease,
            duration: Duration::ZERO,
            elapsed: Duration::ZERO,
            progress: 1.0,
        }
    }

    /// Current progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current ramp state.
    pub fn state(&self) -> RampState {
        self.state
    }

    /// `true` while a ramp is advancing.
    pub fn is_running(&self) -> bool {
        self.state == RampState::Running
    }

    /// Duration of the most recently started ramp.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Easing curve applied to ramp time.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Restart the ramp from progress 0.
    ///
    /// A ramp already in flight is abandoned without completing.
    pub fn start(&mut self, duration: Duration) {
        if self.is_running() {
            tracing::trace!("restarting ramp before completion");
        }
        self.state = RampState::Running;
        self.duration = duration;
        self.elapsed = Duration::ZERO;
        self.progress = 0.0;
    }

    /// Force progress to `p` clamped into `[0, 1]` and stop any running ramp.
    pub fn set_progress(&mut self, p: f32) {
        self.state = RampState::Idle;
        self.progress = clamp_unit(p);
    }

    /// Stop the ramp where it is.
    pub fn cancel(&mut self) {
        self.state = RampState::Idle;
    }

    /// Advance a running ramp by `dt`.
    pub fn tick(&mut self, dt: Duration) -> Tick {
        if self.state != RampState::Running {
            return Tick::Idle;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        if self.duration.is_zero() || self.elapsed >= self.duration {
            self.progress = 1.0;
            self.state = RampState::Idle;
            return Tick::Completed;
        }

        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.progress = clamp_unit(self.ease.apply(t) as f32);
        Tick::Advanced
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(Ease::Linear)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/controller.rs"]
mod tests;
