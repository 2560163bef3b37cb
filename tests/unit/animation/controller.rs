use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn new_controller_rests_at_one() {
    let c = AnimationController::new(Ease::Linear);
    assert_eq!(c.progress(), 1.0);
    assert_eq!(c.state(), RampState::Idle);
}

#[test]
fn start_resets_progress_and_runs() {
    let mut c = AnimationController::default();
    c.start(ms(100));
    assert_eq!(c.progress(), 0.0);
    assert!(c.is_running());
}

#[test]
fn linear_ramp_advances_and_completes_once() {
    let mut c = AnimationController::new(Ease::Linear);
    c.start(ms(100));

    assert_eq!(c.tick(ms(25)), Tick::Advanced);
    assert!((c.progress() - 0.25).abs() < 1e-6);
    assert_eq!(c.tick(ms(50)), Tick::Advanced);
    assert!((c.progress() - 0.75).abs() < 1e-6);

    assert_eq!(c.tick(ms(50)), Tick::Completed);
    assert_eq!(c.progress(), 1.0);
    assert_eq!(c.state(), RampState::Idle);

    assert_eq!(c.tick(ms(50)), Tick::Idle);
    assert_eq!(c.progress(), 1.0);
}

#[test]
fn set_progress_clamps_and_stops_ramp() {
    let mut c = AnimationController::default();
    c.start(ms(100));
    c.set_progress(-0.5);
    assert_eq!(c.progress(), 0.0);
    assert!(!c.is_running());
    assert_eq!(c.tick(ms(500)), Tick::Idle);
    assert_eq!(c.progress(), 0.0);

    c.set_progress(1.5);
    assert_eq!(c.progress(), 1.0);
    c.set_progress(f32::NAN);
    assert_eq!(c.progress(), 0.0);
}

#[test]
fn forced_one_does_not_complete() {
    let mut c = AnimationController::default();
    c.start(ms(100));
    c.tick(ms(10));
    c.set_progress(1.0);
    assert_eq!(c.tick(ms(10)), Tick::Idle);
}

#[test]
fn zero_duration_completes_on_next_tick() {
    let mut c = AnimationController::default();
    c.start(Duration::ZERO);
    assert_eq!(c.progress(), 0.0);
    assert_eq!(c.tick(Duration::ZERO), Tick::Completed);
    assert_eq!(c.progress(), 1.0);
}

#[test]
fn restart_abandons_running_ramp() {
    let mut c = AnimationController::default();
    c.start(ms(100));
    c.tick(ms(90));
    c.start(ms(100));
    assert_eq!(c.progress(), 0.0);
    assert_eq!(c.tick(ms(50)), Tick::Advanced);
}

#[test]
fn cancel_keeps_progress() {
    let mut c = AnimationController::default();
    c.start(ms(100));
    c.tick(ms(40));
    let p = c.progress();
    c.cancel();
    assert_eq!(c.progress(), p);
    assert_eq!(c.tick(ms(40)), Tick::Idle);
}

#[test]
fn eased_ramp_uses_curve() {
    let mut c = AnimationController::new(Ease::InQuad);
    c.start(ms(100));
    c.tick(ms(50));
    assert!((c.progress() - 0.25).abs() < 1e-6);
}
