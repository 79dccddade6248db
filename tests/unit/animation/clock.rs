use super::*;

#[test]
fn clock_ticks_monotonically_from_zero() {
    let mut clock = AnimationClock::new();
    assert_eq!(clock.frame(), FrameIndex(0));
    assert_eq!(clock.tick(), FrameIndex(1));
    assert_eq!(clock.tick(), FrameIndex(2));
    assert_eq!(AnimationClock::at(FrameIndex(45)).frame(), FrameIndex(45));
}

#[test]
fn angle_is_a_pure_function_of_frame() {
    assert_eq!(angle_degrees(FrameIndex(45), -2.0), -90.0);
    assert_eq!(
        angle_degrees(FrameIndex(1234), 0.75).to_bits(),
        angle_degrees(FrameIndex(1234), 0.75).to_bits()
    );
}

#[test]
fn stopped_timer_never_ticks() {
    let mut timer = AnimationTimer::default();
    assert!(!timer.is_running());
    assert_eq!(timer.advance(Duration::from_secs(1)), 0);
    assert_eq!(timer.frame(), FrameIndex(0));
}

#[test]
fn running_timer_fires_once_per_full_period() {
    let mut timer = AnimationTimer::default();
    timer.set_running(true);
    assert_eq!(timer.advance(Duration::from_millis(16)), 0);
    assert_eq!(timer.advance(Duration::from_millis(1)), 1);
    assert_eq!(timer.advance(Duration::from_millis(17 * 3 + 5)), 3);
    assert_eq!(timer.frame(), FrameIndex(4));
}

#[test]
fn stopping_discards_partial_period_and_keeps_frame() {
    let mut timer = AnimationTimer::new(Duration::from_millis(10)).unwrap();
    timer.set_running(true);
    assert_eq!(timer.advance(Duration::from_millis(25)), 2);
    timer.set_running(false);
    assert_eq!(timer.advance(Duration::from_millis(100)), 0);
    timer.set_running(true);
    assert_eq!(timer.advance(Duration::from_millis(9)), 0);
    assert_eq!(timer.advance(Duration::from_millis(1)), 1);
    assert_eq!(timer.frame(), FrameIndex(3));
}

#[test]
fn zero_period_is_rejected() {
    assert!(AnimationTimer::new(Duration::ZERO).is_err());
    assert_eq!(AnimationTimer::default().period(), DEFAULT_TICK_PERIOD);
}

#[test]
fn huge_elapsed_fires_in_one_step_without_overflow() {
    let mut timer = AnimationTimer::new(Duration::from_nanos(1)).unwrap();
    timer.set_running(true);
    let fired = timer.advance(Duration::MAX);
    assert_eq!(fired, u64::MAX);
    assert_eq!(timer.frame(), FrameIndex(u64::MAX));

    // Further time saturates instead of panicking.
    timer.advance(Duration::MAX);
    assert_eq!(timer.frame(), FrameIndex(u64::MAX));
}

#[test]
fn remainder_carries_into_the_next_advance() {
    let mut timer = AnimationTimer::new(Duration::from_millis(17)).unwrap();
    timer.set_running(true);
    assert_eq!(timer.advance(Duration::from_millis(17 * 1000 + 16)), 1000);
    assert_eq!(timer.advance(Duration::from_millis(1)), 1);
    assert_eq!(timer.frame(), FrameIndex(1001));
}

#[test]
fn tick_by_saturates() {
    let mut clock = AnimationClock::at(FrameIndex(u64::MAX - 1));
    assert_eq!(clock.tick_by(5), FrameIndex(u64::MAX));
}
