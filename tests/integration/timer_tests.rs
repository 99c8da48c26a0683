//! Timer / FastTimer scenarios.

use fsmkit::{FastTimer, ManualClock, Timer, TimerState};

#[test]
fn duration_100_sampled_every_50ms() {
    let clock = ManualClock::new();
    let mut t = Timer::new(100, &clock);

    let expected = [(0, false), (50, false), (100, true), (150, true)];
    for (i, &(elapsed, tmr)) in expected.iter().enumerate() {
        clock.set_ms(i as u64 * 50);
        t.update(true, &clock);
        assert_eq!(t.elapsed(), elapsed, "elapsed at sample {i}");
        assert_eq!(t.tmr(), tmr, "TMR at sample {i}");
    }
}

#[test]
fn held_disabled_never_fires() {
    let clock = ManualClock::new();
    let mut t = Timer::new(10, &clock);
    for _ in 0..1_000 {
        clock.advance_ms(7);
        t.update(false, &clock);
        assert_eq!(t.elapsed(), 0);
        assert!(!t.tmr());
    }
}

#[test]
fn fires_on_first_update_past_duration_and_stays() {
    let clock = ManualClock::new();
    let mut t = Timer::new(30, &clock);
    t.update(true, &clock);

    let mut fired_at = None;
    for step in 1..=10u64 {
        clock.advance_ms(7);
        if t.update(true, &clock) && fired_at.is_none() {
            fired_at = Some(step);
        }
        if let Some(first) = fired_at {
            assert!(t.tmr(), "TMR dropped at step {step} after firing at {first}");
        }
    }
    // 7 * 5 = 35 is the first sample >= 30.
    assert_eq!(fired_at, Some(5));
}

#[test]
fn restart_forgets_previous_run() {
    let clock = ManualClock::new();
    let mut t = Timer::new(100, &clock);

    t.update(true, &clock);
    clock.advance_ms(90);
    t.update(true, &clock);
    assert_eq!(t.elapsed(), 90);

    t.update(false, &clock);
    assert_eq!(t.state(), TimerState::Waiting);
    assert_eq!(t.elapsed(), 0);

    t.update(true, &clock);
    clock.advance_ms(20);
    t.update(true, &clock);
    assert_eq!(t.elapsed(), 20);
    assert!(!t.tmr(), "a pause must not carry the 90ms over");
}

#[test]
fn fast_and_slow_timers_share_one_clock() {
    let clock = ManualClock::new();
    let mut slow = Timer::new(2, &clock);
    let mut fast = FastTimer::new(1_500, &clock);

    slow.update(true, &clock);
    fast.update(true, &clock);

    clock.advance_us(1_500);
    assert!(fast.update(true, &clock));
    assert!(!slow.update(true, &clock));
    assert_eq!(slow.elapsed(), 1);

    clock.advance_us(500);
    assert!(slow.update(true, &clock));
    assert_eq!(fast.elapsed(), 1_500); // not updated since
}

#[test]
fn fast_timer_across_microsecond_wrap() {
    let clock = ManualClock::at_us(u64::from(u32::MAX) - 99);
    let mut t = FastTimer::new(150, &clock);
    t.update(true, &clock);

    clock.advance_us(149);
    assert!(!t.update(true, &clock));
    clock.advance_us(1);
    assert!(t.update(true, &clock));
    assert_eq!(t.elapsed(), 150);
}
