//! EdgeCounter scenarios.

use fsmkit::{CounterState, EdgeCounter};

/// (increment, decrement, reset) → expected (count, CNT)
type Step = ((bool, bool, bool), (u32, bool));

fn run(counter: &mut EdgeCounter, steps: &[Step]) {
    for (i, &((inc, dec, rst), (count, cnt))) in steps.iter().enumerate() {
        counter.update(inc, dec, rst);
        assert_eq!(counter.count(), count, "count after step {i}");
        assert_eq!(counter.cnt(), cnt, "CNT after step {i}");
    }
}

#[test]
fn preset_two_walkthrough() {
    let mut c = EdgeCounter::new(2);
    run(
        &mut c,
        &[
            ((false, false, false), (0, false)),
            ((true, false, false), (1, false)),
            ((true, false, false), (1, false)), // held high: no re-trigger
            ((false, false, false), (1, false)),
            ((true, false, false), (2, true)),
            ((false, false, true), (0, false)),
        ],
    );
}

#[test]
fn reset_overrides_pulses_for_every_held_tick() {
    let mut c = EdgeCounter::new(1);
    c.update(true, false, false);
    c.update(false, false, false);
    assert_eq!(c.count(), 1);

    let held = [
        (true, false),
        (false, false),
        (false, true),
        (true, true),
        (false, false),
    ];
    for (inc, dec) in held {
        c.update(inc, dec, true);
        assert_eq!(c.count(), 0);
        assert!(!c.cnt());
        assert_eq!(c.state(), CounterState::Resetting);
    }
}

#[test]
fn count_up_then_down_to_floor() {
    let mut c = EdgeCounter::new(3);
    for _ in 0..3 {
        c.update(true, false, false);
        c.update(false, false, false);
    }
    assert_eq!(c.count(), 3);
    assert!(c.cnt());

    for expected in [2, 1, 0, 0, 0] {
        c.update(false, true, false);
        c.update(false, false, false);
        assert_eq!(c.count(), expected);
    }
    assert!(!c.cnt());
}

#[test]
fn opposing_edges_cancel_and_are_consumed() {
    let mut c = EdgeCounter::new(5);
    c.update(true, true, false);
    assert_eq!(c.count(), 0);

    // The cancelled edge is consumed: increment must drop before it counts.
    c.update(true, false, false);
    assert_eq!(c.count(), 0);
    c.update(false, false, false);
    c.update(true, false, false);
    assert_eq!(c.count(), 1);
}

#[test]
fn increment_edge_while_decrement_held() {
    let mut c = EdgeCounter::new(5);
    c.update(false, true, false);
    c.update(false, true, false); // held: no second decrement
    assert_eq!(c.state(), CounterState::Waiting);

    c.update(true, true, false); // only the increment input rose
    assert_eq!(c.state(), CounterState::CountingUp);
    assert_eq!(c.count(), 1);
}
