//! Integration tests for the focus countdown.

use studyroom_core::{CountdownTimer, Event, RingProgress, TimerState};

#[test]
fn test_full_focus_session() {
    let mut timer = CountdownTimer::default();
    timer.configure(1500).unwrap();
    timer.start();

    let completions = (0..1500)
        .filter_map(|_| timer.tick())
        .filter(|e| matches!(e, Event::TimerCompleted { .. }))
        .count();

    assert_eq!(completions, 1);
    assert_eq!(timer.state(), TimerState::Finished);
    assert_eq!(timer.remaining_secs(), 0);

    // Extra ticks after completion change nothing.
    for _ in 0..10 {
        assert!(timer.tick().is_none());
    }
    assert_eq!(timer.remaining_secs(), 0);
}

#[test]
fn test_pause_freezes_remaining() {
    let mut timer = CountdownTimer::new(600).unwrap();
    timer.start();
    for _ in 0..42 {
        timer.tick();
    }
    timer.pause();
    assert_eq!(timer.state(), TimerState::Paused);
    for _ in 0..100 {
        timer.tick();
    }
    assert_eq!(timer.remaining_secs(), 558);
}

#[test]
fn test_reset_from_every_state() {
    let mut timer = CountdownTimer::new(3).unwrap();

    timer.reset();
    assert_eq!(timer.state(), TimerState::Stopped);

    timer.start();
    timer.reset();
    assert_eq!(timer.state(), TimerState::Stopped);

    timer.start();
    timer.tick();
    timer.pause();
    timer.reset();
    assert_eq!(timer.state(), TimerState::Stopped);
    assert_eq!(timer.remaining_secs(), 3);

    timer.start();
    for _ in 0..3 {
        timer.tick();
    }
    assert_eq!(timer.state(), TimerState::Finished);
    timer.reset();
    assert_eq!(timer.state(), TimerState::Stopped);
    assert_eq!(timer.remaining_secs(), 3);
}

#[test]
fn test_ring_progress_over_a_run() {
    let mut timer = CountdownTimer::new(4).unwrap();
    timer.start();
    let mut labels = vec![RingProgress::from_timer(&timer).label];
    while timer.state() == TimerState::Running {
        timer.tick();
        labels.push(RingProgress::from_timer(&timer).label);
    }
    assert_eq!(labels, ["00:04", "00:03", "00:02", "00:01", "00:00"]);
}

#[test]
fn test_events_serialize_with_type_tag() {
    let mut timer = CountdownTimer::new(60).unwrap();
    let event = timer.start().unwrap();
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "TimerStarted");
    assert_eq!(json["remaining_secs"], 60);
}
