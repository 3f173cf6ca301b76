//! Timing properties of the typewriter, checked on a simulated clock.

use std::time::Duration;

use typecycle::typewriter::{Phase, Transition};
use typecycle::{Sequencer, Timeline, TypewriterOptions};

fn options(type_ms: u64, delete_ms: u64, pause_ms: u64) -> TypewriterOptions {
    TypewriterOptions {
        type_interval_ms: type_ms,
        delete_interval_ms: delete_ms,
        pause_ms,
    }
}

fn timeline(phrases: &[&str], options: TypewriterOptions) -> Timeline {
    Timeline::new(Sequencer::new(phrases.iter().copied(), options))
}

/// Phrases shown at the moment each one is fully typed.
fn completed_phrases(timeline: &mut Timeline, count: usize) -> Vec<String> {
    let mut completed = Vec::new();
    while completed.len() < count {
        let frame = timeline.step().expect("sequencer is not idle");
        if frame.phase == Phase::Holding && frame.transition == Transition::Typed {
            completed.push(frame.text);
        }
    }
    completed
}

#[test]
fn phrases_complete_in_order_and_wrap() {
    let phrases = ["alpha", "beta", "gamma"];
    let mut timeline = timeline(&phrases, options(3, 2, 50));
    assert_eq!(
        completed_phrases(&mut timeline, 7),
        vec!["alpha", "beta", "gamma", "alpha", "beta", "gamma", "alpha"]
    );
}

#[test]
fn single_phrase_keeps_cycling() {
    let mut timeline = timeline(&["Only"], options(10, 5, 100));
    assert_eq!(completed_phrases(&mut timeline, 4), vec!["Only"; 4]);
}

#[test]
fn typing_grows_by_one_per_interval_and_stays_a_prefix() {
    let phrases = ["Hello", "Rust"];
    let mut timeline = timeline(&phrases, options(7, 3, 40));
    let mut previous: Option<(Duration, usize)> = None;

    for frame in timeline.run_for(Duration::from_secs(2)) {
        let active = phrases[frame.index];
        assert!(active.starts_with(&frame.text), "{:?} not a prefix of {}", frame.text, active);

        if frame.transition == Transition::Typed {
            if let Some((at, len)) = previous {
                if len < frame.text.len() {
                    assert_eq!(frame.text.len(), len + 1);
                    assert_eq!(frame.at - at, Duration::from_millis(7));
                }
            }
        }
        previous = Some((frame.at, frame.text.len()));
    }
}

#[test]
fn deleting_shrinks_by_one_per_interval_until_empty() {
    let mut timeline = timeline(&["abc", "de"], options(1, 4, 10));
    let frames = timeline.run_for(Duration::from_millis(3 + 10 + 12));

    let deletes: Vec<_> = frames
        .iter()
        .filter(|f| f.transition == Transition::Deleted)
        .map(|f| (f.at.as_millis(), f.text.as_str(), f.index))
        .collect();
    assert_eq!(deletes, vec![(17, "ab", 0), (21, "a", 0), (25, "", 1)]);
}

#[test]
fn pause_is_independent_of_typing_speed() {
    let mut timeline = timeline(&["ab"], options(50, 1, 300));
    let frames = timeline.run_for(Duration::from_millis(400));
    let typed = frames.iter().find(|f| f.text == "ab").unwrap();
    let started = frames
        .iter()
        .find(|f| f.transition == Transition::DeletionStarted)
        .unwrap();
    assert_eq!(started.at - typed.at, Duration::from_millis(300));
}

#[test]
fn empty_phrase_is_a_pause_not_a_busy_loop() {
    let mut timeline = timeline(&["", "x"], options(10, 10, 100));
    let frames = timeline.run_for(Duration::from_millis(110));
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].at, Duration::from_millis(100));
    assert_eq!(frames[0].index, 1);
    assert_eq!(frames[1].text, "x");
}

#[test]
fn reset_mid_cycle_restarts_from_new_first_phrase() {
    let mut sequencer = Sequencer::new(["Hello"], options(10, 5, 100));
    for _ in 0..3 {
        sequencer.tick();
    }
    sequencer.reset(["World"]);

    let mut timeline = Timeline::new(sequencer);
    let first = timeline.step().unwrap();
    assert_eq!(first.text, "W");
    assert_eq!(first.at, Duration::from_millis(10));
}
