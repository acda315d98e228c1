//! Full think/reveal round trips against the public engine surface.

use rand::SeedableRng;
use rand::rngs::StdRng;

use riddlecast_engine::{ClockSource, Cue, CueQueue, Session, TimerOptions};
use riddlecast_types::ViewStyle;

/// Counts schedule churn instead of keeping real time.
#[derive(Default)]
struct SpyClock {
    arms: usize,
    cancels: usize,
}

impl ClockSource for SpyClock {
    fn arm(&mut self) {
        self.arms += 1;
    }

    fn cancel(&mut self) {
        self.cancels += 1;
    }
}

fn tick_n(
    session: &mut Session,
    rng: &mut StdRng,
    clock: &mut SpyClock,
    cues: &mut CueQueue,
    n: u32,
) {
    for _ in 0..n {
        session.tick(rng, clock, cues);
    }
}

#[test]
fn default_timers_run_a_full_round_trip() {
    let mut session = Session::new(TimerOptions::default(), ViewStyle::Compact.example_count());
    let mut rng = StdRng::seed_from_u64(1);
    let mut clock = SpyClock::default();
    let mut cues = CueQueue::new();

    session.start(&mut rng, &mut clock);
    assert!(session.phase().is_thinking());
    assert_eq!(session.remaining_seconds(), 180);
    assert_eq!(session.rounds(), 1);

    // No chime until the warn threshold.
    tick_n(&mut session, &mut rng, &mut clock, &mut cues, 174);
    assert_eq!(session.remaining_seconds(), 6);
    assert!(cues.take().is_empty());

    session.tick(&mut rng, &mut clock, &mut cues);
    assert_eq!(session.remaining_seconds(), 5);
    assert_eq!(cues.take(), vec![Cue::AlertChime]);

    tick_n(&mut session, &mut rng, &mut clock, &mut cues, 5);
    assert!(session.phase().is_revealed());
    assert_eq!(session.remaining_seconds(), 15);
    assert!(cues.take().is_empty());

    tick_n(&mut session, &mut rng, &mut clock, &mut cues, 15);
    assert!(session.phase().is_thinking());
    assert_eq!(session.remaining_seconds(), 180);
    assert_eq!(session.rounds(), 2);
}

#[test]
fn configured_warn_threshold_moves_the_chime() {
    let timer = TimerOptions {
        think_seconds: 10,
        gap_seconds: 2,
        warn_seconds: 3,
    };
    let mut session = Session::new(timer, 1);
    let mut rng = StdRng::seed_from_u64(2);
    let mut clock = SpyClock::default();
    let mut cues = CueQueue::new();

    session.start(&mut rng, &mut clock);
    tick_n(&mut session, &mut rng, &mut clock, &mut cues, 6);
    assert!(cues.take().is_empty());

    session.tick(&mut rng, &mut clock, &mut cues);
    assert_eq!(session.remaining_seconds(), 3);
    assert_eq!(cues.take(), vec![Cue::AlertChime]);
}

#[test]
fn each_transition_recycles_the_schedule_once() {
    let timer = TimerOptions {
        think_seconds: 2,
        gap_seconds: 1,
        warn_seconds: 1,
    };
    let mut session = Session::new(timer, 1);
    let mut rng = StdRng::seed_from_u64(3);
    let mut clock = SpyClock::default();
    let mut cues = CueQueue::new();

    session.start(&mut rng, &mut clock);
    assert_eq!((clock.cancels, clock.arms), (1, 1));

    // Think window expires.
    tick_n(&mut session, &mut rng, &mut clock, &mut cues, 2);
    assert!(session.phase().is_revealed());
    assert_eq!((clock.cancels, clock.arms), (2, 2));

    // Gap expires, next round begins.
    session.tick(&mut rng, &mut clock, &mut cues);
    assert!(session.phase().is_thinking());
    assert_eq!((clock.cancels, clock.arms), (3, 3));
    assert_eq!(session.rounds(), 2);
}

#[test]
fn the_revealed_answer_belongs_to_the_displayed_question() {
    let timer = TimerOptions {
        think_seconds: 1,
        gap_seconds: 5,
        warn_seconds: 0,
    };
    let mut session = Session::new(timer, 3);
    let mut rng = StdRng::seed_from_u64(4);
    let mut clock = SpyClock::default();
    let mut cues = CueQueue::new();

    session.start(&mut rng, &mut clock);
    let question = session.puzzle().unwrap().question();

    session.tick(&mut rng, &mut clock, &mut cues);
    assert!(session.phase().is_revealed());

    let revealed = session.puzzle().unwrap();
    assert_eq!(revealed.question(), question);
    assert_eq!(revealed.answer_value(), question.result());
}
