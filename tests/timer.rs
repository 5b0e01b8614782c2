use std::time::Duration;

use pipe_runner::timer::{Due, Tick, Timeout, Timers};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn timers_fire_at_their_periods() {
    let mut timers = Timers::start(Duration::ZERO);
    let due = timers.due(ms(100));
    assert_eq!(due, Due { collision: 10, score: 1 });
    assert_eq!(timers.due(ms(110)), Due { collision: 1, score: 0 });
}

#[test]
fn due_ticks_yield_collision_before_score() {
    let mut timers = Timers::start(Duration::ZERO);
    let ticks: Vec<Tick> = timers.due(ms(200)).collect();
    assert_eq!(ticks.len(), 22);
    assert!(ticks[..20].iter().all(|t| *t == Tick::Collision));
    assert_eq!(&ticks[20..], &[Tick::Score, Tick::Score]);
}

#[test]
fn cancelling_twice_is_a_no_op() {
    let mut timers = Timers::start(Duration::ZERO);
    let token = timers.token();
    assert!(timers.cancel());
    assert!(!timers.cancel());
    assert!(!token.cancel());
    assert_eq!(timers.due(ms(10_000)), Due::default());
}

#[test]
fn timeout_fires_once() {
    let mut t = Timeout::default();
    t.arm(Duration::ZERO, ms(500));
    assert!(!t.poll(ms(499)));
    assert!(t.poll(ms(500)));
    assert!(!t.poll(ms(600)));
    assert!(!t.is_armed());
}

#[test]
fn rearming_moves_the_deadline() {
    let mut t = Timeout::default();
    t.arm(Duration::ZERO, ms(500));
    t.arm(ms(300), ms(500));
    assert!(!t.poll(ms(500)));
    assert_eq!(t.remaining(ms(500)), Some(ms(300)));
    assert!(t.poll(ms(800)));
}

#[test]
fn cancelled_timeout_never_fires() {
    let mut t = Timeout::default();
    t.arm(Duration::ZERO, ms(100));
    t.cancel();
    assert!(!t.poll(ms(1000)));
}
