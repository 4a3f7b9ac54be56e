// Host-side tests for the deterministic UI timeline.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scheduler {
    include!("../src/core/scheduler.rs");
}

use scheduler::*;

#[test]
fn one_shot_fires_once_at_deadline() {
    let mut s = Scheduler::new();
    s.once(300, "reveal");
    assert!(s.advance(299).is_empty());
    assert_eq!(s.advance(300), vec!["reveal"]);
    assert!(s.advance(10_000).is_empty());
    assert_eq!(s.pending(), 0);
}

#[test]
fn ties_fire_in_scheduling_order() {
    let mut s = Scheduler::new();
    s.once(100, 'a');
    s.once(100, 'b');
    s.once(50, 'c');
    s.once(100, 'd');
    assert_eq!(s.advance(100), vec!['c', 'a', 'b', 'd']);
}

#[test]
fn repeating_timer_fires_every_period() {
    let mut s = Scheduler::new();
    let h = s.every(200, "tick");
    assert_eq!(s.advance(1000).len(), 5);
    assert!(s.is_pending(h));
    assert_eq!(s.next_deadline(), Some(1200));
    assert_eq!(s.advance(1199).len(), 0);
}

#[test]
fn repeating_and_one_shot_interleave_by_deadline() {
    let mut s = Scheduler::new();
    s.every(200, 'T');
    s.once(300, 'X');
    assert_eq!(s.advance(400), vec!['T', 'X', 'T']);
}

#[test]
fn zero_period_is_bumped() {
    let mut s = Scheduler::new();
    s.every(0, ());
    assert_eq!(s.next_deadline(), Some(1));
    assert_eq!(s.advance(3).len(), 3);
}

#[test]
fn cancel_removes_only_that_timer() {
    let mut s = Scheduler::new();
    let a = s.once(100, 'a');
    let b = s.every(100, 'b');
    assert!(s.cancel(a));
    assert!(!s.cancel(a));
    assert!(!s.is_pending(a));
    assert!(s.is_pending(b));
    assert_eq!(s.advance(100), vec!['b']);
}

#[test]
fn cancel_all_silences_everything() {
    let mut s = Scheduler::new();
    s.once(10, 1);
    s.every(20, 2);
    s.cancel_all();
    assert_eq!(s.pending(), 0);
    assert_eq!(s.next_deadline(), None);
    assert!(s.advance(1_000_000).is_empty());
}

#[test]
fn origin_offsets_deadlines() {
    let mut s = Scheduler::new();
    s.set_origin(5_000);
    s.once(500, ());
    assert_eq!(s.next_deadline(), Some(5_500));
    assert_eq!(s.now(), 5_000);
    s.advance(5_200);
    assert_eq!(s.now(), 5_200);
}

#[test]
fn pop_due_moves_clock_to_deadline() {
    let mut s = Scheduler::new();
    s.once(100, 'x');
    let (_, a) = s.pop_due(1_000).unwrap();
    assert_eq!(a, 'x');
    assert_eq!(s.now(), 100);
    // scheduled in response, relative to when 'x' logically fired
    s.once(50, 'y');
    assert_eq!(s.next_deadline(), Some(150));
}
