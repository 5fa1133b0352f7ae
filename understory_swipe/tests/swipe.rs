// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_swipe` crate.
//!
//! These drive whole interactions through `SwipeRecognizer` and
//! `SwipeRegistry` and check what listeners observe: which notifications
//! fire, in which order, and with which payloads.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::Point;
use understory_swipe::config::SwipeConfig;
use understory_swipe::gesture::{Direction, SwipeEventName};
use understory_swipe::input::{Clock, DefaultAction, PointerEvent, PointerPhase};
use understory_swipe::recognizer::SwipeRecognizer;
use understory_swipe::registry::SwipeRegistry;

/// Shared manual clock.
#[derive(Clone, Default)]
struct TestClock(Rc<Cell<u64>>);

impl TestClock {
    fn set(&self, ms: u64) {
        self.0.set(ms);
    }
}

impl Clock for TestClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Seen {
    name: &'static str,
    direction: Option<&'static str>,
    target: u32,
    start: (f64, f64, u64),
    end: (f64, f64, u64),
}

type Log = Rc<RefCell<Vec<Seen>>>;

fn recognizer(config: SwipeConfig) -> (SwipeRecognizer<u32, TestClock>, TestClock, Log) {
    let clock = TestClock::default();
    let mut rec = SwipeRecognizer::new(config, clock.clone());
    let log = Log::default();
    let sink = log.clone();
    rec.listeners_mut().on_any(move |n| {
        sink.borrow_mut().push(Seen {
            name: n.name.as_str(),
            direction: n.direction.map(Direction::as_str),
            target: *n.target,
            start: (n.start.position.x, n.start.position.y, n.start.time_ms),
            end: (n.end.position.x, n.end.position.y, n.end.time_ms),
        });
    });
    (rec, clock, log)
}

fn at(x: f64, y: f64) -> PointerEvent<u32> {
    PointerEvent::mouse(1, Point::new(x, y))
}

/// Run start at (100, 100, t=0) then stop at `(x, y, t)`; return the notification names.
fn run(config: SwipeConfig, x: f64, y: f64, t: u64) -> Vec<&'static str> {
    let (mut rec, clock, log) = recognizer(config);
    let _ = rec.on_start(&at(100.0, 100.0));
    clock.set(t);
    let _ = rec.on_stop(&at(x, y));
    assert!(!rec.is_active(), "stop always resets the interaction");
    log.borrow().iter().map(|s| s.name).collect()
}

#[test]
fn left_swipe_fires_generic_then_specific() {
    let (mut rec, clock, log) = recognizer(SwipeConfig::default());
    let _ = rec.on_start(&at(100.0, 100.0));
    clock.set(300);
    let _ = rec.on_stop(&at(40.0, 110.0));

    assert_eq!(
        *log.borrow(),
        vec![
            Seen {
                name: "swipe",
                direction: Some("left"),
                target: 1,
                start: (100.0, 100.0, 0),
                end: (40.0, 110.0, 300),
            },
            Seen {
                name: "swipeLeft",
                direction: None,
                target: 1,
                start: (100.0, 100.0, 0),
                end: (40.0, 110.0, 300),
            },
        ]
    );
}

#[test]
fn over_duration_never_fires() {
    // No movement, but too slow.
    assert!(run(SwipeConfig::default(), 100.0, 100.0, 1200).is_empty());
    // Large clean displacements do not help either.
    assert!(run(SwipeConfig::default(), 0.0, 100.0, 1001).is_empty());
    assert!(run(SwipeConfig::default(), 100.0, 300.0, 5000).is_empty());
}

#[test]
fn elapsed_equal_to_duration_is_allowed() {
    assert_eq!(
        run(SwipeConfig::default(), 200.0, 100.0, 1000),
        ["swipe", "swipeRight"]
    );
}

#[test]
fn unrestrained_travel_never_fires() {
    assert!(run(SwipeConfig::default(), 130.0, 60.0, 200).is_empty());
}

#[test]
fn every_direction_fires_exactly_one_pair() {
    let cases = [
        ((40.0, 110.0), "swipeLeft"),
        ((150.0, 100.0), "swipeRight"),
        ((100.0, 40.0), "swipeUp"),
        ((90.0, 175.0), "swipeDown"),
    ];
    for ((x, y), specific) in cases {
        assert_eq!(
            run(SwipeConfig::default(), x, y, 500),
            ["swipe", specific],
            "stop at ({x}, {y})"
        );
    }
}

#[test]
fn horizontal_property_holds_across_a_grid() {
    let config = SwipeConfig::default();
    for dx in [-200.0, -75.0, -50.0, 50.0, 51.0, 300.0] {
        for dy in [-75.0, -20.0, 0.0, 30.0, 75.0] {
            let names = run(config, 100.0 + dx, 100.0 + dy, 999);
            let expected = if dx < 0.0 { "swipeLeft" } else { "swipeRight" };
            assert_eq!(names, ["swipe", expected], "dx={dx} dy={dy}");
        }
    }
}

#[test]
fn vertical_property_holds_across_a_grid() {
    let config = SwipeConfig::default();
    for dy in [-200.0, -50.0, 50.0, 120.0] {
        // |dx| < distance so the horizontal test cannot win.
        for dx in [-49.0, 0.0, 49.0] {
            let names = run(config, 100.0 + dx, 100.0 + dy, 10);
            let expected = if dy < 0.0 { "swipeUp" } else { "swipeDown" };
            assert_eq!(names, ["swipe", expected], "dx={dx} dy={dy}");
        }
    }
}

#[test]
fn horizontal_wins_on_overlap() {
    let config = SwipeConfig::default().with_distance(10.0).with_restraint(200.0);
    assert_eq!(run(config, 80.0, 20.0, 10), ["swipe", "swipeLeft"]);
}

#[test]
fn second_start_is_ignored() {
    let (mut rec, clock, log) = recognizer(SwipeConfig::default());
    let _ = rec.on_start(&PointerEvent::mouse(1, Point::new(100.0, 100.0)));
    clock.set(100);
    let _ = rec.on_start(&PointerEvent::mouse(2, Point::new(0.0, 0.0)));
    clock.set(200);
    let _ = rec.on_stop(&PointerEvent::mouse(2, Point::new(100.0, 30.0)));

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].target, 1);
    assert_eq!(log[0].start, (100.0, 100.0, 0));
    assert_eq!(log[1].name, "swipeUp");
}

#[test]
fn cancel_then_fresh_interaction() {
    let (mut rec, clock, log) = recognizer(SwipeConfig::default());
    let _ = rec.on_start(&at(100.0, 100.0));
    clock.set(100);
    assert_eq!(rec.on_move(&at(20.0, 100.0)), DefaultAction::Prevent);
    rec.on_cancel();

    // A stop after cancel has nothing to finish.
    let _ = rec.on_stop(&at(0.0, 100.0));
    assert!(log.borrow().is_empty());

    clock.set(2000);
    let _ = rec.on_start(&at(500.0, 500.0));
    clock.set(2100);
    let _ = rec.on_stop(&at(500.0, 400.0));

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].start, (500.0, 500.0, 2000));
    assert_eq!(log[0].direction, Some("up"));
}

#[test]
fn moves_do_not_end_the_interaction() {
    let (mut rec, clock, log) = recognizer(SwipeConfig::default());
    let _ = rec.on_start(&at(100.0, 100.0));
    for (i, x) in [90.0, 70.0, 50.0, 30.0].into_iter().enumerate() {
        clock.set(50 * (i as u64 + 1));
        assert_eq!(rec.on_move(&at(x, 102.0)), DefaultAction::Prevent);
    }
    assert!(rec.is_active());
    assert!(log.borrow().is_empty());
    let _ = rec.on_stop(&at(20.0, 104.0));
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn touch_stop_reads_the_changed_touch() {
    let (mut rec, clock, log) = recognizer(SwipeConfig::default());
    let _ = rec.on_start(&PointerEvent::touch(1, Point::new(100.0, 100.0)));
    clock.set(120);
    let _ = rec.on_stop(&PointerEvent::touches(
        1,
        [Point::new(180.0, 95.0), Point::new(100.0, 100.0)],
    ));
    assert_eq!(log.borrow()[1].name, "swipeRight");
}

#[test]
fn named_listeners_only_hear_their_direction() {
    let clock = TestClock::default();
    let mut rec = SwipeRecognizer::<u32, _>::new(SwipeConfig::default(), clock.clone());
    let rights = Rc::new(Cell::new(0));
    let lefts = Rc::new(Cell::new(0));
    let (r, l) = (rights.clone(), lefts.clone());
    rec.listeners_mut()
        .on(SwipeEventName::SwipeRight, move |_| r.set(r.get() + 1));
    let left_id = rec
        .listeners_mut()
        .on(SwipeEventName::SwipeLeft, move |_| l.set(l.get() + 1));

    for x in [200.0, 0.0, 200.0] {
        let _ = rec.on_start(&at(100.0, 100.0));
        let _ = rec.on_stop(&at(x, 100.0));
    }
    assert_eq!((rights.get(), lefts.get()), (2, 1));

    assert!(rec.listeners_mut().off(left_id));
    let _ = rec.on_start(&at(100.0, 100.0));
    let _ = rec.on_stop(&at(0.0, 100.0));
    assert_eq!(lefts.get(), 1);
}

#[test]
fn registry_routes_and_disposes() {
    let clock = TestClock::default();
    let mut registry = SwipeRegistry::new(clock.clone());
    let hits = Rc::new(RefCell::new(Vec::new()));

    for element in [10_u32, 20] {
        let sink = hits.clone();
        let rec = registry
            .attach(element, SwipeConfig::default())
            .expect("enabled config attaches");
        rec.listeners_mut()
            .on(SwipeEventName::Swipe, move |n| sink.borrow_mut().push(*n.target));
    }
    assert!(registry.attach(30, SwipeConfig::disabled()).is_none());

    let start = |e: u32| PointerEvent::mouse(e, Point::new(0.0, 0.0));
    let stop = |e: u32| PointerEvent::mouse(e, Point::new(0.0, 90.0));

    registry.dispatch(&10, PointerPhase::Start, &start(10));
    registry.dispatch(&20, PointerPhase::Start, &start(20));
    clock.set(100);
    registry.dispatch(&20, PointerPhase::Stop, &stop(20));
    registry.dispatch(&10, PointerPhase::Cancel, &stop(10));
    registry.dispatch(&10, PointerPhase::Stop, &stop(10));
    assert_eq!(*hits.borrow(), [20]);

    assert!(registry.dispose(&20));
    assert!(
        registry
            .dispatch(&20, PointerPhase::Start, &start(20))
            .is_none()
    );
    assert_eq!(registry.len(), 1);
}

#[cfg(feature = "serde")]
#[test]
fn config_from_options() {
    let config: SwipeConfig =
        serde_json::from_str(r#"{"enabled": true, "duration": 300, "distance": 20, "restraint": 10}"#)
            .expect("valid options");
    assert_eq!(run(config, 70.0, 105.0, 300), ["swipe", "swipeLeft"]);
    assert!(run(config, 70.0, 115.0, 300).is_empty());
}
