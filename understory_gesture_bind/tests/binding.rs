// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding, delegation, and bubbling through a real tree.

use std::cell::RefCell;
use std::rc::Rc;

use understory_gesture::GestureOptions;
use understory_gesture::contact::{Contact, Phase};
use understory_gesture::input::InputEvent;
use understory_gesture_bind::{BindError, Gestures, Outcome, ParentMap};

type Log = Rc<RefCell<Vec<(u32, &'static str)>>>;

//      1
//     / \
//    2   4
//    |
//    3
fn hub() -> Gestures<u32, ParentMap<u32>> {
    let mut tree = ParentMap::new();
    tree.insert_root(1);
    tree.insert(2, 1);
    tree.insert(3, 2);
    tree.insert(4, 1);
    Gestures::with_default_recognizers(tree)
}

fn listen(g: &mut Gestures<u32, ParentMap<u32>>, node: u32, names: &'static str, log: &Log) {
    for name in names.split_whitespace() {
        let log = log.clone();
        g.on(node, name, move |n, _| {
            log.borrow_mut().push((*n, name));
            Outcome::Continue
        });
    }
}

fn touch(g: &mut Gestures<u32, ParentMap<u32>>, phase: Phase, x: f64, t: u64, target: u32) {
    let contacts: Vec<Contact> = if phase == Phase::End {
        vec![]
    } else {
        vec![Contact::new(1, x, 0.0)]
    };
    g.handle_input(InputEvent::touch(phase, &contacts, t, target));
}

fn flick(g: &mut Gestures<u32, ParentMap<u32>>, target: u32, t0: u64) {
    touch(g, Phase::Start, 0.0, t0, target);
    touch(g, Phase::Move, 50.0, t0 + 50, target);
    touch(g, Phase::End, 50.0, t0 + 60, target);
}

#[test]
fn bind_errors() {
    let mut g = hub();
    assert_eq!(
        g.bind(7, GestureOptions::default()),
        Err(BindError::NotAnElement)
    );
    assert_eq!(g.enable(&7, true), Err(BindError::NotBound));
    assert_eq!(g.unbind(&1), Err(BindError::NotBound));
    assert_eq!(
        BindError::NotAnElement.to_string(),
        "not an element of the tree"
    );
}

#[test]
fn listeners_below_the_instance_receive_gestures() {
    let mut g = hub();
    g.bind(1, GestureOptions::default()).unwrap();
    let log: Log = Rc::default();
    listen(&mut g, 3, "tap", &log);
    listen(&mut g, 4, "tap", &log);
    listen(&mut g, 1, "tap", &log);

    touch(&mut g, Phase::Start, 0.0, 0, 3);
    touch(&mut g, Phase::End, 0.0, 40, 3);

    assert_eq!(*log.borrow(), vec![(3, "tap"), (1, "tap")]);
}

#[test]
fn stop_keeps_gestures_from_ancestors() {
    let mut g = hub();
    g.bind(1, GestureOptions::default()).unwrap();
    let log: Log = Rc::default();
    listen(&mut g, 1, "touch", &log);
    g.on(2, "touch", |_, _| Outcome::Stop);

    touch(&mut g, Phase::Start, 0.0, 0, 3);
    assert!(log.borrow().is_empty());
}

#[test]
fn stop_propagation_is_reported_in_the_frame_outcome() {
    let mut g = hub();
    g.bind(1, GestureOptions::default()).unwrap();
    g.on(3, "touch", |_, _| Outcome::Stop);
    let outcome = g
        .handle_input(InputEvent::touch(
            Phase::Start,
            &[Contact::new(1, 0.0, 0.0)],
            0,
            3,
        ))
        .unwrap();
    assert!(outcome.propagation_stopped);
    assert!(!outcome.session_closed);
}

#[test]
fn listener_can_stop_detection() {
    let mut g = hub();
    g.bind(1, GestureOptions::default()).unwrap();
    let log: Log = Rc::default();
    listen(&mut g, 1, "tap release", &log);
    g.on(1, "touch", |_, ev| {
        ev.stop_detect();
        Outcome::Continue
    });

    let outcome = g
        .handle_input(InputEvent::touch(
            Phase::Start,
            &[Contact::new(1, 0.0, 0.0)],
            0,
            1,
        ))
        .unwrap();
    assert!(outcome.session_closed);
    assert!(!g.is_detecting());
    assert_eq!(g.next_deadline(), None);

    // The lift has no session left to drive.
    touch(&mut g, Phase::End, 0.0, 30, 1);
    assert!(log.borrow().is_empty());
}

#[test]
fn second_finger_landing_mid_drag_does_not_restart_the_session() {
    let mut g = hub();
    g.bind(1, GestureOptions::default()).unwrap();
    let log: Log = Rc::default();
    listen(&mut g, 1, "touch dragstart drag dragend lontap", &log);

    touch(&mut g, Phase::Start, 0.0, 0, 1);
    touch(&mut g, Phase::Move, 30.0, 30, 1);
    let second = g.handle_input(InputEvent::touch(
        Phase::Start,
        &[Contact::new(1, 30.0, 0.0), Contact::new(2, 60.0, 0.0)],
        40,
        1,
    ));
    assert!(second.is_none());
    assert!(g.is_detecting());
    assert_eq!(g.next_deadline(), None, "moving disarmed the long tap");
    assert_eq!(g.advance(600), 0);

    let names = |log: &Log| log.borrow().iter().map(|(_, n)| *n).collect::<Vec<_>>();
    assert_eq!(names(&log), ["touch", "dragstart", "drag"]);

    // Both fingers lift together; the drag still ends.
    g.handle_input(InputEvent::touch(
        Phase::Move,
        &[Contact::new(1, 32.0, 0.0), Contact::new(2, 62.0, 0.0)],
        50,
        1,
    ));
    touch(&mut g, Phase::End, 0.0, 80, 1);
    assert_eq!(names(&log), ["touch", "dragstart", "drag", "dragend"]);
    assert!(!g.is_detecting());
}

#[test]
fn disabling_gates_new_sessions_only() {
    let mut g = hub();
    g.bind(1, GestureOptions::default()).unwrap();
    let log: Log = Rc::default();
    listen(&mut g, 1, "release", &log);

    touch(&mut g, Phase::Start, 0.0, 0, 1);
    g.enable(&1, false).unwrap();
    assert!(!g.is_enabled(&1));
    touch(&mut g, Phase::End, 0.0, 30, 1);
    assert_eq!(log.borrow().len(), 1, "open session finished");

    touch(&mut g, Phase::Start, 0.0, 100, 1);
    assert!(!g.is_detecting());
    touch(&mut g, Phase::End, 0.0, 130, 1);
    assert_eq!(log.borrow().len(), 1);

    g.enable(&1, true).unwrap();
    touch(&mut g, Phase::Start, 0.0, 200, 1);
    assert!(g.is_detecting());
}

#[test]
fn nested_instances_pick_the_nearest() {
    let mut g = hub();
    g.bind(1, GestureOptions::default()).unwrap();
    let strict = GestureOptions::default().with_tap(|t| t.max_touch_time(10));
    g.bind(2, strict).unwrap();
    let log: Log = Rc::default();
    listen(&mut g, 1, "tap", &log);

    // Element 2 wins for its subtree, and its tap window is too short.
    touch(&mut g, Phase::Start, 0.0, 0, 3);
    assert_eq!(g.detector().session().map(|s| *s.element()), Some(2));
    touch(&mut g, Phase::End, 0.0, 40, 3);
    assert!(log.borrow().is_empty());

    // Element 4 only has the root above it.
    touch(&mut g, Phase::Start, 0.0, 1_000, 4);
    assert_eq!(g.detector().session().map(|s| *s.element()), Some(1));
    touch(&mut g, Phase::End, 0.0, 1_040, 4);
    assert_eq!(*log.borrow(), vec![(1, "tap")]);
}

#[test]
fn space_separated_on_and_off() {
    let mut g = hub();
    g.bind(1, GestureOptions::default()).unwrap();
    let log: Log = Rc::default();
    let sink = log.clone();
    let id = g.on(1, "swipeleft swiperight", move |n, _| {
        sink.borrow_mut().push((*n, "swipe"));
        Outcome::Continue
    });

    flick(&mut g, 1, 0);
    assert_eq!(log.borrow().len(), 1);

    assert!(g.off(&1, "swiperight", id));
    flick(&mut g, 1, 1_000);
    assert_eq!(log.borrow().len(), 1);
    assert!(!g.off(&1, "swiperight", id));
}

#[test]
fn long_tap_fires_from_advance() {
    let mut g = hub();
    g.bind(1, GestureOptions::default()).unwrap();
    let log: Log = Rc::default();
    listen(&mut g, 2, "lontap tap", &log);

    touch(&mut g, Phase::Start, 0.0, 0, 2);
    assert_eq!(g.next_deadline(), Some(500));
    assert_eq!(g.advance(499), 0);
    assert_eq!(g.advance(500), 1);
    assert_eq!(*log.borrow(), vec![(2, "lontap")]);

    touch(&mut g, Phase::End, 0.0, 700, 2);
    assert_eq!(log.borrow().len(), 1, "no tap after a long tap");
}

#[test]
fn unbound_elements_stop_detecting() {
    let mut g = hub();
    g.bind(1, GestureOptions::default()).unwrap();
    g.unbind(&1).unwrap();
    assert!(g.options(&1).is_none());
    touch(&mut g, Phase::Start, 0.0, 0, 1);
    assert!(!g.is_detecting());
}

#[test]
fn trigger_by_hand() {
    let mut g = hub();
    let log: Log = Rc::default();
    listen(&mut g, 2, "custom", &log);
    g.on(1, "custom", |_, _| Outcome::StopAndConsume);

    let mut ev = understory_gesture::GestureEvent::at(kurbo::Point::ORIGIN, 0, 3);
    assert!(g.trigger(2, "custom", &mut ev));
    assert_eq!(*log.borrow(), vec![(2, "custom")]);
}
