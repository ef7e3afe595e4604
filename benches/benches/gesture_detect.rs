// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use understory_gesture::contact::{Contact, Phase};
use understory_gesture::kinematics::Kinematics;
use understory_gesture::{Detector, GestureOptions, InputEvent, Normalizer, Registry, Snapshot};
use understory_gesture_bind::{Gestures, Outcome, ParentMap};

fn drag_stream(moves: u32) -> Vec<InputEvent<u32>> {
    let mut events = Vec::with_capacity(moves as usize + 2);
    events.push(InputEvent::touch(
        Phase::Start,
        &[Contact::new(1, 0.0, 0.0)],
        0,
        0,
    ));
    for i in 1..=moves {
        let x = f64::from(i) * 3.0;
        events.push(InputEvent::touch(
            Phase::Move,
            &[Contact::new(1, x, x * 0.25)],
            u64::from(i) * 8,
            0,
        ));
    }
    events.push(InputEvent::touch(
        Phase::End,
        &[],
        u64::from(moves + 1) * 8,
        0,
    ));
    events
}

fn pinch_stream(moves: u32) -> Vec<InputEvent<u32>> {
    let mut events = Vec::with_capacity(moves as usize + 2);
    events.push(InputEvent::touch(
        Phase::Start,
        &[Contact::new(1, 0.0, 0.0), Contact::new(2, 40.0, 0.0)],
        0,
        0,
    ));
    for i in 1..=moves {
        let d = f64::from(i);
        events.push(InputEvent::touch(
            Phase::Move,
            &[Contact::new(1, -d, d * 0.1), Contact::new(2, 40.0 + d, -d * 0.1)],
            u64::from(i) * 8,
            0,
        ));
    }
    events.push(InputEvent::touch(
        Phase::End,
        &[],
        u64::from(moves + 1) * 8,
        0,
    ));
    events
}

fn run_detector(events: Vec<InputEvent<u32>>, options: &Rc<GestureOptions>) -> usize {
    let mut input = Normalizer::new();
    let mut detector = Detector::new(Registry::with_default_recognizers());
    let mut emitted = 0_usize;
    let mut sink = |_: &u32, name: &'static str, _: &mut understory_gesture::GestureEvent<u32>| {
        emitted += name.len();
    };
    for event in events {
        let Some(snapshot) = input.handle(event) else {
            continue;
        };
        if snapshot.phase == Phase::Start {
            detector.start_detect(0, options.clone(), snapshot, &mut sink);
        } else {
            detector.detect(snapshot, &mut sink);
        }
    }
    emitted
}

fn bench_detector(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_gesture");
    group.sample_size(50);
    let options = Rc::new(Registry::<u32>::with_default_recognizers().defaults(GestureOptions::default()));

    for &moves in &[16_u32, 256] {
        group.bench_function(format!("drag(moves={moves})"), |b| {
            b.iter_batched(
                || drag_stream(moves),
                |events| black_box(run_detector(events, &options)),
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("pinch(moves={moves})"), |b| {
            b.iter_batched(
                || pinch_stream(moves),
                |events| black_box(run_detector(events, &options)),
                BatchSize::SmallInput,
            );
        });
    }

    let start = Snapshot::new(
        Phase::Start,
        [Contact::new(1, 0.0, 0.0), Contact::new(2, 40.0, 0.0)]
            .into_iter()
            .collect(),
        0,
        0_u32,
        understory_gesture::PointerKind::Touch,
        understory_gesture::contact::SourceKind::Touch,
    );
    let current = Snapshot::new(
        Phase::Move,
        [Contact::new(1, -10.0, 5.0), Contact::new(2, 55.0, -5.0)]
            .into_iter()
            .collect(),
        120,
        0_u32,
        understory_gesture::PointerKind::Touch,
        understory_gesture::contact::SourceKind::Touch,
    );
    group.bench_function("kinematics_two_contacts", |b| {
        b.iter(|| black_box(Kinematics::between(black_box(&start), black_box(&current))));
    });

    group.finish();
}

fn deep_tree(depth: u32) -> ParentMap<u32> {
    let mut tree = ParentMap::new();
    tree.insert_root(0);
    for node in 1..depth {
        tree.insert(node, node - 1);
    }
    tree
}

fn bench_binding(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_gesture_bind");
    group.sample_size(50);

    for &depth in &[8_u32, 64] {
        group.bench_function(format!("drag_bubbling(depth={depth})"), |b| {
            b.iter_batched(
                || {
                    let mut g = Gestures::with_default_recognizers(deep_tree(depth));
                    let _ = g.bind(0, GestureOptions::default());
                    for node in 0..depth {
                        g.on(node, "drag dragright", |_, _| Outcome::Continue);
                    }
                    let leaf = depth - 1;
                    let events: Vec<_> = drag_stream(32)
                        .into_iter()
                        .map(|mut e| {
                            e.target = leaf;
                            e
                        })
                        .collect();
                    (g, events)
                },
                |(mut g, events)| {
                    for event in events {
                        black_box(g.handle_input(event));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_detector, bench_binding);
criterion_main!(benches);
