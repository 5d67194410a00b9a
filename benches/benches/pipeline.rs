// Copyright 2025 the Zoomy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Vec2};
use zoomy::{InputEvent, ListenerRegistry, Options, Scene, SceneElement, Zoomy};
use zoomy_view2d::{TransformMatrix, axis_is_free};

const ELEMENT: Rect = Rect::new(100.0, 100.0, 300.0, 300.0);
const CONTAINER: Rect = Rect::new(0.0, 0.0, 400.0, 400.0);

/// Alternating zoom steps and short drags, the mix a trackpad session produces.
fn session_events(len: usize) -> Vec<InputEvent> {
    let mut events = Vec::with_capacity(len + 1);
    events.push(InputEvent::PointerDown {
        pos: Point::new(200.0, 200.0),
    });
    for i in 0..len {
        let t = i as f64;
        events.push(if i % 8 == 0 {
            InputEvent::Wheel {
                pos: Point::new(200.0, 200.0),
                delta_y: if i % 16 == 0 { -100.0 } else { 100.0 },
            }
        } else {
            let wobble = Vec2::new((t * 0.37).sin(), (t * 0.23).cos()) * 40.0;
            InputEvent::PointerMove {
                pos: Point::new(200.0, 200.0) + wobble,
            }
        });
    }
    events
}

fn bench_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/handle");

    for (name, options, scene) in [
        ("unbounded", Options::new(), Scene::new(ELEMENT)),
        (
            "bounded",
            Options::new().with_boundary_element("box"),
            Scene::new(ELEMENT).with_container("box", CONTAINER),
        ),
    ] {
        for len in [64usize, 1_024] {
            let events = session_events(len);
            group.throughput(Throughput::Elements(events.len() as u64));

            group.bench_with_input(BenchmarkId::new(name, len), &events, |b, events| {
                b.iter_batched(
                    || {
                        let mut listeners = ListenerRegistry::new();
                        let zoomy = Zoomy::attach(
                            &scene,
                            &mut listeners,
                            SceneElement::Target,
                            options.clone(),
                        )
                        .expect("valid options");
                        (scene.clone(), zoomy)
                    },
                    |(mut scene, mut zoomy)| {
                        for event in events {
                            if let Some(matrix) = zoomy.handle(&scene, event).matrix {
                                scene.apply(matrix);
                            }
                        }
                        black_box(zoomy.current_matrix());
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");

    let css = "matrix(1.7, 0, 0, 1.7, -42.125, 310.5)";
    group.bench_function("parse", |b| {
        b.iter(|| black_box(TransformMatrix::parse(black_box(css))));
    });
    group.bench_function("axis_is_free", |b| {
        b.iter(|| {
            black_box(axis_is_free(
                black_box(-150.0),
                black_box(450.0),
                black_box(-60.0),
                0.0,
                400.0,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_handle, bench_parse);
criterion_main!(benches);
