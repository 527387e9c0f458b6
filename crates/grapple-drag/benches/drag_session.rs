//! Benchmarks for full drag sessions

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use grapple_drag::{DragController, DragSettings};
use grapple_input::DragMethod;
use grapple_test_utils::events::{mouse_down, mouse_move, mouse_up};
use grapple_test_utils::{MockElement, MockWindow};

fn setup(constrained: bool) -> DragController<MockElement, MockWindow> {
    let mut settings = DragSettings::default().drag_method(DragMethod::Mouse);
    if constrained {
        settings = settings.constraints([0.0, 500.0, 0.0, 500.0]);
    }
    DragController::attach(MockElement::new(), MockWindow::new(), settings).unwrap()
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_session");

    for moves in [10, 100, 1000] {
        group.throughput(Throughput::Elements(moves as u64));

        for constrained in [false, true] {
            let id = format!("{}/{}", if constrained { "constrained" } else { "free" }, moves);
            group.bench_with_input(BenchmarkId::from_parameter(id), &moves, |b, &moves| {
                let mut drag = setup(constrained);
                b.iter(|| {
                    drag.handle(&mut mouse_down(0.0, 0.0));
                    for i in 0..moves {
                        let t = i as f32;
                        drag.handle(&mut mouse_move(t, t * 0.5));
                    }
                    drag.handle(&mut mouse_up(moves as f32, 0.0));
                    black_box(drag.get_position())
                });
            });
        }
    }

    group.finish();
}

fn bench_set_position(c: &mut Criterion) {
    let mut drag = setup(true);
    c.bench_function("set_position", |b| {
        b.iter(|| {
            drag.set_position(black_box(120.0), black_box(80.0));
            black_box(drag.get_position())
        });
    });
}

criterion_group!(benches, bench_session, bench_set_position);
criterion_main!(benches);
