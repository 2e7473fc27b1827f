//! Benchmarks for batch value edits and drag selection.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench batch_edit
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gridpad_core::{Digit, Position};
use gridpad_editor::EditorState;

fn select_all(state: &EditorState) -> EditorState {
    let board = state.board();
    let mut positions = board.positions();
    let Some(first) = positions.next() else {
        return state.clone();
    };
    let mut next = state.start_selection(first);
    for pos in positions {
        next = next.drag_over(pos);
    }
    next.end_selection()
}

fn bench_digit_press(c: &mut Criterion) {
    let mut group = c.benchmark_group("digit_press");
    for size in [9u16, 32, 100] {
        let state = select_all(&EditorState::new(size, size).unwrap());
        group.bench_with_input(BenchmarkId::from_parameter(size), &state, |b, state| {
            b.iter(|| hint::black_box(state.on_digit_press(hint::black_box(Digit::D5))));
        });
    }
    group.finish();
}

fn bench_single_cell_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_cell_edit");
    for size in [9u16, 32, 100] {
        let state = EditorState::new(size, size)
            .unwrap()
            .start_selection(Position::new(size / 2, size / 2))
            .end_selection();
        group.bench_with_input(BenchmarkId::from_parameter(size), &state, |b, state| {
            b.iter(|| hint::black_box(state.on_digit_press(hint::black_box(Digit::D1))));
        });
    }
    group.finish();
}

fn bench_drag_select(c: &mut Criterion) {
    let state = EditorState::new(32, 32).unwrap();
    c.bench_function("drag_select_32x32", |b| {
        b.iter(|| hint::black_box(select_all(hint::black_box(&state))));
    });
}

criterion_group!(
    benches,
    bench_digit_press,
    bench_single_cell_edit,
    bench_drag_select
);
criterion_main!(benches);
