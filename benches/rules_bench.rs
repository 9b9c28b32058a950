//! Rule Engine Benchmarks
//!
//! Move generation and instance resolution, the work done on every click.

use checkers3d::game::resources::{handle_pick, Selection};
use checkers3d::game::rules::{has_any_moves, legal_moves, Board, Side};
use checkers3d::game::types::{ObjectClass, PickResult};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| b.iter(|| black_box(Board::new_game())));
}

fn bench_legal_moves_all_pieces(c: &mut Criterion) {
    let board = Board::new_game();
    let cells: Vec<_> = board
        .occupied_cells(Side::A)
        .chain(board.occupied_cells(Side::B))
        .collect();

    c.bench_function("legal_moves_all_pieces_opening", |b| {
        b.iter(|| {
            cells
                .iter()
                .map(|&(col, row)| legal_moves(&board, col, row).len())
                .sum::<usize>()
        })
    });
}

fn bench_has_any_moves(c: &mut Criterion) {
    let board = Board::new_game();

    c.bench_function("has_any_moves_both_sides", |b| {
        b.iter(|| black_box((has_any_moves(&board, Side::A), has_any_moves(&board, Side::B))))
    });
}

fn bench_resolve_last_instance(c: &mut Criterion) {
    let board = Board::new_game();

    c.bench_function("resolve_instance_last", |b| {
        b.iter(|| black_box(board.resolve_instance(Side::B, 11)))
    });
}

fn bench_select_then_move(c: &mut Criterion) {
    let opening = Board::new_game();

    c.bench_function("select_then_move", |b| {
        b.iter(|| {
            let mut board = opening.clone();
            let selected = handle_pick(
                &mut board,
                Selection::NoSelection,
                Some(PickResult::new(ObjectClass::SideA, 9)),
            )
            .map(|outcome| outcome.selection)
            .unwrap_or_default();
            let outcome = handle_pick(
                &mut board,
                selected,
                Some(PickResult::new(ObjectClass::MovePreview, 0)),
            );
            black_box(outcome.is_ok())
        })
    });
}

criterion_group!(
    benches,
    bench_new_game,
    bench_legal_moves_all_pieces,
    bench_has_any_moves,
    bench_resolve_last_instance,
    bench_select_then_move
);
criterion_main!(benches);
