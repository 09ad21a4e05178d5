use criterion::{black_box, criterion_group, criterion_main, Criterion};
use knight_search::{
    find_shortest_path, Board, MapTrait, PathFinder, PathFinderState, Square, Visited,
};

fn bench_corner_to_corner(c: &mut Criterion) {
    let start = Square::new(0, 0);
    let goal = Square::new(7, 7);

    c.bench_function("corner_to_corner", |b| {
        b.iter(|| {
            let (res, _) = PathFinder::new(
                black_box(start),
                black_box(goal),
                Board.create_storage::<Visited<Square>>(),
            )
            .finish(&Board);
            assert!(matches!(res, PathFinderState::PathFound(_)));
        })
    });
}

fn bench_all_pairs(c: &mut Criterion) {
    let squares: Vec<Square> = Square::all().collect();

    c.bench_function("all_pairs", |b| {
        b.iter(|| {
            for &start in &squares {
                for &target in &squares {
                    black_box(find_shortest_path(start, target).unwrap());
                }
            }
        })
    });
}

criterion_group!(benches, bench_corner_to_corner, bench_all_pairs);
criterion_main!(benches);
