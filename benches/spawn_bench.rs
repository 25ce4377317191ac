use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use spawnscore::grid::lookup;
use spawnscore::spread::{spread_facing, spread_proximity, Sign};
use spawnscore::{score_all, Coord, Grid, PlayerPosition, SpawnWeights};

const MAP_SIZE: i32 = 64;

/// A square map with roughly one wall in eight cells.
fn walled_map(rng: &mut SmallRng) -> Grid {
    let mut grid = Grid::rectangle(MAP_SIZE, MAP_SIZE);
    for coord in grid.coords() {
        if rng.gen_ratio(1, 8) {
            grid.set_adjustable(coord, false);
        }
    }
    grid
}

fn random_players(rng: &mut SmallRng, count: usize) -> Vec<PlayerPosition> {
    (0..count)
        .map(|_| {
            PlayerPosition::new(
                rng.gen_range(0..MAP_SIZE),
                rng.gen_range(0..MAP_SIZE),
                rng.gen_bool(0.5),
                rng.gen_range(-3.0..3.0),
            )
        })
        .collect()
}

fn bench_lookup(c: &mut Criterion) {
    let grid = Grid::rectangle(MAP_SIZE, MAP_SIZE);
    c.bench_function("lookup_64x64", |b| {
        b.iter(|| lookup(black_box(grid.cells()), black_box(37), black_box(51)))
    });
}

fn bench_proximity(c: &mut Criterion) {
    let grid = Grid::rectangle(MAP_SIZE, MAP_SIZE);
    let origin = grid.index_of(Coord::new(32, 32)).unwrap();
    c.bench_function("proximity_weight_16", |b| {
        b.iter_batched_ref(
            || grid.clone().into_cells(),
            |cells| spread_proximity(cells, origin, black_box(16), Sign::Positive),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_facing(c: &mut Criterion) {
    let grid = Grid::rectangle(MAP_SIZE, MAP_SIZE);
    let origin = grid.index_of(Coord::new(48, 48)).unwrap();
    c.bench_function("facing_weight_6_tolerance_1", |b| {
        b.iter_batched_ref(
            || grid.clone().into_cells(),
            |cells| spread_facing(cells, origin, black_box(6), Sign::Positive, 0.6, 1),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_score_match(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let grid = walled_map(&mut rng);
    let players = random_players(&mut rng, 10);
    let weights = SpawnWeights::default();
    c.bench_function("score_all_10_players", |b| {
        b.iter_batched_ref(
            || grid.clone(),
            |grid| score_all(grid, black_box(&players), &weights).len(),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_lookup,
    bench_proximity,
    bench_facing,
    bench_score_match
);
criterion_main!(benches);
