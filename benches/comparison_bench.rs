use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;
use weighted_grid_pathfinding::{
    solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver},
    Cell, CostGrid, PathingGrid,
};

const N: usize = 64;
const N_SCENARIOS: usize = 32;

fn random_grid(rng: &mut StdRng, obstacle_density: f64) -> CostGrid {
    let mut grid = CostGrid::new(N, N, 1).unwrap();
    for cell in grid.cells().collect::<Vec<_>>() {
        let cost = if rng.gen_bool(obstacle_density) {
            0
        } else {
            rng.gen_range(1..=9)
        };
        grid.set(cell, cost).unwrap();
    }
    grid
}

fn random_scenarios(rng: &mut StdRng) -> Vec<(Cell, Cell)> {
    (0..N_SCENARIOS)
        .map(|_| {
            (
                Cell::new(rng.gen_range(0..N), rng.gen_range(0..N)),
                Cell::new(rng.gen_range(0..N), rng.gen_range(0..N)),
            )
        })
        .collect()
}

fn random_bench_solver<S: GridSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    let mut rng = StdRng::seed_from_u64(0);
    for density in [0.1, 0.3] {
        let grid = random_grid(&mut rng, density);
        let scenarios = random_scenarios(&mut rng);
        c.bench_function(
            format!("random {N}x{N} ({density} obstacles), {solver_name}").as_str(),
            |b| {
                b.iter(|| {
                    for (start, end) in &scenarios {
                        black_box(solver.get_path_single_goal(&grid, *start, *end).unwrap());
                    }
                })
            },
        );
    }
}

/// Disconnected grids are where the component check pays off.
fn component_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut grid = random_grid(&mut rng, 0.1);
    for row in 0..N {
        grid.set(Cell::new(row, N / 2), 0).unwrap();
    }
    let pathing_grid = PathingGrid::new(grid.clone());
    let solver = AstarSolver::new();
    let start = Cell::new(0, 0);
    let end = Cell::new(N - 1, N - 1);
    c.bench_function("split grid, A*", |b| {
        b.iter(|| black_box(solver.get_path_single_goal(&grid, start, end).unwrap()))
    });
    c.bench_function("split grid, A* with components", |b| {
        b.iter(|| black_box(pathing_grid.get_path_single_goal(&solver, start, end).unwrap()))
    });
}

fn solver_benches(c: &mut Criterion) {
    random_bench_solver(c, "A*", AstarSolver::new());
    random_bench_solver(c, "Dijkstra", DijkstraSolver);
}

criterion_group!(benches, solver_benches, component_bench);
criterion_main!(benches);
