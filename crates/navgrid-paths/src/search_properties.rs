//! Randomized checks of both searches against brute-force references.

use navgrid_core::{Point, Vec3};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::distance::{chebyshev, octile};
use crate::{GridConfig, NodeGrid, Pathfinder};

const UNREACHED: i32 = i32::MAX;

fn random_grid(rng: &mut StdRng, chunk: u32, blocked: f64) -> NodeGrid {
    let side = 2 * chunk as i32 + 1;
    let cells: Vec<bool> = (0..side * side).map(|_| !rng.random_bool(blocked)).collect();
    let oracle = move |p: Vec3, _r: f32| {
        let gx = p.x.round() as i32 + chunk as i32;
        let gy = p.z.round() as i32 + chunk as i32;
        cells[(gy * side + gx) as usize]
    };
    NodeGrid::build(GridConfig::with_chunk_size(chunk), Vec3::ZERO, &oracle).unwrap()
}

/// Dense relaxation until nothing changes; `unit` selects hop counts
/// instead of octile costs.
fn reference_costs(grid: &NodeGrid, from: Point, unit: bool) -> Vec<i32> {
    let side = grid.side() as i32;
    let at = |p: Point| (p.x * side + p.y) as usize;
    let mut dist = vec![UNREACHED; grid.len()];
    dist[at(from)] = 0;
    let mut nbuf = Vec::new();
    loop {
        let mut changed = false;
        for p in grid.bounds() {
            let d = dist[at(p)];
            if d == UNREACHED {
                continue;
            }
            nbuf.clear();
            grid.neighbors(p, &mut nbuf);
            for &n in &nbuf {
                if !grid.is_walkable(n) {
                    continue;
                }
                let step = if unit { 1 } else { octile(p, n) };
                if d + step < dist[at(n)] {
                    dist[at(n)] = d + step;
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

/// A* over an insertion-ordered open list, scanned linearly each step for
/// the lowest `f`, then lowest `h`, first match winning.
fn list_astar(grid: &NodeGrid, from: Point, to: Point) -> Option<Vec<Point>> {
    let side = grid.side() as i32;
    let at = |p: Point| (p.x * side + p.y) as usize;
    let mut g = vec![0i32; grid.len()];
    let mut h = vec![0i32; grid.len()];
    let mut parent: Vec<Option<Point>> = vec![None; grid.len()];
    let mut closed = vec![false; grid.len()];
    let mut open = vec![from];
    h[at(from)] = octile(from, to);
    let mut nbuf = Vec::new();

    while !open.is_empty() {
        let mut best = 0;
        for i in 1..open.len() {
            let (a, b) = (at(open[i]), at(open[best]));
            let (fa, fb) = (g[a] + h[a], g[b] + h[b]);
            if fa < fb || (fa == fb && h[a] < h[b]) {
                best = i;
            }
        }
        let current = open.remove(best);
        closed[at(current)] = true;
        if current == to {
            let mut points = Vec::new();
            let mut p = to;
            while p != from {
                points.push(p);
                p = parent[at(p)]?;
            }
            points.reverse();
            return Some(points);
        }

        nbuf.clear();
        grid.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            if !grid.is_walkable(n) || closed[at(n)] {
                continue;
            }
            let tentative = g[at(current)] + octile(current, n);
            let queued = open.contains(&n);
            if tentative < g[at(n)] || !queued {
                g[at(n)] = tentative;
                h[at(n)] = octile(n, to);
                parent[at(n)] = Some(current);
                if !queued {
                    open.push(n);
                }
            }
        }
    }
    None
}

fn assert_valid_steps(grid: &NodeGrid, from: Point, points: &[Point]) {
    let mut prev = from;
    for &p in points {
        assert!(prev.is_adjacent(p), "{prev} -> {p} is not a king move");
        assert!(grid.is_walkable(p), "{p} is blocked");
        prev = p;
    }
}

#[test]
fn astar_cost_is_optimal() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut pf = Pathfinder::new();
    for round in 0..60 {
        let chunk = rng.random_range(1..6u32);
        let grid = random_grid(&mut rng, chunk, 0.3);
        let side = grid.side() as i32;
        let from = Point::new(rng.random_range(0..side), rng.random_range(0..side));
        let costs = reference_costs(&grid, from, false);
        for to in grid.bounds() {
            let expected = costs[(to.x * side + to.y) as usize];
            match pf.astar_between(&grid, from, to) {
                Some(path) => {
                    assert_eq!(path.cost(), expected, "round {round}: {from} -> {to}");
                    assert_valid_steps(&grid, from, path.points());
                    if from != to {
                        assert_eq!(path.last(), Some(to));
                    }
                }
                None => assert_eq!(expected, UNREACHED, "round {round}: {from} -> {to}"),
            }
        }
    }
}

#[test]
fn astar_matches_list_scan_step_for_step() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut pf = Pathfinder::new();
    for round in 0..150 {
        let chunk = rng.random_range(1..5u32);
        let grid = random_grid(&mut rng, chunk, 0.25);
        let side = grid.side() as i32;
        for _ in 0..3 {
            let from = Point::new(rng.random_range(0..side), rng.random_range(0..side));
            for to in grid.bounds() {
                let heap = pf.astar_between(&grid, from, to);
                assert_eq!(
                    heap.as_ref().map(|p| p.points()),
                    list_astar(&grid, from, to).as_deref(),
                    "round {round}: {from} -> {to}"
                );
            }
        }
    }
}

#[test]
fn bfs_hops_are_minimal() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut pf = Pathfinder::new();
    for round in 0..60 {
        let chunk = rng.random_range(1..6u32);
        let grid = random_grid(&mut rng, chunk, 0.35);
        let side = grid.side() as i32;
        let from = Point::new(rng.random_range(0..side), rng.random_range(0..side));
        let hops = reference_costs(&grid, from, true);
        for to in grid.bounds() {
            let expected = hops[(to.x * side + to.y) as usize];
            match pf.bfs_between(&grid, from, to) {
                Some(path) => {
                    assert_eq!(path.len() as i32, expected, "round {round}: {from} -> {to}");
                    assert_valid_steps(&grid, from, path.points());
                }
                None => assert_eq!(expected, UNREACHED, "round {round}: {from} -> {to}"),
            }
        }
    }
}

#[test]
fn open_grids_always_reach_nearest_node() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut pf = Pathfinder::new();
    for _ in 0..100 {
        let chunk = rng.random_range(0..5u32);
        let grid = random_grid(&mut rng, chunk, 0.0);
        let reach = chunk as f32 + 2.0;
        let start = Vec3::new(
            rng.random_range(-reach..reach),
            0.0,
            rng.random_range(-reach..reach),
        );
        let target = Vec3::new(
            rng.random_range(-reach..reach),
            0.0,
            rng.random_range(-reach..reach),
        );
        let from = grid.nearest_point(start).unwrap();
        let to = grid.nearest_point(target).unwrap();

        let astar = pf.astar_path(&grid, start, target).unwrap();
        let bfs = pf.bfs_path(&grid, start, target).unwrap();
        assert_eq!(astar.cost(), octile(from, to));
        assert_eq!(bfs.len() as i32, chebyshev(from, to));
        if from != to {
            assert_eq!(astar.last(), Some(to));
            assert_eq!(bfs.last(), Some(to));
            let goal = grid.node_at(to).unwrap().world_position;
            assert_eq!(astar.waypoints().last(), Some(&goal));
        } else {
            assert!(astar.is_empty() && bfs.is_empty());
        }
    }
}
