//! Boss placement and random-walk path planning between boss and start layer.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::config::MapConfig;
use crate::types::Point;

use super::model::{MapPath, PathDiagnostics};
use super::rng::{random_index, shuffle};

/// Hard cap on total random walks, so the diversity loop terminates even when
/// the requested number of distinct starting columns is unreachable.
pub(super) const MAX_WALK_ATTEMPTS: u32 = 100;

pub(super) struct PlannedPaths {
    pub(super) boss_point: Point,
    pub(super) paths: Vec<MapPath>,
    pub(super) diagnostics: PathDiagnostics,
}

pub(super) fn plan_paths(rng: &mut ChaCha8Rng, config: &MapConfig) -> PlannedPaths {
    let grid_width = config.grid_width;
    let layer_count = config.layers.len();
    let boss_point = select_boss_point(rng, grid_width, layer_count);
    let pre_boss_layer = (layer_count - 2) as i32;

    let pre_boss_count = config.pre_boss_node_count.sample(rng).min(grid_width);
    let mut columns: Vec<i32> = (0..grid_width as i32).collect();
    shuffle(rng, &mut columns);
    let candidates: Vec<Point> =
        columns[..pre_boss_count].iter().map(|&x| Point::new(x, pre_boss_layer)).collect();

    let target_start_columns = config.starting_node_count.sample(rng);

    let mut paths = Vec::with_capacity(candidates.len());
    let mut start_columns = BTreeSet::new();
    let mut attempts = 0_u32;

    for &candidate in &candidates {
        let path = walk_to_start(rng, boss_point, candidate, grid_width);
        attempts += 1;
        start_columns.insert(path.terminal_column());
        paths.push(path);
    }

    while !candidates.is_empty()
        && start_columns.len() < target_start_columns
        && attempts < MAX_WALK_ATTEMPTS
    {
        let candidate = candidates[random_index(rng, candidates.len())];
        let path = walk_to_start(rng, boss_point, candidate, grid_width);
        attempts += 1;
        start_columns.insert(path.terminal_column());
        paths.push(path);
    }

    PlannedPaths {
        boss_point,
        paths,
        diagnostics: PathDiagnostics {
            attempts,
            target_start_columns,
            distinct_start_columns: start_columns.len(),
        },
    }
}

/// Boss column is the middle of the grid; an even grid width tie-breaks
/// between the two middle columns via the injected generator.
pub(super) fn select_boss_point(
    rng: &mut ChaCha8Rng,
    grid_width: usize,
    layer_count: usize,
) -> Point {
    let middle = (grid_width / 2) as i32;
    let x = if grid_width % 2 == 1 || rng.next_u64() & 1 == 0 { middle } else { middle - 1 };
    Point::new(x, (layer_count - 1) as i32)
}

fn walk_to_start(
    rng: &mut ChaCha8Rng,
    boss_point: Point,
    candidate: Point,
    grid_width: usize,
) -> MapPath {
    // On a two-layer map the pre-boss layer already is the start layer.
    let mut path = if candidate.y == 0 {
        MapPath { points: vec![candidate] }
    } else {
        random_walk(rng, candidate, 0, grid_width)
    };
    path.points.insert(0, boss_point);
    path
}

/// Walks one layer per step toward `target_layer`, moving at most one column
/// sideways each step. Calling this with the source already on the target
/// layer is a caller bug.
pub(super) fn random_walk(
    rng: &mut ChaCha8Rng,
    from: Point,
    target_layer: i32,
    grid_width: usize,
) -> MapPath {
    assert_ne!(from.y, target_layer, "random walk requires distinct source and target layers");
    let step = if from.y > target_layer { -1 } else { 1 };

    let mut points = vec![from];
    let mut current = from;
    while current.y != target_layer {
        let mut choices = vec![current.x];
        if current.x - 1 >= 0 {
            choices.push(current.x - 1);
        }
        if current.x + 1 < grid_width as i32 {
            choices.push(current.x + 1);
        }
        current = Point::new(choices[random_index(rng, choices.len())], current.y + step);
        points.push(current);
    }

    MapPath { points }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use crate::config::{IntRange, MapConfig};
    use crate::types::Point;

    use super::*;

    fn planner_config(
        grid_width: usize,
        layer_count: usize,
        starting: IntRange,
        pre_boss: IntRange,
    ) -> MapConfig {
        let mut config = MapConfig::build_default();
        config.grid_width = grid_width;
        config.layers.truncate(layer_count);
        config.starting_node_count = starting;
        config.pre_boss_node_count = pre_boss;
        config
    }

    #[test]
    fn odd_grid_width_places_the_boss_in_the_center_column() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            assert_eq!(select_boss_point(&mut rng, 5, 4), Point::new(2, 3));
        }
    }

    #[test]
    fn even_grid_width_tie_breaks_between_the_two_middle_columns() {
        let mut seen = std::collections::BTreeSet::new();
        for seed in 0..64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let boss = select_boss_point(&mut rng, 6, 8);
            assert_eq!(boss.y, 7);
            assert!(boss.x == 2 || boss.x == 3, "unexpected boss column {}", boss.x);
            seen.insert(boss.x);
        }
        assert_eq!(seen.len(), 2, "both middle columns should occur across seeds");
    }

    #[test]
    fn random_walk_descends_one_layer_per_step_with_bounded_drift() {
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        for start_column in 0..5 {
            let path = random_walk(&mut rng, Point::new(start_column, 9), 0, 5);
            assert_eq!(path.points.first().copied(), Some(Point::new(start_column, 9)));
            assert_eq!(path.points.last().map(|point| point.y), Some(0));
            for pair in path.points.windows(2) {
                assert_eq!(pair[1].y, pair[0].y - 1);
                assert!((pair[1].x - pair[0].x).abs() <= 1);
                assert!(pair[1].x >= 0 && pair[1].x < 5);
            }
        }
    }

    #[test]
    #[should_panic(expected = "distinct source and target layers")]
    fn random_walk_rejects_equal_source_and_target_layers() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let _ = random_walk(&mut rng, Point::new(2, 3), 3, 5);
    }

    #[test]
    fn every_planned_path_starts_at_the_boss_and_ends_on_layer_zero() {
        let config = planner_config(7, 15, IntRange { min: 2, max: 3 }, IntRange { min: 3, max: 5 });
        let mut rng = ChaCha8Rng::seed_from_u64(4_242);
        let planned = plan_paths(&mut rng, &config);

        assert!(!planned.paths.is_empty());
        for path in &planned.paths {
            assert_eq!(path.points.first().copied(), Some(planned.boss_point));
            assert_eq!(path.points.last().map(|point| point.y), Some(0));
            // Boss prefix jumps to the pre-boss layer; every later step is -1.
            for pair in path.points[1..].windows(2) {
                assert_eq!(pair[1].y, pair[0].y - 1);
                assert!((pair[1].x - pair[0].x).abs() <= 1);
            }
        }
    }

    #[test]
    fn unreachable_diversity_target_stops_exactly_at_the_attempt_cap() {
        // One pre-boss candidate on a three-layer map can reach at most three
        // distinct starting columns, so a target of five never succeeds.
        let config = planner_config(5, 3, IntRange::exact(5), IntRange::exact(1));
        for seed in [1_u64, 9, 77, 12_345] {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let planned = plan_paths(&mut rng, &config);
            assert_eq!(planned.diagnostics.attempts, MAX_WALK_ATTEMPTS);
            assert!(planned.diagnostics.distinct_start_columns <= 3);
            assert!(!planned.diagnostics.met_target());
        }
    }

    #[test]
    fn zero_pre_boss_candidates_produce_no_paths_and_no_attempts() {
        let config = planner_config(4, 6, IntRange::exact(2), IntRange::exact(0));
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let planned = plan_paths(&mut rng, &config);

        assert!(planned.paths.is_empty());
        assert_eq!(planned.diagnostics.attempts, 0);
        assert_eq!(planned.diagnostics.distinct_start_columns, 0);
        assert!(!planned.diagnostics.met_target());
    }

    #[test]
    fn two_layer_maps_link_the_boss_straight_to_the_start_layer() {
        let config = planner_config(5, 2, IntRange::exact(2), IntRange::exact(2));
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let planned = plan_paths(&mut rng, &config);

        for path in &planned.paths {
            assert_eq!(path.points.len(), 2);
            assert_eq!(path.points[0], planned.boss_point);
            assert_eq!(path.points[1].y, 0);
        }
    }

    #[test]
    fn attempt_count_never_exceeds_the_cap_across_seeds() {
        let config = planner_config(3, 8, IntRange { min: 1, max: 3 }, IntRange { min: 1, max: 3 });
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let planned = plan_paths(&mut rng, &config);
            assert!(planned.diagnostics.attempts <= MAX_WALK_ATTEMPTS);
        }
    }
}
