use std::collections::{BTreeSet, VecDeque};

use anyhow::Result;
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use spiremap_core::{
    BlueprintKey, GeneratedMap, IntRange, LayerConfig, MapConfig, NodeId, content, generate_map,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    runs: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Sweeping {} generated maps from seed {}...", args.runs, args.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut diversity_shortfalls = 0_u32;
    for run in 0..args.runs {
        let config = random_config(&mut rng);
        let map_seed = rng.next_u64();
        let generated = generate_map(map_seed, &config)
            .map_err(|e| anyhow::anyhow!("sweep run {run} built an invalid config: {:?}", e))?;

        assert_edges_layer_adjacent(&generated);
        assert_pruning_matches_isolation(&generated);
        assert_all_active_nodes_reach_boss(&generated);
        assert!(
            generated.diagnostics.attempts <= 100,
            "run {run} exceeded the walk attempt cap"
        );

        if !generated.diagnostics.met_target() {
            diversity_shortfalls += 1;
        }
    }

    println!(
        "Sweep completed successfully ({} diversity shortfalls across {} runs).",
        diversity_shortfalls, args.runs
    );
    Ok(())
}

fn random_config(rng: &mut ChaCha8Rng) -> MapConfig {
    let grid_width = 1 + (rng.next_u64() % 8) as usize;
    let layer_count = 2 + (rng.next_u64() % 14) as usize;

    let layers = (0..layer_count)
        .map(|_| LayerConfig {
            layer_distance: IntRange { min: 80, max: 120 },
            randomize_nodes: (rng.next_u64() % 100) as f64 / 100.0,
            default_blueprint: BlueprintKey::from(content::keys::ENCOUNTER_MONSTER),
        })
        .collect();

    let starting_max = 1 + (rng.next_u64() % grid_width as u64) as usize;
    let pre_boss_max = 1 + (rng.next_u64() % grid_width as u64) as usize;

    MapConfig {
        grid_width,
        layers,
        starting_node_count: IntRange { min: 1, max: starting_max },
        pre_boss_node_count: IntRange { min: 1, max: pre_boss_max },
        random_blueprints: content::default_random_pool(),
    }
}

fn assert_edges_layer_adjacent(generated: &GeneratedMap) {
    for node in generated.graph.nodes() {
        for &target in &node.outgoing {
            assert_eq!(
                generated.graph.node(target).layer(),
                node.layer() + 1,
                "Invariant failed: edge skips or repeats a layer"
            );
        }
    }
}

fn assert_pruning_matches_isolation(generated: &GeneratedMap) {
    for node in generated.graph.nodes() {
        assert_eq!(
            node.active,
            !node.is_isolated(),
            "Invariant failed: active flag disagrees with isolation"
        );
    }
}

fn assert_all_active_nodes_reach_boss(generated: &GeneratedMap) {
    let boss_id = generated
        .graph
        .node_id_at(generated.boss_point)
        .expect("boss point lies inside the grid");

    let mut reaches_boss: BTreeSet<NodeId> = BTreeSet::from([boss_id]);
    let mut open = VecDeque::from([boss_id]);
    while let Some(id) = open.pop_front() {
        for &source in &generated.graph.node(id).incoming {
            if reaches_boss.insert(source) {
                open.push_back(source);
            }
        }
    }

    for node in generated.graph.nodes() {
        assert!(
            !node.active || reaches_boss.contains(&node.id),
            "Invariant failed: active node cut off from the boss"
        );
    }
}
