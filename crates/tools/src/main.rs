use anyhow::{Context, Result};
use clap::Parser;
use spiremap_core::{MapConfig, generate_map};
use std::fs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed driving the deterministic generation pass
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Path to a JSON map config; omit to use the built-in config
    #[arg(short, long)]
    config: Option<String>,
    /// Emit the full map snapshot as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let config_data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path}"))?;
            serde_json::from_str(&config_data)
                .with_context(|| "Failed to deserialize config JSON")?
        }
        None => MapConfig::default(),
    };

    let generated = generate_map(args.seed, &config)
        .map_err(|e| anyhow::anyhow!("Invalid map config: {:?}", e))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&generated.snapshot())?);
        return Ok(());
    }

    println!("Generated map for seed {}.", args.seed);
    println!("Boss node: ({}, {})", generated.boss_point.x, generated.boss_point.y);
    for layer in (0..generated.graph.layer_count()).rev() {
        let entries: Vec<String> = generated
            .graph
            .layer_nodes(layer)
            .filter(|node| node.active)
            .map(|node| match &node.blueprint {
                Some(blueprint) => format!("{}={}", node.column(), blueprint.as_str()),
                None => format!("{}=-", node.column()),
            })
            .collect();
        println!("Layer {layer:>2}: {}", entries.join(" "));
    }

    let diagnostics = generated.diagnostics;
    println!("Walk attempts: {}", diagnostics.attempts);
    println!(
        "Starting columns: {} of {} requested",
        diagnostics.distinct_start_columns, diagnostics.target_start_columns
    );
    if !diagnostics.met_target() {
        println!(
            "warning: starting-column target missed after {} attempts",
            diagnostics.attempts
        );
    }
    println!("Fingerprint: {}", generated.fingerprint());

    Ok(())
}
