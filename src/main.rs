use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glimmer::config::ChartConfig;
use glimmer::ChartPair;

/// Interactive demo driver. Reads commands from stdin, feeds the chart pair,
/// and prints JSON snapshots the way a renderer would consume them.
///
/// Commands: `<raw> [companion] [category]`, `undo`, `reset`, `zoom+`,
/// `zoom-`, `stats`, `quit`.
fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glimmer=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut pair = ChartPair::with_configs(ChartConfig::from_env(), ChartConfig::companion());
    info!("chart pair ready, type a number to submit a sample");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "undo" => {
                let removed = pair.undo();
                println!("{}", if removed { "removed latest point" } else { "nothing to undo" });
            }
            "reset" => {
                pair.reset();
                println!("cleared");
            }
            "zoom+" => {
                pair.zoom_in();
                println!("zoom level {}", pair.primary().zoom_level());
            }
            "zoom-" => {
                pair.zoom_out();
                println!("zoom level {}", pair.primary().zoom_level());
            }
            "stats" => {
                if let Some(stats) = pair.primary().stats() {
                    println!("{}", serde_json::to_string(&stats)?);
                }
            }
            raw => {
                let Ok(raw) = raw.parse::<f64>() else {
                    eprintln!("unknown command: {line}");
                    continue;
                };
                let companion_value = parts
                    .next()
                    .and_then(|v| v.parse::<f64>().ok())
                    .unwrap_or(raw);
                let category = parts.next().unwrap_or("manual");

                match pair.submit(raw, companion_value, category) {
                    Ok(update) => {
                        for event in &update.primary.events {
                            println!(">> {}", event.message);
                        }
                        let snapshot = pair.primary().snapshot();
                        println!("{}", serde_json::to_string_pretty(&snapshot)?);
                    }
                    Err(e) => eprintln!("rejected: {e}"),
                }
            }
        }
        stdout.flush()?;
    }

    Ok(())
}
