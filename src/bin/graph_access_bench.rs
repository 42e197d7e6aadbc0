//! Thin benchmark harness over the accessibility engine.
//!
//! Reproduces the reference workload: build a 311-node undirected path
//! graph once, warm up with 50 rounds of 20 accessibility calls, then time
//! `N` measured calls (`N` from the first argument) and report wall-clock
//! seconds to three decimal places.

use std::time::Instant;

use anyhow::{Context, Result};
use graph_access::{accessibility, Graph};
use tracing_subscriber::EnvFilter;

/// Node count of the reference path graph.
const PATH_NODES: usize = 311;

fn build_graph() -> Result<Graph<usize>> {
    let mut gr = Graph::undirected();
    gr.add_nodes(0..PATH_NODES);
    for i in 0..PATH_NODES - 1 {
        gr.add_edge(i, i + 1)?;
    }
    Ok(gr)
}

fn run(gr: &Graph<usize>, n: usize) -> Result<()> {
    for _ in 0..n {
        accessibility(gr)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    // Logging is opt-in via RUST_LOG so it never skews the timed loop.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .init();
    }

    let reps: usize = std::env::args()
        .nth(1)
        .context("usage: graph-access-bench <repetitions>")?
        .parse()
        .context("repetitions must be a non-negative integer")?;

    let gr = build_graph()?;

    // Warm up.
    for _ in 0..50 {
        run(&gr, 20)?;
    }

    println!("Start timing...");
    let start = Instant::now();
    run(&gr, reps)?;
    let duration = start.elapsed();
    println!("graph-access: {:.3}", duration.as_secs_f64());

    Ok(())
}
