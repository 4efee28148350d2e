use crate::graph::DirectedGraph;
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with `n` vertices labelled `0..n` and
/// `m` edges whose integer weights are drawn from `0..=max_weight`.
///
/// Self-loops and parallel edges are kept; neither can shorten a path.
pub fn generate_random(n: usize, m: usize, max_weight: u64, seed: u64) -> Result<DirectedGraph<usize, u64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v)?;
    }
    if n == 0 {
        return Ok(graph);
    }

    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(0..=max_weight);
        graph.add_edge(&u, &v, weight)?;
    }

    Ok(graph)
}

/// Generates a `width` x `height` grid with edges in both directions between
/// 4-neighbours. Each direction gets its own weight from `1..=max_weight`.
pub fn generate_grid(width: usize, height: usize, max_weight: u64, seed: u64) -> Result<DirectedGraph<usize, u64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    let mut rng = StdRng::seed_from_u64(seed);
    let max_weight = max_weight.max(1);

    for v in 0..(width * height) {
        graph.add_vertex(v)?;
    }

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;

            if x + 1 < width {
                let right = current + 1;
                graph.add_edge(&current, &right, rng.gen_range(1..=max_weight))?;
                graph.add_edge(&right, &current, rng.gen_range(1..=max_weight))?;
            }
            if y + 1 < height {
                let down = current + width;
                graph.add_edge(&current, &down, rng.gen_range(1..=max_weight))?;
                graph.add_edge(&down, &current, rng.gen_range(1..=max_weight))?;
            }
        }
    }

    Ok(graph)
}
