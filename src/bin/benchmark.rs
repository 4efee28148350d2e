use std::env;
use std::time::{Duration, Instant};

use dial_sssp::graph::generators::generate_random;
use dial_sssp::graph::DirectedGraph;
use dial_sssp::{Dial, Dijkstra, Extraction, ShortestPathAlgorithm, ShortestPathResult};
use log::info;

type Graph = DirectedGraph<usize, u64>;

// Runs one algorithm and reports its timing
fn benchmark_algorithm<A>(
    name: &str,
    algorithm: &A,
    graph: &mut Graph,
    source: usize,
) -> Result<(Duration, ShortestPathResult<usize, u64>), dial_sssp::Error>
where
    A: ShortestPathAlgorithm<usize, u64>,
{
    let start = Instant::now();
    let result = algorithm.run(graph, &source)?;
    let duration = start.elapsed();

    println!(
        "  - {:<22} reached {} vertices in {:?}",
        name,
        result.reachable_count(),
        duration
    );
    Ok((duration, result))
}

fn costs_agree(a: &ShortestPathResult<usize, u64>, b: &ShortestPathResult<usize, u64>) -> bool {
    a.entries()
        .iter()
        .zip(b.entries())
        .all(|(x, y)| x.cost == y.cost)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Arguments: [max_vertices] [edge_factor] [max_weight]
    let args: Vec<String> = env::args().collect();
    let max_vertices: usize = args.get(1).and_then(|a| a.parse().ok()).unwrap_or(20_000);
    let edge_factor: f64 = args.get(2).and_then(|a| a.parse().ok()).unwrap_or(4.0);
    let max_weight: u64 = args.get(3).and_then(|a| a.parse().ok()).unwrap_or(10);

    let graph_sizes: Vec<usize> = [1_000, 5_000, 10_000, 20_000, 50_000]
        .into_iter()
        .filter(|&n| n <= max_vertices)
        .collect();

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Dial");
    println!("Edge factor: {}, weights 0..={}", edge_factor, max_weight);
    println!("=====================================================");

    let dijkstra_scan = Dijkstra::new();
    let dijkstra_heap = Dijkstra::new().with_extraction(Extraction::BinaryHeap);
    let dial = Dial::new(max_weight);

    let mut results = Vec::new();

    for (i, &size) in graph_sizes.iter().enumerate() {
        let edges = (edge_factor * size as f64) as usize;
        let mut graph = generate_random(size, edges, max_weight, 0x5EED_0000 + i as u64)?;
        info!("Generated graph with {} vertices and {} edges", graph.vertex_count(), graph.edge_count());
        println!("\nGraph with {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (scan_time, scan) = benchmark_algorithm("Dijkstra (linear scan)", &dijkstra_scan, &mut graph, 0)?;
        let (heap_time, heap) = benchmark_algorithm("Dijkstra (binary heap)", &dijkstra_heap, &mut graph, 0)?;
        let (dial_time, buckets) = benchmark_algorithm("Dial", &dial, &mut graph, 0)?;

        if !costs_agree(&scan, &heap) || !costs_agree(&scan, &buckets) {
            return Err(format!("solvers disagree on graph with {} vertices", size).into());
        }

        results.push((size, scan_time, heap_time, dial_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<15} | {:<10}",
        "Vertices", "Scan (ms)", "Heap (ms)", "Dial (ms)", "Heap/Dial"
    );
    println!("-----------------------------------------------------");

    for (size, scan_time, heap_time, dial_time) in &results {
        println!(
            "{:<10} | {:<15.2} | {:<15.2} | {:<15.2} | {:<10.2}",
            size,
            scan_time.as_secs_f64() * 1000.0,
            heap_time.as_secs_f64() * 1000.0,
            dial_time.as_secs_f64() * 1000.0,
            heap_time.as_secs_f64() / dial_time.as_secs_f64().max(f64::EPSILON)
        );
    }

    Ok(())
}
