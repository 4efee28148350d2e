use colored::*;
use dial_sssp::{Dial, Dijkstra, DirectedGraph, ShortestPathAlgorithm, ShortestPathResult};

fn print_result(result: &ShortestPathResult<&'static str, u32>) {
    println!("\n{}", format!("{} from {}", result.algorithm, result.source).bright_cyan().bold());
    for entry in result.entries() {
        let line = entry.to_string();
        if entry.cost.is_some() {
            println!("  {}", line.green());
        } else {
            println!("  {}", line.red());
        }
    }
}

fn main() -> Result<(), dial_sssp::Error> {
    let mut graph: DirectedGraph<&'static str, u32> = DirectedGraph::new();

    for label in ["A", "B", "C", "D", "E", "F"] {
        graph.add_vertex(label)?;
    }

    graph.add_edge(&"A", &"B", 1)?;
    graph.add_edge(&"A", &"C", 4)?;
    graph.add_edge(&"B", &"C", 2)?;
    graph.add_edge(&"B", &"D", 5)?;
    graph.add_edge(&"C", &"D", 1)?;
    graph.add_edge(&"D", &"E", 3)?;
    // F has no incoming edges and stays unreachable
    graph.add_edge(&"F", &"A", 2)?;

    println!(
        "{}",
        format!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        )
        .bright_white()
    );

    let dijkstra = Dijkstra::new();
    let dijkstra_result = dijkstra.run(&mut graph, &"A")?;
    print_result(&dijkstra_result);

    let max_edge_weight = graph.max_edge_weight().unwrap_or(0) as u64;
    let dial = Dial::new(max_edge_weight);
    let dial_result = dial.run(&mut graph, &"A")?;
    print_result(&dial_result);

    if dijkstra_result.entries() == dial_result.entries() {
        println!("\n{}", "Both solvers agree".bright_green().bold());
    } else {
        println!("\n{}", "Solvers disagree".bright_red().bold());
    }

    if let Some(path) = dijkstra.get_path(&dijkstra_result, &"E") {
        println!("Shortest path A -> E: {}", path.join(" -> ").yellow());
    }

    // Dial rejects a bound below the real maximum weight
    if let Err(err) = Dial::new(max_edge_weight - 1).run(&mut graph, &"A") {
        println!("{} {}", "Expected error:".bright_yellow(), err);
    }

    Ok(())
}
