use dial_sssp::graph::generators::{generate_grid, generate_random};
use dial_sssp::graph::DirectedGraph;
use dial_sssp::{
    BucketOrder, Dial, Dijkstra, Error, Extraction, ShortestPathAlgorithm, ShortestPathResult,
};

/// Minimum cost over every simple path from `source`, by exhaustive DFS
fn brute_force_costs(graph: &DirectedGraph<usize, u64>, source: usize) -> Vec<Option<u64>> {
    fn explore(
        graph: &DirectedGraph<usize, u64>,
        at: usize,
        cost: u64,
        on_path: &mut Vec<bool>,
        best: &mut Vec<Option<u64>>,
    ) {
        if best[at].map_or(true, |b| cost < b) {
            best[at] = Some(cost);
        }
        on_path[at] = true;
        for edge in graph.vertices()[at].edges() {
            let next = edge.to.index();
            if !on_path[next] {
                explore(graph, next, cost + edge.weight, on_path, best);
            }
        }
        on_path[at] = false;
    }

    let n = graph.vertex_count();
    let mut best = vec![None; n];
    let mut on_path = vec![false; n];
    explore(graph, source, 0, &mut on_path, &mut best);
    best
}

fn costs(result: &ShortestPathResult<usize, u64>) -> Vec<Option<u64>> {
    result.entries().iter().map(|e| e.cost).collect()
}

/// Every predecessor link must be a tight edge of the graph
fn assert_valid_tree(graph: &DirectedGraph<usize, u64>, result: &ShortestPathResult<usize, u64>) {
    for entry in result.entries() {
        match (&entry.predecessor, entry.cost) {
            (None, Some(cost)) => {
                assert_eq!(entry.vertex, result.source);
                assert_eq!(cost, 0);
            }
            (None, None) => {}
            (Some(pred), Some(cost)) => {
                let pred_cost = result.cost(pred).expect("predecessor must be reachable");
                let tight = graph.vertices()[*pred]
                    .edges()
                    .iter()
                    .any(|e| e.to.index() == entry.vertex && pred_cost + e.weight == cost);
                assert!(tight, "no tight edge {} -> {}", pred, entry.vertex);
            }
            (Some(_), None) => panic!("unreachable vertex {} has a predecessor", entry.vertex),
        }
    }
}

#[test]
fn test_dijkstra_matches_brute_force() {
    for seed in 0..40_u64 {
        let mut graph = generate_random(7, 16, 9, 0xB0F0_0000 + seed).unwrap();
        let source = (seed as usize) % 7;
        let expected = brute_force_costs(&graph, source);

        for extraction in [Extraction::LinearScan, Extraction::BinaryHeap] {
            let result = Dijkstra::new()
                .with_extraction(extraction)
                .run(&mut graph, &source)
                .unwrap();
            assert_eq!(costs(&result), expected, "seed={seed} {:?}", extraction);
            assert_valid_tree(&graph, &result);
        }
    }
}

#[test]
fn test_dial_matches_brute_force() {
    for seed in 0..40_u64 {
        let mut graph = generate_random(7, 16, 9, 0xD1A1_0000 + seed).unwrap();
        let source = (seed as usize) % 7;
        let expected = brute_force_costs(&graph, source);

        let result = Dial::new(9).run(&mut graph, &source).unwrap();
        assert_eq!(costs(&result), expected, "seed={seed}");
        assert_valid_tree(&graph, &result);
    }
}

#[test]
fn test_extraction_modes_agree_exactly() {
    for seed in 0..20_u64 {
        let mut graph = generate_random(120, 600, 6, 0xE47A_0000 + seed).unwrap();
        let source = (seed as usize * 7) % 120;

        let scan = Dijkstra::new().run(&mut graph, &source).unwrap();
        let heap = Dijkstra::new()
            .with_extraction(Extraction::BinaryHeap)
            .run(&mut graph, &source)
            .unwrap();
        assert_eq!(scan.entries(), heap.entries(), "seed={seed}");
    }
}

#[test]
fn test_dial_agrees_with_dijkstra_random() {
    for seed in 0..20_u64 {
        let max_weight = 1 + seed % 12;
        let mut graph = generate_random(150, 700, max_weight, 0xA9EE_0000 + seed).unwrap();
        let source = (seed as usize * 13) % 150;

        let dijkstra = Dijkstra::new().run(&mut graph, &source).unwrap();

        let fifo = Dial::new(max_weight).run(&mut graph, &source).unwrap();
        assert_eq!(costs(&fifo), costs(&dijkstra), "seed={seed}");
        assert_valid_tree(&graph, &fifo);

        let ordered = Dial::new(max_weight)
            .with_bucket_order(BucketOrder::VertexOrder)
            .run(&mut graph, &source)
            .unwrap();
        assert_eq!(ordered.entries(), dijkstra.entries(), "seed={seed}");
    }
}

#[test]
fn test_dial_agrees_with_dijkstra_on_grids() {
    for seed in 0..6_u64 {
        let mut graph = generate_grid(12, 9, 20, 0x6121_0000 + seed).unwrap();

        let dijkstra = Dijkstra::new()
            .with_extraction(Extraction::BinaryHeap)
            .run(&mut graph, &0)
            .unwrap();
        let dial = Dial::new(20)
            .with_bucket_order(BucketOrder::VertexOrder)
            .run(&mut graph, &0)
            .unwrap();

        assert_eq!(dial.entries(), dijkstra.entries(), "seed={seed}");
        assert_eq!(dial.reachable_count(), 12 * 9);
    }
}

#[test]
fn test_loose_bound_does_not_change_result() {
    let mut graph = generate_random(80, 320, 5, 0x1005E).unwrap();
    let tight = Dial::new(5).run(&mut graph, &0).unwrap();
    let loose = Dial::new(500).run(&mut graph, &0).unwrap();
    assert_eq!(tight, loose);
}

#[test]
fn test_bucket_range_exceeded_iff_bound_below_max_weight() {
    for seed in 0..10_u64 {
        let mut graph = generate_random(30, 90, 15, 0xBADB_0000 + seed).unwrap();
        let actual = graph.max_edge_weight().unwrap();

        for bound in 0..=actual + 2 {
            let outcome = Dial::new(bound).run(&mut graph, &0);
            if bound < actual {
                assert_eq!(
                    outcome.unwrap_err(),
                    Error::BucketRangeExceeded {
                        max_edge_weight: bound,
                        actual
                    },
                    "seed={seed} bound={bound}"
                );
            } else {
                assert!(outcome.is_ok(), "seed={seed} bound={bound}");
            }
        }
    }
}

#[test]
fn test_unreachable_agreement() {
    // Two components: 0..50 and 50..100 with no edges between them
    let mut graph = generate_random(50, 200, 8, 0xC0C0).unwrap();
    for v in 50..100 {
        graph.add_vertex(v).unwrap();
    }
    for v in 50..99 {
        graph.add_edge(&v, &(v + 1), 3).unwrap();
    }

    let dijkstra = Dijkstra::new().run(&mut graph, &0).unwrap();
    let dial = Dial::new(8).run(&mut graph, &0).unwrap();
    for v in 50..100 {
        assert_eq!(dijkstra.cost(&v), None);
        assert_eq!(dial.cost(&v), None);
        assert_eq!(dijkstra.predecessor(&v), None);
        assert_eq!(dial.predecessor(&v), None);
    }
}
