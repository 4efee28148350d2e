use dial_sssp::{run_dial, run_dijkstra, BucketOrder, Dial, DirectedGraph, Error, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;

fn scenario_graph() -> DirectedGraph<&'static str, u32> {
    let mut graph = DirectedGraph::new();
    for label in ["A", "B", "C", "D"] {
        graph.add_vertex(label).unwrap();
    }
    graph.add_edge(&"A", &"B", 1).unwrap();
    graph.add_edge(&"A", &"C", 4).unwrap();
    graph.add_edge(&"B", &"C", 2).unwrap();
    graph.add_edge(&"B", &"D", 5).unwrap();
    graph.add_edge(&"C", &"D", 1).unwrap();
    graph
}

#[test]
fn test_four_vertex_scenario_matches_dijkstra() {
    let mut graph = scenario_graph();
    let dijkstra = run_dijkstra(&mut graph, &"A").unwrap();
    let dial = run_dial(&mut graph, &"A", 5).unwrap();

    assert_eq!(dial.algorithm, "Dial");
    assert_eq!(dial.entries(), dijkstra.entries());
    assert_eq!(
        dial.lines(),
        vec![
            "A: Cost = 0, Previous = None",
            "B: Cost = 1, Previous = A",
            "C: Cost = 3, Previous = B",
            "D: Cost = 4, Previous = C",
        ]
    );
}

#[test]
fn test_bound_equal_to_max_weight_is_accepted() {
    let mut graph = scenario_graph();
    assert!(run_dial(&mut graph, &"A", 5).is_ok());
    assert!(run_dial(&mut graph, &"A", 50).is_ok());
}

#[test]
fn test_bound_below_max_weight_is_rejected() {
    let mut graph = scenario_graph();
    let err = run_dial(&mut graph, &"A", 4).unwrap_err();
    assert_eq!(
        err,
        Error::BucketRangeExceeded {
            max_edge_weight: 4,
            actual: 5
        }
    );
}

#[test]
fn test_range_check_happens_before_mutation() {
    let mut graph = scenario_graph();
    run_dijkstra(&mut graph, &"A").unwrap();

    assert!(run_dial(&mut graph, &"B", 1).is_err());
    // Still the state of the Dijkstra run from A
    assert_eq!(graph.vertices()[0].cost(), Some(0));
    assert_eq!(graph.vertices()[3].cost(), Some(4));
}

#[test]
fn test_unknown_source() {
    let mut graph = scenario_graph();
    assert!(matches!(run_dial(&mut graph, &"Z", 5), Err(Error::UnknownSource(_))));
}

#[test]
fn test_non_integral_weight_rejected() {
    let mut graph: DirectedGraph<&str, OrderedFloat<f64>> = DirectedGraph::new();
    graph.add_vertex("A").unwrap();
    graph.add_vertex("B").unwrap();
    graph.add_edge(&"A", &"B", OrderedFloat(1.5)).unwrap();

    assert!(matches!(run_dial(&mut graph, &"A", 10), Err(Error::InvalidWeight(_))));
    // Dijkstra is fine with it
    assert_eq!(run_dijkstra(&mut graph, &"A").unwrap().cost(&"B"), Some(OrderedFloat(1.5)));
}

#[test]
fn test_integral_float_weights_accepted() {
    let mut graph: DirectedGraph<&str, OrderedFloat<f64>> = DirectedGraph::new();
    for label in ["A", "B", "C"] {
        graph.add_vertex(label).unwrap();
    }
    graph.add_edge(&"A", &"B", OrderedFloat(2.0)).unwrap();
    graph.add_edge(&"B", &"C", OrderedFloat(3.0)).unwrap();

    let result = run_dial(&mut graph, &"A", 3).unwrap();
    assert_eq!(result.cost(&"C"), Some(OrderedFloat(5.0)));
    assert_eq!(result.lines()[2], "C: Cost = 5, Previous = B");
}

#[test]
fn test_negative_weight_rejected() {
    // Rejected at insertion already; Dial never sees it
    let mut graph: DirectedGraph<&str, i32> = DirectedGraph::new();
    graph.add_vertex("A").unwrap();
    graph.add_vertex("B").unwrap();
    assert!(matches!(graph.add_edge(&"A", &"B", -3), Err(Error::InvalidWeight(_))));
    assert!(run_dial(&mut graph, &"A", 0).is_ok());
}

#[test]
fn test_range_overflow() {
    let mut graph: DirectedGraph<u32, u64> = DirectedGraph::new();
    for v in 0..3 {
        graph.add_vertex(v).unwrap();
    }
    graph.add_edge(&0, &1, 1).unwrap();

    let err = run_dial(&mut graph, &0, u64::MAX).unwrap_err();
    assert!(matches!(err, Error::BucketRangeOverflow { vertex_count: 3, .. }));
}

#[test]
fn test_unreachable_vertices_never_enqueued() {
    let mut graph = scenario_graph();
    graph.add_vertex("E").unwrap();
    graph.add_edge(&"E", &"A", 2).unwrap();

    let result = run_dial(&mut graph, &"C", 5).unwrap();
    assert_eq!(result.cost(&"D"), Some(1));
    for unreachable in ["A", "B", "E"] {
        assert_eq!(result.cost(&unreachable), None);
        assert_eq!(result.predecessor(&unreachable), None);
    }
}

#[test]
fn test_isolated_vertex_with_zero_bound() {
    let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
    graph.add_vertex("X").unwrap();

    let result = run_dial(&mut graph, &"X", 0).unwrap();
    assert_eq!(result.lines(), vec!["X: Cost = 0, Previous = None"]);
}

#[test]
fn test_zero_weight_chain() {
    let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
    for label in ["A", "B", "C", "D"] {
        graph.add_vertex(label).unwrap();
    }
    graph.add_edge(&"A", &"B", 0).unwrap();
    graph.add_edge(&"B", &"C", 0).unwrap();
    graph.add_edge(&"C", &"D", 1).unwrap();
    graph.add_edge(&"A", &"D", 1).unwrap();

    let result = run_dial(&mut graph, &"A", 1).unwrap();
    assert_eq!(result.cost(&"C"), Some(0));
    assert_eq!(result.cost(&"D"), Some(1));
    assert_eq!(result.predecessor(&"C"), Some(&"B"));
    assert_eq!(result.predecessor(&"D"), Some(&"A"));
}

#[test]
fn test_relaxation_moves_vertex_to_cheaper_bucket() {
    // D is first queued at 10 via A, then pulled down to 3 via B and C
    let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
    for label in ["A", "B", "C", "D"] {
        graph.add_vertex(label).unwrap();
    }
    graph.add_edge(&"A", &"D", 10).unwrap();
    graph.add_edge(&"A", &"B", 1).unwrap();
    graph.add_edge(&"B", &"D", 6).unwrap();
    graph.add_edge(&"B", &"C", 1).unwrap();
    graph.add_edge(&"C", &"D", 1).unwrap();

    for order in [BucketOrder::Fifo, BucketOrder::VertexOrder] {
        let result = Dial::new(10).with_bucket_order(order).run(&mut graph, &"A").unwrap();
        assert_eq!(result.cost(&"D"), Some(3));
        assert_eq!(result.predecessor(&"D"), Some(&"C"));
    }
}

#[test]
fn test_vertex_order_reproduces_dijkstra_tie_break() {
    // A's edges list C before B, so FIFO settles C first
    let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
    for label in ["A", "B", "C", "D"] {
        graph.add_vertex(label).unwrap();
    }
    graph.add_edge(&"A", &"C", 1).unwrap();
    graph.add_edge(&"A", &"B", 1).unwrap();
    graph.add_edge(&"C", &"D", 1).unwrap();
    graph.add_edge(&"B", &"D", 1).unwrap();

    let dijkstra = run_dijkstra(&mut graph, &"A").unwrap();
    assert_eq!(dijkstra.predecessor(&"D"), Some(&"B"));

    let fifo = Dial::new(1).run(&mut graph, &"A").unwrap();
    assert_eq!(fifo.cost(&"D"), Some(2));
    assert_eq!(fifo.predecessor(&"D"), Some(&"C"));

    let ordered = Dial::new(1)
        .with_bucket_order(BucketOrder::VertexOrder)
        .run(&mut graph, &"A")
        .unwrap();
    assert_eq!(ordered.entries(), dijkstra.entries());
}

#[test]
fn test_dial_is_idempotent() {
    let mut graph = scenario_graph();
    let first = run_dial(&mut graph, &"A", 5).unwrap();
    let second = run_dial(&mut graph, &"A", 5).unwrap();
    assert_eq!(first, second);
    assert_eq!(Dial::new(5).max_edge_weight(), 5);
    assert_eq!(Dial::new(5).bucket_order(), BucketOrder::Fifo);
}

#[test]
fn test_bucket_range_beyond_weight_type_rejected() {
    let mut graph: DirectedGraph<&str, u8> = DirectedGraph::new();
    for label in ["A", "B", "C"] {
        graph.add_vertex(label).unwrap();
    }
    graph.add_edge(&"A", &"B", 200).unwrap();
    graph.add_edge(&"B", &"C", 200).unwrap();

    let err = run_dial(&mut graph, &"A", 200).unwrap_err();
    assert_eq!(
        err,
        Error::BucketRangeOverflow {
            max_edge_weight: 200,
            vertex_count: 3
        }
    );
    // Rejected before the graph is touched
    assert!(graph.vertices().iter().all(|v| v.cost().is_none()));
}

#[test]
fn test_narrow_weight_type_within_range() {
    let mut graph: DirectedGraph<&str, u8> = DirectedGraph::new();
    for label in ["A", "B", "C"] {
        graph.add_vertex(label).unwrap();
    }
    graph.add_edge(&"A", &"B", 100).unwrap();
    graph.add_edge(&"B", &"C", 100).unwrap();
    // Back edge to the source: its sum would not fit in u8 but never improves
    graph.add_edge(&"C", &"A", 100).unwrap();

    let result = run_dial(&mut graph, &"A", 100).unwrap();
    assert_eq!(result.cost(&"C"), Some(200));
    assert_eq!(result.predecessor(&"C"), Some(&"B"));
    assert_eq!(result.cost(&"A"), Some(0));
}
