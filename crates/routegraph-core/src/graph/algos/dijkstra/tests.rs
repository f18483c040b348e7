use super::*;
use crate::graph::store::EdgeStore;
use crate::graph::types::EdgeAttrs;

/// Small city network used across path tests
fn city_network() -> EdgeStore {
    let mut store = EdgeStore::new();
    let routes = [
        ("CBD", "Station", 2.0, 6.0),
        ("CBD", "Harbour", 3.5, 10.0),
        ("Station", "Harbour", 1.2, 4.0),
        ("Station", "Airport", 12.0, 25.0),
        ("Harbour", "Airport", 10.0, 18.0),
        ("Harbour", "University", 5.0, 12.0),
        ("CBD", "University", 7.0, 20.0),
        ("University", "Airport", 8.0, 16.0),
    ];
    for (from, to, distance, cost) in routes {
        store
            .add_edge(from, to, EdgeAttrs::new(distance, cost))
            .unwrap();
    }
    store
}

fn at_hour(hour: u8) -> SearchOptions {
    SearchOptions {
        context: CostContext::from_hour(Some(hour)).unwrap(),
        max_settled: None,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Cheapest total cost over every simple path, by exhaustive enumeration
fn brute_force_cost(store: &EdgeStore, from: &str, to: &str, multiplier: f64) -> Option<f64> {
    fn walk(
        store: &EdgeStore,
        node: &str,
        to: &str,
        multiplier: f64,
        visited: &mut Vec<String>,
        acc: f64,
        best: &mut Option<f64>,
    ) {
        if node == to {
            if best.is_none_or(|b| acc < b) {
                *best = Some(acc);
            }
            return;
        }
        for edge in store.edges_from(node) {
            if visited.contains(&edge.destination) {
                continue;
            }
            visited.push(edge.destination.clone());
            let next = acc + edge.base_cost * multiplier;
            walk(store, &edge.destination, to, multiplier, visited, next, best);
            visited.pop();
        }
    }

    let mut best = None;
    let mut visited = vec![from.to_string()];
    walk(store, from, to, multiplier, &mut visited, 0.0, &mut best);
    best
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        node_id: "A".to_string(),
        accumulated_cost: Cost::new(1.0),
    };
    let entry2 = HeapEntry {
        node_id: "B".to_string(),
        accumulated_cost: Cost::new(2.0),
    };
    let entry3 = HeapEntry {
        node_id: "C".to_string(),
        accumulated_cost: Cost::new(1.0),
    };

    // Lower cost should compare as less (normal ordering)
    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // Equal costs fall back to node name
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);

    assert_eq!(entry1, entry1.clone());
    assert_ne!(entry1, entry2);
}

#[test]
fn test_city_path_base_costs() {
    let store = city_network();
    let result =
        dijkstra_find_path(&store, "CBD", "Airport", &SearchOptions::default()).unwrap();

    assert_eq!(result.path, vec!["CBD", "Harbour", "Airport"]);
    assert!(approx(result.total_cost, 28.0));
    assert!(approx(result.total_distance, 13.5));
    assert_eq!(result.multiplier, 1.0);
    assert_eq!(result.hops(), 2);
}

#[test]
fn test_trace_follows_execution_order() {
    let store = city_network();
    let result =
        dijkstra_find_path(&store, "CBD", "Airport", &SearchOptions::default()).unwrap();
    let events = result.trace.events();

    assert_eq!(
        events[0],
        TraceEvent::Start {
            source: "CBD".to_string()
        }
    );
    assert_eq!(events[1], TraceEvent::BaseCosts);
    assert_eq!(
        events[2],
        TraceEvent::Selected {
            node: "CBD".to_string(),
            cost: 0.0
        }
    );
    // Neighbours are relaxed in destination order
    assert_eq!(
        events[3],
        TraceEvent::Relaxed {
            node: "Harbour".to_string(),
            via: "CBD".to_string(),
            cost: 10.0,
            distance: 3.5
        }
    );
    assert_eq!(
        result.trace.selected_nodes(),
        vec!["CBD", "Station", "Harbour", "University", "Airport"]
    );
    assert!(matches!(
        result.trace.last(),
        Some(TraceEvent::Found { cost, distance }) if approx(*cost, 28.0) && approx(*distance, 13.5)
    ));
}

#[test]
fn test_relaxation_improves_previous_estimate() {
    let store = city_network();
    let result =
        dijkstra_find_path(&store, "CBD", "Airport", &SearchOptions::default()).unwrap();

    let airport_updates: Vec<(String, f64)> = result
        .trace
        .iter()
        .filter_map(|event| match event {
            TraceEvent::Relaxed { node, via, cost, .. } if node == "Airport" => {
                Some((via.clone(), *cost))
            }
            _ => None,
        })
        .collect();

    assert_eq!(
        airport_updates,
        vec![("Station".to_string(), 31.0), ("Harbour".to_string(), 28.0)]
    );
}

#[test]
fn test_equal_cost_alternatives_report_same_cost() {
    let mut store = EdgeStore::new();
    store.add_edge("A", "B", EdgeAttrs::new(2.0, 6.0)).unwrap();
    store.add_edge("B", "C", EdgeAttrs::new(1.2, 4.0)).unwrap();
    store.add_edge("A", "C", EdgeAttrs::new(3.5, 10.0)).unwrap();

    let result = dijkstra_find_path(&store, "A", "C", &SearchOptions::default()).unwrap();
    assert!(approx(result.total_cost, 10.0));
    // The direct route is found first and a tie never replaces it
    assert_eq!(result.path, vec!["A", "C"]);
    assert!(approx(result.total_distance, 3.5));
}

#[test]
fn test_same_node_path() {
    let store = city_network();
    let result = dijkstra_find_path(&store, "Harbour", "Harbour", &SearchOptions::default())
        .unwrap();

    assert_eq!(result.path, vec!["Harbour"]);
    assert_eq!(result.total_cost, 0.0);
    assert_eq!(result.total_distance, 0.0);
    assert!(result.legs.is_empty());
}

#[test]
fn test_congestion_multipliers_apply_to_every_leg() {
    let store = city_network();
    for (hour, multiplier) in [(8, 1.35), (17, 1.35), (23, 0.85), (2, 0.85), (12, 1.0)] {
        let result = dijkstra_find_path(&store, "CBD", "Airport", &at_hour(hour)).unwrap();

        assert_eq!(result.multiplier, multiplier, "hour {}", hour);
        for leg in &result.legs {
            assert!(
                approx(leg.effective_cost, leg.base_cost * multiplier),
                "hour {} leg {} -> {}",
                hour,
                leg.from,
                leg.to
            );
        }
        let summed: f64 = result.legs.iter().map(|leg| leg.effective_cost).sum();
        assert!(approx(result.total_cost, summed));
        assert!(approx(result.total_cost, 28.0 * multiplier));
    }
}

#[test]
fn test_congestion_event_in_trace() {
    let store = city_network();
    let result = dijkstra_find_path(&store, "CBD", "Airport", &at_hour(8)).unwrap();

    assert_eq!(
        result.trace.events()[1],
        TraceEvent::Congestion {
            hour: 8,
            band: crate::graph::cost::CongestionBand::Peak,
            multiplier: 1.35
        }
    );
}

#[test]
fn test_result_is_minimal() {
    let store = city_network();
    let nodes: Vec<String> = store.nodes().map(str::to_string).collect();

    for from in &nodes {
        for to in &nodes {
            let expected = brute_force_cost(&store, from, to, 1.0);
            match dijkstra_find_path(&store, from, to, &SearchOptions::default()) {
                Ok(result) => {
                    let expected = expected.expect("brute force found no path");
                    assert!(
                        approx(result.total_cost, expected),
                        "{} -> {}: {} vs {}",
                        from,
                        to,
                        result.total_cost,
                        expected
                    );
                }
                Err(PathError::NoPath { .. }) => assert!(expected.is_none()),
                Err(other) => panic!("unexpected error: {}", other),
            }
        }
    }
}

#[test]
fn test_unknown_endpoint() {
    let store = city_network();
    let err = dijkstra_find_path(&store, "CBD", "Mars", &SearchOptions::default()).unwrap_err();

    match &err {
        PathError::UnknownNode { node, trace } => {
            assert_eq!(node, "Mars");
            assert_eq!(
                trace.events(),
                &[
                    TraceEvent::Start {
                        source: "CBD".to_string()
                    },
                    TraceEvent::BaseCosts,
                    TraceEvent::EndpointMissing {
                        node: "Mars".to_string()
                    }
                ]
            );
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(err.cost(), crate::graph::types::PathCost::Unreachable);

    let err = dijkstra_find_path(&store, "Moon", "CBD", &SearchOptions::default()).unwrap_err();
    assert!(matches!(err, PathError::UnknownNode { ref node, .. } if node == "Moon"));
    let trace = err.trace().unwrap();
    assert_eq!(
        trace.events().first(),
        Some(&TraceEvent::Start {
            source: "Moon".to_string()
        })
    );
    assert_eq!(
        trace.last(),
        Some(&TraceEvent::EndpointMissing {
            node: "Moon".to_string()
        })
    );
    assert!(trace.selected_nodes().is_empty());
}

#[test]
fn test_no_path_drains_frontier_and_skips_stale_entries() {
    let mut store = EdgeStore::new();
    store.add_edge("A", "C", EdgeAttrs::new(1.0, 10.0)).unwrap();
    store.add_edge("A", "B", EdgeAttrs::new(1.0, 1.0)).unwrap();
    store.add_edge("B", "C", EdgeAttrs::new(1.0, 1.0)).unwrap();
    store.add_edge("Z", "A", EdgeAttrs::new(1.0, 1.0)).unwrap();

    let err = dijkstra_find_path(&store, "A", "Z", &SearchOptions::default()).unwrap_err();
    let trace = err.trace().unwrap();

    // C is pushed twice (10 then 2) but selected once
    assert_eq!(trace.selected_nodes(), vec!["A", "B", "C"]);
    assert_eq!(
        trace.last(),
        Some(&TraceEvent::Unreachable {
            source: "A".to_string(),
            destination: "Z".to_string()
        })
    );
    assert!(matches!(err, PathError::NoPath { .. }));
}

#[test]
fn test_settled_limit() {
    let store = city_network();
    let opts = SearchOptions {
        max_settled: Some(2),
        ..Default::default()
    };

    let err = dijkstra_find_path(&store, "CBD", "Airport", &opts).unwrap_err();
    match err {
        PathError::LimitReached { limit, trace, .. } => {
            assert_eq!(limit, 2);
            assert_eq!(trace.selected_nodes(), vec!["CBD", "Station"]);
            assert_eq!(trace.last(), Some(&TraceEvent::LimitReached { limit: 2 }));
        }
        other => panic!("unexpected error: {}", other),
    }

    // A generous limit does not change the answer
    let opts = SearchOptions {
        max_settled: Some(100),
        ..Default::default()
    };
    let result = dijkstra_find_path(&store, "CBD", "Airport", &opts).unwrap();
    assert!(approx(result.total_cost, 28.0));
}

#[test]
fn test_path_is_deterministic() {
    let store = city_network();
    let first = dijkstra_find_path(&store, "CBD", "Airport", &at_hour(17)).unwrap();
    for _ in 0..5 {
        let again = dijkstra_find_path(&store, "CBD", "Airport", &at_hour(17)).unwrap();
        assert_eq!(first, again);
    }
}
