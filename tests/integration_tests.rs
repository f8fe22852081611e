//! Integration tests for carpool-route
//!
//! Library entry points on the sample network and the reference scenarios,
//! plus the binary driven end to end with a temporary graph file.

use carpool_route::{
    classify, load_graph, route, sample_graph, shortest_path, Direction, Graph, NotFoundError,
    RoutePolicy, RoutingError, SegmentClassifier, Uniform, SAMPLE_HOUSES,
};
use std::io::Write;
use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_carpool-route"))
}

/// Every consecutive pair in the route must be a real road
fn assert_connected(graph: &Graph, nodes: &[usize]) {
    for hop in nodes.windows(2) {
        assert!(
            graph.edge_weight(hop[0], hop[1]).is_some(),
            "{} -> {} is not a road",
            hop[0],
            hop[1]
        );
    }
}

#[test]
fn test_detour_beats_direct_road() {
    let graph = load_graph(&[(0, 1, 4), (1, 2, 2), (0, 2, 10)]).unwrap();
    let path = shortest_path(&graph, 0, 2).unwrap();
    assert_eq!(path.nodes, vec![0, 1, 2]);
    assert_eq!(path.cost, 6);
}

#[test]
fn test_isolated_house_has_no_path() {
    let graph = load_graph(&[(0, 1, 4), (1, 2, 2), (0, 2, 10)]).unwrap();
    assert_eq!(
        shortest_path(&graph, 0, 99).unwrap_err(),
        NotFoundError { from: 0, to: 99 }
    );
}

#[test]
fn test_unreachable_waypoint_is_skipped() {
    // House 99 exists but has no road; node list [0, 99, 3]
    let graph =
        Graph::build_with_bound(100, &[(0, 1, 1), (1, 2, 2), (2, 3, 1), (0, 3, 7)]).unwrap();
    let trip = route(&graph, 0, 3, &[99], RoutePolicy::FixedOrder).unwrap();

    assert_eq!(trip.nodes, vec![0, 1, 2, 3]);
    assert_eq!(trip.nodes, shortest_path(&graph, 0, 3).unwrap().nodes);
    assert_eq!(trip.skipped, vec![99]);
}

#[test]
fn test_isolated_house_from_plain_edge_list_is_skipped() {
    // House 99 never appears in an edge, node list [0, 99, 3]
    let graph = load_graph(&[(0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap();
    let trip = route(&graph, 0, 3, &[0, 99, 3], RoutePolicy::FixedOrder).unwrap();

    assert_eq!(trip.nodes, vec![0, 1, 2, 3]);
    assert_eq!(trip.skipped, vec![99]);
    assert_eq!(trip.cost, 3);
}

#[test]
fn test_unknown_start_never_panics() {
    let graph = load_graph(&[(0, 1, 4), (1, 2, 2)]).unwrap();
    assert_eq!(
        shortest_path(&graph, usize::MAX, 0).unwrap_err(),
        NotFoundError { from: usize::MAX, to: 0 }
    );
    assert!(shortest_path(&graph, 1 << 40, 2).is_err());
}

#[test]
fn test_unreachable_waypoint_fails_nearest_policy() {
    let graph = Graph::build_with_bound(100, &[(0, 1, 1), (1, 2, 2), (2, 3, 1)]).unwrap();
    let err = route(&graph, 0, 3, &[99], RoutePolicy::NearestNeighbour).unwrap_err();
    assert_eq!(err, RoutingError::Unreachable(NotFoundError { from: 0, to: 99 }));
}

#[test]
fn test_sample_network_routes_are_valid() {
    let graph = sample_graph().unwrap();
    let waypoints = [12, 5, 27, 33];

    for policy in [RoutePolicy::FixedOrder, RoutePolicy::NearestNeighbour] {
        let trip = route(&graph, 0, 39, &waypoints, policy).unwrap();

        assert_eq!(trip.start(), Some(0));
        assert_eq!(trip.end(), Some(39));
        assert_connected(&graph, &trip.nodes);
        assert_eq!(graph.path_cost(&trip.nodes), Some(trip.cost));
        for w in waypoints {
            assert!(trip.nodes.contains(&w), "{policy:?} misses waypoint {w}");
        }
        assert_eq!(classify(&trip).len(), trip.hop_count());
    }
}

#[test]
fn test_fixed_order_without_waypoints_is_shortest_path() {
    let graph = sample_graph().unwrap();
    for (start, end) in [(0, 39), (7, 32), (16, 23), (38, 1)] {
        let trip = route(&graph, start, end, &[], RoutePolicy::FixedOrder).unwrap();
        let direct = shortest_path(&graph, start, end).unwrap();
        assert_eq!(trip.cost, direct.cost);
        assert_eq!(trip.nodes, direct.nodes);
    }
}

#[test]
fn test_out_and_back_classification() {
    let graph = sample_graph().unwrap();
    // Straight out to a neighbour and back
    let trip = route(&graph, 3, 3, &[4], RoutePolicy::FixedOrder).unwrap();
    assert_eq!(trip.nodes, vec![3, 4, 3]);

    let segments = classify(&trip);
    assert_eq!(segments[0].direction, Direction::Forward);
    assert_eq!(segments[1].direction, Direction::Return);
    assert!(segments.iter().all(|s| s.is_arrow_endpoint));

    let flat = Uniform.classify_route(&trip);
    assert!(flat.iter().all(|s| s.direction == Direction::Forward));
}

#[test]
fn test_request_validation() {
    let graph = sample_graph().unwrap();
    assert!(matches!(
        route(&graph, 5, 5, &[], RoutePolicy::FixedOrder),
        Err(RoutingError::InvalidInput(_))
    ));
    assert_eq!(
        route(&graph, 0, SAMPLE_HOUSES, &[], RoutePolicy::FixedOrder).unwrap_err(),
        RoutingError::NodeOutOfRange {
            node: SAMPLE_HOUSES,
            bound: SAMPLE_HOUSES
        }
    );
}

#[test]
fn test_cli_route_text_output() {
    let output = binary()
        .args(["route", "--start", "0", "--end", "2"])
        .output()
        .expect("Failed to run carpool-route");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Route: 0 -> 1 -> 2\n"), "{stdout}");
    assert!(stdout.contains("Total weight: 6"), "{stdout}");
}

#[test]
fn test_cli_route_json_with_graph_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "nodes": 5, "edges": [[0, 1, 4], [1, 2, 2], [0, 2, 10]] }}"#
    )
    .unwrap();

    let output = binary()
        .arg("--graph")
        .arg(file.path())
        .args(["--format", "json", "route", "-s", "0", "-e", "0", "--via", "2"])
        .output()
        .expect("Failed to run carpool-route");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["route"]["nodes"], serde_json::json!([0, 1, 2, 1, 0]));
    assert_eq!(value["route"]["cost"], 12);
    assert_eq!(value["segments"][3]["direction"], "return");
}

#[test]
fn test_cli_reports_routing_error() {
    let output = binary()
        .args(["route", "--start", "4", "--end", "4"])
        .output()
        .expect("Failed to run carpool-route");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Could not route from 4 to 4"), "{stderr}");
}

#[test]
fn test_cli_info_on_sample_network() {
    let output = binary().arg("info").output().expect("Failed to run carpool-route");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Houses: 40\nRoads: 83\nIsolated houses: 0\n"
    );
}
