// End-to-end scenarios: text input through tracer to final step

use algoviz::algorithms::binary_search::{binary_search, Comparison};
use algoviz::algorithms::bfs::bfs;
use algoviz::algorithms::dfs::dfs;
use algoviz::algorithms::graph::{Graph, GraphAction, GraphStep};
use algoviz::algorithms::heap_sort::heap_sort;
use algoviz::algorithms::quick_sort::quick_sort;
use algoviz::algorithms::{Algorithm, Problem};
use algoviz::input::{build_problem, InputError, RawParams};
use algoviz::trace::{AlgorithmTrace, Trace};

fn sample_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_edge("A", "B");
    graph.add_edge("A", "C");
    graph.add_edge("B", "D");
    graph
}

fn visit_order(trace: &Trace<GraphStep>) -> Vec<&str> {
    trace
        .iter()
        .filter(|s| s.action == GraphAction::Visit)
        .filter_map(|s| s.current_node.as_deref())
        .collect()
}

#[test]
fn test_binary_search_found() {
    let trace = binary_search(&[1, 3, 5, 7, 9], 7);
    let last = trace.last().unwrap();

    assert_eq!(last.mid, 3);
    assert!(last.found);
    assert_eq!(last.comparison, Some(Comparison::Equal));
}

#[test]
fn test_binary_search_absent() {
    let trace = binary_search(&[2, 4, 6], 5);
    let last = trace.last().unwrap();

    assert_eq!(last.mid, -1);
    assert!(!last.found);
    assert_eq!(last.comparison, None);
}

#[test]
fn test_heap_sort_example() {
    let trace = heap_sort(&[5, 3, 8, 1]);
    assert_eq!(trace.last().unwrap().array, vec![1, 3, 5, 8]);
}

#[test]
fn test_quick_sort_example() {
    let trace = quick_sort(&[3, 1, 2]);
    let last = trace.last().unwrap();

    assert_eq!(last.array, vec![1, 2, 3]);
    let mut sorted: Vec<usize> = last.sorted_indices.iter().copied().collect();
    sorted.sort();
    assert_eq!(sorted, vec![0, 1, 2]);
}

#[test]
fn test_bfs_example() {
    let trace = bfs(&sample_graph(), "A");

    assert_eq!(visit_order(&trace), vec!["A", "B", "C", "D"]);
    let visited: Vec<&str> = trace
        .last()
        .unwrap()
        .visited_nodes
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(visited, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_dfs_example() {
    let trace = dfs(&sample_graph(), "A");
    assert_eq!(visit_order(&trace), vec!["A", "B", "D", "C"]);
}

#[test]
fn test_opening_graph_step_lists_every_edge() {
    let trace = dfs(&sample_graph(), "A");
    let first = &trace[0];

    assert!(first.current_node.is_none());
    assert!(first.visited_nodes.is_empty());
    assert_eq!(first.edges.len(), 3);
    assert!(first.processing_nodes.contains("A"));
}

#[test]
fn test_text_input_to_trace() {
    let params = RawParams {
        array: Some("9, 1, 7, 3"),
        target: Some("7"),
        ..Default::default()
    };
    let problem = build_problem(Algorithm::BinarySearch, &params).unwrap();

    // Sorted before searching
    assert_eq!(
        problem,
        Problem::BinarySearch {
            array: vec![1, 3, 7, 9],
            target: 7
        }
    );

    let trace = problem.trace();
    assert_eq!(trace.algorithm(), Algorithm::BinarySearch);
    match &trace {
        AlgorithmTrace::BinarySearch(steps) => assert!(steps.last().unwrap().found),
        other => panic!("unexpected trace {:?}", other.algorithm()),
    }
}

#[test]
fn test_edge_text_to_traversal() {
    let params = RawParams {
        edges: Some("A,B\nA,C\nB,D"),
        start: Some("A"),
        ..Default::default()
    };
    let problem = build_problem(Algorithm::Dfs, &params).unwrap();
    let trace = problem.trace();

    let narration: Vec<String> = (0..trace.len()).filter_map(|i| trace.narrate(i)).collect();
    assert_eq!(narration.len(), trace.len());
    assert!(narration[0].contains("Starting DFS traversal from node A"));
    assert!(narration.last().unwrap().contains("Visited 4 nodes"));
}

#[test]
fn test_invalid_input_is_rejected_before_tracing() {
    let params = RawParams {
        array: Some("1, two, 3"),
        ..Default::default()
    };

    let err = build_problem(Algorithm::HeapSort, &params).unwrap_err();
    assert!(matches!(err, InputError::InvalidNumber { .. }));

    let err = build_problem(Algorithm::Bfs, &RawParams::default()).unwrap_err();
    assert!(matches!(err, InputError::MissingParameter { .. }));
}

#[test]
fn test_tracers_are_deterministic() {
    let graph = sample_graph();

    assert_eq!(heap_sort(&[4, 1, 3]), heap_sort(&[4, 1, 3]));
    assert_eq!(quick_sort(&[4, 1, 3, 3]), quick_sort(&[4, 1, 3, 3]));
    assert_eq!(binary_search(&[1, 2, 3], 3), binary_search(&[1, 2, 3], 3));
    assert_eq!(bfs(&graph, "A"), bfs(&graph, "A"));
    assert_eq!(dfs(&graph, "A"), dfs(&graph, "A"));
}
