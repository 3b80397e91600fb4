// Property tests over random arrays and graphs

use algoviz::algorithms::bfs::bfs;
use algoviz::algorithms::binary_search::{binary_search, Comparison};
use algoviz::algorithms::dfs::dfs;
use algoviz::algorithms::graph::{Graph, GraphAction};
use algoviz::algorithms::heap_sort::{heap_sort, HeapAction};
use algoviz::algorithms::quick_sort::{quick_sort, QuickAction};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use std::collections::{BTreeSet, VecDeque};

fn small_array() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..16)
}

fn sorted_array() -> impl Strategy<Value = Vec<i64>> {
    small_array().prop_map(|mut v| {
        v.sort();
        v
    })
}

/// Graphs over nodes `n0..n5`, plus a start node that may have no edges
fn graph_and_start() -> impl Strategy<Value = (Graph, String)> {
    (prop::collection::vec((0u8..6, 0u8..6), 0..14), 0u8..6).prop_map(|(pairs, start)| {
        let graph = Graph::from_edges(
            pairs
                .into_iter()
                .map(|(a, b)| (format!("n{}", a), format!("n{}", b))),
        );
        (graph, format!("n{}", start))
    })
}

fn reachable(graph: &Graph, start: &str) -> BTreeSet<String> {
    let mut seen = BTreeSet::from([start.to_string()]);
    let mut pending = vec![start.to_string()];
    while let Some(node) = pending.pop() {
        for next in graph.neighbors(&node) {
            if seen.insert(next.clone()) {
                pending.push(next.clone());
            }
        }
    }
    seen
}

/// Textbook BFS: mark on enqueue
fn reference_bfs_order(graph: &Graph, start: &str) -> Vec<String> {
    let mut order = Vec::new();
    let mut seen = BTreeSet::from([start.to_string()]);
    let mut queue = VecDeque::from([start.to_string()]);
    while let Some(node) = queue.pop_front() {
        order.push(node.clone());
        for next in graph.neighbors(&node) {
            if seen.insert(next.clone()) {
                queue.push_back(next.clone());
            }
        }
    }
    order
}

/// Stack simulation returning the visit order and the stack top after each visit
fn reference_dfs(graph: &Graph, start: &str) -> (Vec<String>, Vec<String>) {
    let mut order = Vec::new();
    let mut tops = Vec::new();
    let mut stack = vec![start.to_string()];
    while let Some(node) = stack.pop() {
        if order.contains(&node) {
            continue;
        }
        order.push(node.clone());
        for next in graph.neighbors(&node).iter().rev() {
            if !order.contains(next) {
                stack.push(next.clone());
            }
        }
        if let Some(top) = stack.last() {
            tops.push(top.clone());
        }
    }
    (order, tops)
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn binary_search_finds_present_targets(array in sorted_array(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!array.is_empty());
        let target = array[pick.index(array.len())];

        let trace = binary_search(&array, target);
        let last = trace.last().unwrap();

        prop_assert!(last.found);
        prop_assert_eq!(last.comparison, Some(Comparison::Equal));
        prop_assert_eq!(array[last.mid as usize], target);
        prop_assert_eq!(trace.iter().filter(|s| s.found).count(), 1);
    }

    #[test]
    fn binary_search_reports_absent_targets(array in sorted_array(), target in -60i64..60) {
        prop_assume!(!array.contains(&target));

        let trace = binary_search(&array, target);
        let last = trace.last().unwrap();

        prop_assert_eq!(last.mid, -1);
        prop_assert!(!last.found);
        prop_assert!(last.comparison.is_none());
        // Every index ends up ruled out
        prop_assert_eq!(last.eliminated.len(), array.len());
    }

    #[test]
    fn binary_search_eliminated_sets_grow(array in sorted_array(), target in -60i64..60) {
        let trace = binary_search(&array, target);

        for pair in trace.as_slice().windows(2) {
            prop_assert!(pair[0].eliminated.is_subset(&pair[1].eliminated));
        }
        for step in &trace {
            prop_assert!(step.eliminated.iter().all(|&i| i < array.len()));
            match step.midpoint() {
                Some(mid) => prop_assert!(mid < step.array.len()),
                None => prop_assert_eq!(step.mid, -1),
            }
        }
    }

    #[test]
    fn heap_sort_sorts_and_finalizes_suffix(array in small_array()) {
        let mut expected = array.clone();
        expected.sort();

        let trace = heap_sort(&array);
        let last = trace.last().unwrap();
        prop_assert_eq!(last.action, HeapAction::Sorted);
        prop_assert_eq!(&last.array, &expected);

        for step in &trace {
            prop_assert!(step.heap_size <= array.len());
            prop_assert!(step.indices.iter().all(|&i| i < array.len()));
            for i in step.heap_size..array.len() {
                prop_assert_eq!(step.array[i], expected[i]);
            }
        }
        for pair in trace.as_slice().windows(2) {
            prop_assert!(pair[1].heap_size <= pair[0].heap_size);
        }
    }

    #[test]
    fn quick_sort_sorts_within_ranges(array in small_array()) {
        let mut expected = array.clone();
        expected.sort();

        let trace = quick_sort(&array);
        let last = trace.last().unwrap();
        prop_assert_eq!(last.action, QuickAction::Complete);
        prop_assert_eq!(&last.array, &expected);
        let sorted: BTreeSet<usize> = last.sorted_indices.iter().copied().collect();
        prop_assert_eq!(sorted, (0..array.len()).collect::<BTreeSet<_>>());

        for step in trace.iter().filter(|s| s.action == QuickAction::Swap) {
            let (a, b) = step.swap_indices.unwrap();
            let range = step.partition_range.unwrap();
            prop_assert_ne!(a, b);
            prop_assert!(range.contains(a) && range.contains(b));
        }

        for step in &trace {
            let n = step.array.len();
            prop_assert!(step.pivot_index.map_or(true, |p| p < n));
            prop_assert!(step.compare_indices.iter().flatten().all(|&i| i < n));
            prop_assert!(step.median_candidates.iter().flatten().all(|&i| i < n));
            prop_assert!(step.swap_indices.map_or(true, |(a, b)| a < n && b < n));
            prop_assert!(step.sorted_indices.iter().all(|&i| i < n));
            if let Some(range) = step.partition_range {
                prop_assert!(range.start <= range.end && range.end < n);
            }
        }
    }

    #[test]
    fn arrays_change_only_through_announced_swaps(array in small_array()) {
        let heap = heap_sort(&array);
        for pair in heap.as_slice().windows(2) {
            let mut expected = pair[0].array.clone();
            if pair[0].action == HeapAction::Swap {
                expected.swap(pair[0].indices[0], pair[0].indices[1]);
            }
            prop_assert_eq!(&pair[1].array, &expected);
        }

        let quick = quick_sort(&array);
        for pair in quick.as_slice().windows(2) {
            let mut expected = pair[0].array.clone();
            if let Some((a, b)) = pair[0].swap_indices {
                expected.swap(a, b);
            }
            prop_assert_eq!(&pair[1].array, &expected);
        }
    }

    #[test]
    fn bfs_matches_fifo_traversal((graph, start) in graph_and_start()) {
        let trace = bfs(&graph, &start);

        let order: Vec<String> = trace
            .iter()
            .filter(|s| s.action == GraphAction::Visit)
            .filter_map(|s| s.current_node.clone())
            .collect();
        prop_assert_eq!(order, reference_bfs_order(&graph, &start));

        let last = trace.last().unwrap();
        let visited: BTreeSet<String> = last.visited_nodes.iter().cloned().collect();
        prop_assert_eq!(visited, reachable(&graph, &start));

        for step in &trace {
            prop_assert!(step.processing_nodes.iter().all(|n| !step.visited_nodes.contains(n)));
        }
    }

    #[test]
    fn dfs_visits_reachable_nodes_and_names_stack_top((graph, start) in graph_and_start()) {
        let trace = dfs(&graph, &start);
        let (expected_order, expected_tops) = reference_dfs(&graph, &start);

        let order: Vec<String> = trace
            .iter()
            .filter(|s| s.action == GraphAction::Visit)
            .filter_map(|s| s.current_node.clone())
            .collect();
        prop_assert_eq!(order, expected_order);

        let tops: Vec<String> = trace
            .iter()
            .filter(|s| s.action == GraphAction::Backtrack)
            .filter_map(|s| s.next_node.clone())
            .collect();
        prop_assert_eq!(tops, expected_tops);

        let visited: BTreeSet<String> = trace.last().unwrap().visited_nodes.iter().cloned().collect();
        prop_assert_eq!(visited, reachable(&graph, &start));
    }

    #[test]
    fn visited_nodes_never_shrink((graph, start) in graph_and_start()) {
        for trace in [bfs(&graph, &start), dfs(&graph, &start)] {
            for pair in trace.as_slice().windows(2) {
                prop_assert!(
                    pair[0].visited_nodes.is_subset(&pair[1].visited_nodes),
                    "{:?} then {:?}",
                    pair[0].visited_nodes,
                    pair[1].visited_nodes
                );
            }
        }
    }

    #[test]
    fn tracers_are_deterministic(array in small_array(), (graph, start) in graph_and_start()) {
        prop_assert_eq!(heap_sort(&array), heap_sort(&array));
        prop_assert_eq!(quick_sort(&array), quick_sort(&array));
        prop_assert_eq!(bfs(&graph, &start), bfs(&graph, &start));
        prop_assert_eq!(dfs(&graph, &start), dfs(&graph, &start));
    }
}
