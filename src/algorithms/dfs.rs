//! Depth-first traversal tracer
//!
//! Neighbors are pushed in reverse declaration order so that the first listed
//! neighbor is popped first. Unlike BFS, a neighbor may be pushed while an
//! earlier copy of it is still on the stack; stale copies are discarded when
//! popped. After each visit a `backtrack` step names the node on top of the
//! stack, even when that node turns out to be visited already and is skipped.

use super::graph::{join_names, EdgeTracker, Graph, GraphAction, GraphStep};
use crate::trace::Trace;
use indexmap::IndexSet;
use rustc_hash::FxHashMap;

/// Trace a depth-first traversal of `graph` from `start`.
///
/// A `start` that is not a key of `graph` is visited on its own.
pub fn dfs(graph: &Graph, start: &str) -> Trace<GraphStep> {
    let mut steps = Vec::new();
    let mut visited: IndexSet<String> = IndexSet::new();
    let mut stack: Vec<String> = vec![start.to_string()];
    // Most recent pusher of each node; the copy popped first came from it
    let mut parent: FxHashMap<String, String> = FxHashMap::default();
    let mut edges = EdgeTracker::new(graph);

    steps.push(GraphStep {
        current_node: None,
        visited_nodes: IndexSet::new(),
        processing_nodes: IndexSet::from([start.to_string()]),
        edges: edges.all(),
        action: GraphAction::Visit,
        description: format!(
            "Starting DFS traversal from node {start}. Added {start} to stack."
        ),
        next_node: None,
    });

    while let Some(current) = stack.pop() {
        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());

        if let Some(from) = parent.get(&current) {
            edges.mark(from, &current);
        }

        steps.push(GraphStep {
            current_node: Some(current.clone()),
            visited_nodes: visited.clone(),
            processing_nodes: stack.iter().cloned().collect(),
            edges: edges.traversed(),
            action: GraphAction::Visit,
            description: format!("Visiting node {current}. Marked as visited."),
            next_node: None,
        });

        let mut pushed = Vec::new();
        for neighbor in graph.neighbors(&current).iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor.clone());
                parent.insert(neighbor.clone(), current.clone());
                pushed.push(neighbor.clone());
            }
        }

        if !pushed.is_empty() {
            steps.push(GraphStep {
                current_node: Some(current.clone()),
                visited_nodes: visited.clone(),
                processing_nodes: stack.iter().cloned().collect(),
                edges: edges.traversed(),
                action: GraphAction::Process,
                description: format!(
                    "From {current}, added unvisited neighbors to stack: {}. Stack now contains: [{}]",
                    join_names(&pushed),
                    join_names(&stack)
                ),
                next_node: None,
            });
        }

        if let Some(next) = stack.last() {
            steps.push(GraphStep {
                current_node: None,
                visited_nodes: visited.clone(),
                processing_nodes: stack.iter().cloned().collect(),
                edges: edges.traversed(),
                action: GraphAction::Backtrack,
                description: format!("Backtracking. Next node from stack: {next}"),
                next_node: Some(next.clone()),
            });
        }
    }

    steps.push(GraphStep {
        current_node: None,
        description: format!(
            "DFS traversal complete! Visited {} nodes: [{}]",
            visited.len(),
            join_names(&visited)
        ),
        visited_nodes: visited,
        processing_nodes: IndexSet::new(),
        edges: edges.traversed(),
        action: GraphAction::Complete,
        next_node: None,
    });

    tracing::debug!(
        nodes = graph.node_count(),
        steps = steps.len(),
        "dfs traced"
    );
    Trace::from_steps(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        Graph::from_edges([("A", "B"), ("A", "C"), ("B", "D")])
    }

    fn visit_order(trace: &Trace<GraphStep>) -> Vec<String> {
        trace
            .iter()
            .filter(|s| s.action == GraphAction::Visit)
            .filter_map(|s| s.current_node.clone())
            .collect()
    }

    #[test]
    fn test_visit_order() {
        let trace = dfs(&sample(), "A");

        assert_eq!(visit_order(&trace), vec!["A", "B", "D", "C"]);
        let last = trace.last().unwrap();
        assert_eq!(last.action, GraphAction::Complete);
        assert_eq!(last.visited_nodes.len(), 4);
        assert!(last.processing_nodes.is_empty());
    }

    #[test]
    fn test_reversed_push() {
        let trace = dfs(&sample(), "A");
        let process = &trace[2];

        assert_eq!(process.action, GraphAction::Process);
        assert!(process.description.contains("stack: C, B"));
        assert_eq!(
            process.processing_nodes.iter().cloned().collect::<Vec<_>>(),
            vec!["C", "B"]
        );
    }

    #[test]
    fn test_backtrack_names_stack_top() {
        let trace = dfs(&sample(), "A");
        let backtracks: Vec<_> = trace
            .iter()
            .filter(|s| s.action == GraphAction::Backtrack)
            .map(|s| s.next_node.clone().unwrap())
            .collect();

        // After A the top is B; after B it is D; after D it is C.
        assert_eq!(backtracks, vec!["B", "D", "C"]);
        assert!(trace
            .iter()
            .filter(|s| s.action == GraphAction::Backtrack)
            .all(|s| s.current_node.is_none()));
    }

    #[test]
    fn test_duplicate_stack_entries_are_kept() {
        // C is pushed by A and again by B, so a stale copy stays on the stack.
        let graph = Graph::from_edges([("A", "B"), ("A", "C"), ("B", "C")]);
        let trace = dfs(&graph, "A");

        assert_eq!(visit_order(&trace), vec!["A", "B", "C"]);

        // After C is visited the stale copy of C is still on the stack, so a
        // backtrack step announces a node that will be skipped.
        let after_c: Vec<_> = trace
            .iter()
            .skip_while(|s| s.current_node.as_deref() != Some("C"))
            .map(|s| s.action)
            .collect();
        assert_eq!(
            after_c,
            vec![GraphAction::Visit, GraphAction::Backtrack, GraphAction::Complete]
        );
        let stale = &trace[trace.len() - 2];
        assert_eq!(stale.next_node.as_deref(), Some("C"));
        assert!(stale.visited_nodes.contains("C"));
    }

    #[test]
    fn test_tree_edges_use_latest_parent() {
        let graph = Graph::from_edges([("A", "B"), ("A", "C"), ("B", "C")]);
        let trace = dfs(&graph, "A");
        let pairs: Vec<_> = trace
            .last()
            .unwrap()
            .edges
            .iter()
            .map(|e| (e.from.clone(), e.to.clone()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("A".to_string(), "B".to_string()),
                ("B".to_string(), "C".to_string())
            ]
        );
    }

    #[test]
    fn test_missing_start() {
        let trace = dfs(&sample(), "Z");

        assert_eq!(trace.len(), 3);
        assert_eq!(visit_order(&trace), vec!["Z"]);
    }

    #[test]
    fn test_cycle_terminates() {
        let graph = Graph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]);
        let trace = dfs(&graph, "A");

        assert_eq!(visit_order(&trace), vec!["A", "B", "C"]);
    }
}
