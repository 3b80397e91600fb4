//! Breadth-first traversal tracer
//!
//! Nodes move through `unvisited -> queued -> visited`. A node already waiting
//! in the queue is never enqueued a second time.

use super::graph::{join_names, EdgeTracker, Graph, GraphAction, GraphStep};
use crate::trace::Trace;
use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Trace a breadth-first traversal of `graph` from `start`.
///
/// A `start` that is not a key of `graph` is visited on its own.
pub fn bfs(graph: &Graph, start: &str) -> Trace<GraphStep> {
    let mut steps = Vec::new();
    let mut visited: IndexSet<String> = IndexSet::new();
    let mut queue: VecDeque<String> = VecDeque::from([start.to_string()]);
    let mut parent: FxHashMap<String, String> = FxHashMap::default();
    let mut edges = EdgeTracker::new(graph);

    steps.push(GraphStep {
        current_node: None,
        visited_nodes: IndexSet::new(),
        processing_nodes: IndexSet::from([start.to_string()]),
        edges: edges.all(),
        action: GraphAction::Visit,
        description: format!(
            "Starting BFS traversal from node {start}. Added {start} to queue."
        ),
        next_node: None,
    });

    while let Some(current) = queue.pop_front() {
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
            processing_nodes: queue.iter().cloned().collect(),
            edges: edges.traversed(),
            action: GraphAction::Visit,
            description: format!("Visiting node {current}. Marked as visited."),
            next_node: None,
        });

        let mut discovered = Vec::new();
        for neighbor in graph.neighbors(&current) {
            if !visited.contains(neighbor) && !queue.contains(neighbor) {
                queue.push_back(neighbor.clone());
                parent.insert(neighbor.clone(), current.clone());
                discovered.push(neighbor.clone());
            }
        }

        if !discovered.is_empty() {
            steps.push(GraphStep {
                current_node: Some(current.clone()),
                visited_nodes: visited.clone(),
                processing_nodes: queue.iter().cloned().collect(),
                edges: edges.traversed(),
                action: GraphAction::Process,
                description: format!(
                    "From {current}, added unvisited neighbors to queue: {}. Queue now contains: [{}]",
                    join_names(&discovered),
                    join_names(&queue)
                ),
                next_node: None,
            });
        }
    }

    steps.push(GraphStep {
        current_node: None,
        description: format!(
            "BFS traversal complete! Visited {} nodes: [{}]",
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
        "bfs traced"
    );
    Trace::from_steps(steps)
}
