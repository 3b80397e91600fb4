//! Directed graphs and the step record shared by the BFS and DFS tracers

use crate::trace::TraceStep;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Adjacency mapping from node identifier to its ordered neighbor list.
///
/// Keys keep their insertion order, which fixes the order of
/// [`Graph::edges`] and therefore of every edge list in a trace. Numeric
/// names get no special treatment: edges `2,1` then `0,2` list node `2`'s
/// edges before node `0`'s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: IndexMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(from, to)` pairs.
    ///
    /// Both endpoints become keys in first-seen order; `to` is appended to
    /// `from`'s neighbor list.
    pub fn from_edges<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut graph = Graph::new();
        for (from, to) in pairs {
            graph.add_edge(from, to);
        }
        graph
    }

    pub fn add_node(&mut self, node: impl Into<String>) {
        self.adjacency.entry(node.into()).or_default();
    }

    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let from = from.into();
        let to = to.into();
        self.add_node(from.clone());
        self.add_node(to.clone());
        self.adjacency.entry(from).or_default().push(to);
    }

    /// Neighbors of `node` in declaration order; empty for unknown nodes
    pub fn neighbors(&self, node: &str) -> &[String] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Every edge of the graph, grouped by source node in key order
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .flat_map(|(from, neighbors)| {
                neighbors.iter().map(move |to| Edge {
                    from: from.clone(),
                    to: to.clone(),
                })
            })
            .collect()
    }
}

impl From<IndexMap<String, Vec<String>>> for Graph {
    fn from(adjacency: IndexMap<String, Vec<String>>) -> Self {
        Graph { adjacency }
    }
}

/// A directed edge `from -> to`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphAction {
    Visit,
    Process,
    Backtrack,
    Complete,
}

/// Snapshot of a graph traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStep {
    /// Node being visited; `None` on framing and backtrack steps
    pub current_node: Option<String>,
    pub visited_nodes: IndexSet<String>,
    /// Frontier contents (queue or stack) with duplicates collapsed
    pub processing_nodes: IndexSet<String>,
    /// Traversed edges, or every edge on the opening step
    pub edges: Vec<Edge>,
    pub action: GraphAction,
    pub description: String,
    /// Top of the DFS stack, set only on backtrack steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_node: Option<String>,
}

impl TraceStep for GraphStep {
    fn action_name(&self) -> &'static str {
        match self.action {
            GraphAction::Visit => "visit",
            GraphAction::Process => "process",
            GraphAction::Backtrack => "backtrack",
            GraphAction::Complete => "complete",
        }
    }

    fn narrate(&self) -> String {
        self.description.clone()
    }

    fn estimated_size(&self) -> usize {
        let names: usize = self
            .visited_nodes
            .iter()
            .chain(self.processing_nodes.iter())
            .map(String::len)
            .sum();
        let edges: usize = self.edges.iter().map(|e| e.from.len() + e.to.len()).sum();
        std::mem::size_of::<Self>() + names + edges + self.description.len()
    }

    /// Graph steps name nodes rather than positions
    fn indices_in_bounds(&self) -> bool {
        true
    }
}

/// Bookkeeping shared by both traversals: the full edge list and the edges
/// marked as traversed so far.
pub(crate) struct EdgeTracker {
    all: Vec<Edge>,
    used: FxHashSet<Edge>,
}

impl EdgeTracker {
    pub(crate) fn new(graph: &Graph) -> Self {
        EdgeTracker {
            all: graph.edges(),
            used: FxHashSet::default(),
        }
    }

    pub(crate) fn all(&self) -> Vec<Edge> {
        self.all.clone()
    }

    pub(crate) fn mark(&mut self, from: &str, to: &str) {
        self.used.insert(Edge {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    /// Traversed edges, in the order of the full edge list
    pub(crate) fn traversed(&self) -> Vec<Edge> {
        self.all
            .iter()
            .filter(|e| self.used.contains(*e))
            .cloned()
            .collect()
    }
}

pub(crate) fn join_names<'a>(names: impl IntoIterator<Item = &'a String>) -> String {
    names
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
