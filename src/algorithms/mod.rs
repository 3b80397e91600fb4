//! Step-trace generators
//!
//! Five independent tracers, each a pure function from a problem instance to a
//! [`Trace`](crate::trace::Trace):
//!
//! - [`binary_search`]: midpoint bisection over a sorted array
//! - [`heap_sort`]: max-heap build and extraction
//! - [`quick_sort`]: median-of-three pivot with Lomuto partitioning
//! - [`bfs`] / [`dfs`]: graph traversals over a [`graph::Graph`]
//!
//! # Snapshot Model
//!
//! Tracers run the whole algorithm eagerly against a private copy of the input
//! and append a step at every comparison, swap, partition, visit and backtrack.
//! Each step owns a copy of the containers it reports, so a trace can be
//! replayed in any order without re-running the algorithm.

pub mod bfs;
pub mod binary_search;
pub mod dfs;
pub mod graph;
pub mod heap_sort;
pub mod quick_sort;

use crate::trace::AlgorithmTrace;
use graph::Graph;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The supported algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    BinarySearch,
    HeapSort,
    QuickSort,
    Bfs,
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BinarySearch,
        Algorithm::HeapSort,
        Algorithm::QuickSort,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    /// Stable identifier used on the command line and in JSON output
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::BinarySearch => "binary-search",
            Algorithm::HeapSort => "heap-sort",
            Algorithm::QuickSort => "quick-sort",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::HeapSort => "Heap Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::Bfs => "Breadth-First Search",
            Algorithm::Dfs => "Depth-First Search",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Algorithm::BinarySearch => "Find an element in a sorted array",
            Algorithm::HeapSort => "Sort using a binary heap structure",
            Algorithm::QuickSort => "Efficient divide-and-conquer sorting algorithm",
            Algorithm::Bfs => "Traverse a graph breadth-first",
            Algorithm::Dfs => "Traverse a graph depth-first",
        }
    }

    /// Whether the algorithm works on an adjacency mapping rather than an array
    pub fn is_graph(self) -> bool {
        matches!(self, Algorithm::Bfs | Algorithm::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized algorithm identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}'")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// A fully parsed problem instance, ready to be traced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    BinarySearch { array: Vec<i64>, target: i64 },
    HeapSort { array: Vec<i64> },
    QuickSort { array: Vec<i64> },
    Bfs { graph: Graph, start: String },
    Dfs { graph: Graph, start: String },
}

impl Problem {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Problem::BinarySearch { .. } => Algorithm::BinarySearch,
            Problem::HeapSort { .. } => Algorithm::HeapSort,
            Problem::QuickSort { .. } => Algorithm::QuickSort,
            Problem::Bfs { .. } => Algorithm::Bfs,
            Problem::Dfs { .. } => Algorithm::Dfs,
        }
    }

    /// Run the matching tracer
    pub fn trace(&self) -> AlgorithmTrace {
        let _span = tracing::debug_span!("trace", algorithm = self.algorithm().id()).entered();

        match self {
            Problem::BinarySearch { array, target } => {
                AlgorithmTrace::BinarySearch(binary_search::binary_search(array, *target))
            }
            Problem::HeapSort { array } => AlgorithmTrace::HeapSort(heap_sort::heap_sort(array)),
            Problem::QuickSort { array } => {
                AlgorithmTrace::QuickSort(quick_sort::quick_sort(array))
            }
            Problem::Bfs { graph, start } => AlgorithmTrace::Bfs(bfs::bfs(graph, start)),
            Problem::Dfs { graph, start } => AlgorithmTrace::Dfs(dfs::dfs(graph, start)),
        }
    }
}
