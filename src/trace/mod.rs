// Step traces for replay

use crate::algorithms::binary_search::BinarySearchStep;
use crate::algorithms::graph::GraphStep;
use crate::algorithms::heap_sort::HeapSortStep;
use crate::algorithms::quick_sort::QuickSortStep;
use crate::algorithms::Algorithm;
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::Index;
use thiserror::Error;

/// A single recorded instant of an algorithm's state.
///
/// Every step record owns copies of the containers it reports, so a step can be
/// inspected long after the tracer that produced it has returned.
pub trait TraceStep: Clone {
    /// Short tag naming the kind of event (`"compare"`, `"visit"`, ...)
    fn action_name(&self) -> &'static str;

    /// Human-readable narration of this step
    fn narrate(&self) -> String;

    /// Estimate the memory usage of this step in bytes
    fn estimated_size(&self) -> usize;

    /// Whether every index field refers to a position of this step's own array
    fn indices_in_bounds(&self) -> bool;
}

/// Reasons a step sequence cannot form a [`Trace`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("A trace needs at least one step")]
    Empty,

    #[error("Step {0} refers to an index outside its array")]
    IndexOutOfBounds(usize),
}

/// Ordered, non-empty sequence of steps produced by one tracer call.
///
/// Deserialization goes through [`Trace::try_from`], so a decoded trace holds
/// the same guarantees as one built by a tracer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace<S> {
    steps: Vec<S>,
}

impl<S: TraceStep> Trace<S> {
    /// Wrap the steps recorded by a tracer.
    ///
    /// Tracers always record an initial and a terminal step, so `steps` is
    /// never empty.
    pub(crate) fn from_steps(steps: Vec<S>) -> Self {
        debug_assert!(!steps.is_empty(), "a trace always has at least one step");
        Trace { steps }
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty (never true for a trace built by a tracer)
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&S> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<S> {
        self.steps
    }

    /// Rough estimate of the memory held by all steps
    pub fn estimated_size(&self) -> usize {
        self.steps.iter().map(TraceStep::estimated_size).sum()
    }
}

impl<S: TraceStep> TryFrom<Vec<S>> for Trace<S> {
    type Error = TraceError;

    fn try_from(steps: Vec<S>) -> Result<Self, Self::Error> {
        if steps.is_empty() {
            return Err(TraceError::Empty);
        }
        if let Some(bad) = steps.iter().position(|s| !s.indices_in_bounds()) {
            return Err(TraceError::IndexOutOfBounds(bad));
        }
        Ok(Trace { steps })
    }
}

impl<'de, S> Deserialize<'de> for Trace<S>
where
    S: TraceStep + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let steps = Vec::<S>::deserialize(deserializer)?;
        Trace::try_from(steps).map_err(serde::de::Error::custom)
    }
}

impl<S> Index<usize> for Trace<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.steps[index]
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// A trace of any of the supported algorithms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", content = "steps", rename_all = "kebab-case")]
pub enum AlgorithmTrace {
    BinarySearch(Trace<BinarySearchStep>),
    HeapSort(Trace<HeapSortStep>),
    QuickSort(Trace<QuickSortStep>),
    Bfs(Trace<GraphStep>),
    Dfs(Trace<GraphStep>),
}

impl AlgorithmTrace {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AlgorithmTrace::BinarySearch(_) => Algorithm::BinarySearch,
            AlgorithmTrace::HeapSort(_) => Algorithm::HeapSort,
            AlgorithmTrace::QuickSort(_) => Algorithm::QuickSort,
            AlgorithmTrace::Bfs(_) => Algorithm::Bfs,
            AlgorithmTrace::Dfs(_) => Algorithm::Dfs,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AlgorithmTrace::BinarySearch(trace) => trace.len(),
            AlgorithmTrace::HeapSort(trace) => trace.len(),
            AlgorithmTrace::QuickSort(trace) => trace.len(),
            AlgorithmTrace::Bfs(trace) | AlgorithmTrace::Dfs(trace) => trace.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Action tag of the step at `index`, if it exists
    pub fn action_name(&self, index: usize) -> Option<&'static str> {
        match self {
            AlgorithmTrace::BinarySearch(trace) => trace.get(index).map(TraceStep::action_name),
            AlgorithmTrace::HeapSort(trace) => trace.get(index).map(TraceStep::action_name),
            AlgorithmTrace::QuickSort(trace) => trace.get(index).map(TraceStep::action_name),
            AlgorithmTrace::Bfs(trace) | AlgorithmTrace::Dfs(trace) => {
                trace.get(index).map(TraceStep::action_name)
            }
        }
    }

    /// Narration of the step at `index`, if it exists
    pub fn narrate(&self, index: usize) -> Option<String> {
        match self {
            AlgorithmTrace::BinarySearch(trace) => trace.get(index).map(TraceStep::narrate),
            AlgorithmTrace::HeapSort(trace) => trace.get(index).map(TraceStep::narrate),
            AlgorithmTrace::QuickSort(trace) => trace.get(index).map(TraceStep::narrate),
            AlgorithmTrace::Bfs(trace) | AlgorithmTrace::Dfs(trace) => {
                trace.get(index).map(TraceStep::narrate)
            }
        }
    }

    pub fn estimated_size(&self) -> usize {
        match self {
            AlgorithmTrace::BinarySearch(trace) => trace.estimated_size(),
            AlgorithmTrace::HeapSort(trace) => trace.estimated_size(),
            AlgorithmTrace::QuickSort(trace) => trace.estimated_size(),
            AlgorithmTrace::Bfs(trace) | AlgorithmTrace::Dfs(trace) => trace.estimated_size(),
        }
    }
}
