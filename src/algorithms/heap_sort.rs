//! Heap sort tracer
//!
//! The sort runs in two phases:
//!
//! 1. **Build**: sift every internal node, bottom-up, into a max-heap.
//! 2. **Extract**: swap the root with the last live element, shrink the heap by
//!    one and sift the new root down.
//!
//! `heap_size` on every step is the number of leading positions still in the
//! live heap. Positions at or beyond it hold their final sorted value.

use crate::trace::{Trace, TraceStep};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeapAction {
    Compare,
    Swap,
    Heapify,
    Sorted,
}

/// Snapshot of the array during heap sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeapSortStep {
    pub array: Vec<i64>,
    pub action: HeapAction,
    /// Highlighted positions
    pub indices: Vec<usize>,
    pub heap_size: usize,
}

impl HeapSortStep {
    /// Whether `index` lies in the finalized suffix
    pub fn is_sorted_position(&self, index: usize) -> bool {
        index >= self.heap_size && index < self.array.len()
    }
}

impl TraceStep for HeapSortStep {
    fn action_name(&self) -> &'static str {
        match self.action {
            HeapAction::Compare => "compare",
            HeapAction::Swap => "swap",
            HeapAction::Heapify => "heapify",
            HeapAction::Sorted => "sorted",
        }
    }

    fn narrate(&self) -> String {
        let value = |i: usize| {
            self.array
                .get(i)
                .map_or_else(|| "?".to_string(), i64::to_string)
        };
        let values = |indices: &[usize]| {
            indices
                .iter()
                .map(|&i| value(i))
                .collect::<Vec<_>>()
                .join(", ")
        };

        match (self.action, self.indices.as_slice()) {
            (HeapAction::Compare, indices) => {
                format!("Comparing elements: {}", values(indices))
            }
            (HeapAction::Swap, [i, j]) => format!(
                "Swapping {} (index {}) with {} (index {})",
                value(*i),
                i,
                value(*j),
                j
            ),
            (HeapAction::Heapify, []) => {
                format!("Heap shrinks to {} element(s)", self.heap_size)
            }
            (HeapAction::Heapify, [i]) => {
                format!("Index {} satisfies the heap property", i)
            }
            (HeapAction::Heapify, [i, ..]) => format!("Heapifying from index {}", i),
            (HeapAction::Sorted, _) => "Array is now fully sorted!".to_string(),
            (HeapAction::Swap, indices) => format!("Swapping indices {:?}", indices),
        }
    }

    fn estimated_size(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.array.len() * std::mem::size_of::<i64>()
            + self.indices.len() * std::mem::size_of::<usize>()
    }

    fn indices_in_bounds(&self) -> bool {
        let n = self.array.len();
        self.heap_size <= n && self.indices.iter().all(|&i| i < n)
    }
}

/// Records steps against a private working copy of the input
struct HeapSortTracer {
    array: Vec<i64>,
    steps: Vec<HeapSortStep>,
}

impl HeapSortTracer {
    fn record(&mut self, action: HeapAction, indices: Vec<usize>, heap_size: usize) {
        self.steps.push(HeapSortStep {
            array: self.array.clone(),
            action,
            indices,
            heap_size,
        });
    }

    /// Sift the element at `i` down through a heap of `n` elements
    fn heapify(&mut self, n: usize, i: usize) {
        let mut largest = i;
        let left = 2 * i + 1;
        let right = 2 * i + 2;

        if left < n {
            self.record(HeapAction::Compare, vec![i, left], n);
            if self.array[left] > self.array[largest] {
                largest = left;
            }
        }

        if right < n {
            self.record(HeapAction::Compare, vec![i, largest, right], n);
            if self.array[right] > self.array[largest] {
                largest = right;
            }
        }

        if largest != i {
            self.record(HeapAction::Swap, vec![i, largest], n);
            self.array.swap(i, largest);
            self.record(HeapAction::Heapify, vec![i, largest], n);
            self.heapify(n, largest);
        } else {
            self.record(HeapAction::Heapify, vec![i], n);
        }
    }
}

/// Trace a heap sort of `input`. The input slice is left untouched.
pub fn heap_sort(input: &[i64]) -> Trace<HeapSortStep> {
    let mut tracer = HeapSortTracer {
        array: input.to_vec(),
        steps: Vec::new(),
    };
    let n = tracer.array.len();

    for i in (0..n / 2).rev() {
        tracer.heapify(n, i);
    }

    for i in (1..n).rev() {
        tracer.record(HeapAction::Swap, vec![0, i], i + 1);
        tracer.array.swap(0, i);
        tracer.record(HeapAction::Heapify, vec![0, i], i + 1);

        // The boundary element is now final
        tracer.record(HeapAction::Heapify, Vec::new(), i);
        tracer.heapify(i, 0);
    }

    tracer.record(HeapAction::Sorted, Vec::new(), 0);

    tracing::debug!(len = n, steps = tracer.steps.len(), "heap sort traced");
    Trace::from_steps(tracer.steps)
}
