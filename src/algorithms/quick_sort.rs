//! Quick sort tracer (median-of-three pivot, Lomuto partition)
//!
//! Each partition of `[low, high]` records, in order:
//!
//! - a `median_selection` step naming `low`, `mid` and `high` when the range has
//!   at least three elements, followed by a `swap` moving the median to `high`
//!   unless it is already there
//! - a `pivot` step for the pivot now sitting at `high`
//! - a `compare` step for every scanned element, and a `swap` whenever an
//!   element no larger than the pivot has to move behind the boundary
//! - a `swap` placing the pivot, when it is not already in place
//! - a `partition` step announcing the pivot's final index
//!
//! Ranges of fewer than two elements record nothing.

use crate::trace::{Trace, TraceStep};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    Pivot,
    Compare,
    Swap,
    Partition,
    MedianSelection,
    Complete,
}

/// Inclusive bounds of the range being partitioned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionRange {
    pub start: usize,
    pub end: usize,
}

impl PartitionRange {
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

/// Snapshot of the array during quick sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickSortStep {
    pub array: Vec<i64>,
    pub action: QuickAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_indices: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap_indices: Option<(usize, usize)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_range: Option<PartitionRange>,
    /// Pivot positions finalized so far, in the order they were finalized
    pub sorted_indices: IndexSet<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_candidates: Option<[usize; 3]>,
    pub description: String,
}

impl TraceStep for QuickSortStep {
    fn action_name(&self) -> &'static str {
        match self.action {
            QuickAction::Pivot => "pivot",
            QuickAction::Compare => "compare",
            QuickAction::Swap => "swap",
            QuickAction::Partition => "partition",
            QuickAction::MedianSelection => "median_selection",
            QuickAction::Complete => "complete",
        }
    }

    fn narrate(&self) -> String {
        self.description.clone()
    }

    fn estimated_size(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.array.len() * std::mem::size_of::<i64>()
            + self.sorted_indices.len() * std::mem::size_of::<usize>()
            + self.description.len()
    }

    fn indices_in_bounds(&self) -> bool {
        let n = self.array.len();
        let range_ok = self
            .partition_range
            .map_or(true, |r| r.start <= r.end && r.end < n);
        let mut indices = self
            .pivot_index
            .into_iter()
            .chain(self.compare_indices.iter().flatten().copied())
            .chain(self.swap_indices.into_iter().flat_map(|(a, b)| [a, b]))
            .chain(self.sorted_indices.iter().copied())
            .chain(self.median_candidates.into_iter().flatten());
        range_ok && indices.all(|i| i < n)
    }
}

/// Fields that vary from step to step; everything else is copied from the
/// tracer state when the step is recorded
#[derive(Default)]
struct StepDetail {
    pivot_index: Option<usize>,
    compare_indices: Option<Vec<usize>>,
    swap_indices: Option<(usize, usize)>,
    median_candidates: Option<[usize; 3]>,
}

struct QuickSortTracer {
    array: Vec<i64>,
    sorted_indices: IndexSet<usize>,
    steps: Vec<QuickSortStep>,
}

impl QuickSortTracer {
    fn record(
        &mut self,
        action: QuickAction,
        range: Option<PartitionRange>,
        detail: StepDetail,
        description: String,
    ) {
        self.steps.push(QuickSortStep {
            array: self.array.clone(),
            action,
            pivot_index: detail.pivot_index,
            compare_indices: detail.compare_indices,
            swap_indices: detail.swap_indices,
            partition_range: range,
            sorted_indices: self.sorted_indices.clone(),
            median_candidates: detail.median_candidates,
            description,
        });
    }

    /// Move the median of `low`, `mid` and `high` to `high`
    fn median_of_three(&mut self, low: usize, high: usize) -> usize {
        let range = Some(PartitionRange { start: low, end: high });
        let mid = (low + high) / 2;
        let candidates = [low, mid, high];

        self.record(
            QuickAction::MedianSelection,
            range,
            StepDetail {
                median_candidates: Some(candidates),
                ..Default::default()
            },
            format!(
                "Selecting median of three: {} (index {}), {} (index {}), {} (index {})",
                self.array[low], low, self.array[mid], mid, self.array[high], high
            ),
        );

        // Stable sort: on equal values the earlier candidate ranks first
        let mut ranked = candidates;
        ranked.sort_by_key(|&i| self.array[i]);
        let median = ranked[1];

        if median != high {
            self.record(
                QuickAction::Swap,
                range,
                StepDetail {
                    swap_indices: Some((median, high)),
                    ..Default::default()
                },
                format!(
                    "Moving median {} to end position for partitioning",
                    self.array[median]
                ),
            );
            self.array.swap(median, high);
        }

        high
    }

    fn partition(&mut self, low: usize, high: usize) -> usize {
        let range = Some(PartitionRange { start: low, end: high });
        let pivot_index = if high - low >= 2 {
            self.median_of_three(low, high)
        } else {
            high
        };
        let pivot = self.array[pivot_index];

        self.record(
            QuickAction::Pivot,
            range,
            StepDetail {
                pivot_index: Some(pivot_index),
                ..Default::default()
            },
            format!("Selected pivot: {} at index {}", pivot, pivot_index),
        );

        // `boundary` is one past the last element known to be <= pivot
        let mut boundary = low;
        for j in low..high {
            self.record(
                QuickAction::Compare,
                range,
                StepDetail {
                    pivot_index: Some(pivot_index),
                    compare_indices: Some(vec![j]),
                    ..Default::default()
                },
                format!("Comparing {} with pivot {}", self.array[j], pivot),
            );

            if self.array[j] <= pivot {
                if boundary != j {
                    self.record(
                        QuickAction::Swap,
                        range,
                        StepDetail {
                            pivot_index: Some(pivot_index),
                            swap_indices: Some((boundary, j)),
                            ..Default::default()
                        },
                        format!(
                            "{} ≤ {}, swapping positions {} and {}",
                            self.array[j], pivot, boundary, j
                        ),
                    );
                    self.array.swap(boundary, j);
                }
                boundary += 1;
            }
        }

        if boundary != high {
            self.record(
                QuickAction::Swap,
                range,
                StepDetail {
                    pivot_index: Some(pivot_index),
                    swap_indices: Some((boundary, high)),
                    ..Default::default()
                },
                format!("Placing pivot {} in correct position", pivot),
            );
            self.array.swap(boundary, high);
        }

        self.sorted_indices.insert(boundary);
        self.record(
            QuickAction::Partition,
            range,
            StepDetail {
                pivot_index: Some(boundary),
                ..Default::default()
            },
            format!(
                "Pivot {} is now in correct position at index {}",
                pivot, boundary
            ),
        );

        boundary
    }

    fn sort(&mut self, low: usize, high: usize) {
        if low < high {
            let pivot = self.partition(low, high);
            if pivot > low {
                self.sort(low, pivot - 1);
            }
            self.sort(pivot + 1, high);
        }
    }
}

/// Trace a quick sort of `input`. The input slice is left untouched.
pub fn quick_sort(input: &[i64]) -> Trace<QuickSortStep> {
    let mut tracer = QuickSortTracer {
        array: input.to_vec(),
        sorted_indices: IndexSet::new(),
        steps: Vec::new(),
    };
    let n = tracer.array.len();

    if n > 1 {
        tracer.sort(0, n - 1);
    }

    tracer.sorted_indices.extend(0..n);
    let whole = n.checked_sub(1).map(|end| PartitionRange { start: 0, end });
    tracer.record(
        QuickAction::Complete,
        whole,
        StepDetail::default(),
        "Array is now completely sorted!".to_string(),
    );

    tracing::debug!(len = n, steps = tracer.steps.len(), "quick sort traced");
    Trace::from_steps(tracer.steps)
}
