//! Binary search tracer
//!
//! One step is recorded per midpoint examined. The step carries the bounds
//! *after* the comparison has been applied, so a `less` step already shows the
//! advanced `left` bound. If the loop runs out of range without a match, a final
//! step with `mid == -1` marks the search as exhausted.

use crate::trace::{Trace, TraceStep};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Outcome of comparing the midpoint element against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    Equal,
    /// The midpoint element is smaller than the target
    Less,
    /// The midpoint element is larger than the target
    Greater,
}

impl Comparison {
    fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Equal => Comparison::Equal,
            Ordering::Less => Comparison::Less,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

/// Snapshot of a binary search after one comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinarySearchStep {
    /// Copy of the searched array
    pub array: Vec<i64>,
    pub target: i64,
    pub left: isize,
    pub right: isize,
    /// Midpoint index, or `-1` on the exhausted step
    pub mid: isize,
    pub found: bool,
    /// `None` only on the exhausted step
    pub comparison: Option<Comparison>,
    /// Every index ruled out so far, in the order it was ruled out
    pub eliminated: IndexSet<usize>,
}

impl BinarySearchStep {
    /// The midpoint index, if this step examined one
    pub fn midpoint(&self) -> Option<usize> {
        usize::try_from(self.mid).ok()
    }

    /// Whether this is the final step of an unsuccessful search
    pub fn is_exhausted(&self) -> bool {
        self.comparison.is_none()
    }
}

impl TraceStep for BinarySearchStep {
    fn action_name(&self) -> &'static str {
        match self.comparison {
            Some(Comparison::Equal) => "equal",
            Some(Comparison::Less) => "less",
            Some(Comparison::Greater) => "greater",
            None => "exhausted",
        }
    }

    fn narrate(&self) -> String {
        let examined = self
            .midpoint()
            .and_then(|i| self.array.get(i))
            .map_or_else(|| "?".to_string(), i64::to_string);

        match self.comparison {
            Some(Comparison::Equal) => format!(
                "array[{}] = {} equals {}: target found",
                self.mid, examined, self.target
            ),
            Some(Comparison::Less) => format!(
                "array[{}] = {} < {}: searching [{}, {}]",
                self.mid, examined, self.target, self.left, self.right
            ),
            Some(Comparison::Greater) => format!(
                "array[{}] = {} > {}: searching [{}, {}]",
                self.mid, examined, self.target, self.left, self.right
            ),
            None => format!("Search range is empty: {} is not present", self.target),
        }
    }

    fn estimated_size(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.array.len() * std::mem::size_of::<i64>()
            + self.eliminated.len() * std::mem::size_of::<usize>()
    }

    fn indices_in_bounds(&self) -> bool {
        let n = self.array.len();
        let mid_ok = match self.midpoint() {
            Some(mid) => mid < n,
            None => self.mid == -1,
        };
        mid_ok && self.eliminated.iter().all(|&i| i < n)
    }
}

/// Trace a binary search for `target` in `array`.
///
/// `array` is assumed to be sorted ascending. Unsorted input still yields a
/// well-formed trace, just not a meaningful one.
pub fn binary_search(array: &[i64], target: i64) -> Trace<BinarySearchStep> {
    let mut steps = Vec::new();
    let mut eliminated = IndexSet::new();

    let mut left: isize = 0;
    let mut right: isize = array.len() as isize - 1;

    while left <= right {
        let mid = (left + right) / 2;
        let comparison = Comparison::from_ordering(array[mid as usize].cmp(&target));

        match comparison {
            Comparison::Equal => {}
            Comparison::Less => {
                eliminated.extend(left as usize..=mid as usize);
                left = mid + 1;
            }
            Comparison::Greater => {
                eliminated.extend(mid as usize..=right as usize);
                right = mid - 1;
            }
        }

        let found = comparison == Comparison::Equal;
        steps.push(BinarySearchStep {
            array: array.to_vec(),
            target,
            left,
            right,
            mid,
            found,
            comparison: Some(comparison),
            eliminated: eliminated.clone(),
        });

        if found {
            tracing::debug!(
                len = array.len(),
                target = target,
                steps = steps.len(),
                "binary search found target"
            );
            return Trace::from_steps(steps);
        }
    }

    steps.push(BinarySearchStep {
        array: array.to_vec(),
        target,
        left,
        right,
        mid: -1,
        found: false,
        comparison: None,
        eliminated,
    });

    tracing::debug!(
        len = array.len(),
        target = target,
        steps = steps.len(),
        "binary search exhausted"
    );
    Trace::from_steps(steps)
}
