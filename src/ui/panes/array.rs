//! Array pane for binary search, heap sort and quick sort
//!
//! Each element is drawn as a fixed-width cell coloured by its role in the
//! current step. Below the values are the indices and a marker row
//! (`L`/`M`/`R` bounds for binary search, `[`/`]`/`P` for quick sort
//! partitions). Cells wrap onto further rows when the pane is too narrow.

use super::utils::pane_block;
use crate::algorithms::binary_search::BinarySearchStep;
use crate::algorithms::heap_sort::{HeapAction, HeapSortStep};
use crate::algorithms::quick_sort::QuickSortStep;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What a cell means in the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    Normal,
    /// Inside the current search bounds, partition range or live heap
    Active,
    Eliminated,
    Midpoint,
    Found,
    Compared,
    Swapped,
    Pivot,
    Candidate,
    Sorted,
}

impl CellRole {
    fn style(self) -> Style {
        let badge = |bg: Color| {
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        };
        match self {
            CellRole::Normal => Style::default().fg(DEFAULT_THEME.fg),
            CellRole::Active => Style::default()
                .fg(DEFAULT_THEME.fg)
                .bg(DEFAULT_THEME.current_line_bg),
            CellRole::Eliminated => Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::CROSSED_OUT),
            CellRole::Midpoint => badge(DEFAULT_THEME.primary),
            CellRole::Found => badge(DEFAULT_THEME.success),
            CellRole::Compared => badge(DEFAULT_THEME.compare),
            CellRole::Swapped => badge(DEFAULT_THEME.error),
            CellRole::Pivot => badge(DEFAULT_THEME.pivot),
            CellRole::Candidate => badge(DEFAULT_THEME.candidate),
            CellRole::Sorted => Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Everything the array pane needs from one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayView<'a> {
    pub values: &'a [i64],
    pub roles: Vec<CellRole>,
    /// Short label shown under each index (may be empty)
    pub markers: Vec<String>,
}

impl<'a> ArrayView<'a> {
    fn new(values: &'a [i64], base: CellRole) -> Self {
        ArrayView {
            values,
            roles: vec![base; values.len()],
            markers: vec![String::new(); values.len()],
        }
    }

    fn set(&mut self, index: usize, role: CellRole) {
        if let Some(slot) = self.roles.get_mut(index) {
            *slot = role;
        }
    }

    fn mark(&mut self, index: usize, marker: &str) {
        if let Some(slot) = self.markers.get_mut(index) {
            slot.push_str(marker);
        }
    }
}

pub fn binary_search_view(step: &BinarySearchStep) -> ArrayView<'_> {
    let mut view = ArrayView::new(&step.array, CellRole::Normal);

    if step.left <= step.right {
        for i in step.left..=step.right {
            view.set(i as usize, CellRole::Active);
        }
    }
    for &i in &step.eliminated {
        view.set(i, CellRole::Eliminated);
    }
    if let Ok(left) = usize::try_from(step.left) {
        view.mark(left, "L");
    }
    if let Some(mid) = step.midpoint() {
        view.set(
            mid,
            if step.found {
                CellRole::Found
            } else {
                CellRole::Midpoint
            },
        );
        view.mark(mid, "M");
    }
    if let Ok(right) = usize::try_from(step.right) {
        view.mark(right, "R");
    }

    view
}

pub fn heap_sort_view(step: &HeapSortStep) -> ArrayView<'_> {
    let mut view = ArrayView::new(&step.array, CellRole::Active);

    for i in step.heap_size..step.array.len() {
        view.set(i, CellRole::Sorted);
    }
    let role = match step.action {
        HeapAction::Compare => CellRole::Compared,
        HeapAction::Swap => CellRole::Swapped,
        HeapAction::Heapify => CellRole::Candidate,
        HeapAction::Sorted => CellRole::Sorted,
    };
    for &i in &step.indices {
        view.set(i, role);
    }
    if step.heap_size > 0 {
        view.mark(step.heap_size - 1, "|");
    }

    view
}

pub fn quick_sort_view(step: &QuickSortStep) -> ArrayView<'_> {
    let mut view = ArrayView::new(&step.array, CellRole::Normal);

    if let Some(range) = step.partition_range {
        for i in range.start..=range.end {
            view.set(i, CellRole::Active);
        }
        view.mark(range.start, "[");
        view.mark(range.end, "]");
    }
    for &i in &step.sorted_indices {
        view.set(i, CellRole::Sorted);
    }
    for &i in step.median_candidates.iter().flatten() {
        view.set(i, CellRole::Candidate);
    }
    for &i in step.compare_indices.iter().flatten() {
        view.set(i, CellRole::Compared);
    }
    if let Some((a, b)) = step.swap_indices {
        view.set(a, CellRole::Swapped);
        view.set(b, CellRole::Swapped);
    }
    if let Some(pivot) = step.pivot_index {
        if step.swap_indices.map_or(true, |(a, b)| a != pivot && b != pivot) {
            view.set(pivot, CellRole::Pivot);
        }
        view.mark(pivot, "P");
    }

    view
}

/// Render the array pane
pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    view: &ArrayView<'_>,
    is_focused: bool,
) {
    let block = pane_block(title, is_focused);

    if view.values.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let content_width = area.width.saturating_sub(2).max(1) as usize; // borders
    let digits = view
        .values
        .iter()
        .map(|v| v.to_string().len())
        .chain(std::iter::once(view.values.len().to_string().len()))
        .max()
        .unwrap_or(1);
    let cell_width = digits + 2;
    // One space between cells
    let per_row = (content_width / (cell_width + 1)).max(1);

    let index_style = Style::default().fg(DEFAULT_THEME.comment);
    let marker_style = Style::default()
        .fg(DEFAULT_THEME.secondary)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for start in (0..view.values.len()).step_by(per_row) {
        let end = (start + per_row).min(view.values.len());
        let mut value_spans = Vec::new();
        let mut index_spans = Vec::new();
        let mut marker_spans = Vec::new();

        for i in start..end {
            value_spans.push(Span::styled(
                format!("{:^width$}", view.values[i], width = cell_width),
                view.roles[i].style(),
            ));
            value_spans.push(Span::raw(" "));
            index_spans.push(Span::styled(
                format!("{:^width$} ", i, width = cell_width),
                index_style,
            ));
            marker_spans.push(Span::styled(
                format!("{:^width$} ", view.markers[i], width = cell_width),
                marker_style,
            ));
        }

        lines.push(Line::from(value_spans));
        lines.push(Line::from(index_spans));
        lines.push(Line::from(marker_spans));
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::binary_search::binary_search;
    use crate::algorithms::heap_sort::heap_sort;
    use crate::algorithms::quick_sort::quick_sort;

    #[test]
    fn test_binary_search_roles() {
        let trace = binary_search(&[1, 3, 5, 7, 9], 7);
        let view = binary_search_view(&trace[0]);

        assert_eq!(
            view.roles,
            vec![
                CellRole::Eliminated,
                CellRole::Eliminated,
                CellRole::Midpoint,
                CellRole::Active,
                CellRole::Active,
            ]
        );
        assert_eq!(view.markers[2], "M");
        assert_eq!(view.markers[3], "L");
        assert_eq!(view.markers[4], "R");

        let found = binary_search_view(trace.last().unwrap());
        assert_eq!(found.roles[3], CellRole::Found);
    }

    #[test]
    fn test_heap_sort_roles() {
        let trace = heap_sort(&[2, 1]);
        // Bookkeeping step: heap shrank to one element
        let view = heap_sort_view(&trace[4]);

        assert_eq!(view.roles, vec![CellRole::Active, CellRole::Sorted]);
        assert_eq!(view.markers[0], "|");
    }

    #[test]
    fn test_quick_sort_roles() {
        let trace = quick_sort(&[3, 1, 2]);
        let median = quick_sort_view(&trace[0]);
        assert!(median.roles.iter().all(|r| *r == CellRole::Candidate));

        let pivot = quick_sort_view(&trace[1]);
        assert_eq!(pivot.roles[2], CellRole::Pivot);
        assert_eq!(pivot.markers[0], "[");
        assert_eq!(pivot.markers[2], "]P");

        let done = quick_sort_view(trace.last().unwrap());
        assert!(done.roles.iter().all(|r| *r == CellRole::Sorted));
    }
}
