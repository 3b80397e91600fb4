//! Binary tree view of the heap portion of a heap sort step

use super::utils::pane_block;
use crate::algorithms::heap_sort::{HeapAction, HeapSortStep};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Positions `[2^depth - 1, 2^(depth+1) - 1)` clipped to `len`
pub(crate) fn level_bounds(depth: u32, len: usize) -> Option<std::ops::Range<usize>> {
    let start = (1usize << depth) - 1;
    if start >= len {
        return None;
    }
    let end = ((1usize << (depth + 1)) - 1).min(len);
    Some(start..end)
}

fn node_style(step: &HeapSortStep, index: usize) -> Style {
    if step.indices.contains(&index) {
        let bg = match step.action {
            HeapAction::Compare => DEFAULT_THEME.compare,
            HeapAction::Swap => DEFAULT_THEME.error,
            HeapAction::Heapify => DEFAULT_THEME.candidate,
            HeapAction::Sorted => DEFAULT_THEME.success,
        };
        Style::default()
            .bg(bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if step.is_sorted_position(index) {
        Style::default().fg(DEFAULT_THEME.comment)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Render the heap as a tree, one line per level.
///
/// Only the live heap (`heap_size` leading positions) is drawn as a tree; the
/// sorted suffix is listed underneath.
pub fn render_heap_tree_pane(frame: &mut Frame, area: Rect, step: &HeapSortStep, is_focused: bool) {
    let block = pane_block("Heap", is_focused);
    let heap_len = step.heap_size.min(step.array.len());

    let mut lines = Vec::new();
    let mut depth = 0;
    while let Some(range) = level_bounds(depth, heap_len) {
        let spans: Vec<Span> = range
            .flat_map(|i| {
                [
                    Span::styled(format!(" {} ", step.array[i]), node_style(step, i)),
                    Span::raw("  "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        depth += 1;
    }

    if heap_len == 0 {
        lines.push(Line::styled(
            "(heap is empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    if heap_len < step.array.len() {
        lines.push(Line::default());
        let sorted = step.array[heap_len..]
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(vec![
            Span::styled("sorted: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                sorted,
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
