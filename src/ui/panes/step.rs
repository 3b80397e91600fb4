//! Current step details: action badge, narration and the algorithm's own
//! bookkeeping fields

use super::utils::{action_style, pane_block};
use crate::algorithms::graph::GraphStep;
use crate::trace::{AlgorithmTrace, TraceStep};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{:<12}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

fn list<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    let joined = items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn graph_fields(step: &GraphStep) -> Vec<Line<'static>> {
    let mut lines = vec![
        field("current", optional(step.current_node.as_ref())),
        field("visited", list(&step.visited_nodes)),
        field("frontier", list(&step.processing_nodes)),
        field("edges", step.edges.len().to_string()),
    ];
    if let Some(next) = &step.next_node {
        lines.push(field("next", next.clone()));
    }
    lines
}

/// Algorithm-specific fields of step `index`
fn detail_lines(trace: &AlgorithmTrace, index: usize) -> Vec<Line<'static>> {
    match trace {
        AlgorithmTrace::BinarySearch(t) => t
            .get(index)
            .map(|s| {
                vec![
                    field("target", s.target.to_string()),
                    field("bounds", format!("[{}, {}]", s.left, s.right)),
                    field("mid", s.mid.to_string()),
                    field("found", s.found.to_string()),
                    field("eliminated", s.eliminated.len().to_string()),
                ]
            })
            .unwrap_or_default(),
        AlgorithmTrace::HeapSort(t) => t
            .get(index)
            .map(|s| {
                vec![
                    field("indices", list(&s.indices)),
                    field("heap size", s.heap_size.to_string()),
                ]
            })
            .unwrap_or_default(),
        AlgorithmTrace::QuickSort(t) => t
            .get(index)
            .map(|s| {
                vec![
                    field("pivot", optional(s.pivot_index)),
                    field(
                        "range",
                        s.partition_range
                            .map_or_else(|| "-".to_string(), |r| format!("[{}, {}]", r.start, r.end)),
                    ),
                    field("sorted", list(&s.sorted_indices)),
                ]
            })
            .unwrap_or_default(),
        AlgorithmTrace::Bfs(t) | AlgorithmTrace::Dfs(t) => {
            t.get(index).map(graph_fields).unwrap_or_default()
        }
    }
}

fn step_size(trace: &AlgorithmTrace, index: usize) -> Option<usize> {
    match trace {
        AlgorithmTrace::BinarySearch(t) => t.get(index).map(TraceStep::estimated_size),
        AlgorithmTrace::HeapSort(t) => t.get(index).map(TraceStep::estimated_size),
        AlgorithmTrace::QuickSort(t) => t.get(index).map(TraceStep::estimated_size),
        AlgorithmTrace::Bfs(t) | AlgorithmTrace::Dfs(t) => {
            t.get(index).map(TraceStep::estimated_size)
        }
    }
}

/// Render the step pane
pub fn render_step_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &AlgorithmTrace,
    position: usize,
    is_focused: bool,
) {
    let block = pane_block("Step", is_focused);

    let (Some(action), Some(narration)) = (trace.action_name(position), trace.narrate(position))
    else {
        let paragraph = Paragraph::new("(no step)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", action.to_uppercase()), action_style(action)),
            Span::raw(" "),
            Span::styled(
                narration,
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
    ];
    lines.extend(detail_lines(trace, position));
    if let Some(bytes) = step_size(trace, position) {
        lines.push(field("snapshot", format!("{} bytes", bytes)));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
