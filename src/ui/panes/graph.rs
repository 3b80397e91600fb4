//! Graph traversal pane
//!
//! Nodes are listed in adjacency order with their traversal state and outgoing
//! edges. Edges already walked by the traversal are highlighted.

use super::utils::{clamp_scroll, pane_block};
use crate::algorithms::graph::{Graph, GraphAction, GraphStep};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding},
    Frame,
};

/// Where a node stands at a given step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Current,
    Visited,
    /// Waiting in the queue or stack
    Frontier,
    Unvisited,
}

impl NodeState {
    pub fn of(step: &GraphStep, node: &str) -> Self {
        if step.current_node.as_deref() == Some(node) {
            NodeState::Current
        } else if step.visited_nodes.contains(node) {
            NodeState::Visited
        } else if step.processing_nodes.contains(node) {
            NodeState::Frontier
        } else {
            NodeState::Unvisited
        }
    }

    fn label(self) -> &'static str {
        match self {
            NodeState::Current => "current",
            NodeState::Visited => "visited",
            NodeState::Frontier => "frontier",
            NodeState::Unvisited => "",
        }
    }

    fn style(self) -> Style {
        match self {
            NodeState::Current => Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            NodeState::Visited => Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
            NodeState::Frontier => Style::default().fg(DEFAULT_THEME.compare),
            NodeState::Unvisited => Style::default().fg(DEFAULT_THEME.fg),
        }
    }
}

/// Whether `from -> to` is highlighted at this step.
///
/// The opening step lists every edge of the graph, so nothing is highlighted
/// until the first node has been visited.
pub(crate) fn is_traversed(step: &GraphStep, from: &str, to: &str) -> bool {
    let opening = step.current_node.is_none()
        && step.visited_nodes.is_empty()
        && step.action == GraphAction::Visit;
    !opening && step.edges.iter().any(|e| e.from == from && e.to == to)
}

/// Render the graph pane
pub fn render_graph_pane(
    frame: &mut Frame,
    area: Rect,
    graph: &Graph,
    step: &GraphStep,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block("Graph", is_focused).padding(Padding::new(1, 0, 0, 0));
    let name_width = graph.nodes().map(str::len).max().unwrap_or(1);
    let edge_style = Style::default().fg(DEFAULT_THEME.comment);
    let active_style = Style::default()
        .fg(DEFAULT_THEME.active_edge)
        .add_modifier(Modifier::BOLD);

    let mut all_items: Vec<ListItem> = graph
        .nodes()
        .map(|node| {
            let state = NodeState::of(step, node);
            let mut spans = vec![
                Span::styled(format!(" {:<width$} ", node, width = name_width), state.style()),
                Span::styled(
                    format!(" {:<8}", state.label()),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ];
            for (i, to) in graph.neighbors(node).iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(", ", edge_style));
                }
                let style = if is_traversed(step, node, to) {
                    active_style
                } else {
                    edge_style
                };
                spans.push(Span::styled(format!("→ {}", to), style));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    // A start node outside the mapping is still shown
    if let Some(current) = step.current_node.as_deref() {
        if !graph.contains(current) {
            all_items.push(ListItem::new(Line::from(Span::styled(
                format!(" {} ", current),
                NodeState::Current.style(),
            ))));
        }
    }

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // borders
    clamp_scroll(scroll_offset, total_items, visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bfs::bfs;

    #[test]
    fn test_node_states_and_edges() {
        let graph = Graph::from_edges([("A", "B"), ("A", "C"), ("B", "D")]);
        let trace = bfs(&graph, "A");

        let opening = &trace[0];
        assert_eq!(NodeState::of(opening, "A"), NodeState::Frontier);
        assert!(!is_traversed(opening, "A", "B"));

        // Visit A, then process A (B and C queued), then visit B
        let visit_b = &trace[3];
        assert_eq!(NodeState::of(visit_b, "B"), NodeState::Current);
        assert_eq!(NodeState::of(visit_b, "A"), NodeState::Visited);
        assert_eq!(NodeState::of(visit_b, "C"), NodeState::Frontier);
        assert_eq!(NodeState::of(visit_b, "D"), NodeState::Unvisited);
        assert!(is_traversed(visit_b, "A", "B"));
        assert!(!is_traversed(visit_b, "A", "C"));
    }
}
