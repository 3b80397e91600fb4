//! Narration history pane rendering

use super::utils::{action_style, clamp_scroll, pane_block};
use crate::trace::AlgorithmTrace;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the narration of every step up to and including `position`
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &AlgorithmTrace,
    position: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block("History", is_focused);

    if trace.is_empty() {
        let paragraph = Paragraph::new("(no steps)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let last = position.min(trace.len() - 1);
    let number_width = trace.len().to_string().len();

    let all_items: Vec<ListItem> = (0..=last)
        .filter_map(|i| {
            let action = trace.action_name(i)?;
            let text = trace.narrate(i)?;
            let text_style = if i == last {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            Some(ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", i + 1, width = number_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!(" {} ", action), action_style(action)),
                Span::raw(" "),
                Span::styled(text, text_style),
            ])))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // borders
    clamp_scroll(scroll_offset, total_items, visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
