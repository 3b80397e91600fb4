//! Shared helpers for pane rendering
//!
//! All functions in this module are `pub(super)`, making them accessible only
//! within the panes module.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

pub(super) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Bordered block with a padded title
pub(super) fn pane_block(title: &str, is_focused: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
}

/// Clamp a scroll offset so the last page stays full.
///
/// `usize::MAX` is used by callers to mean "scroll to bottom".
pub(super) fn clamp_scroll(offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *offset = (*offset).min(max_scroll);
    } else {
        *offset = 0;
    }
}

/// Badge style for an action tag
pub(super) fn action_style(action: &str) -> Style {
    let bg = match action {
        "compare" | "less" | "greater" => DEFAULT_THEME.compare,
        "swap" | "exhausted" => DEFAULT_THEME.error,
        "pivot" | "partition" => DEFAULT_THEME.pivot,
        "median_selection" | "heapify" => DEFAULT_THEME.candidate,
        "visit" | "process" => DEFAULT_THEME.secondary,
        "backtrack" => DEFAULT_THEME.primary,
        "sorted" | "complete" | "equal" => DEFAULT_THEME.success,
        _ => DEFAULT_THEME.comment,
    };
    Style::default()
        .bg(bg)
        .fg(ratatui::style::Color::Black)
        .add_modifier(Modifier::BOLD)
}
