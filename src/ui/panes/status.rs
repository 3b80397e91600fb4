//! Status bar rendering with keybindings and playback indicators

use crate::playback::Player;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn badge(text: String, bg: Color) -> Span<'static> {
    Span::styled(
        text,
        Style::default()
            .bg(bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )
}

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    algorithm: &str,
    message: &str,
    player: &Player,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let bar_style = Style::default().bg(DEFAULT_THEME.current_line_bg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    // Left side: step counter, algorithm and last message
    let left_spans = vec![
        badge(
            format!(" Step {}/{} ", player.position() + 1, player.total()),
            DEFAULT_THEME.primary,
        ),
        Span::styled(" | ", sep_style),
        Span::styled(format!("{} ", algorithm), bar_style.fg(DEFAULT_THEME.secondary)),
        Span::styled("| ", sep_style),
        Span::styled(format!(" {} ", message), bar_style.fg(DEFAULT_THEME.fg)),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in [
        (" ←/→ ", " step "),
        (" ⎵ ", " play "),
        (" +/- ", " speed "),
        (" ↵ / ⌫ ", " end/start "),
        ("q", " quit "),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    right_spans.push(Span::styled("│", sep_style));
    right_spans.push(badge(format!(" {} ", player.speed()), DEFAULT_THEME.candidate));

    // Show status indicators based on position and state
    let indicator = if player.is_playing() {
        Some(badge(" ▶ PLAYING ".to_string(), DEFAULT_THEME.secondary))
    } else if player.is_at_end() {
        Some(badge(" END ".to_string(), DEFAULT_THEME.error))
    } else if player.is_at_start() {
        Some(badge(" START ".to_string(), DEFAULT_THEME.success))
    } else {
        None
    };
    if let Some(indicator) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(indicator);
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_style)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
