//! Reusable UI component helpers shared by the page renderers.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::theme::Theme;

/// Bordered box with a title that lights up when its pane has focus.
pub fn pane_block(title: &str, active: bool, theme: &Theme) -> Block<'static> {
    let border_color = if active { theme.accent } else { theme.inactive };
    let title_style = if active {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.inactive)
    };

    Block::default()
        .title(Span::styled(format!(" {} ", title), title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

/// `label: value` line in the standard dim-label styling.
pub fn stat_line(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(theme.text_dim)),
        Span::styled(value, Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
    ])
}

/// Row background for the selected entry of a focused list.
pub fn selection_style(selected: bool, active: bool, theme: &Theme) -> Style {
    if selected && active {
        Style::default().bg(theme.bg_selected).fg(theme.text)
    } else {
        Style::default()
    }
}

/// `[x] label` / `[ ] label` line for toggle lists.
pub fn checkbox_line(label: &str, checked: bool, theme: &Theme) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let mark_color = if checked { theme.success } else { theme.text_dim };
    Line::from(vec![
        Span::styled(mark, Style::default().fg(mark_color)),
        Span::styled(format!(" {}", label), Style::default().fg(theme.text)),
    ])
}

/// Centered popup area, as a percentage of the full frame.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
