//! Summary panel: total solved and ranking for the fetched user.

use super::helpers::stat_widget;
use crate::stats::UserStats;
use crate::theme::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

pub fn render_summary(frame: &mut Frame, area: Rect, stats: &UserStats, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border_default));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        stat_widget(
            "Total Problems Solved",
            stats.total_solved.to_string(),
            colors.text_secondary,
            colors.accent_purple,
        ),
        rows[0],
    );
    frame.render_widget(
        stat_widget(
            "Ranking",
            format!("#{}", stats.ranking),
            colors.text_muted,
            colors.accent_blue,
        ),
        rows[1],
    );
}
