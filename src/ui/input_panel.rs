//! Username input field and Fetch button.

use crate::theme::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const PLACEHOLDER: &str = "Enter username";
pub const BUTTON_LABEL: &str = " Fetch ";

pub struct InputPanel<'a> {
    pub username: &'a str,
    pub input_focused: bool,
    pub button_focused: bool,
}

/// Rendered rectangles, cached by the caller for mouse hit-testing.
pub struct InputRects {
    pub input: Rect,
    pub button: Rect,
}

impl InputPanel<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect, colors: &ThemeColors) -> InputRects {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(10),
                Constraint::Length(BUTTON_LABEL.len() as u16 + 2),
            ])
            .split(area);

        let input_border = if self.input_focused {
            colors.border_focus
        } else {
            colors.border_default
        };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(input_border))
            .title(Span::styled(
                " USERNAME ",
                Style::default().fg(input_border),
            ));
        let input_inner = input_block.inner(cols[0]);
        frame.render_widget(input_block, cols[0]);

        if self.username.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    PLACEHOLDER,
                    Style::default().fg(colors.text_muted),
                )),
                input_inner,
            );
        } else {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    self.username.to_string(),
                    Style::default().fg(colors.text_primary),
                )),
                input_inner,
            );
        }
        if self.input_focused {
            let cursor_x = input_inner.x + self.username.width() as u16;
            frame.set_cursor_position(Position::new(
                cursor_x.min(input_inner.x + input_inner.width.saturating_sub(1)),
                input_inner.y,
            ));
        }

        let button_style = if self.button_focused {
            Style::default()
                .fg(colors.border_focus)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text_secondary)
        };
        let button = Paragraph::new(Line::from(Span::styled(BUTTON_LABEL, button_style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(if self.button_focused {
                        colors.border_focus
                    } else {
                        colors.border_default
                    })),
            );
        frame.render_widget(button, cols[1]);

        InputRects {
            input: cols[0],
            button: cols[1],
        }
    }
}
