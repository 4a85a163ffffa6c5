//! Helper functions and shared types for UI rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Cached widget rectangles for mouse hit-testing.
/// Updated during render to match exactly what's displayed.
#[derive(Default, Clone, Copy)]
pub struct WidgetRects {
    pub input: Option<Rect>,
    pub button: Option<Rect>,
}

impl WidgetRects {
    #[inline(always)]
    pub fn find_widget(&self, x: u16, y: u16) -> Option<&'static str> {
        if Self::contains_point(self.input, x, y) {
            return Some("input");
        }
        if Self::contains_point(self.button, x, y) {
            return Some("button");
        }
        None
    }

    #[inline(always)]
    fn contains_point(rect: Option<Rect>, x: u16, y: u16) -> bool {
        rect.is_some_and(|r| x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height)
    }
}

/// Helper: Create a stat paragraph with label and value
pub fn stat_widget(label: &str, value: String, label_color: Color, color: Color) -> Paragraph<'static> {
    Paragraph::new(vec![Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(label_color)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])])
    .alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_prefers_input_then_button() {
        let rects = WidgetRects {
            input: Some(Rect::new(0, 0, 10, 3)),
            button: Some(Rect::new(12, 0, 9, 3)),
        };
        assert_eq!(rects.find_widget(5, 1), Some("input"));
        assert_eq!(rects.find_widget(12, 2), Some("button"));
        assert_eq!(rects.find_widget(11, 1), None);
        assert_eq!(rects.find_widget(5, 3), None);
    }
}
