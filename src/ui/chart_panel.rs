//! Proportion (donut) chart rendering.
//!
//! Each chart is a two-slice ring: the solved arc in the difficulty accent
//! color sweeping clockwise from 12 o'clock, the remainder in the dark base
//! color. The solved count sits in the ring hole and a per-slice breakdown
//! line below the ring stands in for a hover tooltip.

use crate::theme::{SlicePalette, ThemeColors};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build the two-entry proportional breakdown for one category.
/// Signed on purpose: `solved > total` yields a negative Remaining slice
/// that is displayed as-is, never clamped or rejected.
pub fn proportion_slices(solved: u64, total: u64) -> [(&'static str, i64); 2] {
    [
        ("Solved", solved as i64),
        ("Remaining", total as i64 - solved as i64),
    ]
}

/// Fraction of the ring swept by the solved arc. Deliberately uncapped so
/// inconsistent upstream data (`solved > total`) simply fills the whole
/// ring; an empty category renders an all-remaining ring.
pub fn solved_fraction(solved: u64, total: u64) -> f64 {
    if total == 0 {
        if solved > 0 {
            1.0
        } else {
            0.0
        }
    } else {
        solved as f64 / total as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingCell {
    Outside,
    Solved,
    Remaining,
}

/// Rasterize the ring into character cells. Terminal cells are roughly
/// twice as tall as wide, so the vertical axis is scaled by two to keep
/// the ring circular.
pub fn ring_rows(width: u16, height: u16, fraction: f64) -> Vec<Vec<RingCell>> {
    let (width, height) = (width as usize, height as usize);
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;
    let outer = cx.min(height as f64 - 1.0).max(1.0);
    let inner = outer * 0.5;

    let mut rows = Vec::with_capacity(height);
    for y in 0..height {
        let mut row = Vec::with_capacity(width);
        for x in 0..width {
            let fx = x as f64 - cx;
            let fy = (y as f64 - cy) * 2.0;
            let r = (fx * fx + fy * fy).sqrt();
            if r < inner || r > outer + 0.5 {
                row.push(RingCell::Outside);
                continue;
            }
            // Clockwise angle from 12 o'clock, normalized to [0, 1)
            let t = (fx.atan2(-fy) / std::f64::consts::TAU + 1.0) % 1.0;
            if t < fraction {
                row.push(RingCell::Solved);
            } else {
                row.push(RingCell::Remaining);
            }
        }
        rows.push(row);
    }
    rows
}

/// Turn rasterized ring cells into styled lines, merging same-color runs.
fn ring_lines(rows: &[Vec<RingCell>], palette: SlicePalette) -> Vec<Line<'static>> {
    rows.iter()
        .map(|row| {
            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut run = String::new();
            let mut run_cell = RingCell::Outside;
            for &cell in row {
                if cell != run_cell && !run.is_empty() {
                    spans.push(styled_run(std::mem::take(&mut run), run_cell, palette));
                }
                run_cell = cell;
                run.push(if cell == RingCell::Outside { ' ' } else { '█' });
            }
            if !run.is_empty() {
                spans.push(styled_run(run, run_cell, palette));
            }
            Line::from(spans)
        })
        .collect()
}

fn styled_run(text: String, cell: RingCell, palette: SlicePalette) -> Span<'static> {
    let style = match cell {
        RingCell::Outside => Style::default(),
        RingCell::Solved => Style::default().fg(palette.solved),
        RingCell::Remaining => Style::default().fg(palette.remaining),
    };
    Span::styled(text, style)
}

/// Render one difficulty chart: bordered block, ring, center count,
/// "solved/total solved" caption and the per-slice breakdown line.
pub fn render_chart(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    solved: u64,
    total: u64,
    palette: SlicePalette,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border_default))
        .title(
            Line::from(Span::styled(
                format!(" {} ", label.to_uppercase()),
                Style::default()
                    .fg(palette.solved)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 4 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let ring_area = chunks[0];
    let rows = ring_rows(ring_area.width, ring_area.height, solved_fraction(solved, total));
    frame.render_widget(Paragraph::new(ring_lines(&rows, palette)), ring_area);

    // Solved count in the ring hole
    let center = Rect::new(
        ring_area.x,
        ring_area.y + ring_area.height / 2,
        ring_area.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            solved.to_string(),
            Style::default()
                .fg(palette.solved)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        center,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{}/{} solved", solved, total),
            Style::default().fg(colors.text_muted),
        )))
        .alignment(Alignment::Center),
        chunks[1],
    );

    let slices = proportion_slices(solved, total);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} {}", slices[0].0, slices[0].1),
                Style::default().fg(palette.solved),
            ),
            Span::styled(" · ", Style::default().fg(colors.text_muted)),
            Span::styled(
                format!("{} {}", slices[1].0, slices[1].1),
                Style::default().fg(colors.text_secondary),
            ),
        ]))
        .alignment(Alignment::Center),
        chunks[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_sum_to_total() {
        let slices = proportion_slices(200, 300);
        assert_eq!(slices[0], ("Solved", 200));
        assert_eq!(slices[1], ("Remaining", 100));
        assert_eq!(slices[0].1 + slices[1].1, 300);
    }

    #[test]
    fn test_inconsistent_data_passes_through() {
        // solved > total: Remaining goes negative, slices still sum to total
        let slices = proportion_slices(250, 200);
        assert_eq!(slices[1], ("Remaining", -50));
        assert_eq!(slices[0].1 + slices[1].1, 200);
    }

    #[test]
    fn test_solved_fraction() {
        assert_eq!(solved_fraction(0, 0), 0.0);
        assert_eq!(solved_fraction(5, 0), 1.0);
        assert_eq!(solved_fraction(50, 200), 0.25);
        // uncapped on inconsistent data
        assert_eq!(solved_fraction(300, 200), 1.5);
    }

    fn count_cells(rows: &[Vec<RingCell>], kind: RingCell) -> usize {
        rows.iter()
            .map(|r| r.iter().filter(|&&c| c == kind).count())
            .sum()
    }

    #[test]
    fn test_empty_ring_is_all_remaining() {
        let rows = ring_rows(21, 11, 0.0);
        assert_eq!(count_cells(&rows, RingCell::Solved), 0);
        assert!(count_cells(&rows, RingCell::Remaining) > 0);
    }

    #[test]
    fn test_full_ring_is_all_solved() {
        let rows = ring_rows(21, 11, 1.0);
        assert_eq!(count_cells(&rows, RingCell::Remaining), 0);
        assert!(count_cells(&rows, RingCell::Solved) > 0);
    }

    #[test]
    fn test_half_ring_splits_down_the_middle() {
        let rows = ring_rows(21, 11, 0.5);
        // Clockwise from 12 o'clock: the solved half is the right half
        for (y, row) in rows.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                match cell {
                    RingCell::Solved => assert!(x >= 10, "solved cell at ({}, {})", x, y),
                    RingCell::Remaining => assert!(x <= 10, "remaining cell at ({}, {})", x, y),
                    RingCell::Outside => {}
                }
            }
        }
        let solved = count_cells(&rows, RingCell::Solved) as i64;
        let remaining = count_cells(&rows, RingCell::Remaining) as i64;
        assert!((solved - remaining).abs() <= rows.len() as i64 * 2);
    }

    #[test]
    fn test_ring_has_a_hole() {
        let rows = ring_rows(21, 11, 0.5);
        assert_eq!(rows[5][10], RingCell::Outside);
    }

    #[test]
    fn test_degenerate_area() {
        assert!(ring_rows(0, 0, 0.5).is_empty());
        // A tiny area still yields well-formed rows
        let rows = ring_rows(2, 1, 0.5);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
    }
}
