//! Application state and event loop.

use crate::fetch::{FetchClient, FetchOutcome};
use crate::stats::{Difficulty, FetchError, UserStats};
use crate::theme::Theme;
use crate::ui::helpers::WidgetRects;
use crate::ui::input_panel::InputPanel;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use std::io;
use std::sync::mpsc;

pub mod chart_panel;
pub mod helpers;
pub mod input_panel;
pub mod summary_panel;

#[derive(PartialEq, Clone, Copy)]
enum Focus {
    Input,
    Button,
}

/// What the UI currently displays. Exactly one variant is ever active, so
/// "loading with a leftover error" or "error and data at once" cannot be
/// represented.
#[derive(Debug, Clone, PartialEq)]
enum ViewState {
    Idle,
    Loading,
    Error(FetchError),
    Loaded(UserStats),
}

pub struct App {
    username: String,
    focus: Focus,
    view: ViewState,
    fetch: FetchClient,
    outcome_rx: mpsc::Receiver<FetchOutcome>,
    /// Sequence number of the most recently dispatched request; outcomes
    /// from older requests are discarded on arrival.
    latest_seq: u64,
    theme: Theme,
    exit: bool,
    should_redraw: bool,
    cached_rects: WidgetRects,
}

impl App {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            username: String::new(),
            focus: Focus::Input,
            view: ViewState::Idle,
            fetch: FetchClient::new(tx),
            outcome_rx: rx,
            latest_seq: 0,
            theme: Theme,
            exit: false,
            should_redraw: true,
            cached_rects: WidgetRects::default(),
        }
    }

    pub fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> io::Result<()> {
        self.should_redraw = true;

        while !self.exit {
            // Short poll: 30ms keeps the UI responsive while saving CPU.
            if event::poll(std::time::Duration::from_millis(30))? {
                while event::poll(std::time::Duration::from_millis(0))? {
                    match event::read()? {
                        Event::Key(key) => {
                            if key.kind == KeyEventKind::Press {
                                self.handle_key_event(key);
                                self.should_redraw = true;
                                if self.exit {
                                    return Ok(());
                                }
                            }
                        }
                        Event::Resize(_, _) => {
                            self.should_redraw = true;
                        }
                        Event::Mouse(mouse) => {
                            if self.handle_mouse_event(mouse) {
                                self.should_redraw = true;
                            }
                        }
                        Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
                    }
                }
            }

            // Drain completed fetches (non-blocking)
            while let Ok(outcome) = self.outcome_rx.try_recv() {
                self.apply_outcome(outcome);
                self.should_redraw = true;
            }

            if self.should_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.should_redraw = false;
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key: crossterm::event::KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.exit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.exit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Input => Focus::Button,
                    Focus::Button => Focus::Input,
                };
            }
            // Enter triggers the fetch from either focus: pressing Enter in
            // the input and activating the button are equivalent.
            KeyCode::Enter => self.request_fetch(),
            KeyCode::Backspace if self.focus == Focus::Input => {
                self.username.pop();
            }
            KeyCode::Char(c) if self.focus == Focus::Input => {
                self.username.push(c);
            }
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        match self.cached_rects.find_widget(mouse.column, mouse.row) {
            Some("button") => {
                self.focus = Focus::Button;
                self.request_fetch();
                true
            }
            Some("input") => {
                self.focus = Focus::Input;
                true
            }
            _ => false,
        }
    }

    /// Dispatch a fetch for the current input text, verbatim. Clears any
    /// prior error or data by replacing the whole view state.
    fn request_fetch(&mut self) {
        self.latest_seq = self.fetch.dispatch(&self.username);
        self.view = ViewState::Loading;
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.seq != self.latest_seq {
            log::debug!(
                "Discarding stale response #{} (latest is #{})",
                outcome.seq,
                self.latest_seq
            );
            return;
        }
        self.view = match outcome.result {
            Ok(stats) => {
                log::info!("Fetch #{} succeeded", outcome.seq);
                ViewState::Loaded(stats)
            }
            Err(e) => {
                log::info!("Fetch #{} failed: {}", outcome.seq, e.message());
                ViewState::Error(e)
            }
        };
    }

    fn render(&mut self, frame: &mut Frame) {
        let colors = self.theme.colors();
        let area = frame.area();

        frame.render_widget(
            Block::default().style(Style::default().bg(colors.bg_primary)),
            area,
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(3), // input + button
                Constraint::Length(1), // loading / error line
                Constraint::Min(0),    // results
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "LEETCODE STATS",
                Style::default()
                    .fg(colors.accent_purple)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            rows[0],
        );

        let input_rects = InputPanel {
            username: &self.username,
            input_focused: self.focus == Focus::Input,
            button_focused: self.focus == Focus::Button,
        }
        .render(frame, rows[1], &colors);
        self.cached_rects = WidgetRects {
            input: Some(input_rects.input),
            button: Some(input_rects.button),
        };

        match &self.view {
            ViewState::Loading => {
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        "Fetching data...",
                        Style::default().fg(colors.info),
                    ))
                    .alignment(Alignment::Center),
                    rows[2],
                );
            }
            ViewState::Error(e) => {
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        e.message(),
                        Style::default()
                            .fg(colors.error)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .alignment(Alignment::Center),
                    rows[2],
                );
            }
            ViewState::Idle | ViewState::Loaded(_) => {}
        }

        if let ViewState::Loaded(stats) = &self.view {
            self.render_results(frame, rows[3], stats);
        }
    }

    fn render_results(&self, frame: &mut Frame, area: Rect, stats: &UserStats) {
        let colors = self.theme.colors();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(9)])
            .split(area);

        summary_panel::render_summary(frame, rows[0], stats, &colors);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[1]);

        for (i, difficulty) in Difficulty::ALL.into_iter().enumerate() {
            let (solved, total) = stats.solved_pair(difficulty);
            chart_panel::render_chart(
                frame,
                charts[i],
                difficulty.label(),
                solved,
                total,
                colors.palette(difficulty),
                &colors,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_stats() -> UserStats {
        UserStats {
            status: "success".into(),
            total_solved: 500,
            ranking: 12345,
            easy_solved: 200,
            total_easy: 300,
            medium_solved: 250,
            total_medium: 500,
            hard_solved: 50,
            total_hard: 200,
        }
    }

    #[test]
    fn test_typing_edits_username() {
        let mut app = App::new();
        for c in "leetcoder1".chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
        assert_eq!(app.username, "leetcoder1");
        app.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(app.username, "leetcoder");
    }

    #[test]
    fn test_enter_and_button_triggers_are_equivalent() {
        let mut via_input = App::new();
        via_input.username = "leetcoder1".into();
        via_input.handle_key_event(key(KeyCode::Enter));

        let mut via_button = App::new();
        via_button.username = "leetcoder1".into();
        via_button.handle_key_event(key(KeyCode::Tab));
        via_button.handle_key_event(key(KeyCode::Enter));

        assert_eq!(via_input.view, ViewState::Loading);
        assert_eq!(via_button.view, ViewState::Loading);
        assert_eq!(via_input.latest_seq, 1);
        assert_eq!(via_button.latest_seq, 1);
    }

    #[test]
    fn test_new_fetch_clears_prior_error() {
        let mut app = App::new();
        app.view = ViewState::Error(FetchError::NotFound);
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.view, ViewState::Loading);
    }

    #[test]
    fn test_outcome_replaces_loading() {
        let mut app = App::new();
        app.latest_seq = 1;
        app.view = ViewState::Loading;
        app.apply_outcome(FetchOutcome {
            seq: 1,
            result: Ok(sample_stats()),
        });
        assert_eq!(app.view, ViewState::Loaded(sample_stats()));

        app.latest_seq = 2;
        app.view = ViewState::Loading;
        app.apply_outcome(FetchOutcome {
            seq: 2,
            result: Err(FetchError::FetchFailed),
        });
        assert_eq!(app.view, ViewState::Error(FetchError::FetchFailed));
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut app = App::new();
        app.latest_seq = 2;
        app.view = ViewState::Loading;

        // A slow first request resolving after a second was dispatched
        // must not overwrite the newer request's state.
        app.apply_outcome(FetchOutcome {
            seq: 1,
            result: Ok(sample_stats()),
        });
        assert_eq!(app.view, ViewState::Loading);

        app.apply_outcome(FetchOutcome {
            seq: 2,
            result: Err(FetchError::NotFound),
        });
        assert_eq!(app.view, ViewState::Error(FetchError::NotFound));
    }

    #[test]
    fn test_ctrl_c_and_esc_exit() {
        let mut app = App::new();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.exit);

        let mut app = App::new();
        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.exit);
    }

    #[test]
    fn test_button_click_triggers_fetch() {
        let mut app = App::new();
        app.username = "leetcoder1".into();
        app.cached_rects = WidgetRects {
            input: Some(Rect::new(1, 2, 20, 3)),
            button: Some(Rect::new(22, 2, 9, 3)),
        };
        let handled = app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 24,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert!(handled);
        assert_eq!(app.view, ViewState::Loading);
        assert_eq!(app.latest_seq, 1);
    }
}
