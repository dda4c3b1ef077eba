//! File path prompt, used for portrait upload and sheet import.
//!
//! Stands in for a native file picker: the user types or pastes a path and
//! confirms with Enter. The read itself happens in the background.

use std::path::PathBuf;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::events::FilePurpose;
use crate::tui::theme;
use crate::tui::widgets::input_buffer::InputBuffer;

/// Result of handling a prompt input event.
#[derive(Debug, PartialEq, Eq)]
pub enum PromptResult {
    /// Event consumed, prompt stays open.
    Consumed,
    /// User confirmed a path; close and start the read.
    Submit(PathBuf),
    /// User pressed Esc; close without reading.
    Close,
}

pub struct FilePrompt {
    purpose: FilePurpose,
    input: InputBuffer,
}

impl FilePrompt {
    pub fn new(purpose: FilePurpose) -> Self {
        Self {
            purpose,
            input: InputBuffer::new(),
        }
    }

    pub fn purpose(&self) -> FilePurpose {
        self.purpose
    }

    pub fn handle_input(&mut self, event: &Event) -> PromptResult {
        if let Event::Paste(text) = event {
            self.input.insert_str(text);
            return PromptResult::Consumed;
        }

        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return PromptResult::Consumed;
        };

        match (*modifiers, *code) {
            (_, KeyCode::Esc) => PromptResult::Close,
            (_, KeyCode::Enter) => {
                if self.input.is_empty() {
                    return PromptResult::Consumed;
                }
                PromptResult::Submit(expand_home(self.input.take().trim()))
            }
            (_, KeyCode::Backspace) => {
                self.input.backspace();
                PromptResult::Consumed
            }
            (_, KeyCode::Delete) => {
                self.input.delete();
                PromptResult::Consumed
            }
            (_, KeyCode::Left) => {
                self.input.move_left();
                PromptResult::Consumed
            }
            (_, KeyCode::Right) => {
                self.input.move_right();
                PromptResult::Consumed
            }
            (_, KeyCode::Home) => {
                self.input.move_home();
                PromptResult::Consumed
            }
            (_, KeyCode::End) => {
                self.input.move_end();
                PromptResult::Consumed
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.input.insert_char(c);
                PromptResult::Consumed
            }
            _ => PromptResult::Consumed,
        }
    }

    // ── Rendering ───────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let modal = prompt_rect(area);
        frame.render_widget(Clear, modal);

        let block = Block::default()
            .title(format!(" {} ", self.purpose.label()))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_SURFACE));

        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        if inner.height < 2 {
            return;
        }

        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);
        self.render_input(frame, chunks[0]);

        let hint = Line::from(vec![
            Span::styled("Enter", theme::key_hint()),
            Span::styled(":load  ", theme::muted()),
            Span::styled("Esc", theme::key_hint()),
            Span::styled(":cancel", theme::muted()),
        ]);
        frame.render_widget(Paragraph::new(hint), chunks[1]);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let text = self.input.text();
        let cursor = self.input.cursor_position();

        let line = if text.is_empty() {
            Line::from(vec![
                Span::styled("> ", theme::highlight()),
                Span::styled(" ", Style::default().bg(theme::TEXT).fg(theme::BG_BASE)),
                Span::styled(" path to file", theme::dim()),
            ])
        } else {
            let before = &text[..cursor];
            let cursor_char = text[cursor..]
                .chars()
                .next()
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            let after_cursor = if cursor < text.len() {
                &text[cursor + cursor_char.len()..]
            } else {
                ""
            };

            Line::from(vec![
                Span::styled("> ", theme::highlight()),
                Span::raw(before.to_string()),
                Span::styled(
                    cursor_char,
                    Style::default().bg(theme::TEXT).fg(theme::BG_BASE),
                ),
                Span::raw(after_cursor.to_string()),
            ])
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(raw)),
        None => PathBuf::from(raw),
    }
}

/// A 4-row modal, 70% wide, vertically centered.
fn prompt_rect(area: Rect) -> Rect {
    let width = (area.width / 10 * 7).max(20).min(area.width);
    let height = 4.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
