//! Step panels of the character wizard.
//!
//! The view owns only presentation state (text areas, cursors). Every edit is
//! pushed into the [`CreationSession`] immediately, so the record is always the
//! single source of truth and the view can be rebuilt from it after an import
//! or a reset.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use ratatui_textarea::TextArea;

use crate::core::character::allocator::{self, Pool};
use crate::core::character::avatar::{self, OFFICIAL_AVATAR_COUNT};
use crate::core::character::gate::{NAME_MIN_CHARS, STORY_MIN_CHARS};
use crate::core::character::{CharacterRecord, CreationSession, PrimaryKnowledge, Step};
use crate::tui::events::Action;
use crate::tui::theme;
use crate::tui::widgets::stat_bars::StatBars;

/// Outcome of feeding one event to the wizard view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardResult {
    /// Handled inside the view.
    Consumed,
    /// The view wants the app to perform an action.
    Action(Action),
    /// Not for the view; fall through to global bindings.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    Name,
    Story,
}

pub struct WizardView {
    pub name_input: TextArea<'static>,
    pub story_input: TextArea<'static>,
    pub identity_focus: IdentityField,
    /// Selected row on the two point-allocation steps.
    pub skill_cursor: usize,
    /// Highlighted option on the knowledge step.
    pub knowledge_cursor: usize,
}

impl WizardView {
    pub fn new() -> Self {
        let mut view = Self {
            name_input: TextArea::default(),
            story_input: TextArea::default(),
            identity_focus: IdentityField::Name,
            skill_cursor: 0,
            knowledge_cursor: 0,
        };
        view.sync_from(&CharacterRecord::default());
        view
    }

    /// Rebuild text inputs and cursors from `record`.
    pub fn sync_from(&mut self, record: &CharacterRecord) {
        self.name_input = TextArea::new(vec![record.name.clone()]);
        self.name_input.set_placeholder_text("What do they call you?");
        self.story_input = TextArea::new(record.story.split('\n').map(String::from).collect());
        self.story_input
            .set_placeholder_text("Where do you come from? What drives you?");
        self.name_input.move_cursor(ratatui_textarea::CursorMove::End);
        self.story_input.move_cursor(ratatui_textarea::CursorMove::Bottom);
        self.story_input.move_cursor(ratatui_textarea::CursorMove::End);
        self.identity_focus = IdentityField::Name;
        self.update_focus_styles();
        self.enter_step(record);
    }

    /// Reset per-step cursors after the step changed.
    pub fn enter_step(&mut self, record: &CharacterRecord) {
        self.skill_cursor = 0;
        self.knowledge_cursor = record
            .primary_knowledge
            .and_then(|k| PrimaryKnowledge::ALL.iter().position(|&c| c == k))
            .unwrap_or(0);
    }

    fn update_focus_styles(&mut self) {
        let (name_block, story_block) = match self.identity_focus {
            IdentityField::Name => (theme::block_focused("Name"), theme::block_default("Story")),
            IdentityField::Story => (theme::block_default("Name"), theme::block_focused("Story")),
        };
        self.name_input.set_block(name_block);
        self.story_input.set_block(story_block);

        let cursor_on = Style::default().add_modifier(Modifier::REVERSED);
        let cursor_off = Style::default();
        self.name_input.set_cursor_line_style(Style::default());
        self.story_input.set_cursor_line_style(Style::default());
        self.name_input.set_cursor_style(if self.identity_focus == IdentityField::Name {
            cursor_on
        } else {
            cursor_off
        });
        self.story_input.set_cursor_style(if self.identity_focus == IdentityField::Story {
            cursor_on
        } else {
            cursor_off
        });
    }

    // ── Input ───────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &Event, session: &mut CreationSession) -> WizardResult {
        if session.step() == Step::Identity {
            return self.handle_identity_input(event, session);
        }

        let key = match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => *k,
            _ => return WizardResult::Ignored,
        };
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return WizardResult::Ignored;
        }

        match session.step() {
            Step::Identity => WizardResult::Ignored,
            Step::Avatar => match key.code {
                KeyCode::Char('o') | KeyCode::Enter => WizardResult::Action(Action::OpenAvatarPrompt),
                KeyCode::Char('g') => WizardResult::Action(Action::OpenGallery),
                _ => WizardResult::Ignored,
            },
            Step::SocialStats => self.handle_pool_input(key, session, Pool::Social),
            Step::PrimaryKnowledge => self.handle_knowledge_input(key, session),
            Step::SpecialStats => self.handle_pool_input(key, session, Pool::Special),
            Step::NecroNote => WizardResult::Ignored,
            Step::Summary => match key.code {
                KeyCode::Char('e') => WizardResult::Action(Action::Export),
                KeyCode::Char('r') => WizardResult::Action(Action::RequestReset),
                _ => WizardResult::Ignored,
            },
        }
    }

    fn handle_identity_input(&mut self, event: &Event, session: &mut CreationSession) -> WizardResult {
        if let Event::Paste(text) = event {
            match self.identity_focus {
                IdentityField::Name => {
                    self.name_input.insert_str(text.replace(['\n', '\r'], " "));
                }
                IdentityField::Story => {
                    self.story_input.insert_str(text);
                }
            }
            self.push_identity(session);
            return WizardResult::Consumed;
        }

        let key = match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => *k,
            _ => return WizardResult::Ignored,
        };

        // Navigation chords belong to the app.
        if key.modifiers.contains(KeyModifiers::CONTROL)
            || matches!(key.code, KeyCode::PageDown | KeyCode::PageUp | KeyCode::F(_))
        {
            return WizardResult::Ignored;
        }

        match (key.code, self.identity_focus) {
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.identity_focus = match self.identity_focus {
                    IdentityField::Name => IdentityField::Story,
                    IdentityField::Story => IdentityField::Name,
                };
                self.update_focus_styles();
            }
            (KeyCode::Enter, IdentityField::Name) => {
                self.identity_focus = IdentityField::Story;
                self.update_focus_styles();
            }
            (KeyCode::Esc, _) => return WizardResult::Ignored,
            (_, IdentityField::Name) => {
                self.name_input.input(event.clone());
            }
            (_, IdentityField::Story) => {
                self.story_input.input(event.clone());
            }
        }
        self.push_identity(session);
        WizardResult::Consumed
    }

    fn push_identity(&self, session: &mut CreationSession) {
        session.set_name(self.name_input.lines().join(" "));
        session.set_story(self.story_input.lines().join("\n"));
    }

    fn handle_pool_input(&mut self, key: KeyEvent, session: &mut CreationSession, which: Pool) -> WizardResult {
        let keys: Vec<String> = allocator::display_pool(session.record(), which)
            .keys()
            .map(str::to_string)
            .collect();
        if keys.is_empty() {
            return WizardResult::Ignored;
        }
        self.skill_cursor = self.skill_cursor.min(keys.len() - 1);
        let selected = keys[self.skill_cursor].as_str();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.skill_cursor = (self.skill_cursor + 1).min(keys.len() - 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.skill_cursor = self.skill_cursor.saturating_sub(1);
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+') => {
                session.increment_skill(which, selected);
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => {
                session.decrement_skill(which, selected);
            }
            KeyCode::Home => {
                session.set_skill(which, selected, 0);
            }
            KeyCode::End => {
                let record = session.record();
                let current = allocator::pool(record, which).get(selected);
                let room = allocator::points_remaining(record, which).min(u32::from(u8::MAX)) as u8;
                let target = current.saturating_add(room).min(which.max_value());
                session.set_skill(which, selected, target);
            }
            _ => return WizardResult::Ignored,
        }
        WizardResult::Consumed
    }

    fn handle_knowledge_input(&mut self, key: KeyEvent, session: &mut CreationSession) -> WizardResult {
        let count = PrimaryKnowledge::ALL.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.knowledge_cursor = (self.knowledge_cursor + 1).min(count - 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.knowledge_cursor = self.knowledge_cursor.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                session.choose_knowledge(PrimaryKnowledge::ALL[self.knowledge_cursor]);
            }
            KeyCode::Char(c @ '1'..='3') => {
                let idx = (c as usize) - ('1' as usize);
                self.knowledge_cursor = idx;
                session.choose_knowledge(PrimaryKnowledge::ALL[idx]);
            }
            _ => return WizardResult::Ignored,
        }
        WizardResult::Consumed
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect, session: &CreationSession) {
        let step = session.step();
        let block = Block::default()
            .title(format!(" {}. {} ", step.index() + 1, step.label()))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(if step == Step::NecroNote {
                Style::default().fg(theme::ACCENT)
            } else {
                theme::border_focused()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let record = session.record();
        match step {
            Step::Identity => self.render_identity(frame, inner, record),
            Step::Avatar => render_avatar(frame, inner, record),
            Step::SocialStats => self.render_pool(frame, inner, record, Pool::Social),
            Step::PrimaryKnowledge => self.render_knowledge(frame, inner, record),
            Step::SpecialStats => self.render_pool(frame, inner, record, Pool::Special),
            Step::NecroNote => render_necro_note(frame, inner),
            Step::Summary => render_summary(frame, inner, record),
        }
    }

    fn render_identity(&self, frame: &mut Frame, area: Rect, record: &CharacterRecord) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Name
            Constraint::Length(1), // Name counter
            Constraint::Min(4),    // Story
            Constraint::Length(1), // Story counter
        ])
        .split(area);

        frame.render_widget(&self.name_input, chunks[0]);
        frame.render_widget(
            counter_line(record.name.chars().count(), NAME_MIN_CHARS),
            chunks[1],
        );
        frame.render_widget(&self.story_input, chunks[2]);
        frame.render_widget(
            counter_line(record.story.chars().count(), STORY_MIN_CHARS),
            chunks[3],
        );
    }

    fn render_pool(&self, frame: &mut Frame, area: Rect, record: &CharacterRecord, which: Pool) {
        if which == Pool::Special && record.primary_knowledge.is_none() {
            frame.render_widget(
                Paragraph::new("Choose a primary knowledge first.").style(theme::muted()),
                area,
            );
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(2), // Budget
            Constraint::Min(1),    // Bars
        ])
        .split(area);

        let spent = allocator::points_spent(record, which);
        let limit = allocator::budget(record, which);
        let remaining_style = if spent == limit {
            Style::default().fg(theme::SUCCESS).add_modifier(Modifier::BOLD)
        } else {
            theme::highlight()
        };
        let header = Line::from(vec![
            Span::styled(format!(" {} ", which.label()), theme::heading()),
            Span::styled(format!("{spent}/{limit} "), remaining_style),
            Span::styled(
                format!("({} left, max {} per skill)", limit.saturating_sub(spent), which.max_value()),
                theme::muted(),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), chunks[0]);

        let color = match which {
            Pool::Social => theme::VERDANT,
            Pool::Special => theme::ARCANE,
        };
        let skills = allocator::display_pool(record, which);
        let bars = StatBars::new(&skills, which.max_value())
            .color(color)
            .selected(Some(self.skill_cursor.min(skills.len().saturating_sub(1))));
        frame.render_widget(bars, chunks[1]);
    }

    fn render_knowledge(&self, frame: &mut Frame, area: Rect, record: &CharacterRecord) {
        let items: Vec<ListItem> = PrimaryKnowledge::ALL
            .iter()
            .enumerate()
            .map(|(i, &k)| {
                let chosen = record.primary_knowledge == Some(k);
                let mark = if chosen { "✓" } else { " " };
                let style = if i == self.knowledge_cursor {
                    theme::highlight()
                } else {
                    Style::default().fg(theme::TEXT)
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("{} {mark} ", i + 1), theme::muted()),
                        Span::styled(k.label(), style),
                        Span::styled(format!("  {}", k.as_str()), theme::dim()),
                        Span::styled(
                            format!("  {} pts", allocator::special_budget(Some(k))),
                            theme::muted(),
                        ),
                    ]),
                    Line::from(Span::styled(format!("      {}", k.description()), theme::muted())),
                    Line::raw(""),
                ])
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(self.knowledge_cursor));
        let list = List::new(items).highlight_symbol("▸ ");
        frame.render_stateful_widget(list, area, &mut state);
    }
}

impl Default for WizardView {
    fn default() -> Self {
        Self::new()
    }
}

fn counter_line(count: usize, min: usize) -> Paragraph<'static> {
    let style = if count > min {
        Style::default().fg(theme::SUCCESS)
    } else {
        theme::dim()
    };
    Paragraph::new(Line::from(Span::styled(
        format!(" {count} characters (more than {min} needed)"),
        style,
    )))
}

fn render_avatar(frame: &mut Frame, area: Rect, record: &CharacterRecord) {
    let status = if record.has_avatar() {
        let badge = if record.is_official_avatar {
            Span::styled(" OFFICIAL ", theme::brand_badge())
        } else {
            Span::styled(" custom ", theme::muted())
        };
        Line::from(vec![
            Span::styled("  Portrait: ", theme::heading()),
            Span::raw(avatar::describe(&record.avatar)),
            Span::raw(" "),
            badge,
        ])
    } else {
        Line::from(vec![
            Span::styled("  Portrait: ", theme::heading()),
            Span::styled("none yet", theme::dim()),
        ])
    };

    let lines = vec![
        Line::raw(""),
        status,
        Line::raw(""),
        Line::from(vec![
            Span::styled("  o", theme::key_hint()),
            Span::raw("  upload an image file"),
        ]),
        Line::from(vec![
            Span::styled("  g", theme::key_hint()),
            Span::raw(format!(
                "  browse the {OFFICIAL_AVATAR_COUNT} official portraits in your browser"
            )),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "  Official portraits keep their file name (avatar_<n>.jpg) and are marked as such.",
            theme::muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_necro_note(frame: &mut Frame, area: Rect) {
    let warn = Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled("A word on Necropoder", warn)),
        Line::raw(""),
        Line::from(Span::styled(
            "Those who wield the power of the dead pay for it in corruption.",
            Style::default().fg(theme::TEXT),
        )),
        Line::from(Span::styled(
            "Every use feeds your sins; let them grow and the game master will take notice.",
            Style::default().fg(theme::TEXT),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Your five extra points come from the same well.",
            Style::default().fg(theme::ARCANE),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_summary(frame: &mut Frame, area: Rect, record: &CharacterRecord) {
    let cols = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).split(area);

    // Left: identity
    let knowledge = record
        .primary_knowledge
        .map(|k| format!("{} ({})", k.label(), k.as_str()))
        .unwrap_or_else(|| "none".to_string());
    let mut left = vec![
        Line::from(Span::styled(
            if record.name.is_empty() { "Unnamed".to_string() } else { record.name.clone() },
            theme::title(),
        )),
        Line::from(vec![
            Span::styled("Knowledge: ", theme::muted()),
            Span::raw(knowledge),
        ]),
        Line::from(vec![
            Span::styled("Portrait: ", theme::muted()),
            Span::raw(avatar::describe(&record.avatar)),
            Span::styled(
                if record.is_official_avatar { " (official)" } else { "" },
                Style::default().fg(theme::PRIMARY),
            ),
        ]),
        Line::raw(""),
    ];
    left.extend(record.story.split('\n').map(|l| Line::raw(l.to_string())));
    if let Some(sins) = &record.sin_stats {
        left.push(Line::raw(""));
        left.push(Line::from(Span::styled("Sins", theme::heading())));
        let listed: Vec<String> = sins.iter().map(|(k, v)| format!("{k} {v}")).collect();
        left.push(Line::from(Span::styled(listed.join("  "), theme::muted())));
    }
    frame.render_widget(
        Paragraph::new(left)
            .block(theme::block_default("Identity"))
            .wrap(Wrap { trim: false }),
        cols[0],
    );

    // Right: pools
    let social = allocator::display_pool(record, Pool::Social);
    let special = allocator::display_pool(record, Pool::Special);
    let rows = Layout::vertical([
        Constraint::Length(bordered_height(social.len())),
        Constraint::Min(3),
    ])
    .split(cols[1]);

    let social_block = theme::block_default("Social");
    let social_inner = social_block.inner(rows[0]);
    frame.render_widget(social_block, rows[0]);
    frame.render_widget(
        StatBars::new(&social, Pool::Social.max_value()).color(theme::VERDANT),
        social_inner,
    );

    let special_block = theme::block_default("Mastery");
    let special_inner = special_block.inner(rows[1]);
    frame.render_widget(special_block, rows[1]);
    frame.render_widget(
        StatBars::new(&special, Pool::Special.max_value()).color(theme::ARCANE),
        special_inner,
    );
}

/// Height of a bordered panel holding `rows` lines, saturating on huge imports.
fn bordered_height(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::character::AvatarUpload;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn type_str(view: &mut WizardView, session: &mut CreationSession, s: &str) {
        for c in s.chars() {
            view.handle_input(&key(KeyCode::Char(c)), session);
        }
    }

    fn session_at_social() -> CreationSession {
        let mut session = CreationSession::new();
        session.set_name("Sigurd");
        session.set_story("A smith's son from the fjords.");
        session.advance();
        session.set_avatar(AvatarUpload::from_bytes("avatar_7.jpg", b"x"));
        session.advance();
        assert_eq!(session.step(), Step::SocialStats);
        session
    }

    #[test]
    fn test_typing_updates_record() {
        let mut view = WizardView::new();
        let mut session = CreationSession::new();
        type_str(&mut view, &mut session, "Sigurd");
        assert_eq!(session.record().name, "Sigurd");

        view.handle_input(&key(KeyCode::Tab), &mut session);
        type_str(&mut view, &mut session, "Born in snow");
        assert_eq!(session.record().story, "Born in snow");
        assert_eq!(session.record().name, "Sigurd");
    }

    #[test]
    fn test_enter_on_name_moves_to_story() {
        let mut view = WizardView::new();
        let mut session = CreationSession::new();
        type_str(&mut view, &mut session, "Al");
        view.handle_input(&key(KeyCode::Enter), &mut session);
        assert_eq!(view.identity_focus, IdentityField::Story);
        assert_eq!(session.record().name, "Al");
    }

    #[test]
    fn test_page_keys_fall_through_on_identity() {
        let mut view = WizardView::new();
        let mut session = CreationSession::new();
        assert_eq!(
            view.handle_input(&key(KeyCode::PageDown), &mut session),
            WizardResult::Ignored
        );
    }

    #[test]
    fn test_pool_keys_adjust_selected_skill() {
        let mut view = WizardView::new();
        let mut session = session_at_social();
        view.handle_input(&key(KeyCode::Down), &mut session);
        view.handle_input(&key(KeyCode::Right), &mut session);
        view.handle_input(&key(KeyCode::Right), &mut session);
        assert_eq!(session.record().social_skills.get("Inteligencia"), 2);

        view.handle_input(&key(KeyCode::Left), &mut session);
        assert_eq!(session.record().social_skills.get("Inteligencia"), 1);

        view.handle_input(&key(KeyCode::End), &mut session);
        assert_eq!(session.record().social_skills.get("Inteligencia"), 10);
        view.handle_input(&key(KeyCode::Home), &mut session);
        assert_eq!(session.record().social_skills.get("Inteligencia"), 0);
    }

    #[test]
    fn test_end_fills_only_remaining_budget() {
        let mut view = WizardView::new();
        let mut session = session_at_social();
        for name in ["Carisma", "Inteligencia", "Romanticismo"] {
            session.set_skill(Pool::Social, name, 10);
        }
        session.set_skill(Pool::Social, "Comedia", 6);
        view.skill_cursor = 4;
        view.handle_input(&key(KeyCode::End), &mut session);
        assert_eq!(session.record().social_skills.get("Debate"), 4);
        assert_eq!(session.record().social_skills.total(), 40);
    }

    #[test]
    fn test_knowledge_number_keys() {
        let mut view = WizardView::new();
        let mut session = session_at_social();
        for name in ["Carisma", "Inteligencia", "Romanticismo", "Comedia"] {
            session.set_skill(Pool::Social, name, 10);
        }
        session.advance();
        assert_eq!(session.step(), Step::PrimaryKnowledge);

        view.handle_input(&key(KeyCode::Char('2')), &mut session);
        assert_eq!(session.record().primary_knowledge, Some(PrimaryKnowledge::Magic));
        assert_eq!(view.knowledge_cursor, 1);

        view.handle_input(&key(KeyCode::Down), &mut session);
        view.handle_input(&key(KeyCode::Enter), &mut session);
        assert_eq!(session.record().primary_knowledge, Some(PrimaryKnowledge::RangedCombat));
    }

    #[test]
    fn test_avatar_step_requests_prompt() {
        let mut view = WizardView::new();
        let mut session = CreationSession::new();
        session.set_name("Sigurd");
        session.set_story("A smith's son from the fjords.");
        session.advance();
        assert_eq!(
            view.handle_input(&key(KeyCode::Char('o')), &mut session),
            WizardResult::Action(Action::OpenAvatarPrompt)
        );
        assert_eq!(
            view.handle_input(&key(KeyCode::Char('g')), &mut session),
            WizardResult::Action(Action::OpenGallery)
        );
    }

    fn imported_at_special(special: &[(&str, u8)]) -> CreationSession {
        let mut record = CharacterRecord {
            name: "Elowen".to_string(),
            primary_knowledge: Some(PrimaryKnowledge::RangedCombat),
            ..CharacterRecord::default()
        };
        record.special_skills = special.iter().copied().collect();
        let mut session = CreationSession::new();
        session.import(record);
        assert!(session.retreat());
        assert_eq!(session.step(), Step::SpecialStats);
        session
    }

    fn render_view(view: &WizardView, session: &CreationSession) -> String {
        use ratatui::{backend::TestBackend, Terminal};

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                view.render(frame, area, session);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_partial_import_allows_missing_skills() {
        let mut view = WizardView::new();
        let mut session = imported_at_special(&[("Puntería", 5)]);
        view.enter_step(session.record());

        view.handle_input(&key(KeyCode::Down), &mut session);
        view.handle_input(&key(KeyCode::Right), &mut session);
        assert_eq!(session.record().special_skills.get("Agilidad"), 1);
        assert_eq!(session.record().special_skills.get("Puntería"), 5);

        for _ in 0..10 {
            view.handle_input(&key(KeyCode::Down), &mut session);
        }
        view.handle_input(&key(KeyCode::Right), &mut session);
        assert_eq!(
            session.record().special_skills.get("Cañones y armas de fuego poderosas"),
            1
        );
    }

    #[test]
    fn test_foreign_imported_skill_is_shown_but_locked() {
        let mut view = WizardView::new();
        let mut session = imported_at_special(&[("Alquimia", 3)]);
        view.enter_step(session.record());
        view.skill_cursor = 7;

        view.handle_input(&key(KeyCode::Right), &mut session);
        assert_eq!(session.record().special_skills.get("Alquimia"), 3);
        assert!(render_view(&view, &session).contains("Alquimia"));
    }

    #[test]
    fn test_empty_imported_pool_lists_knowledge_skills() {
        let view = WizardView::new();
        let session = imported_at_special(&[]);
        let screen = render_view(&view, &session);
        assert!(screen.contains("Puntería"));
        assert!(screen.contains("Agilidad"));
        assert!(!screen.contains("Choose a primary knowledge"));
    }

    #[test]
    fn test_bordered_height_saturates() {
        assert_eq!(bordered_height(6), 8);
        assert_eq!(bordered_height(usize::from(u16::MAX)), u16::MAX);
        assert_eq!(bordered_height(usize::MAX), u16::MAX);
    }

    #[test]
    fn test_summary_renders_oversized_import() {
        let view = WizardView::new();
        let mut record = CharacterRecord::default();
        let extra: Vec<String> = (0..70_000).map(|i| format!("Extra {i}")).collect();
        record.social_skills = extra.iter().map(|k| (k.as_str(), 1)).collect();
        let session = CreationSession::from_import(record);
        assert!(render_view(&view, &session).contains("Sheet"));
    }

    #[test]
    fn test_sync_from_restores_text() {
        let mut view = WizardView::new();
        let record = CharacterRecord {
            name: "Elowen".to_string(),
            story: "Line one\nLine two".to_string(),
            primary_knowledge: Some(PrimaryKnowledge::RangedCombat),
            ..CharacterRecord::default()
        };
        view.sync_from(&record);
        assert_eq!(view.name_input.lines().join(" "), "Elowen");
        assert_eq!(view.story_input.lines().join("\n"), "Line one\nLine two");
        assert_eq!(view.knowledge_cursor, 2);
    }
}
