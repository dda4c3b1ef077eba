use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, FilePurpose, Notification, NotificationLevel};
use super::layout::AppLayout;
use super::theme;
use super::views::file_prompt::{FilePrompt, PromptResult};
use super::views::wizard::{WizardResult, WizardView};
use crate::config::AppConfig;
use crate::core::character::{
    codec, AvatarUpload, CreationSession, HiddenModeTrigger, MarkerState, Step,
};

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// The character being built.
    pub session: CreationSession,
    /// Step panels.
    pub wizard: WizardView,
    /// Counts consecutive presses of the developer key.
    trigger: HiddenModeTrigger,
    /// Developer mode exposes sheet import.
    pub dev_mode: bool,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    notification_counter: u64,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Path prompt (Some when open).
    pub prompt: Option<FilePrompt>,
    /// Whether the reset confirmation is open.
    pub confirm_reset: bool,
    /// Background read in flight, if any.
    pub pending_read: Option<FilePurpose>,
    /// Receiver for backend events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Sender handed to background reads.
    event_tx: mpsc::UnboundedSender<AppEvent>,
    config: AppConfig,
}

impl AppState {
    pub fn new(
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
        config: AppConfig,
    ) -> Self {
        Self {
            running: true,
            session: CreationSession::new(),
            wizard: WizardView::new(),
            trigger: HiddenModeTrigger::default(),
            dev_mode: false,
            notifications: Vec::new(),
            notification_counter: 0,
            show_help: false,
            prompt: None,
            confirm_reset: false,
            pending_read: None,
            event_rx,
            event_tx,
            config,
        }
    }

    /// Start from a sheet loaded at startup.
    pub fn with_session(mut self, session: CreationSession) -> Self {
        self.wizard.sync_from(session.record());
        self.session = session;
        self
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            // Render
            terminal.draw(|frame| self.render(frame))?;

            // Select next event
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 0: every key press feeds the developer trigger
                self.observe_trigger(&crossterm_event);

                // Priority 1: Path prompt consumes all input when open
                if let Some(ref mut prompt) = self.prompt {
                    match prompt.handle_input(&crossterm_event) {
                        PromptResult::Consumed => {}
                        PromptResult::Submit(path) => {
                            let purpose = prompt.purpose();
                            self.prompt = None;
                            self.start_read(purpose, path);
                        }
                        PromptResult::Close => self.prompt = None,
                    }
                    return;
                }

                // Priority 2: Help modal
                if self.show_help {
                    if let Some(action) = self.map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 3: Reset confirmation
                if self.confirm_reset {
                    if let Some(action) = self.map_confirm_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 4: Current step panel
                match self.wizard.handle_input(&crossterm_event, &mut self.session) {
                    WizardResult::Consumed => return,
                    WizardResult::Action(action) => {
                        self.handle_action(action);
                        return;
                    }
                    WizardResult::Ignored => {}
                }

                // Priority 5: Global keybindings
                if let Some(action) = self.map_input_to_action(&crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.on_tick(),
            AppEvent::AvatarLoaded(result) => {
                self.pending_read = None;
                match result {
                    Ok(upload) => {
                        let message = if upload.is_official {
                            format!("Official portrait {} set", upload.file_name)
                        } else {
                            format!("Portrait {} set", upload.file_name)
                        };
                        self.session.set_avatar(upload);
                        self.push_notification(message, NotificationLevel::Success);
                    }
                    Err(e) => {
                        log::warn!("Avatar upload failed: {e}");
                        self.push_notification(
                            "Could not read that image".to_string(),
                            NotificationLevel::Error,
                        );
                    }
                }
            }
            AppEvent::ImportLoaded(result) => {
                self.pending_read = None;
                match result {
                    Ok(record) => {
                        self.wizard.sync_from(&record);
                        self.session.import(record);
                        self.push_notification(
                            "Character imported".to_string(),
                            NotificationLevel::Success,
                        );
                    }
                    Err(e) => {
                        log::warn!("Import failed: {e}");
                        self.push_notification(
                            "Error importing character file".to_string(),
                            NotificationLevel::Error,
                        );
                    }
                }
            }
            AppEvent::Notification(notification) => {
                self.push_notification(notification.message, notification.level);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    fn observe_trigger(&mut self, event: &Event) {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return;
        };
        let pressed = match code {
            KeyCode::Char(c) => Some(*c),
            _ => None,
        };
        if self.trigger.observe(pressed) && !self.dev_mode {
            self.dev_mode = true;
            log::info!("Developer mode enabled");
            self.push_notification(
                "Developer mode: F2 imports a sheet".to_string(),
                NotificationLevel::Info,
            );
        }
    }

    /// Map help modal input to action.
    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_confirm_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ConfirmReset),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CancelReset),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            // Ctrl+C → quit
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::CONTROL, KeyCode::Char('n')) => Some(Action::Advance),
            (KeyModifiers::CONTROL, KeyCode::Char('p')) => Some(Action::Retreat),
            (_, KeyCode::PageDown) => Some(Action::Advance),
            (_, KeyCode::PageUp) => Some(Action::Retreat),
            (_, KeyCode::F(1)) => Some(Action::ShowHelp),
            (_, KeyCode::F(2)) if self.dev_mode => Some(Action::OpenImportPrompt),
            (_, KeyCode::F(3)) if self.dev_mode => Some(Action::CloseDevMode),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('q')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => Some(Action::ShowHelp),
            _ => None,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Advance => {
                if self.session.advance() {
                    self.wizard.enter_step(self.session.record());
                } else if let Some(blocker) = self.session.blocker() {
                    log::debug!("Advance blocked at {}: {blocker}", self.session.step());
                }
            }
            Action::Retreat => {
                if self.session.retreat() {
                    self.wizard.enter_step(self.session.record());
                }
            }
            Action::OpenAvatarPrompt => self.open_prompt(FilePurpose::Avatar),
            Action::OpenImportPrompt => self.open_prompt(FilePurpose::Import),
            Action::OpenGallery => self.open_gallery(),
            Action::Export => self.export(),
            Action::RequestReset => self.confirm_reset = true,
            Action::ConfirmReset => {
                self.confirm_reset = false;
                self.session.reset();
                self.wizard.sync_from(self.session.record());
                self.push_notification("Starting over".to_string(), NotificationLevel::Info);
            }
            Action::CancelReset => self.confirm_reset = false,
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::CloseDevMode => {
                self.dev_mode = false;
                log::info!("Developer mode closed");
            }
        }
    }

    // ── Side effects ────────────────────────────────────────────────────

    fn open_prompt(&mut self, purpose: FilePurpose) {
        if self.pending_read.is_some() {
            self.push_notification(
                "Still reading the previous file".to_string(),
                NotificationLevel::Warning,
            );
            return;
        }
        self.prompt = Some(FilePrompt::new(purpose));
    }

    /// Read a file in the background; completion arrives as an event.
    fn start_read(&mut self, purpose: FilePurpose, path: PathBuf) {
        if self.pending_read.is_some() {
            return;
        }
        self.pending_read = Some(purpose);
        log::debug!("Reading {} for {:?}", path.display(), purpose);

        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match purpose {
                FilePurpose::Avatar => AppEvent::AvatarLoaded(AvatarUpload::read(&path).await),
                FilePurpose::Import => AppEvent::ImportLoaded(codec::read_import(&path).await),
            };
            let _ = tx.send(event);
        });
    }

    fn open_gallery(&mut self) {
        let url = self.config.gallery.url.clone();
        match open::that_detached(&url) {
            Ok(()) => {
                log::info!("Opened gallery {url}");
                self.push_notification(
                    "Gallery opened in your browser".to_string(),
                    NotificationLevel::Info,
                );
            }
            Err(e) => {
                log::warn!("Failed to open gallery {url}: {e}");
                self.push_notification(format!("Open {url} manually"), NotificationLevel::Warning);
            }
        }
    }

    fn export(&mut self) {
        let dir = self.config.export_dir();
        match codec::write_export(&dir, self.session.record()) {
            Ok(path) => {
                self.push_notification(
                    format!("Saved {}", path.display()),
                    NotificationLevel::Success,
                );
            }
            Err(e) => {
                log::error!("Export failed: {e}");
                self.push_notification(
                    "Could not save the character sheet".to_string(),
                    NotificationLevel::Error,
                );
            }
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notification_counter += 1;
        self.notifications.push(Notification {
            id: self.notification_counter,
            message,
            level,
            ttl_ticks: 100,
        });

        while self.notifications.len() > 3 {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::compute(area, self.dev_mode);

        if let Some(banner) = layout.banner {
            self.render_dev_banner(frame, banner);
        }
        self.render_header(frame, layout.header);
        self.render_progress(frame, layout.progress, AppLayout::compact_progress(area));
        self.wizard.render(frame, layout.main, &self.session);
        self.render_footer(frame, layout.footer);
        self.render_status_bar(frame, layout.status);

        // Overlays
        self.render_notifications(frame, area);

        if self.confirm_reset {
            self.render_confirm_reset(frame, area);
        }

        if let Some(ref prompt) = self.prompt {
            prompt.render(frame, area);
        }

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_dev_banner(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(" DEVELOPER MODE ", theme::dev_banner()),
            Span::raw("  "),
            Span::styled("F2", theme::key_hint()),
            Span::raw(":import sheet  "),
            Span::styled("F3", theme::key_hint()),
            Span::raw(":close"),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled(" PROJECT ARCADIA ", theme::title()),
            Span::styled("Character Forge", theme::muted()),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme::border_default()),
        );
        frame.render_widget(header, area);
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect, compact: bool) {
        let mut spans = Vec::new();
        for (i, marker) in self.session.progress().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ─ ", theme::dim()));
            }
            let (symbol, style) = match marker.state {
                MarkerState::Completed => ("✓", Style::default().fg(theme::SUCCESS)),
                MarkerState::Active => ("●", theme::highlight()),
                MarkerState::Pending => ("○", theme::dim()),
            };
            let text = if compact {
                format!("{symbol}{}", marker.number)
            } else {
                format!("{symbol} {} {}", marker.number, marker.step.label())
            };
            spans.push(Span::styled(text, style));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        if self.session.can_retreat() {
            spans.push(Span::styled("PgUp", theme::key_hint()));
            spans.push(Span::raw(":back  "));
        }
        if self.session.step() != Step::Summary {
            if self.session.can_advance() {
                spans.push(Span::styled("PgDn", theme::key_hint()));
                spans.push(Span::raw(":next  "));
            } else if let Some(blocker) = self.session.blocker() {
                spans.push(Span::styled("PgDn", theme::dim()));
                spans.push(Span::styled(format!(":next ({blocker})  "), theme::dim()));
            }
        }

        let step_hints: &[(&str, &str)] = match self.session.step() {
            Step::Identity => &[("Tab", "switch field")],
            Step::Avatar => &[("o", "upload"), ("g", "gallery")],
            Step::SocialStats | Step::SpecialStats => {
                &[("↑↓", "select"), ("←→", "adjust"), ("Home/End", "min/fill")]
            }
            Step::PrimaryKnowledge => &[("1-3", "choose"), ("↑↓ Enter", "select")],
            Step::NecroNote => &[],
            Step::Summary => &[("e", "export"), ("r", "start over")],
        };
        for (key, desc) in step_hints {
            spans.push(Span::styled(*key, theme::key_hint()));
            spans.push(Span::raw(format!(":{desc}  ")));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let reading = match self.pending_read {
            Some(FilePurpose::Avatar) => Span::styled("reading portrait…", theme::muted()),
            Some(FilePurpose::Import) => Span::styled("importing…", theme::muted()),
            None => Span::styled("ready", theme::dim()),
        };

        let status = Line::from(vec![
            Span::styled(" ARCADIA ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(
                self.session.step().label(),
                Style::default()
                    .fg(theme::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            reading,
            Span::raw(" │ "),
            Span::styled("F1", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("Ctrl+C", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = self.notifications.len() as u16;
        let x = area.width.saturating_sub(max_width + 1);
        let y = 1;

        let notification_area = Rect::new(x, y, max_width, height.min(area.height));

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).bold()),
                    Span::raw(&n.message),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme::BG_SURFACE)),
            notification_area,
        );
    }

    fn render_confirm_reset(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(50, 30, area);
        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                "Start over?",
                Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::raw("All progress on this character will be lost."),
            Line::raw(""),
            Line::from(vec![
                Span::styled("y", Style::default().fg(theme::ERROR).bold()),
                Span::raw(" to confirm, "),
                Span::styled("n/Esc", Style::default().fg(theme::SUCCESS).bold()),
                Span::raw(" to cancel"),
            ]),
        ];
        let block = Block::default()
            .title(" Reset ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::BG_SURFACE));

        frame.render_widget(Clear, modal);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(block),
            modal,
        );
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let keybindings = vec![
            ("Global:", ""),
            ("PgDn / Ctrl+N", "Next step (when complete)"),
            ("PgUp / Ctrl+P", "Previous step"),
            ("F1", "Toggle this help"),
            ("Ctrl+C", "Quit"),
            ("q", "Quit (outside text fields)"),
            ("", ""),
            ("Identity:", ""),
            ("Tab", "Switch between name and story"),
            ("Enter", "Name → story"),
            ("", ""),
            ("Portrait:", ""),
            ("o", "Upload an image file"),
            ("g", "Open the official gallery"),
            ("", ""),
            ("Skills:", ""),
            ("↑↓ / j k", "Select skill"),
            ("←→ / h l", "Remove / add a point"),
            ("Home / End", "Clear / fill up to the limit"),
            ("", ""),
            ("Knowledge:", ""),
            ("1-3", "Choose directly"),
            ("↑↓ Enter", "Choose highlighted"),
            ("", ""),
            ("Sheet:", ""),
            ("e", "Export to JSON"),
            ("r", "Start over"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", theme::title())),
            Line::raw(""),
        ];

        for (key, desc) in &keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {key}"), theme::title())));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<18}", key),
                        Style::default().fg(theme::TEXT).bold(),
                    ),
                    Span::styled(*desc, theme::muted()),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("F1", Style::default().fg(theme::PRIMARY).bold()),
            Span::raw(" or "),
            Span::styled("Esc", Style::default().fg(theme::PRIMARY).bold()),
            Span::raw(" to close"),
        ]));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_SURFACE));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
