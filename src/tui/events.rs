use crate::core::character::{AvatarUpload, CharacterError, CharacterRecord};

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug)]
pub enum AppEvent {
    /// Periodic tick for notification TTLs.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// Background portrait read finished.
    AvatarLoaded(Result<AvatarUpload, CharacterError>),
    /// Background sheet import finished.
    ImportLoaded(Result<CharacterRecord, CharacterError>),
    /// A resolved action to execute.
    Action(Action),
    /// Notification to display to the user.
    Notification(Notification),
    /// Request to quit the application.
    Quit,
}

/// High-level actions dispatched by the input mapper or the wizard view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Advance,
    Retreat,

    // Files
    OpenAvatarPrompt,
    OpenImportPrompt,
    OpenGallery,
    Export,

    // Reset
    RequestReset,
    ConfirmReset,
    CancelReset,

    // Modals
    ShowHelp,
    CloseHelp,
    CloseDevMode,

    // Application
    Quit,
}

/// Which background read is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePurpose {
    Avatar,
    Import,
}

impl FilePurpose {
    pub fn label(self) -> &'static str {
        match self {
            FilePurpose::Avatar => "Portrait image",
            FilePurpose::Import => "Character sheet (.json)",
        }
    }
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}
