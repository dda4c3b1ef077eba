//! Root layout computation for banner + header + progress + step panel + status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the title header.
pub const HEADER_HEIGHT: u16 = 3;
/// Below this width the progress row shows numbers only.
pub const COMPACT_PROGRESS_THRESHOLD: u16 = 90;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// Developer mode banner (None when inactive).
    pub banner: Option<Rect>,
    /// Title and current step.
    pub header: Rect,
    /// Step progress indicator.
    pub progress: Rect,
    /// Current step panel.
    pub main: Rect,
    /// Key hints for the current step.
    pub footer: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl AppLayout {
    /// Compute layout regions from the terminal area.
    ///
    /// `dev_mode`: reserve a banner row at the top.
    pub fn compute(area: Rect, dev_mode: bool) -> Self {
        let rows = Layout::vertical([
            Constraint::Length(u16::from(dev_mode)), // Banner
            Constraint::Length(HEADER_HEIGHT),       // Header
            Constraint::Length(1),                   // Progress
            Constraint::Min(1),                      // Step panel
            Constraint::Length(1),                   // Footer hints
            Constraint::Length(1),                   // Status bar
        ])
        .split(area);

        Self {
            banner: dev_mode.then_some(rows[0]),
            header: rows[1],
            progress: rows[2],
            main: rows[3],
            footer: rows[4],
            status: rows[5],
        }
    }

    /// Whether the progress row should drop step labels.
    pub fn compact_progress(area: Rect) -> bool {
        area.width < COMPACT_PROGRESS_THRESHOLD
    }
}
