//! Centralized Gold & Crimson color theme for the Arcadia TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Gold: titles, active step, focused borders.
pub const PRIMARY: Color = Color::Rgb(0xC9, 0xA9, 0x62);
/// Crimson: warnings on the corruption step, destructive prompts.
pub const ACCENT: Color = Color::Rgb(0x8B, 0x2C, 0x2C);

// ── Pools ───────────────────────────────────────────────────────────────────

/// Purple: magic and the specialized pool.
pub const ARCANE: Color = Color::Rgb(0x9B, 0x4A, 0x9B);
/// Green: completed steps, social pool.
pub const VERDANT: Color = Color::Rgb(0x4A, 0x8B, 0x4A);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Base background.
pub const BG_BASE: Color = Color::Rgb(0x0A, 0x0A, 0x0A);
/// Surface: panels and modals.
pub const BG_SURFACE: Color = Color::Rgb(0x1A, 0x1A, 0x1A);
/// Border: unfocused frames.
pub const BORDER: Color = Color::Rgb(0x2A, 0x2A, 0x2A);

// ── Text ────────────────────────────────────────────────────────────────────

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xE8, 0xE8, 0xE8);
/// Muted text: secondary labels.
pub const TEXT_MUTED: Color = Color::Rgb(0xB0, 0xB0, 0xB0);
/// Dim text: pending steps, faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x60, 0x60, 0x60);

// ── Semantic ────────────────────────────────────────────────────────────────

pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
pub const SUCCESS: Color = VERDANT;
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);
pub const INFO: Color = Color::Rgb(0x42, 0xA5, 0xF5);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Gold bold text (titles, active items).
pub fn title() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

/// Focused border style.
pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

/// Unfocused border style.
pub fn border_default() -> Style {
    Style::default().fg(BORDER)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Dim text for disabled/faint items.
pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "PgDn:next").
pub fn key_hint() -> Style {
    Style::default().fg(PRIMARY)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Developer mode banner.
pub fn dev_banner() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block with focused styling.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_focused())
}

/// A bordered block with default (unfocused) styling.
pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_is_gold() {
        assert_eq!(PRIMARY, Color::Rgb(0xC9, 0xA9, 0x62));
    }

    #[test]
    fn test_accent_is_crimson() {
        assert_eq!(ACCENT, Color::Rgb(0x8B, 0x2C, 0x2C));
    }

    #[test]
    fn test_style_helpers_return_non_default() {
        assert_ne!(title(), Style::default());
        assert_ne!(heading(), Style::default());
        assert_ne!(highlight(), Style::default());
        assert_ne!(muted(), Style::default());
        assert_ne!(dev_banner(), Style::default());
    }
}
