//! Horizontal skill bars for ratatui.
//!
//! One row per skill: label, a filled bar scaled to the per-skill ceiling,
//! and the numeric value. The selected row is marked and highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::core::character::SkillPool;
use crate::tui::theme;

const FILLED: char = '█';
const EMPTY: char = '░';

// ── Widget ──────────────────────────────────────────────────────────────────

/// Bars for every skill of a pool.
///
/// # Example
///
/// ```ignore
/// let bars = StatBars::new(&record.social_skills, 10)
///     .color(theme::VERDANT)
///     .selected(Some(2));
/// frame.render_widget(bars, area);
/// ```
pub struct StatBars<'a> {
    pool: &'a SkillPool,
    max: u8,
    selected: Option<usize>,
    color: Color,
}

impl<'a> StatBars<'a> {
    pub fn new(pool: &'a SkillPool, max: u8) -> Self {
        Self {
            pool,
            max: max.max(1),
            selected: None,
            color: theme::PRIMARY,
        }
    }

    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    fn label_width(&self) -> usize {
        self.pool
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0)
    }

    fn build_lines(&self, width: usize) -> Vec<Line<'a>> {
        let label_width = self.label_width();
        // marker + label + gap + bar + gap + value
        let bar_width = width.saturating_sub(2 + label_width + 1 + 3).max(1);

        self.pool
            .iter()
            .enumerate()
            .map(|(i, (name, value))| {
                let is_selected = self.selected == Some(i);
                let filled = (usize::from(value.min(self.max)) * bar_width) / usize::from(self.max);
                let marker = if is_selected { "▸ " } else { "  " };
                let label_style = if is_selected {
                    theme::highlight()
                } else {
                    theme::muted()
                };
                let bar_style = if is_selected {
                    Style::default().fg(self.color).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.color)
                };

                Line::from(vec![
                    Span::styled(marker, theme::highlight()),
                    Span::styled(format!("{name:<label_width$} "), label_style),
                    Span::styled(FILLED.to_string().repeat(filled), bar_style),
                    Span::styled(EMPTY.to_string().repeat(bar_width - filled), theme::dim()),
                    Span::styled(format!("{value:>3}"), label_style),
                ])
            })
            .collect()
    }
}

impl Widget for StatBars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines = self.build_lines(area.width as usize);
        let visible_height = area.height as usize;

        // Keep the selected row in view.
        let offset = match self.selected {
            Some(sel) if sel >= visible_height => sel + 1 - visible_height,
            _ => 0,
        };

        for (i, line) in lines.iter().skip(offset).take(visible_height).enumerate() {
            let y = area.y + i as u16;
            buf.set_line(area.x, y, line, area.width);
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
