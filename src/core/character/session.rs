//! Creation session: the current step plus the record being built.
//!
//! All edits from the front end go through [`CreationSession`].

use super::allocator::{self, Allocation, Pool};
use super::avatar::AvatarUpload;
use super::gate::{self, Blocker};
use super::steps::{next_visible_step, prev_visible_step, progress, ProgressMarker, Step};
use super::types::{CharacterRecord, PrimaryKnowledge};

/// Owned state of one character-creation run.
///
/// The record is only reachable mutably through the methods below, one per
/// field group, so every invariant of the pools is kept at this seam.
#[derive(Debug, Clone, Default)]
pub struct CreationSession {
    step: Step,
    record: CharacterRecord,
}

impl CreationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an imported sheet, opened on the summary.
    pub fn from_import(record: CharacterRecord) -> Self {
        Self {
            step: Step::Summary,
            record,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn record(&self) -> &CharacterRecord {
        &self.record
    }

    // ── Navigation ──────────────────────────────────────────────────────

    pub fn can_advance(&self) -> bool {
        self.step != Step::Summary && gate::can_advance(self.step, &self.record)
    }

    pub fn can_retreat(&self) -> bool {
        self.step != Step::Identity
    }

    pub fn blocker(&self) -> Option<Blocker> {
        gate::blocker(self.step, &self.record)
    }

    /// Move forward if the current step is complete. Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        let from = self.step;
        self.step = next_visible_step(from, &self.record);
        log::debug!("Wizard advanced {from} -> {}", self.step);
        self.step != from
    }

    /// Move back one visible step. Returns whether the step changed.
    pub fn retreat(&mut self) -> bool {
        let from = self.step;
        self.step = prev_visible_step(from, &self.record);
        if self.step != from {
            log::debug!("Wizard retreated {from} -> {}", self.step);
        }
        self.step != from
    }

    pub fn progress(&self) -> Vec<ProgressMarker> {
        progress(self.step, &self.record)
    }

    // ── Identity ────────────────────────────────────────────────────────

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.record.name = name.into();
    }

    pub fn set_story(&mut self, story: impl Into<String>) {
        self.record.story = story.into();
    }

    // ── Avatar ──────────────────────────────────────────────────────────

    /// Store an uploaded portrait. Replaces the avatar and its official flag together.
    pub fn set_avatar(&mut self, upload: AvatarUpload) {
        log::info!(
            "Avatar set from {} (official: {})",
            upload.file_name,
            upload.is_official
        );
        self.record.avatar = upload.data_uri;
        self.record.is_official_avatar = upload.is_official;
    }

    // ── Points ──────────────────────────────────────────────────────────

    pub fn choose_knowledge(&mut self, knowledge: PrimaryKnowledge) {
        log::info!("Primary knowledge chosen: {knowledge}");
        allocator::choose_knowledge(&mut self.record, knowledge);
    }

    pub fn set_skill(&mut self, pool: Pool, key: &str, value: u8) -> Allocation {
        allocator::set_skill_value(&mut self.record, pool, key, value)
    }

    pub fn increment_skill(&mut self, pool: Pool, key: &str) -> Allocation {
        allocator::increment(&mut self.record, pool, key)
    }

    pub fn decrement_skill(&mut self, pool: Pool, key: &str) -> Allocation {
        allocator::decrement(&mut self.record, pool, key)
    }

    // ── Whole-record operations ─────────────────────────────────────────

    /// Replace the record with an imported sheet and jump to the summary.
    pub fn import(&mut self, record: CharacterRecord) {
        self.record = record;
        self.step = Step::Summary;
    }

    /// Discard all progress.
    pub fn reset(&mut self) {
        log::info!("Wizard reset");
        *self = Self::new();
    }
}
