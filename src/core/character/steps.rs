//! Step sequencing for the creation wizard.
//!
//! The nominal order is fixed. `NecroNote` is only visible to magic users and
//! is skipped transparently in both directions otherwise.

use serde::{Deserialize, Serialize};

use super::types::CharacterRecord;

/// Wizard steps in nominal order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Step {
    #[default]
    Identity,
    Avatar,
    SocialStats,
    PrimaryKnowledge,
    SpecialStats,
    NecroNote,
    Summary,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::Identity,
        Step::Avatar,
        Step::SocialStats,
        Step::PrimaryKnowledge,
        Step::SpecialStats,
        Step::NecroNote,
        Step::Summary,
    ];

    /// Zero-based position in the nominal order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Step::Identity => "identity",
            Step::Avatar => "avatar",
            Step::SocialStats => "social_stats",
            Step::PrimaryKnowledge => "primary_knowledge",
            Step::SpecialStats => "special_stats",
            Step::NecroNote => "necro_note",
            Step::Summary => "summary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Identity => "Identity",
            Step::Avatar => "Portrait",
            Step::SocialStats => "Social",
            Step::PrimaryKnowledge => "Knowledge",
            Step::SpecialStats => "Mastery",
            Step::NecroNote => "Corruption",
            Step::Summary => "Sheet",
        }
    }

    /// Next step in nominal order, ignoring visibility.
    pub fn next(self) -> Option<Step> {
        Step::ALL.get(self.index() + 1).copied()
    }

    /// Previous step in nominal order, ignoring visibility.
    pub fn previous(self) -> Option<Step> {
        self.index().checked_sub(1).map(|i| Step::ALL[i])
    }

    /// Whether the step takes part in traversal for this record.
    pub fn is_visible(self, record: &CharacterRecord) -> bool {
        self != Step::NecroNote || record.is_magic()
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Forward transition. Returns `step` unchanged at the final step.
pub fn next_visible_step(step: Step, record: &CharacterRecord) -> Step {
    match step.next() {
        Some(Step::NecroNote) if !record.is_magic() => Step::Summary,
        Some(next) => next,
        None => step,
    }
}

/// Backward transition. Returns `step` unchanged at the first step.
pub fn prev_visible_step(step: Step, record: &CharacterRecord) -> Step {
    if step == Step::Summary && !record.is_magic() {
        return Step::SpecialStats;
    }
    step.previous().unwrap_or(step)
}

/// Marker state in the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState {
    Completed,
    Active,
    Pending,
}

/// One visible step in the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressMarker {
    pub step: Step,
    /// 1-based nominal position, so numbering keeps a gap when a step is hidden.
    pub number: usize,
    pub state: MarkerState,
}

/// Progress markers for every visible step.
pub fn progress(current: Step, record: &CharacterRecord) -> Vec<ProgressMarker> {
    Step::ALL
        .into_iter()
        .filter(|s| s.is_visible(record))
        .map(|step| {
            let state = if step == current {
                MarkerState::Active
            } else if current.index() > step.index() {
                MarkerState::Completed
            } else {
                MarkerState::Pending
            };
            ProgressMarker {
                step,
                number: step.index() + 1,
                state,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::character::allocator::choose_knowledge;
    use crate::core::character::types::PrimaryKnowledge;

    fn with_knowledge(k: PrimaryKnowledge) -> CharacterRecord {
        let mut record = CharacterRecord::default();
        choose_knowledge(&mut record, k);
        record
    }

    #[test]
    fn test_nominal_order() {
        assert_eq!(Step::Identity.next(), Some(Step::Avatar));
        assert_eq!(Step::Summary.next(), None);
        assert_eq!(Step::Identity.previous(), None);
        assert_eq!(Step::Summary.previous(), Some(Step::NecroNote));
    }

    #[test]
    fn test_forward_skips_necro_note_without_magic() {
        let record = with_knowledge(PrimaryKnowledge::MeleeCombat);
        assert_eq!(next_visible_step(Step::SpecialStats, &record), Step::Summary);
        assert_eq!(prev_visible_step(Step::Summary, &record), Step::SpecialStats);
    }

    #[test]
    fn test_forward_enters_necro_note_with_magic() {
        let record = with_knowledge(PrimaryKnowledge::Magic);
        assert_eq!(next_visible_step(Step::SpecialStats, &record), Step::NecroNote);
        assert_eq!(next_visible_step(Step::NecroNote, &record), Step::Summary);
        assert_eq!(prev_visible_step(Step::Summary, &record), Step::NecroNote);
        assert_eq!(prev_visible_step(Step::NecroNote, &record), Step::SpecialStats);
    }

    #[test]
    fn test_unset_knowledge_skips_necro_note() {
        let record = CharacterRecord::default();
        assert_eq!(next_visible_step(Step::SpecialStats, &record), Step::Summary);
    }

    #[test]
    fn test_boundaries_are_fixed_points() {
        let record = CharacterRecord::default();
        assert_eq!(next_visible_step(Step::Summary, &record), Step::Summary);
        assert_eq!(prev_visible_step(Step::Identity, &record), Step::Identity);
    }

    #[test]
    fn test_progress_hides_necro_note() {
        let record = with_knowledge(PrimaryKnowledge::RangedCombat);
        let markers = progress(Step::SocialStats, &record);
        assert_eq!(markers.len(), 6);
        assert!(markers.iter().all(|m| m.step != Step::NecroNote));
        assert_eq!(markers.last().map(|m| m.number), Some(7));
        assert_eq!(markers[0].state, MarkerState::Completed);
        assert_eq!(markers[2].state, MarkerState::Active);
        assert_eq!(markers[3].state, MarkerState::Pending);
    }

    #[test]
    fn test_progress_shows_necro_note_for_magic() {
        let record = with_knowledge(PrimaryKnowledge::Magic);
        let markers = progress(Step::Summary, &record);
        assert_eq!(markers.len(), 7);
        assert!(markers[..6].iter().all(|m| m.state == MarkerState::Completed));
    }

    #[test]
    fn test_step_serializes_screaming_snake() {
        let json = serde_json::to_string(&Step::PrimaryKnowledge).unwrap();
        assert_eq!(json, "\"PRIMARY_KNOWLEDGE\"");
    }
}
