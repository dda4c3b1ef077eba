//! Completion predicates that enable the forward control.
//!
//! Allocation steps require the budget to be spent exactly, not merely
//! respected.

use super::allocator::{budget, points_spent, Pool};
use super::steps::Step;
use super::types::CharacterRecord;

/// Minimum name length, exclusive.
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum story length, exclusive.
pub const STORY_MIN_CHARS: usize = 20;

/// Why the forward control is inert. Used only for on-screen hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocker {
    NameTooShort,
    StoryTooShort,
    MissingAvatar,
    PointsUnspent { pool: Pool, remaining: u32 },
    PointsOverspent { pool: Pool, excess: u32 },
    MissingKnowledge,
}

impl std::fmt::Display for Blocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Blocker::NameTooShort => write!(f, "name needs more than {NAME_MIN_CHARS} characters"),
            Blocker::StoryTooShort => write!(f, "story needs more than {STORY_MIN_CHARS} characters"),
            Blocker::MissingAvatar => write!(f, "choose a portrait"),
            Blocker::PointsUnspent { remaining, .. } => write!(f, "{remaining} points left to spend"),
            Blocker::PointsOverspent { excess, .. } => write!(f, "{excess} points over budget"),
            Blocker::MissingKnowledge => write!(f, "choose a primary knowledge"),
        }
    }
}

/// First unmet requirement of `step`, if any.
pub fn blocker(step: Step, record: &CharacterRecord) -> Option<Blocker> {
    match step {
        Step::Identity => {
            if record.name.chars().count() <= NAME_MIN_CHARS {
                Some(Blocker::NameTooShort)
            } else if record.story.chars().count() <= STORY_MIN_CHARS {
                Some(Blocker::StoryTooShort)
            } else {
                None
            }
        }
        Step::Avatar => (!record.has_avatar()).then_some(Blocker::MissingAvatar),
        Step::SocialStats => pool_blocker(record, Pool::Social),
        Step::PrimaryKnowledge => record
            .primary_knowledge
            .is_none()
            .then_some(Blocker::MissingKnowledge),
        Step::SpecialStats => pool_blocker(record, Pool::Special),
        Step::NecroNote | Step::Summary => None,
    }
}

/// Whether the user may move forward from `step`.
pub fn can_advance(step: Step, record: &CharacterRecord) -> bool {
    blocker(step, record).is_none()
}

fn pool_blocker(record: &CharacterRecord, pool: Pool) -> Option<Blocker> {
    let spent = points_spent(record, pool);
    let limit = budget(record, pool);
    if spent < limit {
        Some(Blocker::PointsUnspent { pool, remaining: limit - spent })
    } else if spent > limit {
        Some(Blocker::PointsOverspent { pool, excess: spent - limit })
    } else {
        None
    }
}
