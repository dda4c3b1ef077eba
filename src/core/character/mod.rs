//! Character Creation Wizard
//!
//! Accumulates a character sheet over an ordered series of steps.
//!
//! # Overview
//!
//! 1. Identity - name and story
//! 2. Avatar - uploaded portrait, flagged official by file name
//! 3. Social Stats - 40 points over six social skills
//! 4. Primary Knowledge - melee, magic or ranged
//! 5. Special Stats - 40 points (45 for magic) over the knowledge's skills
//! 6. Necro Note - corruption warning, magic users only
//! 7. Summary - export or start over
//!
//! # Design Principles
//!
//! - **Gated**: each step must be complete before moving forward
//! - **Budgeted**: pool totals never exceed their budget through the allocator
//! - **Portable**: sheets round-trip through JSON unchanged

pub mod allocator;
pub mod avatar;
pub mod codec;
pub mod error;
pub mod gate;
pub mod session;
pub mod steps;
pub mod trigger;
pub mod types;

pub use allocator::{Allocation, Pool};
pub use avatar::AvatarUpload;
pub use error::CharacterError;
pub use session::CreationSession;
pub use steps::{MarkerState, ProgressMarker, Step};
pub use trigger::HiddenModeTrigger;
pub use types::{CharacterRecord, PrimaryKnowledge, SkillPool};
