//! Property-based tests for step sequencing
//!
//! Tests invariants:
//! - Retreat undoes advance for every step but the last
//! - The corruption step is reachable iff the knowledge is magic
//! - Progress numbering follows nominal positions

use proptest::prelude::*;

use crate::core::character::steps::{next_visible_step, prev_visible_step, progress, Step};
use crate::core::character::types::{CharacterRecord, PrimaryKnowledge};

fn arb_step() -> impl Strategy<Value = Step> {
    prop::sample::select(Step::ALL.to_vec())
}

fn arb_knowledge() -> impl Strategy<Value = Option<PrimaryKnowledge>> {
    prop::option::of(prop::sample::select(PrimaryKnowledge::ALL.to_vec()))
}

fn record_with(knowledge: Option<PrimaryKnowledge>) -> CharacterRecord {
    CharacterRecord {
        primary_knowledge: knowledge,
        ..CharacterRecord::default()
    }
}

proptest! {
    /// prev(next(s)) == s for every visible step that is not the last.
    #[test]
    fn prop_retreat_inverts_advance(step in arb_step(), knowledge in arb_knowledge()) {
        let record = record_with(knowledge);
        prop_assume!(step.is_visible(&record) && step != Step::Summary);
        let forward = next_visible_step(step, &record);
        prop_assert_eq!(prev_visible_step(forward, &record), step);
    }

    /// next(prev(s)) == s for every visible step that is not the first.
    #[test]
    fn prop_advance_inverts_retreat(step in arb_step(), knowledge in arb_knowledge()) {
        let record = record_with(knowledge);
        prop_assume!(step.is_visible(&record) && step != Step::Identity);
        let back = prev_visible_step(step, &record);
        prop_assert_eq!(next_visible_step(back, &record), step);
    }

    /// Traversal never lands on a hidden step.
    #[test]
    fn prop_transitions_stay_visible(step in arb_step(), knowledge in arb_knowledge()) {
        let record = record_with(knowledge);
        prop_assert!(next_visible_step(step, &record).is_visible(&record));
        prop_assume!(step.is_visible(&record));
        prop_assert!(prev_visible_step(step, &record).is_visible(&record));
    }

    /// Markers are numbered by nominal position and exactly one is active.
    #[test]
    fn prop_progress_markers(step in arb_step(), knowledge in arb_knowledge()) {
        let record = record_with(knowledge);
        prop_assume!(step.is_visible(&record));
        let markers = progress(step, &record);
        prop_assert!(markers.iter().all(|m| m.number == m.step.index() + 1));
        let active = markers
            .iter()
            .filter(|m| m.state == crate::core::character::MarkerState::Active)
            .count();
        prop_assert_eq!(active, 1);
        prop_assert_eq!(markers.len(), if record.is_magic() { 7 } else { 6 });
    }
}
