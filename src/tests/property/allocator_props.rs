//! Property-based tests for the point allocator
//!
//! Tests invariants:
//! - No sequence of writes pushes a pool over its budget
//! - No single skill ever exceeds its ceiling
//! - Choosing a knowledge always yields a zeroed pool over exactly its skills

use proptest::prelude::*;

use crate::core::character::allocator::{
    budget, choose_knowledge, decrement, increment, set_skill_value, Pool,
};
use crate::core::character::types::{CharacterRecord, PrimaryKnowledge, SOCIAL_SKILLS};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_knowledge() -> impl Strategy<Value = PrimaryKnowledge> {
    prop_oneof![
        Just(PrimaryKnowledge::MeleeCombat),
        Just(PrimaryKnowledge::Magic),
        Just(PrimaryKnowledge::RangedCombat),
    ]
}

fn arb_pool() -> impl Strategy<Value = Pool> {
    prop_oneof![Just(Pool::Social), Just(Pool::Special)]
}

#[derive(Debug, Clone)]
enum Op {
    Set { pool: Pool, slot: usize, value: u8 },
    Increment { pool: Pool, slot: usize },
    Decrement { pool: Pool, slot: usize },
    Choose(PrimaryKnowledge),
}

/// Skill slots are indices into the pool's key list; out-of-range slots
/// wrap so every op targets a real skill.
fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (arb_pool(), 0usize..16, any::<u8>())
            .prop_map(|(pool, slot, value)| Op::Set { pool, slot, value }),
        3 => (arb_pool(), 0usize..16).prop_map(|(pool, slot)| Op::Increment { pool, slot }),
        2 => (arb_pool(), 0usize..16).prop_map(|(pool, slot)| Op::Decrement { pool, slot }),
        1 => arb_knowledge().prop_map(Op::Choose),
    ]
}

fn key_for(record: &CharacterRecord, pool: Pool, slot: usize) -> Option<&'static str> {
    let names: &'static [&'static str] = match pool {
        Pool::Social => &SOCIAL_SKILLS,
        Pool::Special => record.special_skill_names(),
    };
    if names.is_empty() {
        None
    } else {
        Some(names[slot % names.len()])
    }
}

fn apply(record: &mut CharacterRecord, op: &Op) {
    match *op {
        Op::Choose(k) => choose_knowledge(record, k),
        Op::Set { pool, slot, value } => {
            if let Some(key) = key_for(record, pool, slot) {
                set_skill_value(record, pool, key, value);
            }
        }
        Op::Increment { pool, slot } => {
            if let Some(key) = key_for(record, pool, slot) {
                increment(record, pool, key);
            }
        }
        Op::Decrement { pool, slot } => {
            if let Some(key) = key_for(record, pool, slot) {
                decrement(record, pool, key);
            }
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Pools never exceed their budget, whatever the write sequence.
    #[test]
    fn prop_pools_stay_within_budget(ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut record = CharacterRecord::default();
        for op in &ops {
            apply(&mut record, op);
            prop_assert!(record.social_skills.total() <= budget(&record, Pool::Social));
            prop_assert!(record.special_skills.total() <= budget(&record, Pool::Special));
        }
    }

    /// No skill ever exceeds its per-skill ceiling.
    #[test]
    fn prop_skills_respect_ceiling(ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut record = CharacterRecord::default();
        for op in &ops {
            apply(&mut record, op);
        }
        prop_assert!(record.social_skills.iter().all(|(_, v)| v <= Pool::Social.max_value()));
        prop_assert!(record.special_skills.iter().all(|(_, v)| v <= Pool::Special.max_value()));
    }

    /// Choosing a knowledge zeroes the specialized pool over exactly its skill list.
    #[test]
    fn prop_knowledge_choice_resets_pool(
        ops in prop::collection::vec(arb_op(), 0..100),
        knowledge in arb_knowledge(),
    ) {
        let mut record = CharacterRecord::default();
        for op in &ops {
            apply(&mut record, op);
        }
        let social_before = record.social_skills.clone();

        choose_knowledge(&mut record, knowledge);

        let keys: Vec<&str> = record.special_skills.keys().collect();
        prop_assert_eq!(keys.as_slice(), knowledge.skills());
        prop_assert_eq!(record.special_skills.total(), 0);
        prop_assert_eq!(record.social_skills, social_before);
    }

    /// Writing the current value back is a no-op.
    #[test]
    fn prop_rewrite_is_stable(slot in 0usize..6, value in 0u8..=10) {
        let mut record = CharacterRecord::default();
        let key = SOCIAL_SKILLS[slot];
        set_skill_value(&mut record, Pool::Social, key, value);
        let snapshot = record.clone();
        set_skill_value(&mut record, Pool::Social, key, value);
        prop_assert_eq!(record, snapshot);
    }
}
