//! Point allocation for the two skill pools.
//!
//! A change is accepted only when the pool total after the change stays within
//! the pool budget. Rejections are silent at the UI level: the control simply
//! keeps showing the previous value.

use super::types::{CharacterRecord, PrimaryKnowledge, SkillPool, SOCIAL_SKILLS};

/// Budget of the social pool.
pub const SOCIAL_BUDGET: u32 = 40;
/// Budget of the specialized pool for every knowledge except magic.
pub const SPECIAL_BUDGET: u32 = 40;
/// Budget of the specialized pool for magic users.
pub const MAGIC_SPECIAL_BUDGET: u32 = 45;

/// Per-skill ceiling of the social pool.
pub const SOCIAL_MAX: u8 = 10;
/// Per-skill ceiling of the specialized pool.
pub const SPECIAL_MAX: u8 = 15;

/// The two allocatable skill groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pool {
    Social,
    Special,
}

impl Pool {
    /// Upper bound of a single skill in this pool.
    pub fn max_value(self) -> u8 {
        match self {
            Pool::Social => SOCIAL_MAX,
            Pool::Special => SPECIAL_MAX,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Pool::Social => "Social Skills",
            Pool::Special => "Specialized Mastery",
        }
    }
}

/// Result of a [`set_skill_value`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    /// The pool now holds the requested value.
    Applied,
    /// The value was already in place.
    Unchanged,
    /// Total would exceed the budget; pool untouched.
    OverBudget,
    /// The skill does not belong to this pool.
    UnknownSkill,
}

impl Allocation {
    pub fn is_applied(self) -> bool {
        self == Allocation::Applied
    }
}

/// Budget for the specialized pool under a given knowledge choice.
pub fn special_budget(knowledge: Option<PrimaryKnowledge>) -> u32 {
    match knowledge {
        Some(PrimaryKnowledge::Magic) => MAGIC_SPECIAL_BUDGET,
        _ => SPECIAL_BUDGET,
    }
}

/// Budget of `pool` for this record.
pub fn budget(record: &CharacterRecord, pool: Pool) -> u32 {
    match pool {
        Pool::Social => SOCIAL_BUDGET,
        Pool::Special => special_budget(record.primary_knowledge),
    }
}

pub fn pool(record: &CharacterRecord, pool: Pool) -> &SkillPool {
    match pool {
        Pool::Social => &record.social_skills,
        Pool::Special => &record.special_skills,
    }
}

/// Skill names a pool accepts, in display order.
pub fn skill_names(record: &CharacterRecord, pool: Pool) -> &'static [&'static str] {
    match pool {
        Pool::Social => &SOCIAL_SKILLS,
        Pool::Special => record.special_skill_names(),
    }
}

/// Rows shown for a pool: every accepted skill in list order, missing ones at
/// zero, followed by any foreign keys an imported sheet carried.
///
/// Foreign rows are display-only; [`set_skill_value`] refuses them.
pub fn display_pool(record: &CharacterRecord, which: Pool) -> SkillPool {
    let stored = pool(record, which);
    let names = skill_names(record, which);
    let mut rows: Vec<(&str, u8)> = names.iter().map(|k| (*k, stored.get(k))).collect();
    rows.extend(stored.iter().filter(|(k, _)| !names.iter().any(|n| n == k)));
    rows.into_iter().collect()
}

pub fn points_spent(record: &CharacterRecord, which: Pool) -> u32 {
    pool(record, which).total()
}

/// Points left to spend; zero when an imported pool is already over budget.
pub fn points_remaining(record: &CharacterRecord, which: Pool) -> u32 {
    budget(record, which).saturating_sub(points_spent(record, which))
}

/// Set one skill, subject to the per-skill ceiling and the pool budget.
///
/// `value` is first clamped to `[0, max]` the way the slider bounds it. The
/// write is then accepted iff `total + (value - current) <= budget`.
pub fn set_skill_value(record: &mut CharacterRecord, which: Pool, key: &str, value: u8) -> Allocation {
    if !skill_names(record, which).contains(&key) {
        return Allocation::UnknownSkill;
    }

    let value = value.min(which.max_value());
    let limit = i64::from(budget(record, which));
    let target = match which {
        Pool::Social => &mut record.social_skills,
        Pool::Special => &mut record.special_skills,
    };

    let current = target.get(key);
    if current == value && target.contains(key) {
        return Allocation::Unchanged;
    }

    let delta = i64::from(value) - i64::from(current);
    if i64::from(target.total()) + delta > limit {
        log::debug!("Rejected {key}={value}: pool would exceed {limit}");
        return Allocation::OverBudget;
    }

    target.set(key, value);
    Allocation::Applied
}

/// Raise a skill by one point.
pub fn increment(record: &mut CharacterRecord, which: Pool, key: &str) -> Allocation {
    let current = pool(record, which).get(key);
    set_skill_value(record, which, key, current.saturating_add(1))
}

/// Lower a skill by one point.
pub fn decrement(record: &mut CharacterRecord, which: Pool, key: &str) -> Allocation {
    let current = pool(record, which).get(key);
    set_skill_value(record, which, key, current.saturating_sub(1))
}

/// Choose (or re-choose) the primary knowledge.
///
/// Always rebuilds the specialized pool at zero over the new skill list,
/// discarding earlier allocations even if the choice did not change.
pub fn choose_knowledge(record: &mut CharacterRecord, knowledge: PrimaryKnowledge) {
    record.primary_knowledge = Some(knowledge);
    record.special_skills = SkillPool::zeroed(knowledge.skills());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::character::types::{COMBAT_SKILLS, MAGIC_SKILLS, RANGED_SKILLS};

    fn social_at(values: [u8; 6]) -> CharacterRecord {
        let mut record = CharacterRecord::default();
        for (key, v) in SOCIAL_SKILLS.iter().zip(values) {
            record.social_skills.set(key, v);
        }
        record
    }

    #[test]
    fn test_budgets() {
        let mut record = CharacterRecord::default();
        assert_eq!(budget(&record, Pool::Social), 40);
        assert_eq!(budget(&record, Pool::Special), 40);
        choose_knowledge(&mut record, PrimaryKnowledge::Magic);
        assert_eq!(budget(&record, Pool::Special), 45);
        choose_knowledge(&mut record, PrimaryKnowledge::RangedCombat);
        assert_eq!(budget(&record, Pool::Special), 40);
    }

    #[test]
    fn test_set_within_budget_applies() {
        let mut record = CharacterRecord::default();
        assert_eq!(set_skill_value(&mut record, Pool::Social, "Carisma", 7), Allocation::Applied);
        assert_eq!(record.social_skills.get("Carisma"), 7);
        assert_eq!(points_remaining(&record, Pool::Social), 33);
    }

    #[test]
    fn test_set_over_budget_is_rejected() {
        let mut record = social_at([10, 10, 10, 10, 0, 0]);
        assert_eq!(set_skill_value(&mut record, Pool::Social, "Debate", 1), Allocation::OverBudget);
        assert_eq!(record.social_skills.get("Debate"), 0);
        assert_eq!(record.social_skills.total(), 40);
    }

    #[test]
    fn test_lowering_frees_points() {
        let mut record = social_at([10, 10, 10, 10, 0, 0]);
        assert!(set_skill_value(&mut record, Pool::Social, "Carisma", 5).is_applied());
        assert!(set_skill_value(&mut record, Pool::Social, "Debate", 5).is_applied());
        assert_eq!(record.social_skills.total(), 40);
    }

    #[test]
    fn test_value_clamped_to_field_max() {
        let mut record = CharacterRecord::default();
        set_skill_value(&mut record, Pool::Social, "Comedia", 200);
        assert_eq!(record.social_skills.get("Comedia"), SOCIAL_MAX);

        choose_knowledge(&mut record, PrimaryKnowledge::MeleeCombat);
        set_skill_value(&mut record, Pool::Special, "Fuerza", 99);
        assert_eq!(record.special_skills.get("Fuerza"), SPECIAL_MAX);
    }

    #[test]
    fn test_unknown_skill_rejected() {
        let mut record = CharacterRecord::default();
        assert_eq!(set_skill_value(&mut record, Pool::Social, "Fuerza", 1), Allocation::UnknownSkill);
        assert_eq!(set_skill_value(&mut record, Pool::Special, "Fuerza", 1), Allocation::UnknownSkill);
    }

    #[test]
    fn test_magic_budget_allows_45() {
        let mut record = CharacterRecord::default();
        choose_knowledge(&mut record, PrimaryKnowledge::Magic);
        for key in &MAGIC_SKILLS[..3] {
            assert!(set_skill_value(&mut record, Pool::Special, key, 15).is_applied());
        }
        assert_eq!(points_spent(&record, Pool::Special), 45);
        assert_eq!(increment(&mut record, Pool::Special, MAGIC_SKILLS[3]), Allocation::OverBudget);
    }

    #[test]
    fn test_choose_knowledge_resets_special_pool() {
        let mut record = CharacterRecord::default();
        choose_knowledge(&mut record, PrimaryKnowledge::MeleeCombat);
        set_skill_value(&mut record, Pool::Special, "Katanas", 9);

        choose_knowledge(&mut record, PrimaryKnowledge::MeleeCombat);
        assert_eq!(record.special_skills.total(), 0);
        let keys: Vec<&str> = record.special_skills.keys().collect();
        assert_eq!(keys, COMBAT_SKILLS.to_vec());

        choose_knowledge(&mut record, PrimaryKnowledge::Magic);
        assert_eq!(record.special_skills.len(), MAGIC_SKILLS.len());
        assert!(!record.special_skills.contains("Katanas"));
    }

    #[test]
    fn test_increment_decrement_saturate() {
        let mut record = CharacterRecord::default();
        assert_eq!(decrement(&mut record, Pool::Social, "Debate"), Allocation::Unchanged);
        for _ in 0..12 {
            increment(&mut record, Pool::Social, "Debate");
        }
        assert_eq!(record.social_skills.get("Debate"), SOCIAL_MAX);
    }

    #[test]
    fn test_display_pool_lists_missing_and_foreign_skills() {
        let mut record = CharacterRecord {
            primary_knowledge: Some(PrimaryKnowledge::RangedCombat),
            ..CharacterRecord::default()
        };
        record.special_skills = [("Alquimia", 4), ("Puntería", 5)].into_iter().collect();

        let rows = display_pool(&record, Pool::Special);
        let keys: Vec<&str> = rows.keys().collect();
        assert_eq!(keys.len(), RANGED_SKILLS.len() + 1);
        assert_eq!(&keys[..RANGED_SKILLS.len()], &RANGED_SKILLS[..]);
        assert_eq!(keys.last(), Some(&"Alquimia"));
        assert_eq!(rows.get("Puntería"), 5);
        assert_eq!(rows.get("Agilidad"), 0);
        assert_eq!(rows.total(), record.special_skills.total());
    }

    #[test]
    fn test_display_pool_empty_without_knowledge() {
        let record = CharacterRecord::default();
        assert!(display_pool(&record, Pool::Special).is_empty());
        assert_eq!(display_pool(&record, Pool::Social).len(), SOCIAL_SKILLS.len());
    }

    #[test]
    fn test_overfull_import_blocks_small_decrease() {
        // A payload above budget cannot be edited until it drops back under.
        let mut record = CharacterRecord::default();
        record.social_skills = SOCIAL_SKILLS.iter().map(|k| (*k, 9)).collect();
        assert_eq!(record.social_skills.total(), 54);
        assert_eq!(decrement(&mut record, Pool::Social, "Carisma"), Allocation::OverBudget);
        assert_eq!(points_remaining(&record, Pool::Social), 0);
    }
}
