//! Property-based tests for sheet interchange
//!
//! Tests invariants:
//! - Export followed by import reproduces the record
//! - Export file names never contain path separators

use proptest::prelude::*;

use crate::core::character::allocator::{choose_knowledge, set_skill_value, Pool};
use crate::core::character::codec::{export_file_name, export_json, import_json};
use crate::core::character::types::{CharacterRecord, PrimaryKnowledge, SOCIAL_SKILLS};

fn arb_record() -> impl Strategy<Value = CharacterRecord> {
    (
        ".{0,40}",
        ".{0,200}",
        any::<bool>(),
        prop::collection::vec(0u8..=10, 6),
        prop::option::of(prop::sample::select(PrimaryKnowledge::ALL.to_vec())),
        prop::collection::vec(0u8..=15, 10),
        any::<bool>(),
    )
        .prop_map(|(name, story, official, social, knowledge, special, drop_sins)| {
            let mut record = CharacterRecord {
                name,
                story,
                avatar: if official { "avatar_3".to_string() } else { String::new() },
                is_official_avatar: official,
                ..CharacterRecord::default()
            };
            for (key, value) in SOCIAL_SKILLS.iter().zip(social) {
                set_skill_value(&mut record, Pool::Social, key, value);
            }
            if let Some(k) = knowledge {
                choose_knowledge(&mut record, k);
                for (key, value) in k.skills().iter().zip(special) {
                    set_skill_value(&mut record, Pool::Special, key, value);
                }
            }
            if drop_sins {
                record.sin_stats = None;
            }
            record
        })
}

proptest! {
    #[test]
    fn prop_export_import_roundtrip(record in arb_record()) {
        let json = export_json(&record).unwrap();
        let back = import_json(&json).unwrap();
        prop_assert_eq!(back, record);
    }

    #[test]
    fn prop_export_name_has_no_separators(name in ".{0,40}") {
        let record = CharacterRecord { name, ..CharacterRecord::default() };
        let file_name = export_file_name(&record);
        prop_assert!(!file_name.contains('/'));
        prop_assert!(!file_name.contains('\\'));
        prop_assert!(file_name.ends_with(".json"));
    }
}
