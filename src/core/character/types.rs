//! Character Domain Types
//!
//! Defines the record accumulated by the creation wizard:
//! - [`PrimaryKnowledge`]: the single specialization choice
//! - [`SkillPool`]: an ordered group of numeric skills sharing one budget
//! - [`CharacterRecord`]: the aggregate exported to and imported from JSON
//!
//! # Serialization
//!
//! Field names and literal labels match the interchange files produced by the
//! web forge, so exports from either side can be imported by the other.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Skill Lists
// ============================================================================

/// Social skills, always present on every record.
pub const SOCIAL_SKILLS: [&str; 6] = [
    "Carisma",
    "Inteligencia",
    "Romanticismo",
    "Comedia",
    "Debate",
    "Persuasión",
];

pub const COMBAT_SKILLS: [&str; 7] = [
    "Fuerza",
    "Destreza",
    "Esgrima",
    "Espadas",
    "Dagas",
    "Mandobles",
    "Katanas",
];

pub const MAGIC_SKILLS: [&str; 10] = [
    "Lectura de libros/lenguas antiguas",
    "Uso de bastones y varitas",
    "Fuego",
    "Agua",
    "Tierra",
    "Viento",
    "Luz",
    "Necropoder",
    "Acresismo",
    "Sanación",
];

pub const RANGED_SKILLS: [&str; 7] = [
    "Puntería",
    "Agilidad",
    "Arcos ligeros",
    "Arcos pesados",
    "Armas de fuego ligeras",
    "Armas de fuego pesadas",
    "Cañones y armas de fuego poderosas",
];

/// Sins tracked for necromancers. No wizard control mutates them.
pub const SIN_STATS: [&str; 7] = [
    "Soberbia", "Gula", "Avaricia", "Lujuria", "Ira", "Envidia", "Pereza",
];

// ============================================================================
// Primary Knowledge
// ============================================================================

/// Specialization chosen once per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryKnowledge {
    #[serde(rename = "Combate cuerpo a cuerpo")]
    MeleeCombat,
    #[serde(rename = "Conocimiento de la magia")]
    Magic,
    #[serde(rename = "Fuego lejano")]
    RangedCombat,
}

impl PrimaryKnowledge {
    pub const ALL: [PrimaryKnowledge; 3] = [
        PrimaryKnowledge::MeleeCombat,
        PrimaryKnowledge::Magic,
        PrimaryKnowledge::RangedCombat,
    ];

    /// Literal label used in exported files.
    pub fn as_str(self) -> &'static str {
        match self {
            PrimaryKnowledge::MeleeCombat => "Combate cuerpo a cuerpo",
            PrimaryKnowledge::Magic => "Conocimiento de la magia",
            PrimaryKnowledge::RangedCombat => "Fuego lejano",
        }
    }

    /// Short English label for the terminal UI.
    pub fn label(self) -> &'static str {
        match self {
            PrimaryKnowledge::MeleeCombat => "Melee Combat",
            PrimaryKnowledge::Magic => "Magic",
            PrimaryKnowledge::RangedCombat => "Ranged Combat",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PrimaryKnowledge::MeleeCombat => "Steel, strength and the discipline of the blade.",
            PrimaryKnowledge::Magic => "The old tongues and the elements. Five extra points, at a price.",
            PrimaryKnowledge::RangedCombat => "Bows, powder and the patience of the hunter.",
        }
    }

    /// Specialized skills unlocked by this knowledge, in display order.
    pub fn skills(self) -> &'static [&'static str] {
        match self {
            PrimaryKnowledge::MeleeCombat => &COMBAT_SKILLS,
            PrimaryKnowledge::Magic => &MAGIC_SKILLS,
            PrimaryKnowledge::RangedCombat => &RANGED_SKILLS,
        }
    }
}

impl std::fmt::Display for PrimaryKnowledge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for PrimaryKnowledge {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        PrimaryKnowledge::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("Unknown primary knowledge: {}", s))
    }
}

// ============================================================================
// Skill Pool
// ============================================================================

/// Ordered mapping from skill name to points.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillPool(IndexMap<String, u8>);

impl SkillPool {
    /// Pool with every listed skill at zero.
    pub fn zeroed(keys: &[&str]) -> Self {
        Self(keys.iter().map(|k| (k.to_string(), 0)).collect())
    }

    /// Points on a skill; absent skills count as zero.
    pub fn get(&self, key: &str) -> u8 {
        self.0.get(key).copied().unwrap_or(0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Sum of all points in the pool.
    pub fn total(&self) -> u32 {
        self.0.values().map(|&v| u32::from(v)).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub(crate) fn set(&mut self, key: &str, value: u8) {
        match self.0.get_mut(key) {
            Some(slot) => *slot = value,
            None => {
                self.0.insert(key.to_string(), value);
            }
        }
    }
}

impl<'a> FromIterator<(&'a str, u8)> for SkillPool {
    fn from_iter<I: IntoIterator<Item = (&'a str, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

// ============================================================================
// Character Record
// ============================================================================

/// The character under construction.
///
/// Missing keys in an imported payload fall back to [`CharacterRecord::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterRecord {
    pub name: String,
    pub story: String,
    /// Gallery id (`avatar_7`) or a `data:` URI with the embedded image.
    pub avatar: String,
    /// Derived from the uploaded file name; see [`super::avatar::is_official_file_name`].
    pub is_official_avatar: bool,
    pub social_skills: SkillPool,
    pub primary_knowledge: Option<PrimaryKnowledge>,
    pub special_skills: SkillPool,
    /// Absent on sheets that never tracked sins; exported as `null` then.
    pub sin_stats: Option<SkillPool>,
}

impl Default for CharacterRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            story: String::new(),
            avatar: String::new(),
            is_official_avatar: false,
            social_skills: SkillPool::zeroed(&SOCIAL_SKILLS),
            primary_knowledge: None,
            special_skills: SkillPool::default(),
            sin_stats: Some(SkillPool::zeroed(&SIN_STATS)),
        }
    }
}

impl CharacterRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_magic(&self) -> bool {
        self.primary_knowledge == Some(PrimaryKnowledge::Magic)
    }

    pub fn has_avatar(&self) -> bool {
        !self.avatar.is_empty()
    }

    /// Skill names shown on the specialized step; empty until knowledge is chosen.
    pub fn special_skill_names(&self) -> &'static [&'static str] {
        self.primary_knowledge.map(PrimaryKnowledge::skills).unwrap_or(&[])
    }
}

// ============================================================================
// Tests
// ============================================================================
