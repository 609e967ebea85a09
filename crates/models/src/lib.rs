use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub mod roster;
pub mod settings;

pub use roster::{BackupFile, CharacterEntry, Roster, RosterRow};
pub use settings::ComparatorSettings;

pub const SKILL_LEVEL_MIN: u8 = 1;
pub const SKILL_LEVEL_MAX: u8 = 4;

pub const RANK_MIN: u32 = 1;
pub const RANK_MAX: u32 = 100;

pub const TARGET_VALUE_MIN: u32 = 1;
pub const TARGET_VALUE_MAX: u32 = 200;

/// Outcome of an after-vs-before skill comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
pub enum Winner {
    #[serde(rename = "AFTER")]
    #[strum(serialize = "AFTER")]
    After,
    #[serde(rename = "BEFORE")]
    #[strum(serialize = "BEFORE")]
    Before,
    #[serde(rename = "DRAW")]
    #[strum(serialize = "DRAW")]
    Draw,
}

impl Winner {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::After => "AFTER",
            Self::Before => "BEFORE",
            Self::Draw => "DRAW",
        }
    }
}

/// Whether the half-division terms of the skill curves are floored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(ascii_case_insensitive)]
pub enum NumericMode {
    #[serde(rename = "integer")]
    #[strum(serialize = "integer")]
    Integer,
    #[serde(rename = "fractional")]
    #[strum(serialize = "fractional")]
    Fractional,
}

/// Which projection of a computed cell is shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(ascii_case_insensitive)]
pub enum DisplayMetric {
    #[serde(rename = "highest")]
    #[strum(serialize = "highest")]
    Highest,
    #[serde(rename = "difference")]
    #[strum(serialize = "difference")]
    Difference,
}

/// Per-skill-level curve constants. Read-only reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLevelProfile {
    pub after_base: u32,
    pub after_max: u32,
    pub before_base: u32,
    pub before_max: u32,
}

/// Requested skill level has no entry in the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSkillLevel(pub u8);

impl std::fmt::Display for InvalidSkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid skill level: {}", self.0)
    }
}

impl std::error::Error for InvalidSkillLevel {}

/// Mapping skill level -> curve constants, supplied at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevelTable {
    entries: BTreeMap<u8, SkillLevelProfile>,
}

impl SkillLevelTable {
    pub fn from_entries(entries: impl IntoIterator<Item = (u8, SkillLevelProfile)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Built-in BloomFes constants for skill levels 1-4.
    pub fn bloomfes_defaults() -> Self {
        Self::from_entries([
            (
                1,
                SkillLevelProfile {
                    after_base: 90,
                    after_max: 140,
                    before_base: 60,
                    before_max: 120,
                },
            ),
            (
                2,
                SkillLevelProfile {
                    after_base: 95,
                    after_max: 145,
                    before_base: 65,
                    before_max: 125,
                },
            ),
            (
                3,
                SkillLevelProfile {
                    after_base: 100,
                    after_max: 150,
                    before_base: 70,
                    before_max: 130,
                },
            ),
            (
                4,
                SkillLevelProfile {
                    after_base: 110,
                    after_max: 160,
                    before_base: 80,
                    before_max: 140,
                },
            ),
        ])
    }

    pub fn profile(&self, level: u8) -> Result<SkillLevelProfile, InvalidSkillLevel> {
        self.entries
            .get(&level)
            .copied()
            .ok_or(InvalidSkillLevel(level))
    }

    /// Levels present in the table, ascending.
    pub fn levels(&self) -> Vec<u8> {
        self.entries.keys().copied().collect()
    }
}

/// One evaluation of both curves in a single numeric mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillPair {
    pub after: f64,
    pub before: f64,
}

/// Comparison derived from a [`SkillPair`]. `difference` is signed:
/// positive means "before" leads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub winner: Winner,
    pub highest: f64,
    pub difference: f64,
}

/// Multiplier-scaled projections, kept alongside the unscaled values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledVerdict {
    pub highest: f64,
    pub difference: f64,
}

/// Full comparison for one (rank, target) evaluation in one numeric mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillComparison {
    pub after: f64,
    pub before: f64,
    pub winner: Winner,
    pub highest: f64,
    pub difference: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaled: Option<ScaledVerdict>,
}

/// Both numeric modes of one table cell, computed independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellValues {
    pub integer: SkillComparison,
    pub fractional: SkillComparison,
}

/// A table cell: either a computed comparison or an explicit blank
/// (sentinel or unparseable column).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Blank,
    Value(CellValues),
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    pub fn values(&self) -> Option<&CellValues> {
        match self {
            Self::Blank => None,
            Self::Value(v) => Some(v),
        }
    }
}
