use serde::{Deserialize, Serialize};

use crate::{DisplayMetric, NumericMode};

/// Comparator settings blob persisted as JSON in the key-value store and
/// included in backup files. Unknown levels are caught at table build,
/// not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparatorSettings {
    pub skill_level: u8,
    pub rank_min: u32,
    pub rank_max: u32,
    pub rank_increment: u32,
    pub auto_start: u32,
    pub auto_end: u32,
    pub auto_increment: u32,
    pub numeric_mode: NumericMode,
    pub display_metric: DisplayMetric,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
}

impl Default for ComparatorSettings {
    fn default() -> Self {
        Self {
            skill_level: 1,
            rank_min: crate::RANK_MIN,
            rank_max: crate::RANK_MAX,
            rank_increment: 5,
            auto_start: 80,
            auto_end: 140,
            auto_increment: 5,
            numeric_mode: NumericMode::Integer,
            display_metric: DisplayMetric::Highest,
            multiplier: None,
        }
    }
}
