use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::settings::ComparatorSettings;

/// Per-character state chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterEntry {
    pub rank: u32,
    pub active: bool,
}

/// Character name -> entry, ordered for deterministic output.
pub type Roster = BTreeMap<String, CharacterEntry>;

/// Raw roster row as stored in SQLite.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RosterRow {
    pub name: String,
    pub rank: i64,
    pub active: i64,
}

impl RosterRow {
    pub fn into_entry(self) -> (String, CharacterEntry) {
        (
            self.name,
            CharacterEntry {
                rank: self.rank.max(0) as u32,
                active: self.active != 0,
            },
        )
    }
}

/// JSON import/export schema. Integers only, so the file round-trips
/// without precision loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupFile {
    pub roster: Roster,
    pub settings: ComparatorSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_json_round_trips() {
        let mut roster = Roster::new();
        roster.insert(
            "ichika".to_string(),
            CharacterEntry {
                rank: 73,
                active: true,
            },
        );
        roster.insert(
            "saki".to_string(),
            CharacterEntry {
                rank: 12,
                active: false,
            },
        );

        let backup = BackupFile {
            roster,
            settings: ComparatorSettings::default(),
        };

        let bytes = serde_json::to_vec_pretty(&backup).unwrap();
        let parsed: BackupFile = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, backup);
    }

    #[test]
    fn roster_row_maps_sqlite_integers() {
        let row = RosterRow {
            name: "ena".to_string(),
            rank: 55,
            active: 1,
        };
        let (name, entry) = row.into_entry();
        assert_eq!(name, "ena");
        assert_eq!(entry.rank, 55);
        assert!(entry.active);
    }
}
