use eyre::WrapErr;
use serde_json::Value;

use models::{BackupFile, ComparatorSettings, Roster};

/// Serialize roster and settings as a pretty JSON backup file.
pub fn export_backup(roster: &Roster, settings: &ComparatorSettings) -> eyre::Result<Vec<u8>> {
    let backup = BackupFile {
        roster: roster.clone(),
        settings: settings.clone(),
    };
    serde_json::to_vec_pretty(&backup).wrap_err("serialize backup")
}

/// Parse an uploaded backup. Anything other than an object with the
/// expected keys is rejected with context so the caller can leave its
/// current state untouched.
pub fn parse_backup(bytes: &[u8]) -> eyre::Result<BackupFile> {
    let value: Value = serde_json::from_slice(bytes).wrap_err("parse backup json")?;

    let object = value
        .as_object()
        .ok_or_else(|| eyre::eyre!("backup root is not a JSON object"))?;
    for key in ["roster", "settings"] {
        if !object.contains_key(key) {
            return Err(eyre::eyre!("backup is missing key: {key}"));
        }
    }

    serde_json::from_value(value).wrap_err("decode backup fields")
}
