use std::str::FromStr;

use eyre::WrapErr;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};

use models::{BackupFile, CharacterEntry, ComparatorSettings, Roster, RosterRow, RANK_MAX, RANK_MIN};

mod backup;

pub use backup::{export_backup, parse_backup};

pub type SqlitePool = Pool<Sqlite>;

const SETTINGS_KEY: &str = "comparator_settings";

pub async fn connect(database_url: &str) -> eyre::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .wrap_err("parse database url")?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .wrap_err("connect sqlite")
}

pub async fn migrate(pool: &SqlitePool) -> eyre::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .wrap_err("run migrations")?;
    Ok(())
}

/// Insert or update a character's rank. New characters start active;
/// an existing character keeps its active flag. Rank is clamped to the
/// valid 1..=100 domain at this boundary.
pub async fn upsert_character(
    pool: &SqlitePool,
    name: &str,
    rank: u32,
    updated_at: i64,
) -> eyre::Result<()> {
    let rank = i64::from(rank.clamp(RANK_MIN, RANK_MAX));

    sqlx::query(
        r#"
INSERT INTO characters (name, rank, active, updated_at)
VALUES (?1, ?2, 1, ?3)
ON CONFLICT(name) DO UPDATE SET
  rank = excluded.rank,
  updated_at = excluded.updated_at
"#,
    )
    .bind(name)
    .bind(rank)
    .bind(updated_at)
    .execute(pool)
    .await
    .wrap_err("upsert character")?;
    Ok(())
}

/// Toggle a character's active flag. Returns false when no such
/// character exists.
pub async fn set_active(
    pool: &SqlitePool,
    name: &str,
    active: bool,
    updated_at: i64,
) -> eyre::Result<bool> {
    let result = sqlx::query("UPDATE characters SET active = ?2, updated_at = ?3 WHERE name = ?1")
        .bind(name)
        .bind(i64::from(active))
        .bind(updated_at)
        .execute(pool)
        .await
        .wrap_err("set character active flag")?;
    Ok(result.rows_affected() > 0)
}

pub async fn remove_character(pool: &SqlitePool, name: &str) -> eyre::Result<bool> {
    let result = sqlx::query("DELETE FROM characters WHERE name = ?1")
        .bind(name)
        .execute(pool)
        .await
        .wrap_err("remove character")?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_roster(pool: &SqlitePool) -> eyre::Result<Roster> {
    let rows = sqlx::query_as::<_, RosterRow>(
        "SELECT name, rank, active FROM characters ORDER BY name",
    )
    .fetch_all(pool)
    .await
    .wrap_err("list roster")?;

    Ok(rows.into_iter().map(RosterRow::into_entry).collect())
}

/// Apply a parsed backup in one transaction: the roster is replaced and
/// the settings blob updated together, or neither is. A failure anywhere
/// rolls back and leaves prior state untouched.
pub async fn import_backup(
    pool: &SqlitePool,
    backup: &BackupFile,
    updated_at: i64,
) -> eyre::Result<()> {
    let mut tx = pool.begin().await.wrap_err("begin transaction")?;

    sqlx::query("DELETE FROM characters")
        .execute(&mut *tx)
        .await
        .wrap_err("clear characters")?;

    for (name, entry) in &backup.roster {
        insert_character(&mut tx, name, entry, updated_at).await?;
    }

    let raw = serde_json::to_string(&backup.settings).wrap_err("serialize settings")?;
    set_app_state_in_tx(&mut tx, SETTINGS_KEY, &raw, updated_at).await?;

    tx.commit().await.wrap_err("commit transaction")?;
    Ok(())
}

async fn insert_character(
    tx: &mut sqlx::Transaction<'_, Sqlite>,
    name: &str,
    entry: &CharacterEntry,
    updated_at: i64,
) -> eyre::Result<()> {
    let rank = i64::from(entry.rank.clamp(RANK_MIN, RANK_MAX));

    sqlx::query("INSERT INTO characters (name, rank, active, updated_at) VALUES (?1, ?2, ?3, ?4)")
        .bind(name)
        .bind(rank)
        .bind(i64::from(entry.active))
        .bind(updated_at)
        .execute(&mut **tx)
        .await
        .wrap_err("insert character")?;
    Ok(())
}

pub async fn get_app_state(pool: &SqlitePool, key: &str) -> eyre::Result<Option<String>> {
    sqlx::query_scalar::<_, String>("SELECT value FROM app_state WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await
        .wrap_err("get app_state value")
}

const APP_STATE_UPSERT: &str = r#"
INSERT INTO app_state (key, value, updated_at)
VALUES (?1, ?2, ?3)
ON CONFLICT(key) DO UPDATE SET
  value = excluded.value,
  updated_at = excluded.updated_at
"#;

pub async fn set_app_state(
    pool: &SqlitePool,
    key: &str,
    value: &str,
    updated_at: i64,
) -> eyre::Result<()> {
    sqlx::query(APP_STATE_UPSERT)
        .bind(key)
        .bind(value)
        .bind(updated_at)
        .execute(pool)
        .await
        .wrap_err("set app_state value")?;
    Ok(())
}

async fn set_app_state_in_tx(
    tx: &mut sqlx::Transaction<'_, Sqlite>,
    key: &str,
    value: &str,
    updated_at: i64,
) -> eyre::Result<()> {
    sqlx::query(APP_STATE_UPSERT)
        .bind(key)
        .bind(value)
        .bind(updated_at)
        .execute(&mut **tx)
        .await
        .wrap_err("set app_state value")?;
    Ok(())
}

/// Load the persisted comparator settings. A missing entry yields the
/// defaults; a corrupt entry is discarded with a warning, never a crash.
pub async fn load_settings(pool: &SqlitePool) -> eyre::Result<ComparatorSettings> {
    let Some(raw) = get_app_state(pool, SETTINGS_KEY).await? else {
        return Ok(ComparatorSettings::default());
    };

    match serde_json::from_str(&raw) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            tracing::warn!("discarding corrupt persisted settings: {e}");
            Ok(ComparatorSettings::default())
        }
    }
}

pub async fn save_settings(
    pool: &SqlitePool,
    settings: &ComparatorSettings,
    updated_at: i64,
) -> eyre::Result<()> {
    let raw = serde_json::to_string(settings).wrap_err("serialize settings")?;
    set_app_state(pool, SETTINGS_KEY, &raw, updated_at).await
}
