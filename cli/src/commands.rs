use std::time::{SystemTime, UNIX_EPOCH};

use eyre::WrapErr;

use bloomfes_engine::{axis, ComparisonTable};
use bloomfes_store::SqlitePool;
use models::{SkillLevelTable, RANK_MAX, RANK_MIN, TARGET_VALUE_MAX, TARGET_VALUE_MIN};

use crate::cli::{BackupCommand, RosterCommand, SettingsCommand, TableCommand};
use crate::render;

fn now_unixtime() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn clamp_rank(rank: u32) -> u32 {
    let clamped = rank.clamp(RANK_MIN, RANK_MAX);
    if clamped != rank {
        println!("note: rank {rank} is out of range, using {clamped}");
    }
    clamped
}

fn clamp_target(value: u32) -> u32 {
    let clamped = value.clamp(TARGET_VALUE_MIN, TARGET_VALUE_MAX);
    if clamped != value {
        println!("note: target value {value} is out of range, using {clamped}");
    }
    clamped
}

pub async fn roster(pool: &SqlitePool, command: RosterCommand) -> eyre::Result<()> {
    match command {
        RosterCommand::List => {
            let roster = bloomfes_store::list_roster(pool).await?;
            if roster.is_empty() {
                println!("roster is empty");
                return Ok(());
            }
            for (name, entry) in &roster {
                let state = if entry.active { "active" } else { "inactive" };
                println!("{name:<20} rank {:>3}  {state}", entry.rank);
            }
        }
        RosterCommand::Set { name, rank } => {
            let rank = clamp_rank(rank);
            bloomfes_store::upsert_character(pool, &name, rank, now_unixtime()).await?;
            println!("{name}: rank {rank}");
        }
        RosterCommand::Activate { name } => {
            if !bloomfes_store::set_active(pool, &name, true, now_unixtime()).await? {
                eyre::bail!("no such character: {name}");
            }
            println!("{name}: active");
        }
        RosterCommand::Deactivate { name } => {
            if !bloomfes_store::set_active(pool, &name, false, now_unixtime()).await? {
                eyre::bail!("no such character: {name}");
            }
            println!("{name}: inactive");
        }
        RosterCommand::Remove { name } => {
            if !bloomfes_store::remove_character(pool, &name).await? {
                eyre::bail!("no such character: {name}");
            }
            println!("{name}: removed");
        }
    }
    Ok(())
}

pub async fn settings(pool: &SqlitePool, command: SettingsCommand) -> eyre::Result<()> {
    match command {
        SettingsCommand::Show => {
            let settings = bloomfes_store::load_settings(pool).await?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsCommand::Set {
            skill_level,
            rank_min,
            rank_max,
            rank_step,
            target_start,
            target_end,
            target_step,
            mode,
            metric,
            multiplier,
            clear_multiplier,
        } => {
            let mut settings = bloomfes_store::load_settings(pool).await?;

            if let Some(level) = skill_level {
                // reject unknown levels before persisting anything
                SkillLevelTable::bloomfes_defaults().profile(level)?;
                settings.skill_level = level;
            }
            if let Some(v) = rank_min {
                settings.rank_min = clamp_rank(v);
            }
            if let Some(v) = rank_max {
                settings.rank_max = clamp_rank(v);
            }
            if let Some(v) = rank_step {
                settings.rank_increment = v;
            }
            if let Some(v) = target_start {
                settings.auto_start = clamp_target(v);
            }
            if let Some(v) = target_end {
                settings.auto_end = clamp_target(v);
            }
            if let Some(v) = target_step {
                settings.auto_increment = v;
            }
            if let Some(v) = mode {
                settings.numeric_mode = v;
            }
            if let Some(v) = metric {
                settings.display_metric = v;
            }
            if let Some(v) = multiplier {
                settings.multiplier = Some(v);
            }
            if clear_multiplier {
                settings.multiplier = None;
            }

            // normalizations, informational only
            if settings.rank_increment == 0 {
                settings.rank_increment = 1;
                println!("note: rank step 0 treated as 1");
            }
            if settings.auto_increment == 0 {
                settings.auto_increment = 1;
                println!("note: target step 0 treated as 1");
            }
            if settings.rank_min > settings.rank_max {
                std::mem::swap(&mut settings.rank_min, &mut settings.rank_max);
                println!(
                    "note: rank bounds were inverted, using {}..{}",
                    settings.rank_min, settings.rank_max
                );
            }
            if settings.auto_start > settings.auto_end {
                std::mem::swap(&mut settings.auto_start, &mut settings.auto_end);
                println!(
                    "note: target bounds were inverted, using {}..{}",
                    settings.auto_start, settings.auto_end
                );
            }

            bloomfes_store::save_settings(pool, &settings, now_unixtime()).await?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }
    Ok(())
}

pub async fn table(pool: &SqlitePool, command: TableCommand) -> eyre::Result<()> {
    let settings = bloomfes_store::load_settings(pool).await?;
    let reference = SkillLevelTable::bloomfes_defaults();

    let columns = axis::generate_range(
        settings.auto_start,
        settings.auto_end,
        settings.auto_increment,
        axis::TARGET_MIN_COLUMNS,
        axis::TARGET_MAX_COLUMNS,
    );
    if columns.swapped {
        println!("note: target bounds were inverted");
    }

    match command {
        TableCommand::Targets {
            skill_level,
            mode,
            metric,
        } => {
            let level = skill_level.unwrap_or(settings.skill_level);
            let mode = mode.unwrap_or(settings.numeric_mode);
            let metric = metric.unwrap_or(settings.display_metric);

            let ranks = axis::generate_rank_axis(
                settings.rank_min,
                settings.rank_max,
                settings.rank_increment,
            );
            if ranks.swapped {
                println!("note: rank bounds were inverted");
            }

            let table = ComparisonTable::build_rank_rows(
                &reference,
                level,
                &ranks.values,
                &columns.values,
                settings.multiplier,
            )?;

            println!("skill level {level}, {metric} ({mode})");
            print!("{}", render::render_table(&table, mode, metric));
        }
        TableCommand::Levels { rank, mode, metric } => {
            let rank = clamp_rank(rank);
            let mode = mode.unwrap_or(settings.numeric_mode);
            let metric = metric.unwrap_or(settings.display_metric);

            let table = ComparisonTable::build_level_rows(
                &reference,
                rank,
                &columns.values,
                settings.multiplier,
            )?;

            println!("rank {rank}, {metric} ({mode})");
            print!("{}", render::render_table(&table, mode, metric));
        }
    }
    Ok(())
}

pub async fn backup(pool: &SqlitePool, command: BackupCommand) -> eyre::Result<()> {
    match command {
        BackupCommand::Export { out } => {
            let roster = bloomfes_store::list_roster(pool).await?;
            let settings = bloomfes_store::load_settings(pool).await?;

            let bytes = bloomfes_store::export_backup(&roster, &settings)?;
            std::fs::write(&out, bytes)
                .wrap_err_with(|| format!("write backup file: {}", out.display()))?;
            println!("wrote {} ({} characters)", out.display(), roster.len());
        }
        BackupCommand::Import { path } => {
            let bytes = std::fs::read(&path)
                .wrap_err_with(|| format!("read backup file: {}", path.display()))?;
            // parse fully before touching the database; a rejected file
            // leaves existing state untouched, and the import itself is
            // one transaction
            let backup = bloomfes_store::parse_backup(&bytes)?;
            bloomfes_store::import_backup(pool, &backup, now_unixtime()).await?;
            println!(
                "imported {} ({} characters)",
                path.display(),
                backup.roster.len()
            );
        }
    }
    Ok(())
}
