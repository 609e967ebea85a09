use std::path::PathBuf;

use clap::{Parser, Subcommand};
use models::{DisplayMetric, NumericMode};

#[derive(Debug, Parser)]
#[command(name = "bloomfes")]
#[command(about = "BloomFes skill comparator: character roster and comparison tables")]
#[command(arg_required_else_help = true)]
pub struct RootArgs {
    #[arg(
        long,
        default_value = "data",
        value_name = "DIR",
        help = "Directory for local runtime data (sqlite, backups)"
    )]
    pub data_dir: PathBuf,

    #[arg(
        long,
        value_name = "FILE",
        help = "Path to SQLite database file (default: <data-dir>/bloomfes.sqlite3)"
    )]
    pub db_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Manage the character roster")]
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
    #[command(about = "Show or change persisted comparator settings")]
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
    #[command(about = "Render a skill comparison table")]
    Table {
        #[command(subcommand)]
        command: TableCommand,
    },
    #[command(about = "Export or import roster and settings as a JSON file")]
    Backup {
        #[command(subcommand)]
        command: BackupCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum RosterCommand {
    #[command(about = "List all characters with rank and active flag")]
    List,
    #[command(about = "Set a character's rank (added if missing)")]
    Set {
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(long, value_name = "RANK", help = "Rank 1-100; out-of-range values are clamped")]
        rank: u32,
    },
    #[command(about = "Mark a character active")]
    Activate {
        #[arg(value_name = "NAME")]
        name: String,
    },
    #[command(about = "Mark a character inactive")]
    Deactivate {
        #[arg(value_name = "NAME")]
        name: String,
    },
    #[command(about = "Remove a character")]
    Remove {
        #[arg(value_name = "NAME")]
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    #[command(about = "Print the current settings as JSON")]
    Show,
    #[command(about = "Update settings fields (inverted bounds are swapped, zero steps become 1)")]
    Set {
        #[arg(long)]
        skill_level: Option<u8>,
        #[arg(long)]
        rank_min: Option<u32>,
        #[arg(long)]
        rank_max: Option<u32>,
        #[arg(long)]
        rank_step: Option<u32>,
        #[arg(long)]
        target_start: Option<u32>,
        #[arg(long)]
        target_end: Option<u32>,
        #[arg(long)]
        target_step: Option<u32>,
        #[arg(long, value_name = "integer|fractional")]
        mode: Option<NumericMode>,
        #[arg(long, value_name = "highest|difference")]
        metric: Option<DisplayMetric>,
        #[arg(long, help = "Scale factor applied to highest/difference projections")]
        multiplier: Option<f64>,
        #[arg(long, conflicts_with = "multiplier", help = "Remove a configured multiplier")]
        clear_multiplier: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum TableCommand {
    #[command(about = "Rank rows x target-value columns at one skill level")]
    Targets {
        #[arg(long, help = "Override the persisted skill level for this render")]
        skill_level: Option<u8>,
        #[arg(long, value_name = "integer|fractional")]
        mode: Option<NumericMode>,
        #[arg(long, value_name = "highest|difference")]
        metric: Option<DisplayMetric>,
    },
    #[command(about = "Skill-level rows x target-value columns at one fixed rank")]
    Levels {
        #[arg(long, value_name = "RANK")]
        rank: u32,
        #[arg(long, value_name = "integer|fractional")]
        mode: Option<NumericMode>,
        #[arg(long, value_name = "highest|difference")]
        metric: Option<DisplayMetric>,
    },
}

#[derive(Debug, Subcommand)]
pub enum BackupCommand {
    #[command(about = "Write roster and settings to a JSON file")]
    Export {
        #[arg(long, default_value = "bloomfes-backup.json", value_name = "FILE")]
        out: PathBuf,
    },
    #[command(about = "Replace roster and settings from a JSON file")]
    Import {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}
