use std::path::PathBuf;

use crate::cli::RootArgs;

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
}

impl CliConfig {
    /// BLOOMFES_DATA_DIR and BLOOMFES_DB_PATH override the defaults;
    /// an explicit --db-path flag wins over both.
    pub fn resolve(args: &RootArgs) -> Self {
        let data_dir = std::env::var("BLOOMFES_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| args.data_dir.clone());

        let db_path = args
            .db_path
            .clone()
            .or_else(|| std::env::var("BLOOMFES_DB_PATH").ok().map(PathBuf::from))
            .unwrap_or_else(|| data_dir.join("bloomfes.sqlite3"));

        Self { data_dir, db_path }
    }

    pub fn database_url(&self) -> String {
        format!("sqlite://{}", self.db_path.display())
    }
}
