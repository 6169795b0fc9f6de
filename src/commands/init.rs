//! Database and configuration initialization command.
//!
//! Creates the schema and seeds the default employee and workplace without
//! starting the server. Safe to run repeatedly.

use crate::db::{db::Db, migrations};
use crate::libs::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Database file path, overrides configuration
    #[arg(short, long)]
    db: Option<PathBuf>,

    /// Also write a default worklog.json if none exists
    #[arg(short, long)]
    config: bool,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    if args.config && !Path::new(crate::libs::config::CONFIG_FILE_NAME).exists() {
        Config::init().save()?;
        tracing::info!("wrote default configuration file");
    }

    let config = Config::read()?;
    let db_path = args.db.unwrap_or_else(|| config.database().path);

    let mut db = Db::new(&db_path).with_context(|| format!("failed to open database at {}", db_path.display()))?;
    migrations::seed_defaults(&mut db.conn)?;

    tracing::info!(db = %db_path.display(), "database initialized");
    Ok(())
}
