//! Migration inspection commands, available in debug builds only.

#[cfg(debug_assertions)]
use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::config::Config,
};
#[cfg(debug_assertions)]
use anyhow::Result;
#[cfg(debug_assertions)]
use clap::{Args, Subcommand};

#[cfg(debug_assertions)]
#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[cfg(debug_assertions)]
#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show current database version
    Status,
    /// Show migration history
    History,
}

#[cfg(debug_assertions)]
pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let config = Config::read()?;
    let conn = Db::new_without_migrations(&config.database().path)?;

    match args.command {
        MigrationsCommand::Status => {
            let version = get_db_version(&conn)?;
            println!("Database version: {}", version);
            if needs_migration(&conn)? {
                println!("Database needs migration");
            } else {
                println!("Database is up to date");
            }
        }
        MigrationsCommand::History => {
            let manager = MigrationManager::new();
            println!("Migration history:");
            for (version, name, applied_at) in manager.get_migration_history(&conn)? {
                println!("  v{}: {} (applied: {})", version, name, applied_at);
            }
        }
    }

    Ok(())
}
