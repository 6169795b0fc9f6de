//! HTTP server command.

use crate::db::{db::Db, migrations};
use crate::libs::config::Config;
use crate::web::{app_state::AppState, router};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on (host:port), overrides configuration
    #[arg(short, long)]
    listen: Option<String>,

    /// Database file path, overrides configuration
    #[arg(short, long)]
    db: Option<PathBuf>,
}

/// Initializes the database, seeds defaults, then serves the API.
///
/// Initialization runs to completion before the listener is bound, so the
/// first request never races schema creation or seeding.
pub async fn cmd(args: ServeArgs) -> Result<()> {
    let config = Config::read()?;
    let db_path = args.db.unwrap_or_else(|| config.database().path);
    let addr = args.listen.unwrap_or_else(|| config.listen_addr());

    let mut db = Db::new(&db_path).with_context(|| format!("failed to open database at {}", db_path.display()))?;
    migrations::seed_defaults(&mut db.conn)?;
    drop(db);

    let state = AppState::new(db_path.clone());
    let app = router::create(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(addr = %addr, db = %db_path.display(), "worklog listening");
    axum::serve(listener, app).await?;

    Ok(())
}
