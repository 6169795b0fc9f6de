pub mod init;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod serve;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Run the HTTP server")]
    Serve(serve::ServeArgs),
    #[command(about = "Initialize the database and seed defaults")]
    Init(init::InitArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Init(args) => init::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
