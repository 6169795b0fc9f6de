use anyhow::Result;
use tracing_subscriber::EnvFilter;
use worklog::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    Cli::menu().await
}
