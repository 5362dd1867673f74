use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use feedship::app::AppContext;
use feedship::cli::{commands, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new();

    commands::print_banner();

    // Empty input is the only fatal path; exit code 1 via the error return.
    let url = commands::read_url(cli.url)?;
    commands::resolve(&ctx, &url).await;

    Ok(())
}
