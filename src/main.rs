mod cli;
mod cmd;
mod config;
mod fs;
mod provider;

use eyre::Result;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = cli::start(cli).await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
