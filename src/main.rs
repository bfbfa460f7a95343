use anyhow::Result;
use clap::Parser;

use chicken_dust_cli::cli::{args::Args, commands::CliApp};
use chicken_dust_cli::utils::Config;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env()?;

    let filter = if args.verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone())
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        "Chicken Dust Express starting in {} environment",
        config.environment
    );

    let app = CliApp::new(config);
    app.run(args)
}
