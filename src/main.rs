//! sfx-gen: renders the UI sound effects into `public/sfx`.
//!
//! Run from the application root; every run regenerates all files.

use tracing::{error, info};

use sfx_gen::cli::Cli;
use sfx_gen::config::GeneratorConfig;
use sfx_gen::error::Result;
use sfx_gen::generation::generate_all;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse_args();

    let config = GeneratorConfig::default();
    let rendered = generate_all(&config)?;

    info!("Done! Generated {} sounds", rendered.len());

    Ok(())
}
