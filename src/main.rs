use anyhow::Context;
use clap::Parser;

use logo_embed::cli::{self, Cli};

fn load_env() {
    dotenvy::dotenv().ok();
}

fn main() -> anyhow::Result<()> {
    load_env();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.config();
    let output = config.output_path.clone();

    cli::handle_embed(config)
        .with_context(|| format!("Could not generate {}", output.display()))?;

    Ok(())
}
