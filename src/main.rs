use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use mention_field::cli::CliArgs;

fn main() -> Result<()> {
    mention_field::tracing::init();

    let args = CliArgs::parse();
    let configs = Arc::new(args.load_configs()?);
    tracing::debug!(entries = configs.entries().len(), "config set ready");

    let output = args.command.run(configs)?;
    println!("{}", output);

    Ok(())
}
