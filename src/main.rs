use std::io;

use anyhow::Result;
use clap::Parser;
use log::debug;

use linesort::Args;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Args::parse().into_config();
    debug!("{config:?}");

    linesort::run(&config, io::stdout().lock())?;

    Ok(())
}
