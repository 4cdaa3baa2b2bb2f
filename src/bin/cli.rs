// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::eyre;
use watchref::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    cli::run(cli::Cli::parse()).map_err(|e| eyre!("{e}"))
}
