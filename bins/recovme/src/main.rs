//! `recovme` entry point.
use clap::Parser;
use color_eyre::eyre::Result;
use recovme::cmd::MainCmd;

fn main() -> Result<()> {
    color_eyre::install()?;

    MainCmd::parse().run()?;

    Ok(())
}
