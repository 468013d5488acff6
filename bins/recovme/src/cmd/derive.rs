//! `derive` subcommand.
use clap::Parser;
use recover::derive_address;

use super::Error;
use crate::input::parse_public_key;

/// Derives the EVM address of a public key.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex public key, 64-byte `x || y` or 65-byte SEC1 uncompressed
    #[arg(long)]
    public_key: String,
}

impl Cmd {
    /// Returns the checksummed address.
    pub fn execute(&self) -> Result<String, Error> {
        let key = parse_public_key(&self.public_key)?;
        Ok(derive_address(&key).to_string())
    }

    /// Runs derive command.
    pub fn run(&self) -> Result<(), Error> {
        println!("{}", self.execute()?);
        Ok(())
    }
}
