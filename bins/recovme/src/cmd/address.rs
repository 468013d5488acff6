//! `address` subcommand.
use clap::Parser;
use recover::recover_address;

use super::Error;
use crate::input::SignedInput;

/// Recovers the signer address and prints it EIP-55 checksummed.
#[derive(Parser, Debug)]
pub struct Cmd {
    #[command(flatten)]
    input: SignedInput,
}

impl Cmd {
    /// Returns the checksummed address.
    pub fn execute(&self) -> Result<String, Error> {
        let (signature, digest) = self.input.decode()?;
        Ok(recover_address(&signature, &digest)?.to_string())
    }

    /// Runs address command.
    pub fn run(&self) -> Result<(), Error> {
        println!("{}", self.execute()?);
        Ok(())
    }
}
