//! `public-key` subcommand.
use clap::Parser;
use recover::{primitives::hex, recover_public_key};

use super::Error;
use crate::input::SignedInput;

/// Recovers the signer public key and prints it as 64-byte `x || y` hex.
#[derive(Parser, Debug)]
pub struct Cmd {
    #[command(flatten)]
    input: SignedInput,
}

impl Cmd {
    /// Returns the hex encoded public key.
    pub fn execute(&self) -> Result<String, Error> {
        let (signature, digest) = self.input.decode()?;
        let key = recover_public_key(&signature, &digest)?;
        Ok(hex::encode_prefixed(key.as_bytes()))
    }

    /// Runs public key command.
    pub fn run(&self) -> Result<(), Error> {
        println!("{}", self.execute()?);
        Ok(())
    }
}
