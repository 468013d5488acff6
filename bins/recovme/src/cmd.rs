//! `recovme` subcommands.
pub mod address;
pub mod derive;
pub mod public_key;

use clap::Parser;
use recover::RecoveryError;

use crate::input::InputError;

/// `recovme` commands.
#[derive(Parser, Debug)]
#[command(infer_subcommands = true)]
pub enum MainCmd {
    /// Recover the EVM address that signed a digest.
    Address(address::Cmd),
    /// Recover the public key that signed a digest.
    PublicKey(public_key::Cmd),
    /// Derive the EVM address of a public key.
    Derive(derive::Cmd),
}

/// Errors of all subcommands.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Command line input could not be decoded.
    #[error(transparent)]
    Input(#[from] InputError),
    /// Signer recovery failed.
    #[error(transparent)]
    Recovery(#[from] RecoveryError),
}

impl MainCmd {
    /// Runs the selected subcommand.
    pub fn run(&self) -> Result<(), Error> {
        match self {
            Self::Address(cmd) => cmd.run(),
            Self::PublicKey(cmd) => cmd.run(),
            Self::Derive(cmd) => cmd.run(),
        }
    }
}
