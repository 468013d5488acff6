//! # evm-recover
//!
//! Recovers the EVM address of a secp256k1 signer from a compact signature and a
//! message digest.
//!
//! ```
//! use evm_recover::{recover_address, RecoveryError, Signature};
//! use evm_recover::primitives::message_digest;
//!
//! let digest = message_digest(b"hello");
//! // An all-zero signature never recovers to an address.
//! assert!(matches!(
//!     recover_address(&Signature::default(), &digest),
//!     Err(RecoveryError::MalformedSignature | RecoveryError::UnrecoverableKey)
//! ));
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod crypto;
pub mod recover;
pub mod secp256k1;
#[cfg(test)]
mod test_utils;

pub use crypto::{crypto, install_crypto, Crypto, DefaultCrypto};
pub use primitives::{self, EvmAddress, MessageDigest, PublicKey, RecoveryError, Signature};
pub use recover::{
    derive_address, derive_address_with, is_signed_by, recover_address,
    recover_address_from_rsv, recover_address_with, recover_public_key,
    recover_public_key_with,
};
