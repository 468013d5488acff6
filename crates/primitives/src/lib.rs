//! # evm-recover-primitives
//!
//! Fixed-size types shared by the signer recovery pipeline: compact signatures,
//! raw secp256k1 public keys, EVM addresses and the recovery error.
//!
//! Byte types, hex and Keccak-256 come from [`alloy_primitives`].
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod address;
pub mod error;
pub mod public_key;
pub mod signature;

pub use address::EvmAddress;
pub use error::RecoveryError;
pub use public_key::PublicKey;
pub use signature::{Signature, SECP256K1_ORDER};

pub use alloy_primitives::{
    self, address, b256, b512, hex, keccak256, Address, FixedBytes, B256, B512, U256,
};

/// Hash of the signed payload. Treated as opaque input by the recovery pipeline.
pub type MessageDigest = B256;

/// Computes the Keccak-256 [`MessageDigest`] of `payload`.
///
/// Recovery never hashes its input; this is for callers that hold the raw payload.
#[inline]
pub fn message_digest<T: AsRef<[u8]>>(payload: T) -> MessageDigest {
    keccak256(payload)
}
