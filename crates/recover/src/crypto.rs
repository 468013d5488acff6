//! Oracle seam of the pipeline.
//!
//! The [`Crypto`] trait is the recovery oracle and the hash function the pipeline calls
//! into. [`DefaultCrypto`] wires the feature-selected [`crate::secp256k1`] backend and
//! Keccak-256. A custom implementation can be installed once per process with
//! [`install_crypto`].
use core::fmt::Debug;
use once_cell::race::OnceBox;
use primitives::{MessageDigest, PublicKey, RecoveryError, Signature, B256};
use std::boxed::Box;

/// Cryptographic operations used by the recovery pipeline.
///
/// Implementations must be deterministic and free of side effects.
pub trait Crypto: Send + Sync + Debug {
    /// secp256k1 public key recovery from a compact signature and a message digest.
    fn secp256k1_recover(
        &self,
        sig: &Signature,
        digest: &MessageDigest,
    ) -> Result<PublicKey, RecoveryError>;

    /// Keccak-256 hash.
    fn keccak256(&self, input: &[u8]) -> B256;
}

/// Default implementation of the [`Crypto`] trait.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCrypto;

impl Crypto for DefaultCrypto {
    #[inline]
    fn secp256k1_recover(
        &self,
        sig: &Signature,
        digest: &MessageDigest,
    ) -> Result<PublicKey, RecoveryError> {
        crate::secp256k1::recover_public_key(sig, digest)
    }

    #[inline]
    fn keccak256(&self, input: &[u8]) -> B256 {
        primitives::keccak256(input)
    }
}

/// Global crypto instance
static CRYPTO: OnceBox<Box<dyn Crypto>> = OnceBox::new();

/// Install a custom crypto implementation globally.
///
/// Returns `true` if it was installed, `false` if one was already installed or the
/// default was already in use.
///
/// # Example
/// ```ignore
/// use evm_recover::crypto::{install_crypto, Crypto};
///
/// #[derive(Debug)]
/// struct MyCrypto;
/// impl Crypto for MyCrypto {
///     // ... implementation
/// }
///
/// if !install_crypto(MyCrypto) {
///     println!("Crypto already installed");
/// }
/// ```
pub fn install_crypto<C: Crypto + 'static>(crypto: C) -> bool {
    let crypto: Box<dyn Crypto> = Box::new(crypto);
    CRYPTO.set(Box::new(crypto)).is_ok()
}

/// Get the installed crypto implementation, or [`DefaultCrypto`] if none is installed.
pub fn crypto() -> &'static dyn Crypto {
    CRYPTO
        .get_or_init(|| {
            let crypto: Box<dyn Crypto> = Box::new(DefaultCrypto);
            Box::new(crypto)
        })
        .as_ref()
}
