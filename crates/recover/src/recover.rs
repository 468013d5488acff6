//! Signer recovery pipeline.
//!
//! [`recover_public_key`] asks the recovery oracle for the signer's key and
//! [`derive_address`] turns that key into its EVM address. [`recover_address`] chains
//! the two and returns as soon as recovery fails, so a failed recovery never yields
//! an address.
use crate::crypto::{crypto, Crypto};
use primitives::{EvmAddress, MessageDigest, PublicKey, RecoveryError, Signature};

/// Recovers the public key that produced `sig` over `digest`.
///
/// Oracle errors are returned unchanged.
#[inline]
pub fn recover_public_key(
    sig: &Signature,
    digest: &MessageDigest,
) -> Result<PublicKey, RecoveryError> {
    recover_public_key_with(crypto(), sig, digest)
}

/// [`recover_public_key`] with an explicit [`Crypto`] implementation.
#[inline]
pub fn recover_public_key_with(
    crypto: &dyn Crypto,
    sig: &Signature,
    digest: &MessageDigest,
) -> Result<PublicKey, RecoveryError> {
    crypto.secp256k1_recover(sig, digest)
}

/// Derives the EVM address of `key`: the low 20 bytes of Keccak-256 over `x || y`.
#[inline]
pub fn derive_address(key: &PublicKey) -> EvmAddress {
    derive_address_with(crypto(), key)
}

/// [`derive_address`] with an explicit [`Crypto`] implementation.
#[inline]
pub fn derive_address_with(crypto: &dyn Crypto, key: &PublicKey) -> EvmAddress {
    EvmAddress::from_digest(crypto.keccak256(key.as_bytes()))
}

/// Recovers the EVM address of the signer of `digest`.
#[inline]
pub fn recover_address(
    sig: &Signature,
    digest: &MessageDigest,
) -> Result<EvmAddress, RecoveryError> {
    recover_address_with(crypto(), sig, digest)
}

/// [`recover_address`] with an explicit [`Crypto`] implementation.
pub fn recover_address_with(
    crypto: &dyn Crypto,
    sig: &Signature,
    digest: &MessageDigest,
) -> Result<EvmAddress, RecoveryError> {
    let key = recover_public_key_with(crypto, sig, digest)?;
    Ok(derive_address_with(crypto, &key))
}

/// Recovers the EVM address from an Ethereum `r || s || v` signature.
///
/// `v` must be one of `0`, `1`, `27` or `28`.
pub fn recover_address_from_rsv(
    rsv: &[u8; 65],
    digest: &MessageDigest,
) -> Result<EvmAddress, RecoveryError> {
    let sig = Signature::from_rsv(rsv)?;
    recover_address(&sig, digest)
}

/// Returns whether `expected` signed `digest`.
///
/// A signature that cannot be recovered is an error, not `false`.
pub fn is_signed_by(
    sig: &Signature,
    digest: &MessageDigest,
    expected: &EvmAddress,
) -> Result<bool, RecoveryError> {
    recover_address(sig, digest).map(|address| address == *expected)
}
