//! Signing helpers for tests. Signatures come from `k256`, independent of the recovery backend.
use k256::ecdsa::SigningKey;
use primitives::{keccak256, Address, MessageDigest, Signature, B256};

/// Signing key for a small integer secret.
pub(crate) fn signing_key(secret: u64) -> SigningKey {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&secret.to_be_bytes());
    SigningKey::from_slice(&bytes).unwrap()
}

/// Signs `digest` and packs the result in the compact form.
pub(crate) fn sign(key: &SigningKey, digest: &MessageDigest) -> Signature {
    let (sig, recid) = key.sign_prehash_recoverable(digest.as_slice()).unwrap();
    let bytes = sig.to_bytes();
    Signature::from_rs_and_parity(
        B256::from_slice(&bytes[..32]),
        B256::from_slice(&bytes[32..]),
        recid.is_y_odd(),
    )
    .unwrap()
}

/// Address of `key`, computed without going through recovery.
pub(crate) fn address_of(key: &SigningKey) -> Address {
    let point = key.verifying_key().to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}
