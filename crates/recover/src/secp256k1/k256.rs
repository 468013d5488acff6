//! k256 implementation of recovery. More about it in [`crate::secp256k1`].
use k256::ecdsa::{RecoveryId, Signature as EcdsaSignature, VerifyingKey};
use primitives::{MessageDigest, PublicKey, RecoveryError, Signature};

/// Recover the public key from a signature and a message digest.
///
/// This function is using the `k256` crate.
pub fn recover_public_key(
    sig: &Signature,
    digest: &MessageDigest,
) -> Result<PublicKey, RecoveryError> {
    let (rs, mut recid) = sig.split();

    // parse signature
    let mut sig =
        EcdsaSignature::from_slice(&rs).map_err(|_| RecoveryError::MalformedSignature)?;

    // normalize signature and flip recovery id if needed.
    if let Some(sig_normalized) = sig.normalize_s() {
        sig = sig_normalized;
        recid ^= 1;
    }
    let recid = RecoveryId::from_byte(recid).ok_or(RecoveryError::MalformedSignature)?;

    // recover key
    let recovered_key = VerifyingKey::recover_from_prehash(&digest[..], &sig, recid)
        .map_err(|_| RecoveryError::UnrecoverableKey)?;
    let encoded = recovered_key.to_encoded_point(/* compress = */ false);
    encoded
        .as_bytes()
        .try_into()
        .ok()
        .and_then(PublicKey::from_uncompressed_sec1)
        .ok_or(RecoveryError::UnrecoverableKey)
}
