//! bitcoin_secp256k1 implementation of recovery. More about it in [`crate::secp256k1`].
use primitives::{MessageDigest, PublicKey, RecoveryError, Signature};
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message, SECP256K1,
};

/// Recover the public key from a signature and a message digest.
///
/// This function is using the `secp256k1` crate, it is enabled by `secp256k1` feature and it is in default.
pub fn recover_public_key(
    sig: &Signature,
    digest: &MessageDigest,
) -> Result<PublicKey, RecoveryError> {
    let (rs, recid) = sig.split();
    let recid =
        RecoveryId::from_i32(recid as i32).map_err(|_| RecoveryError::MalformedSignature)?;
    let sig = RecoverableSignature::from_compact(&rs, recid)
        .map_err(|_| RecoveryError::MalformedSignature)?;

    let msg = Message::from_digest(digest.0);
    let public = SECP256K1
        .recover_ecdsa(&msg, &sig)
        .map_err(|_| RecoveryError::UnrecoverableKey)?;

    PublicKey::from_uncompressed_sec1(&public.serialize_uncompressed())
        .ok_or(RecoveryError::UnrecoverableKey)
}
