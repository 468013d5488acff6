//! `libsecp256k1` implementation of recovery. More about it in [`crate::secp256k1`].
use libsecp256k1::{recover, Message, RecoveryId, Signature as EcdsaSignature};
use primitives::{MessageDigest, PublicKey, RecoveryError, Signature};

/// Recover the public key from a signature and a message digest.
///
/// This function is using the `libsecp256k1` crate.
pub fn recover_public_key(
    sig: &Signature,
    digest: &MessageDigest,
) -> Result<PublicKey, RecoveryError> {
    let (rs, recid) = sig.split();
    let recid = RecoveryId::parse(recid).map_err(|_| RecoveryError::MalformedSignature)?;
    let sig =
        EcdsaSignature::parse_standard(&rs).map_err(|_| RecoveryError::MalformedSignature)?;
    let msg = Message::parse(&digest.0);

    // uses static context.
    let public = recover(&msg, &sig, &recid).map_err(|_| RecoveryError::UnrecoverableKey)?;

    PublicKey::from_uncompressed_sec1(&public.serialize())
        .ok_or(RecoveryError::UnrecoverableKey)
}
