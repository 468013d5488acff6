//! Decoding of hex command line arguments.
use clap::Args;
use recover::{
    primitives::{hex, message_digest, B256},
    MessageDigest, PublicKey, RecoveryError, Signature,
};

/// Errors of command line input decoding.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Argument is not valid hex.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Argument decoded to the wrong number of bytes.
    #[error("{what} must be {expected} bytes, got {actual}")]
    Length {
        /// Name of the argument.
        what: &'static str,
        /// Accepted lengths.
        expected: &'static str,
        /// Decoded length.
        actual: usize,
    },
    /// 65-byte signature with a `v` other than 0, 1, 27 or 28, or with `s >= n`.
    #[error("invalid r || s || v signature: {0}")]
    Rsv(RecoveryError),
    /// Neither a digest nor a message was given.
    #[error("either a digest or a message is required")]
    MissingDigest,
    /// 65-byte public key without the `0x04` tag.
    #[error("65-byte public key must be SEC1 uncompressed (0x04 tag)")]
    PublicKeyTag,
}

/// Signature and digest arguments shared by the recovery subcommands.
#[derive(Args, Debug, Clone)]
pub struct SignedInput {
    /// Hex signature, 64-byte compact (EIP-2098) or 65-byte `r || s || v`
    #[arg(long)]
    pub signature: String,
    /// Hex message digest, 32 bytes
    #[arg(long, required_unless_present = "message", conflicts_with = "message")]
    pub digest: Option<String>,
    /// Message whose Keccak-256 hash is the digest
    #[arg(long)]
    pub message: Option<String>,
}

impl SignedInput {
    /// Decodes the signature and digest.
    pub fn decode(&self) -> Result<(Signature, MessageDigest), InputError> {
        let signature = parse_signature(&self.signature)?;
        let digest = match (&self.digest, &self.message) {
            (Some(digest), _) => parse_digest(digest)?,
            (None, Some(message)) => message_digest(message.as_bytes()),
            (None, None) => return Err(InputError::MissingDigest),
        };
        Ok((signature, digest))
    }
}

/// Decodes hex with an optional `0x` prefix.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, InputError> {
    Ok(hex::decode(input.trim().trim_start_matches("0x"))?)
}

/// Parses a 64-byte compact or 65-byte `r || s || v` signature.
pub fn parse_signature(input: &str) -> Result<Signature, InputError> {
    let bytes = decode_hex(input)?;
    if let Ok(compact) = <[u8; 64]>::try_from(bytes.as_slice()) {
        return Ok(Signature::from_bytes(compact));
    }
    if let Ok(rsv) = <&[u8; 65]>::try_from(bytes.as_slice()) {
        return Signature::from_rsv(rsv).map_err(InputError::Rsv);
    }
    Err(InputError::Length {
        what: "signature",
        expected: "64 or 65",
        actual: bytes.len(),
    })
}

/// Parses a 32-byte digest.
pub fn parse_digest(input: &str) -> Result<MessageDigest, InputError> {
    let bytes = decode_hex(input)?;
    if bytes.len() != 32 {
        return Err(InputError::Length {
            what: "digest",
            expected: "32",
            actual: bytes.len(),
        });
    }
    Ok(B256::from_slice(&bytes))
}

/// Parses a 64-byte raw or 65-byte SEC1 uncompressed public key.
pub fn parse_public_key(input: &str) -> Result<PublicKey, InputError> {
    let bytes = decode_hex(input)?;
    if let Ok(raw) = <[u8; 64]>::try_from(bytes.as_slice()) {
        return Ok(PublicKey::from_bytes(raw));
    }
    if let Ok(sec1) = <&[u8; 65]>::try_from(bytes.as_slice()) {
        return PublicKey::from_uncompressed_sec1(sec1).ok_or(InputError::PublicKeyTag);
    }
    Err(InputError::Length {
        what: "public key",
        expected: "64 or 65",
        actual: bytes.len(),
    })
}
