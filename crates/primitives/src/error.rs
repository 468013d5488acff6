//! Recovery error type.
use core::fmt;

/// Reason a signer could not be recovered.
///
/// These are the only failures of the recovery pipeline. They are returned to the
/// caller as-is and never replaced by a default address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecoveryError {
    /// Signature components do not form a valid signature: a zero or out-of-range
    /// scalar, an invalid recovery id or an invalid `v` byte.
    MalformedSignature,
    /// No public key consistent with the signature and digest could be reconstructed.
    UnrecoverableKey,
}

impl core::error::Error for RecoveryError {}

impl fmt::Display for RecoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MalformedSignature => "malformed secp256k1 signature",
            Self::UnrecoverableKey => "public key could not be recovered from signature",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::malformed(RecoveryError::MalformedSignature, "malformed secp256k1 signature")]
    #[case::unrecoverable(
        RecoveryError::UnrecoverableKey,
        "public key could not be recovered from signature"
    )]
    fn display(#[case] error: RecoveryError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
        let _: &dyn core::error::Error = &error;
    }
}
