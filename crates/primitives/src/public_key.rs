//! Raw secp256k1 public key.
use crate::{B256, B512};

/// SEC1 tag byte of an uncompressed point.
const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// Uncompressed secp256k1 public key as `x || y`, without the SEC1 tag byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey(B512);

impl PublicKey {
    /// Length of the raw key in bytes.
    pub const BYTES: usize = 64;

    /// Creates a key from its raw `x || y` bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(B512::new(bytes))
    }

    /// Creates a key from its x and y coordinates.
    pub fn from_halves(x: B256, y: B256) -> Self {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(x.as_slice());
        bytes[32..].copy_from_slice(y.as_slice());
        Self::from_bytes(bytes)
    }

    /// Strips the tag byte of a 65-byte SEC1 uncompressed encoding (`0x04 || x || y`).
    ///
    /// Returns `None` if the tag is not `0x04`.
    pub fn from_uncompressed_sec1(encoded: &[u8; 65]) -> Option<Self> {
        if encoded[0] != SEC1_UNCOMPRESSED_TAG {
            return None;
        }
        Some(Self(B512::from_slice(&encoded[1..])))
    }

    /// X coordinate.
    #[inline]
    pub fn x(&self) -> B256 {
        B256::from_slice(&self.0[..32])
    }

    /// Y coordinate.
    #[inline]
    pub fn y(&self) -> B256 {
        B256::from_slice(&self.0[32..])
    }

    /// Returns the raw `x || y` bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0 .0
    }
}

impl From<[u8; 64]> for PublicKey {
    #[inline]
    fn from(bytes: [u8; 64]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<B512> for PublicKey {
    #[inline]
    fn from(bytes: B512) -> Self {
        Self(bytes)
    }
}

impl From<PublicKey> for B512 {
    #[inline]
    fn from(key: PublicKey) -> Self {
        key.0
    }
}
