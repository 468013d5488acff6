//! Compact secp256k1 signature.
//!
//! The 64 bytes are `r || s` in the [EIP-2098](https://eips.ethereum.org/EIPS/eip-2098)
//! layout: the most significant bit of `s` holds the y-parity of the signature's `R`
//! point, which is the recovery id. The other 255 bits are `s` itself.
use crate::{b256, RecoveryError, B256, B512, U256};
use core::str::FromStr;

/// Mask of the parity bit inside the first byte of the low half.
const PARITY_MASK: u8 = 0x80;

/// Order `n` of the secp256k1 group.
pub const SECP256K1_ORDER: B256 =
    b256!("0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

/// 64-byte compact signature made of a high half (`r`) and a low half (`s` and parity).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Signature(B512);

impl Signature {
    /// Length of the compact signature in bytes.
    pub const BYTES: usize = 64;

    /// Creates a signature from its 64-byte compact encoding.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(B512::new(bytes))
    }

    /// Creates a signature from its high (`r`) and low (`s` with parity) halves.
    pub fn from_halves(hi: B256, lo: B256) -> Self {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(hi.as_slice());
        bytes[32..].copy_from_slice(lo.as_slice());
        Self::from_bytes(bytes)
    }

    /// Packs a standard `(r, s, y_parity)` triple.
    ///
    /// An `s` with its top bit set does not fit next to the parity bit. It is replaced
    /// by `n - s` with the parity flipped, which recovers the same key. `s >= n` is
    /// rejected.
    pub fn from_rs_and_parity(
        r: B256,
        s: B256,
        mut y_odd: bool,
    ) -> Result<Self, RecoveryError> {
        let order = U256::from_be_bytes(SECP256K1_ORDER.0);
        let mut s_value = U256::from_be_bytes(s.0);
        if s_value >= order {
            return Err(RecoveryError::MalformedSignature);
        }
        if s[0] & PARITY_MASK != 0 {
            s_value = order - s_value;
            y_odd = !y_odd;
        }

        let mut lo = B256::new(s_value.to_be_bytes::<32>());
        if y_odd {
            lo[0] |= PARITY_MASK;
        }
        Ok(Self::from_halves(r, lo))
    }

    /// Parses the Ethereum `r || s || v` encoding.
    ///
    /// `v` may be the raw recovery id (`0`, `1`) or the legacy `27`, `28`.
    pub fn from_rsv(bytes: &[u8; 65]) -> Result<Self, RecoveryError> {
        let y_odd = match bytes[64] {
            0 | 27 => false,
            1 | 28 => true,
            _ => return Err(RecoveryError::MalformedSignature),
        };
        Self::from_rs_and_parity(
            B256::from_slice(&bytes[..32]),
            B256::from_slice(&bytes[32..64]),
            y_odd,
        )
    }

    /// Returns the Ethereum `r || s || v` encoding with `v` in `{27, 28}`.
    pub fn to_rsv(&self) -> [u8; 65] {
        let (rs, recid) = self.split();
        let mut out = [0u8; 65];
        out[..64].copy_from_slice(&rs);
        out[64] = 27 + recid;
        out
    }

    /// High half, `r`.
    #[inline]
    pub fn hi(&self) -> B256 {
        B256::from_slice(&self.0[..32])
    }

    /// Low half, `s` with the parity bit.
    #[inline]
    pub fn lo(&self) -> B256 {
        B256::from_slice(&self.0[32..])
    }

    /// Returns the compact encoding.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0 .0
    }

    /// Returns `true` if the `R` point has an odd y coordinate.
    #[inline]
    pub fn y_parity(&self) -> bool {
        self.0[32] & PARITY_MASK != 0
    }

    /// Splits into the plain `r || s` bytes and the recovery id (`0` or `1`).
    pub fn split(&self) -> ([u8; 64], u8) {
        let mut rs = self.0 .0;
        rs[32] &= !PARITY_MASK;
        (rs, self.y_parity() as u8)
    }
}

impl From<[u8; 64]> for Signature {
    #[inline]
    fn from(bytes: [u8; 64]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<B512> for Signature {
    #[inline]
    fn from(bytes: B512) -> Self {
        Self(bytes)
    }
}

impl From<Signature> for B512 {
    #[inline]
    fn from(signature: Signature) -> Self {
        signature.0
    }
}

impl FromStr for Signature {
    type Err = <B512 as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        B512::from_str(s).map(Self)
    }
}
