//! EVM address in its 32-byte word form.
use crate::{Address, B256};
use core::fmt;

/// Number of zeroed high-order bytes in the word form of an address.
const ADDRESS_PADDING: usize = 12;

/// EVM address held in a 32-byte word.
///
/// The high 12 bytes are always zero and the low 20 bytes are the address, the same
/// layout `ecrecover` returns on the EVM.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EvmAddress(B256);

impl EvmAddress {
    /// The zero address.
    pub const ZERO: Self = Self(B256::ZERO);

    /// Truncates a Keccak-256 digest of a public key into an address.
    #[inline]
    pub fn from_digest(mut digest: B256) -> Self {
        digest[..ADDRESS_PADDING].fill(0);
        Self(digest)
    }

    /// Returns the 20-byte address.
    #[inline]
    pub fn address(&self) -> Address {
        Address::from_word(self.0)
    }

    /// Returns the 32-byte word form.
    #[inline]
    pub const fn as_word(&self) -> &B256 {
        &self.0
    }

    /// Consumes the address and returns the 32-byte word form.
    #[inline]
    pub const fn into_word(self) -> B256 {
        self.0
    }

    /// Returns `true` if this is the zero address.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Address> for EvmAddress {
    #[inline]
    fn from(address: Address) -> Self {
        Self(address.into_word())
    }
}

impl From<EvmAddress> for Address {
    #[inline]
    fn from(address: EvmAddress) -> Self {
        address.address()
    }
}

/// Formats as an EIP-55 checksummed hex string.
impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.address(), f)
    }
}
