//! secp256k1 public key recovery, the oracle of the recovery pipeline.
//!
//! The backend is picked by cargo features:
//! * `secp256k1` feature: bindings to the C library from bitcoin core
//!   ([`secp256k1`](https://crates.io/crates/secp256k1)). Default, and the fastest.
//! * `libsecp256k1` feature: parity's pure Rust port
//!   ([`libsecp256k1`](https://crates.io/crates/libsecp256k1)).
//! * neither: [`k256`](https://crates.io/crates/k256), pure Rust and `no_std`.
//!
//! If both features are on, `secp256k1` wins.
//!
//! Every backend takes the [EIP-2098](https://eips.ethereum.org/EIPS/eip-2098) compact
//! signature, splits off the recovery id and returns the key as `x || y`.

cfg_if::cfg_if! {
    if #[cfg(feature = "secp256k1")]{
        mod bitcoin_secp256k1;
        pub use bitcoin_secp256k1::recover_public_key;

        // k256 is unused when secp256k1 is selected
        use k256 as _;

        // libsecp256k1 is also unused when secp256k1 is selected
        #[cfg(feature = "libsecp256k1")]
        use libsecp256k1 as _;
    } else if #[cfg(feature = "libsecp256k1")]{
        mod parity_libsecp256k1;
        pub use parity_libsecp256k1::recover_public_key;

        // k256 is unused when libsecp256k1 is selected
        use k256 as _;
    } else {
        mod k256;
        pub use self::k256::recover_public_key;
    }
}
