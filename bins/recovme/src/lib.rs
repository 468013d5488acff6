//! Command line front end for `evm-recover`.
pub mod cmd;
pub mod input;
