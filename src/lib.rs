//! SLIP-39 secret sharing
//!
//! Splits a master secret into word-encoded shares over GF(256) and
//! recovers it from any threshold-sized subset. The layers, bottom up:
//!
//! - [`field`] and [`vector`]: GF(256) arithmetic on bytes and byte strings
//! - [`interpolate`]: Lagrange interpolation of byte-string polynomials
//! - [`digest`] and [`checksum`]: the secret digest and the RS1024 word checksum
//! - [`sharing`]: split and recover with the hidden digest point
//! - [`cipher`]: the passphrase Feistel cipher
//! - [`codec`] and [`wordlist`]: share mnemonics
//! - [`commands`]: end-to-end workflows used by the CLI and the WASM bindings

pub mod checksum;
pub mod cipher;
#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod digest;
pub mod domain;
pub mod error;
pub mod field;
pub mod interpolate;
pub mod sharing;
pub mod vector;
pub mod wasm;
pub mod wordlist;

pub use codec::{Share, ShareMetadata, Slip39Mnemonic};
pub use error::{Error, Result};
pub use field::FieldElement;
pub use interpolate::{ShareSet, interpolate};
pub use sharing::{recover_secret, split_secret};
pub use vector::FieldVector;
pub use wordlist::Wordlist;
