//! Sign and verify files with secp256k1 ECDSA keys in the formats used by
//! Bitcoin.
//!
//! The crate is layered leaf-first:
//!
//! - [`arithmetic`]: integers modulo the field prime and the group order,
//!   and the group of points on `y² = x³ + 7`.
//! - [`ecdsa`]: signing with a random nonce and a self-check, classical
//!   verification against a public key, and verification against an
//!   [`Address`] by public key recovery.
//! - [`address`], [`wif`] and [`digest`]: the textual identities, private
//!   key encoding and hash functions around the core.
//!
//! ## Usage
//!
//! ```
//! use filesig::{Address, SigningKey, ecdsa::verify_with_address};
//!
//! # fn main() -> filesig::Result<()> {
//! let signing_key = SigningKey::from_wif("KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn")?;
//! let address: Address = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH".parse()?;
//!
//! let file = b"contents of a file";
//! let signature = signing_key.sign_with_rng(&mut filesig::rand_core::OsRng, file);
//! assert!(verify_with_address(&address, file, &signature).is_accepted());
//! # Ok(())
//! # }
//! ```
//!
//! ## ⚠️ Security Warning
//!
//! The arithmetic in this crate is built on arbitrary precision integers and
//! is **not** constant time. It leaks secrets through timing and must not be
//! used where an attacker can observe signing.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod address;
pub mod arithmetic;
pub mod digest;
pub mod ecdsa;
pub mod wif;

#[cfg(any(test, feature = "dev"))]
#[cfg_attr(docsrs, doc(cfg(feature = "dev")))]
pub mod dev;

mod error;

pub use crate::{
    address::{Address, Network},
    arithmetic::{AffinePoint, CurveParameters, FieldElement, NonZeroScalar, Scalar},
    ecdsa::{Signature, SigningKey, VerifyingKey},
    error::{Error, Result},
};

pub use rand_core;
