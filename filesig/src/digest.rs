//! Hash functions used for message digests and key identities.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Size of a SHA-256 digest in bytes.
pub const SHA256_SIZE: usize = 32;

/// Size of a `hash160` digest in bytes.
pub const HASH160_SIZE: usize = 20;

/// SHA-256 of `data`.
pub fn sha256(data: &[u8]) -> [u8; SHA256_SIZE] {
    Sha256::digest(data).into()
}

/// Double SHA-256: `sha256(sha256(data))`.
pub fn sha256d(data: &[u8]) -> [u8; SHA256_SIZE] {
    sha256(&sha256(data))
}

/// `ripemd160(sha256(data))`, the hash behind addresses.
pub fn hash160(data: &[u8]) -> [u8; HASH160_SIZE] {
    Ripemd160::digest(sha256(data)).into()
}

/// Digest of a message as it is signed: double SHA-256.
pub fn message_digest(msg: &[u8]) -> [u8; SHA256_SIZE] {
    sha256d(msg)
}
