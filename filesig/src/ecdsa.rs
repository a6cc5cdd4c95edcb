//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! Signing draws a fresh random nonce for every signature and checks each
//! signature against the signer's public key before returning it.
//!
//! Verification is normally done against an [`Address`](crate::Address)
//! rather than a public key: the candidate public keys are recovered from
//! the signature (see [`recoverable`]) and their addresses compared.
//!
//! ## Signing/Verification Example
//!
//! ```
//! use filesig::{
//!     Network,
//!     ecdsa::{SigningKey, verify_with_address},
//!     rand_core::OsRng,
//! };
//!
//! let signing_key = SigningKey::random(&mut OsRng);
//! let address = signing_key.verifying_key().to_address(Network::Mainnet, true);
//!
//! let message = b"ECDSA proves knowledge of a secret number in the context of a single message";
//! let signature = signing_key.sign_with_rng(&mut OsRng, message);
//!
//! assert!(verify_with_address(&address, message, &signature).is_accepted());
//! ```

mod der;
pub mod recoverable;
mod signing;
mod verifying;

pub use self::{
    recoverable::{RecoveryId, Verification, verify_prehash_with_address, verify_with_address},
    signing::SigningKey,
    verifying::VerifyingKey,
};

use base64ct::{Base64, Encoding};
use core::{fmt, str::FromStr};

use crate::{
    Error, Result,
    arithmetic::{NonZeroScalar, Scalar},
};

/// Size of a fixed-width `r || s` signature in bytes.
pub const SIGNATURE_SIZE: usize = 64;

/// ECDSA/secp256k1 signature: the pair `(r, s)` of non-zero scalars.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Signature {
    r: NonZeroScalar,
    s: NonZeroScalar,
}

impl Signature {
    /// Create a signature from its components, failing if either is zero.
    pub fn from_scalars(r: Scalar, s: Scalar) -> Result<Self> {
        Ok(Self {
            r: r.try_into()?,
            s: s.try_into()?,
        })
    }

    /// Parse a fixed-width `r || s` signature. Each component must be a
    /// big endian integer in `(0, n)`.
    pub fn from_bytes(bytes: &[u8; SIGNATURE_SIZE]) -> Result<Self> {
        let (r, s) = bytes.split_at(SIGNATURE_SIZE / 2);
        Ok(Self {
            r: NonZeroScalar::from_repr(r.try_into().map_err(|_| Error::ScalarRange)?)?,
            s: NonZeroScalar::from_repr(s.try_into().map_err(|_| Error::ScalarRange)?)?,
        })
    }

    /// Serialize as fixed-width `r || s`, each a 32-byte big endian integer.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes[..32].copy_from_slice(&self.r.to_be_bytes());
        bytes[32..].copy_from_slice(&self.s.to_be_bytes());
        bytes
    }

    /// Parse an ASN.1 DER `SEQUENCE { r INTEGER, s INTEGER }`.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let (r, s) = der::decode(bytes)?;
        Ok(Self {
            r: NonZeroScalar::from_repr(&r)?,
            s: NonZeroScalar::from_repr(&s)?,
        })
    }

    /// Serialize as ASN.1 DER. Integers are minimal big endian, with a
    /// leading zero byte when the high bit would otherwise be set.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        der::encode(&self.r.to_be_bytes(), &self.s.to_be_bytes())
    }

    /// Parse the base64 transport encoding of a DER signature.
    pub fn from_base64(text: &str) -> Result<Self> {
        let der = Base64::decode_vec(text.trim())?;
        Self::from_der(&der)
    }

    /// Serialize as base64-encoded DER.
    pub fn to_base64(&self) -> Result<String> {
        Ok(Base64::encode_string(&self.to_der()?))
    }

    /// The `r` component.
    pub fn r(&self) -> &NonZeroScalar {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &NonZeroScalar {
        &self.s
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64().map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Signature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_base64(s)
    }
}
