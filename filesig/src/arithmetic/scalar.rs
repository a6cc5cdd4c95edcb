//! Non-zero scalars

use core::ops::Deref;
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::TryCryptoRng;
use tracing::{debug, warn};

use super::Scalar;
use crate::{Error, Result};

/// Scalar in the open range `(0, n)`.
///
/// Private keys, nonces and both signature components are non-zero
/// scalars.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NonZeroScalar(Scalar);

impl NonZeroScalar {
    /// Wrap a scalar, returning `None` if it is zero.
    pub fn new(scalar: Scalar) -> Option<Self> {
        (!scalar.is_zero()).then_some(Self(scalar))
    }

    /// Parse a 32-byte big endian integer without reducing it.
    ///
    /// Fails unless `0 < value < n`.
    pub fn from_repr(bytes: &[u8; 32]) -> Result<Self> {
        let value = BigUint::from_bytes_be(bytes);
        if value.is_zero() || &value >= Scalar::modulus() {
            return Err(Error::ScalarRange);
        }
        Ok(Self(Scalar::new(value)))
    }

    /// Sample a uniformly random scalar in `(0, n)`.
    ///
    /// Draws 256 bits and rejects values outside the range rather than
    /// reducing them, which would bias small residues. A failed entropy draw
    /// is retried as well, so this only returns once a value is found.
    pub fn random<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        loop {
            if let Err(err) = rng.try_fill_bytes(&mut bytes) {
                warn!(%err, "entropy source failed; retrying");
                continue;
            }

            match Self::from_repr(&bytes) {
                Ok(scalar) => return scalar,
                Err(_) => debug!("sampled scalar out of range; resampling"),
            }
        }
    }

    /// Multiplicative inverse, which always exists for a non-zero scalar.
    pub fn invert(&self) -> NonZeroScalar {
        Self(self.0.pow(-1))
    }
}

impl Deref for NonZeroScalar {
    type Target = Scalar;

    fn deref(&self) -> &Scalar {
        &self.0
    }
}

impl AsRef<Scalar> for NonZeroScalar {
    fn as_ref(&self) -> &Scalar {
        &self.0
    }
}

impl From<NonZeroScalar> for Scalar {
    fn from(scalar: NonZeroScalar) -> Scalar {
        scalar.0
    }
}

impl TryFrom<Scalar> for NonZeroScalar {
    type Error = Error;

    fn try_from(scalar: Scalar) -> Result<Self> {
        Self::new(scalar).ok_or(Error::ScalarRange)
    }
}
