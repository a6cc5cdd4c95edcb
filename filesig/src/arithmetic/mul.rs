//! Scalar multiplication.

use core::ops::Mul;
use num_bigint::BigUint;

use super::{AffinePoint, NonZeroScalar, Scalar};

/// Number of bits processed by [`double_and_add`].
const SCALAR_BITS: u64 = 256;

/// Returns `[k] x`.
///
/// Scans the bits of `k` from least to most significant, doubling the
/// running power of `x` each step and adding it to the accumulator when the
/// bit is set. Not constant time.
fn double_and_add(x: &AffinePoint, k: &BigUint) -> AffinePoint {
    debug_assert!(k.bits() <= SCALAR_BITS);

    let mut acc = AffinePoint::Identity;
    let mut power = x.clone();
    for i in 0..SCALAR_BITS {
        if k.bit(i) {
            acc = &acc + &power;
        }
        power = power.double();
    }

    acc
}

impl Mul<&Scalar> for &AffinePoint {
    type Output = AffinePoint;

    fn mul(self, k: &Scalar) -> AffinePoint {
        double_and_add(self, k.as_biguint())
    }
}

impl Mul<&Scalar> for AffinePoint {
    type Output = AffinePoint;

    fn mul(self, k: &Scalar) -> AffinePoint {
        double_and_add(&self, k.as_biguint())
    }
}

impl Mul<&NonZeroScalar> for &AffinePoint {
    type Output = AffinePoint;

    fn mul(self, k: &NonZeroScalar) -> AffinePoint {
        double_and_add(self, k.as_biguint())
    }
}

impl Mul<&NonZeroScalar> for AffinePoint {
    type Output = AffinePoint;

    fn mul(self, k: &NonZeroScalar) -> AffinePoint {
        double_and_add(&self, k.as_biguint())
    }
}
