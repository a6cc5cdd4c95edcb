//! A pure-Rust implementation of group operations on secp256k1.

pub(crate) mod affine;
pub(crate) mod field;
mod mul;
pub(crate) mod scalar;

pub use self::{
    affine::AffinePoint,
    field::{Element, FieldElement, FieldPrime, GroupOrder, Modulus, Scalar},
    scalar::NonZeroScalar,
};

use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Constant term of the curve equation `y² = x³ + 7`.
pub const CURVE_EQUATION_B: u64 = 7;

/// Field prime `p`, big endian.
#[rustfmt::skip]
pub const FIELD_MODULUS_BYTES: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xfc, 0x2f,
];

/// Group order `n`, big endian.
#[rustfmt::skip]
pub const ORDER_BYTES: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b,
    0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// Affine x-coordinate of the generator, big endian.
#[rustfmt::skip]
pub const GENERATOR_X_BYTES: [u8; 32] = [
    0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac,
    0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b, 0x07,
    0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9,
    0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17, 0x98,
];

/// Affine y-coordinate of the generator, big endian.
#[rustfmt::skip]
pub const GENERATOR_Y_BYTES: [u8; 32] = [
    0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65,
    0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08, 0xa8,
    0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19,
    0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10, 0xd4, 0xb8,
];

static SECP256K1: Lazy<CurveParameters> = Lazy::new(|| CurveParameters {
    p: FieldElement::modulus().clone(),
    n: Scalar::modulus().clone(),
    generator: AffinePoint::Point {
        x: FieldElement::from_be_bytes(&GENERATOR_X_BYTES),
        y: FieldElement::from_be_bytes(&GENERATOR_Y_BYTES),
    },
});

/// Domain parameters of secp256k1.
///
/// Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain
/// Parameters: <https://www.secg.org/sec2-v2.pdf>
///
/// Built once on first use and never mutated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParameters {
    /// Field prime `p`.
    pub p: BigUint,

    /// Order `n` of the generator.
    pub n: BigUint,

    /// Base point `G`.
    pub generator: AffinePoint,
}

impl CurveParameters {
    /// The process-wide secp256k1 parameters.
    pub fn secp256k1() -> &'static CurveParameters {
        &SECP256K1
    }
}
