//! Affine points

use super::{CURVE_EQUATION_B, CurveParameters, FieldElement};
use crate::{Error, Result};
use core::ops::{Add, Neg, Sub};

/// Tag byte of a SEC1 compressed point with even `y`.
const TAG_COMPRESSED_EVEN_Y: u8 = 0x02;
/// Tag byte of a SEC1 compressed point with odd `y`.
const TAG_COMPRESSED_ODD_Y: u8 = 0x03;
/// Tag byte of a SEC1 uncompressed point.
const TAG_UNCOMPRESSED: u8 = 0x04;
/// SEC1 encoding of the identity.
const TAG_IDENTITY: u8 = 0x00;

/// secp256k1 curve point expressed in affine coordinates.
///
/// The identity of the group has no affine coordinates and is its own
/// variant, so a point with a zero coordinate is never mistaken for it.
/// Coordinates of [`AffinePoint::Point`] are expected to satisfy
/// `y² = x³ + 7`; use [`AffinePoint::new`] to construct checked points.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AffinePoint {
    /// Additive identity of the group: the point at infinity.
    #[default]
    Identity,

    /// Point with affine coordinates.
    Point {
        /// x-coordinate
        x: FieldElement,
        /// y-coordinate
        y: FieldElement,
    },
}

impl AffinePoint {
    /// Create a point from coordinates, returning `None` if they do not
    /// satisfy the curve equation.
    pub fn new(x: FieldElement, y: FieldElement) -> Option<Self> {
        let point = AffinePoint::Point { x, y };
        point.is_on_curve().then_some(point)
    }

    /// Base point of secp256k1.
    ///
    /// ```text
    /// Gₓ = 79be667e f9dcbbac 55a06295 ce870b07 029bfcdb 2dce28d9 59f2815b 16f81798
    /// Gᵧ = 483ada77 26a3c465 5da4fbfc 0e1108a8 fd17b448 a6855419 9c47d08f fb10d4b8
    /// ```
    pub fn generator() -> Self {
        CurveParameters::secp256k1().generator.clone()
    }

    /// Returns the identity of the group: the point at infinity.
    pub fn identity() -> Self {
        AffinePoint::Identity
    }

    /// Is this point the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, AffinePoint::Identity)
    }

    /// x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&FieldElement> {
        match self {
            AffinePoint::Identity => None,
            AffinePoint::Point { x, .. } => Some(x),
        }
    }

    /// y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&FieldElement> {
        match self {
            AffinePoint::Identity => None,
            AffinePoint::Point { y, .. } => Some(y),
        }
    }

    /// Does this point satisfy `y² = x³ + 7`? The identity always does.
    pub fn is_on_curve(&self) -> bool {
        match self {
            AffinePoint::Identity => true,
            AffinePoint::Point { x, y } => y.square() == curve_equation_rhs(x),
        }
    }

    /// Find the point with the given x-coordinate and `y` parity.
    ///
    /// Returns `None` if `x³ + 7` is not a square, i.e. there is no point
    /// with this x-coordinate.
    pub fn decompress(x: &FieldElement, y_is_odd: bool) -> Option<Self> {
        let beta = sqrt(&curve_equation_rhs(x))?;
        let y = if beta.is_odd() == y_is_odd { beta } else { -beta };
        Some(AffinePoint::Point { x: x.clone(), y })
    }

    /// Point doubling: `self + self`.
    #[must_use]
    pub fn double(&self) -> Self {
        self + self
    }

    /// Encode as SEC1 bytes: `04 || x || y`, or `02/03 || x` when
    /// `compress` is set. The identity encodes as a single zero byte.
    pub fn to_sec1_bytes(&self, compress: bool) -> Vec<u8> {
        match self {
            AffinePoint::Identity => vec![TAG_IDENTITY],
            AffinePoint::Point { x, y } if compress => {
                let tag = if y.is_odd() {
                    TAG_COMPRESSED_ODD_Y
                } else {
                    TAG_COMPRESSED_EVEN_Y
                };
                let mut bytes = Vec::with_capacity(33);
                bytes.push(tag);
                bytes.extend_from_slice(&x.to_be_bytes());
                bytes
            }
            AffinePoint::Point { x, y } => {
                let mut bytes = Vec::with_capacity(65);
                bytes.push(TAG_UNCOMPRESSED);
                bytes.extend_from_slice(&x.to_be_bytes());
                bytes.extend_from_slice(&y.to_be_bytes());
                bytes
            }
        }
    }

    /// Decode SEC1 bytes in any of the forms produced by
    /// [`AffinePoint::to_sec1_bytes`].
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes {
            [TAG_IDENTITY] => Ok(AffinePoint::Identity),
            [tag @ (TAG_COMPRESSED_EVEN_Y | TAG_COMPRESSED_ODD_Y), x @ ..] if x.len() == 32 => {
                let x = canonical_coordinate(x)?;
                Self::decompress(&x, *tag == TAG_COMPRESSED_ODD_Y).ok_or(Error::PointEncoding)
            }
            [TAG_UNCOMPRESSED, xy @ ..] if xy.len() == 64 => {
                let x = canonical_coordinate(&xy[..32])?;
                let y = canonical_coordinate(&xy[32..])?;
                Self::new(x, y).ok_or(Error::PointEncoding)
            }
            _ => Err(Error::PointEncoding),
        }
    }

    fn add_ref(&self, other: &Self) -> Self {
        let (x1, y1, x2, y2) = match (self, other) {
            (AffinePoint::Identity, _) => return other.clone(),
            (_, AffinePoint::Identity) => return self.clone(),
            (AffinePoint::Point { x: x1, y: y1 }, AffinePoint::Point { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };

        let lambda = if x1 == x2 {
            // Either `other == -self`, or a vertical tangent at `y = 0`
            if y1 != y2 || y1.is_zero() {
                return AffinePoint::Identity;
            }
            (FieldElement::from(3) * x1.square()) / y1.double()
        } else {
            (y2 - y1) / (x2 - x1)
        };

        let x3 = lambda.square() - x1 - x2;
        let y3 = lambda * (x1 - &x3) - y1;
        AffinePoint::Point { x: x3, y: y3 }
    }
}

/// Compute `x³ + 7`.
fn curve_equation_rhs(x: &FieldElement) -> FieldElement {
    x.square() * x + FieldElement::from(CURVE_EQUATION_B)
}

/// Square root in the base field, using `p ≡ 3 (mod 4)`.
fn sqrt(alpha: &FieldElement) -> Option<FieldElement> {
    let exp = (FieldElement::modulus() + 1u32) >> 2;
    let beta = alpha.pow(exp);
    (beta.square() == *alpha).then_some(beta)
}

fn canonical_coordinate(bytes: &[u8]) -> Result<FieldElement> {
    let fe = FieldElement::from_be_bytes(bytes);
    if fe.to_be_bytes() == bytes {
        Ok(fe)
    } else {
        Err(Error::PointEncoding)
    }
}

impl Add<&AffinePoint> for &AffinePoint {
    type Output = AffinePoint;

    fn add(self, other: &AffinePoint) -> AffinePoint {
        self.add_ref(other)
    }
}

impl Add<AffinePoint> for AffinePoint {
    type Output = AffinePoint;

    fn add(self, other: AffinePoint) -> AffinePoint {
        self.add_ref(&other)
    }
}

impl Add<&AffinePoint> for AffinePoint {
    type Output = AffinePoint;

    fn add(self, other: &AffinePoint) -> AffinePoint {
        self.add_ref(other)
    }
}

impl Sub<&AffinePoint> for &AffinePoint {
    type Output = AffinePoint;

    fn sub(self, other: &AffinePoint) -> AffinePoint {
        self.add_ref(&-other)
    }
}

impl Sub<AffinePoint> for AffinePoint {
    type Output = AffinePoint;

    fn sub(self, other: AffinePoint) -> AffinePoint {
        self.add_ref(&-other)
    }
}

impl Neg for &AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        match self {
            AffinePoint::Identity => AffinePoint::Identity,
            AffinePoint::Point { x, y } => AffinePoint::Point {
                x: x.clone(),
                y: -y,
            },
        }
    }
}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        -&self
    }
}
