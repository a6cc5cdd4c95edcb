//! Prime field arithmetic over arbitrary-precision integers.
//!
//! An [`Element`] is a value reduced modulo a prime named at the type level
//! by a [`Modulus`] tag. secp256k1 uses two such primes: the field prime `p`
//! (coordinates of curve points, see [`FieldElement`]) and the group order
//! `n` (private keys, nonces and signature components, see [`Scalar`]).
//! Since the tags are distinct types, mixing the two spaces is a compile
//! error and converting between them is always spelled out, e.g. with
//! [`Scalar::reduce_from`].

use core::{
    fmt,
    hash::Hash,
    marker::PhantomData,
    ops::{Add, Div, Mul, Neg, Rem, Sub},
};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

use super::{FIELD_MODULUS_BYTES, ORDER_BYTES};

static FIELD_MODULUS: Lazy<BigUint> = Lazy::new(|| BigUint::from_bytes_be(&FIELD_MODULUS_BYTES));
static ORDER: Lazy<BigUint> = Lazy::new(|| BigUint::from_bytes_be(&ORDER_BYTES));

/// Type-level name of a prime modulus.
pub trait Modulus: Copy + Clone + fmt::Debug + Default + Eq + Hash + Send + Sync + 'static {
    /// Short name used when formatting elements, e.g. `p`.
    const NAME: &'static str;

    /// The prime itself.
    fn modulus() -> &'static BigUint;
}

/// secp256k1 base field prime `p = 2²⁵⁶ - 2³² - 977`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FieldPrime;

impl Modulus for FieldPrime {
    const NAME: &'static str = "p";

    fn modulus() -> &'static BigUint {
        &FIELD_MODULUS
    }
}

/// Order `n` of the secp256k1 generator.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct GroupOrder;

impl Modulus for GroupOrder {
    const NAME: &'static str = "n";

    fn modulus() -> &'static BigUint {
        &ORDER
    }
}

/// Element of the base field, i.e. a coordinate of a curve point.
pub type FieldElement = Element<FieldPrime>;

/// Element of the scalar field, i.e. an integer modulo the group order.
pub type Scalar = Element<GroupOrder>;

/// Integer reduced modulo the prime `M`.
///
/// The value is in `[0, M::modulus())` after construction and after every
/// operation. Elements are immutable: arithmetic returns a new element.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Element<M: Modulus> {
    value: BigUint,
    modulus: PhantomData<M>,
}

impl<M: Modulus> Element<M> {
    /// Reduce `value` modulo `M`.
    pub fn new(value: BigUint) -> Self {
        Self::from_reduced(value % M::modulus())
    }

    /// Reduce a signed integer modulo `M`. The result is always the
    /// non-negative residue.
    pub fn from_bigint(value: &BigInt) -> Self {
        let modulus = BigInt::from(M::modulus().clone());
        let mut residue = value % &modulus;
        if residue.sign() == Sign::Minus {
            residue += &modulus;
        }
        Self::from_reduced(residue.magnitude().clone())
    }

    /// Interpret big endian bytes as an integer and reduce it modulo `M`.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self::new(BigUint::from_bytes_be(bytes))
    }

    fn from_reduced(value: BigUint) -> Self {
        debug_assert!(&value < M::modulus());
        Self {
            value,
            modulus: PhantomData,
        }
    }

    /// Additive identity.
    pub fn zero() -> Self {
        Self::from_reduced(BigUint::zero())
    }

    /// Multiplicative identity.
    pub fn one() -> Self {
        Self::new(BigUint::one())
    }

    /// The modulus of this element's field.
    pub fn modulus() -> &'static BigUint {
        M::modulus()
    }

    /// Borrow the canonical integer value.
    pub fn as_biguint(&self) -> &BigUint {
        &self.value
    }

    /// Serialize as a 32-byte big endian integer.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let bytes = self.value.to_bytes_be();
        assert!(bytes.len() <= 32, "element does not fit in 32 bytes");
        let mut out = [0u8; 32];
        out[32 - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Is the canonical value odd?
    pub fn is_odd(&self) -> bool {
        self.value.bit(0)
    }

    /// Is the canonical value even?
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Compute `self²`.
    #[must_use]
    pub fn square(&self) -> Self {
        self * self
    }

    /// Compute `self + self`.
    #[must_use]
    pub fn double(&self) -> Self {
        self + self
    }

    /// Raise to an integer power, which may be negative.
    ///
    /// The exponent is first reduced modulo `M - 1` (Fermat), so
    /// `x.pow(-1)` is the multiplicative inverse of a non-zero `x` and equals
    /// `x.pow(M - 2)`.
    #[must_use]
    pub fn pow(&self, exp: impl Into<BigInt>) -> Self {
        let cycle = BigInt::from(M::modulus() - 1u32);
        let mut exp = exp.into() % &cycle;
        if exp.sign() == Sign::Minus {
            exp += &cycle;
        }
        Self::from_reduced(self.value.modpow(exp.magnitude(), M::modulus()))
    }

    /// Multiplicative inverse, or `None` for zero.
    pub fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.pow(M::modulus() - 2u32))
        }
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        Self::new(&self.value + &rhs.value)
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        Self::new(&self.value + M::modulus() - &rhs.value)
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        Self::new(&self.value * &rhs.value)
    }

    fn div_ref(&self, rhs: &Self) -> Self {
        assert!(!rhs.is_zero(), "division by zero in GF({})", M::NAME);
        self * &rhs.pow(M::modulus() - 2u32)
    }

    fn rem_ref(&self, rhs: &Self) -> Self {
        assert!(!rhs.is_zero(), "remainder by zero in GF({})", M::NAME);
        Self::from_reduced(&self.value % &rhs.value)
    }
}

impl Scalar {
    /// Reinterpret a coordinate as a scalar, reducing it modulo `n`.
    pub fn reduce_from(fe: &FieldElement) -> Self {
        Self::new(fe.as_biguint().clone())
    }
}

impl FieldElement {
    /// Reinterpret a scalar as a coordinate. Since `n < p` this never
    /// changes the value.
    pub fn lift(scalar: &Scalar) -> Self {
        Self::new(scalar.as_biguint().clone())
    }
}

impl<M: Modulus> Default for Element<M> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<M: Modulus> From<u64> for Element<M> {
    fn from(n: u64) -> Self {
        Self::new(BigUint::from(n))
    }
}

impl<M: Modulus> From<BigUint> for Element<M> {
    fn from(n: BigUint) -> Self {
        Self::new(n)
    }
}

impl<M: Modulus> fmt::Debug for Element<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element(0x{:x} mod {})", self.value, M::NAME)
    }
}

impl<M: Modulus> fmt::LowerHex for Element<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

/// Emit the owned and borrowed `core::ops` impls for a binary operator
/// backed by a by-reference method.
macro_rules! element_op {
    ($op:ident, $func:ident, $inner_func:ident) => {
        impl<M: Modulus> $op for Element<M> {
            type Output = Element<M>;

            #[inline]
            fn $func(self, rhs: Element<M>) -> Element<M> {
                self.$inner_func(&rhs)
            }
        }

        impl<M: Modulus> $op<&Element<M>> for Element<M> {
            type Output = Element<M>;

            #[inline]
            fn $func(self, rhs: &Element<M>) -> Element<M> {
                self.$inner_func(rhs)
            }
        }

        impl<M: Modulus> $op<Element<M>> for &Element<M> {
            type Output = Element<M>;

            #[inline]
            fn $func(self, rhs: Element<M>) -> Element<M> {
                self.$inner_func(&rhs)
            }
        }

        impl<M: Modulus> $op<&Element<M>> for &Element<M> {
            type Output = Element<M>;

            #[inline]
            fn $func(self, rhs: &Element<M>) -> Element<M> {
                self.$inner_func(rhs)
            }
        }
    };
}

element_op!(Add, add, add_ref);
element_op!(Sub, sub, sub_ref);
element_op!(Mul, mul, mul_ref);
element_op!(Div, div, div_ref);
element_op!(Rem, rem, rem_ref);

impl<M: Modulus> Neg for Element<M> {
    type Output = Element<M>;

    fn neg(self) -> Element<M> {
        -&self
    }
}

impl<M: Modulus> Neg for &Element<M> {
    type Output = Element<M>;

    fn neg(self) -> Element<M> {
        Element::new(M::modulus() - &self.value)
    }
}
