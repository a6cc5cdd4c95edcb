//! Public key recovery, and verification against an [`Address`].
//!
//! Given a signature `(r, s)` over a digest `z`, there are up to four
//! public keys `Q` for which it verifies. They correspond to the points `R`
//! whose x-coordinate reduces to `r` modulo `n`, each of which yields
//!
//! ```text
//! Q = r⁻¹·(s·R - z·G)
//! ```
//!
//! A [`RecoveryId`] picks one of those candidates: bit 0 is the parity of
//! `R.y` and bit 1 says whether `R.x = r + n`, which is only possible when
//! `r < p - n`.

use core::fmt;
use tracing::debug;

use super::{Signature, VerifyingKey};
use crate::{
    Error, Result,
    address::Address,
    arithmetic::{AffinePoint, FieldElement, Scalar},
    digest::message_digest,
};

/// Recovery IDs, a.k.a. "recid".
///
/// Identifies which of the (up to) four candidate public keys recovered
/// from a signature is the signer's.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RecoveryId(u8);

impl RecoveryId {
    /// Maximum supported value for the recovery ID (inclusive).
    pub const MAX: u8 = 3;

    /// All recovery IDs, in the order they are tried.
    pub const ALL: [RecoveryId; 4] = [
        RecoveryId(0),
        RecoveryId(1),
        RecoveryId(2),
        RecoveryId(3),
    ];

    /// Create a new [`RecoveryId`] from the following 1-bit arguments:
    ///
    /// - `is_y_odd`: is the y-coordinate of `R` odd?
    /// - `is_x_reduced`: did the x-coordinate of `R` overflow the order?
    pub const fn new(is_y_odd: bool, is_x_reduced: bool) -> Self {
        Self((is_x_reduced as u8) << 1 | (is_y_odd as u8))
    }

    /// Did the x-coordinate of `R` overflow the order?
    pub const fn is_x_reduced(self) -> bool {
        (self.0 & 0b10) != 0
    }

    /// Is the y-coordinate of `R` odd?
    pub const fn is_y_odd(self) -> bool {
        (self.0 & 1) != 0
    }

    /// Convert a `u8` into a [`RecoveryId`].
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte <= Self::MAX {
            Some(Self(byte))
        } else {
            None
        }
    }

    /// Convert this [`RecoveryId`] into a `u8`.
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Given a public key, message digest, and signature, use trial recovery
    /// to determine if a suitable recovery ID exists, or return an error
    /// otherwise.
    pub fn trial_recovery_from_prehash(
        verifying_key: &VerifyingKey,
        prehash: &[u8; 32],
        signature: &Signature,
    ) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|&recovery_id| {
                VerifyingKey::recover_from_prehash(prehash, signature, recovery_id).as_ref()
                    == Ok(verifying_key)
            })
            .ok_or(Error::Recovery)
    }
}

impl TryFrom<u8> for RecoveryId {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        Self::from_byte(byte).ok_or(Error::Recovery)
    }
}

impl From<RecoveryId> for u8 {
    fn from(id: RecoveryId) -> u8 {
        id.0
    }
}

impl fmt::Display for RecoveryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl VerifyingKey {
    /// Recover a [`VerifyingKey`] from the given message digest, signature
    /// and [`RecoveryId`].
    ///
    /// Fails with [`Error::Recovery`] when the recovery ID names no point:
    /// `R.x` is not below the field prime, `R.x³ + 7` has no square root,
    /// or the recovered key is the identity.
    pub fn recover_from_prehash(
        prehash: &[u8; 32],
        signature: &Signature,
        recovery_id: RecoveryId,
    ) -> Result<Self> {
        let r = &**signature.r();
        let s = &**signature.s();
        let z = Scalar::from_be_bytes(prehash);

        let mut x = r.as_biguint().clone();
        if recovery_id.is_x_reduced() {
            x += Scalar::modulus();
        }
        if &x >= FieldElement::modulus() {
            return Err(Error::Recovery);
        }

        let big_r = AffinePoint::decompress(&FieldElement::new(x), recovery_id.is_y_odd())
            .ok_or(Error::Recovery)?;

        let r_inv = r.pow(-1);
        let sum = &(&big_r * s) + &(&AffinePoint::generator() * &-z);
        Self::from_affine(&sum * &r_inv).map_err(|_| Error::Recovery)
    }

    /// Recover a [`VerifyingKey`] from the given message, hashing it with
    /// double SHA-256 first.
    pub fn recover_from_msg(
        msg: &[u8],
        signature: &Signature,
        recovery_id: RecoveryId,
    ) -> Result<Self> {
        Self::recover_from_prehash(&message_digest(msg), signature, recovery_id)
    }
}

/// Outcome of verifying a signature against an [`Address`].
///
/// A rejected signature is an ordinary result, not an [`Error`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Verification {
    /// A recovered public key hashes to the address.
    Accepted {
        /// Recovery ID of the matching candidate
        recovery_id: RecoveryId,

        /// Did the compressed encoding of the key match?
        compressed: bool,
    },

    /// No recovered public key hashes to the address.
    Rejected,
}

impl Verification {
    /// Was the signature accepted?
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verification::Accepted { .. })
    }
}

/// Verify a signature over a 32-byte digest against an address.
///
/// Tries each [`RecoveryId`] in turn and compares the address of the
/// recovered key, first uncompressed then compressed, with `address`. The
/// address's own network determines the version byte used for comparison.
pub fn verify_prehash_with_address(
    address: &Address,
    prehash: &[u8; 32],
    signature: &Signature,
) -> Verification {
    for recovery_id in RecoveryId::ALL {
        let candidate = match VerifyingKey::recover_from_prehash(prehash, signature, recovery_id) {
            Ok(candidate) => candidate,
            Err(err) => {
                debug!(%recovery_id, %err, "no candidate key");
                continue;
            }
        };

        for compressed in [false, true] {
            if candidate.to_address(address.network(), compressed) == *address {
                debug!(%recovery_id, compressed, "recovered key matches address");
                return Verification::Accepted {
                    recovery_id,
                    compressed,
                };
            }
        }

        debug!(%recovery_id, "recovered key does not match address");
    }

    Verification::Rejected
}

/// Verify a signature over a message against an address, hashing the
/// message with double SHA-256 first.
pub fn verify_with_address(address: &Address, msg: &[u8], signature: &Signature) -> Verification {
    verify_prehash_with_address(address, &message_digest(msg), signature)
}

#[cfg(test)]
mod tests {
    use super::{RecoveryId, Verification, verify_prehash_with_address, verify_with_address};
    use crate::{
        Error,
        address::Network,
        arithmetic::{NonZeroScalar, Scalar},
        digest::message_digest,
        ecdsa::{Signature, SigningKey, VerifyingKey},
    };
    use hex_literal::hex;

    const D: [u8; 32] = hex!("ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f");
    const R: [u8; 32] = hex!("241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795");
    const S: [u8; 32] = hex!("3a4bd333a31d816e4324013bc92f720d819e90e381fce8dbe9eb35d4dbd033e6");
    const MSG: &[u8] = b"hello world\n";

    fn signature() -> Signature {
        Signature::from_scalars(Scalar::from_be_bytes(&R), Scalar::from_be_bytes(&S)).unwrap()
    }

    fn signing_key() -> SigningKey {
        SigningKey::from_bytes(&D).unwrap()
    }

    #[test]
    fn recovery_id_bits() {
        for (byte, id) in RecoveryId::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(id.to_byte()), byte);
            assert_eq!(RecoveryId::new(id.is_y_odd(), id.is_x_reduced()), id);
        }
        assert_eq!(RecoveryId::from_byte(4), None);
        assert_eq!(RecoveryId::try_from(4u8), Err(Error::Recovery));
    }

    #[test]
    fn exactly_one_candidate_matches() {
        let prehash = message_digest(MSG);
        let expected = signing_key().verifying_key().clone();

        let matches: Vec<bool> = RecoveryId::ALL
            .into_iter()
            .map(|id| {
                VerifyingKey::recover_from_prehash(&prehash, &signature(), id).as_ref()
                    == Ok(&expected)
            })
            .collect();
        assert_eq!(matches, [true, false, false, false]);

        assert_eq!(
            RecoveryId::trial_recovery_from_prehash(&expected, &prehash, &signature()),
            Ok(RecoveryId::new(false, false))
        );
    }

    #[test]
    fn high_recovery_ids_need_small_r() {
        // r is far above p - n, so r + n is not a field element
        for id in [RecoveryId::new(false, true), RecoveryId::new(true, true)] {
            assert_eq!(
                VerifyingKey::recover_from_msg(MSG, &signature(), id),
                Err(Error::Recovery)
            );
        }
    }

    #[test]
    fn accepts_both_address_forms() {
        let verifying_key = signing_key().verifying_key().clone();

        let uncompressed = verifying_key.to_address(Network::Mainnet, false);
        assert_eq!(uncompressed.to_string(), "13VyQoPh4UtFBGULBwuYG3QroPYat65xHX");
        assert_eq!(
            verify_with_address(&uncompressed, MSG, &signature()),
            Verification::Accepted {
                recovery_id: RecoveryId::new(false, false),
                compressed: false,
            }
        );

        let compressed = verifying_key.to_address(Network::Mainnet, true);
        assert_eq!(
            verify_with_address(&compressed, MSG, &signature()),
            Verification::Accepted {
                recovery_id: RecoveryId::new(false, false),
                compressed: true,
            }
        );

        let testnet = verifying_key.to_address(Network::Testnet, true);
        assert!(verify_with_address(&testnet, MSG, &signature()).is_accepted());
    }

    #[test]
    fn rejects_tampered_inputs() {
        let address = signing_key().verifying_key().to_address(Network::Mainnet, true);
        let prehash = message_digest(MSG);

        let mut tampered = prehash;
        tampered[31] ^= 1;
        assert_eq!(
            verify_prehash_with_address(&address, &tampered, &signature()),
            Verification::Rejected
        );

        let mut r = R;
        r[0] ^= 0x80;
        let flipped_r =
            Signature::from_scalars(Scalar::from_be_bytes(&r), Scalar::from_be_bytes(&S)).unwrap();
        assert!(!verify_prehash_with_address(&address, &prehash, &flipped_r).is_accepted());

        let mut s = S;
        s[31] ^= 1;
        let flipped_s =
            Signature::from_scalars(Scalar::from_be_bytes(&R), Scalar::from_be_bytes(&s)).unwrap();
        assert!(!verify_prehash_with_address(&address, &prehash, &flipped_s).is_accepted());
    }

    #[test]
    fn rejects_other_identity() {
        let other = SigningKey::from_nonzero_scalar(NonZeroScalar::new(Scalar::from(2)).unwrap());
        let address = other.verifying_key().to_address(Network::Mainnet, true);
        assert_eq!(
            verify_with_address(&address, MSG, &signature()),
            Verification::Rejected
        );
    }
}
