//! ECDSA verifying keys

use super::Signature;
use crate::{
    Error, Result,
    address::{Address, Network},
    arithmetic::{AffinePoint, NonZeroScalar, Scalar},
    digest::message_digest,
};

/// ECDSA/secp256k1 verification key (i.e. public key)
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct VerifyingKey {
    point: AffinePoint,
}

impl VerifyingKey {
    /// Initialize a verifying key from a curve point. The identity is not a
    /// valid public key.
    pub fn from_affine(point: AffinePoint) -> Result<Self> {
        if point.is_identity() || !point.is_on_curve() {
            return Err(Error::PointEncoding);
        }
        Ok(Self { point })
    }

    /// Public key `d×G` of the secret scalar `d`.
    pub fn from_secret_scalar(secret_scalar: &NonZeroScalar) -> Self {
        Self {
            point: &AffinePoint::generator() * secret_scalar,
        }
    }

    /// Parse a SEC1-encoded public key, compressed or uncompressed.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_affine(AffinePoint::from_sec1_bytes(bytes)?)
    }

    /// Serialize as SEC1, optionally compressed.
    pub fn to_sec1_bytes(&self, compress: bool) -> Vec<u8> {
        self.point.to_sec1_bytes(compress)
    }

    /// Borrow the inner [`AffinePoint`].
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Address of this key's SEC1 encoding on the given network.
    pub fn to_address(&self, network: Network, compress: bool) -> Address {
        Address::from_public_key_bytes(network, &self.to_sec1_bytes(compress))
    }

    /// Verify a signature over a 32-byte message digest.
    ///
    /// Computes `u₁ = z/s`, `u₂ = r/s` and accepts iff the x-coordinate of
    /// `u₁×G + u₂×Q`, reduced modulo `n`, equals `r`.
    pub fn verify_prehash(&self, prehash: &[u8; 32], signature: &Signature) -> Result<()> {
        let z = Scalar::from_be_bytes(prehash);
        let (r, s) = (&**signature.r(), &**signature.s());

        let u1 = &z / s;
        let u2 = r / s;
        let point = &(&AffinePoint::generator() * &u1) + &(&self.point * &u2);

        match point.x() {
            Some(x) if Scalar::reduce_from(x) == *r => Ok(()),
            _ => Err(Error::Verification),
        }
    }

    /// Verify a signature over a message, hashing it with double SHA-256
    /// first.
    pub fn verify(&self, msg: &[u8], signature: &Signature) -> Result<()> {
        self.verify_prehash(&message_digest(msg), signature)
    }
}

impl From<&NonZeroScalar> for VerifyingKey {
    fn from(secret_scalar: &NonZeroScalar) -> VerifyingKey {
        Self::from_secret_scalar(secret_scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::VerifyingKey;
    use crate::{
        Error,
        address::Network,
        arithmetic::{AffinePoint, Scalar},
        ecdsa::Signature,
    };
    use hex_literal::hex;

    const Q_UNCOMPRESSED: [u8; 65] = hex!(
        "04
         779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd
         e94b724a555b6d017bb7607c3e3281daf5b1699d6ef4124975c9237b917d426f"
    );

    const R: [u8; 32] = hex!("241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795");
    const S: [u8; 32] = hex!("3a4bd333a31d816e4324013bc92f720d819e90e381fce8dbe9eb35d4dbd033e6");

    fn signature() -> Signature {
        Signature::from_scalars(Scalar::from_be_bytes(&R), Scalar::from_be_bytes(&S)).unwrap()
    }

    #[test]
    fn sec1_round_trip() {
        let key = VerifyingKey::from_sec1_bytes(&Q_UNCOMPRESSED).unwrap();
        assert_eq!(key.to_sec1_bytes(false), Q_UNCOMPRESSED);

        let compressed = key.to_sec1_bytes(true);
        assert_eq!(compressed[0], 0x03);
        assert_eq!(VerifyingKey::from_sec1_bytes(&compressed).unwrap(), key);
    }

    #[test]
    fn identity_rejected() {
        assert_eq!(
            VerifyingKey::from_affine(AffinePoint::identity()),
            Err(Error::PointEncoding)
        );
        assert_eq!(VerifyingKey::from_sec1_bytes(&[0]), Err(Error::PointEncoding));
    }

    #[test]
    fn addresses() {
        let key = VerifyingKey::from_sec1_bytes(&Q_UNCOMPRESSED).unwrap();
        assert_eq!(
            key.to_address(Network::Mainnet, false).to_string(),
            "13VyQoPh4UtFBGULBwuYG3QroPYat65xHX"
        );
        assert_eq!(
            key.to_address(Network::Mainnet, true).to_string(),
            "159UPXfBAweK7f7nWJX4E7B3cX1CwXcPxK"
        );
    }

    #[test]
    fn verify_known_signature() {
        let key = VerifyingKey::from_sec1_bytes(&Q_UNCOMPRESSED).unwrap();
        assert_eq!(key.verify(b"hello world\n", &signature()), Ok(()));
        assert_eq!(
            key.verify(b"hello world!", &signature()),
            Err(Error::Verification)
        );

        let other = VerifyingKey::from_affine(AffinePoint::generator()).unwrap();
        assert_eq!(
            other.verify(b"hello world\n", &signature()),
            Err(Error::Verification)
        );
    }
}
