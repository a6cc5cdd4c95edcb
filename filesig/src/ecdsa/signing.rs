//! ECDSA signing: private key generation and the signing loop.

use core::fmt;
use rand_core::TryCryptoRng;
use tracing::{debug, warn};

use super::{Signature, VerifyingKey};
use crate::{
    Result,
    address::Network,
    arithmetic::{AffinePoint, NonZeroScalar, Scalar},
    digest::message_digest,
    wif,
};

/// ECDSA/secp256k1 signing key
#[derive(Clone)]
pub struct SigningKey {
    /// Secret scalar value
    secret_scalar: NonZeroScalar,

    /// Public key matching `secret_scalar`
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Generate a random signing key.
    pub fn random<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self::from_nonzero_scalar(NonZeroScalar::random(rng))
    }

    /// Generate a random signing key with entropy from the operating system.
    #[cfg(feature = "os_rng")]
    pub fn generate() -> Self {
        Self::random(&mut rand_core::OsRng)
    }

    /// Initialize a signing key from a 32-byte big endian secret in
    /// `(0, n)`.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        NonZeroScalar::from_repr(bytes).map(Self::from_nonzero_scalar)
    }

    /// Initialize a signing key from a secret scalar.
    pub fn from_nonzero_scalar(secret_scalar: NonZeroScalar) -> Self {
        let verifying_key = VerifyingKey::from_secret_scalar(&secret_scalar);
        Self {
            secret_scalar,
            verifying_key,
        }
    }

    /// Decode a signing key from Wallet Import Format.
    pub fn from_wif(text: &str) -> Result<Self> {
        Self::from_bytes(&wif::decode(text)?.key)
    }

    /// Encode this signing key in Wallet Import Format.
    pub fn to_wif(&self, network: Network, compressed: bool) -> String {
        wif::encode(network, &self.to_bytes(), compressed)
    }

    /// Serialize this signing key as a 32-byte big endian integer.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.secret_scalar.to_be_bytes()
    }

    /// Borrow the secret scalar.
    pub fn as_nonzero_scalar(&self) -> &NonZeroScalar {
        &self.secret_scalar
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Sign a message, hashing it with double SHA-256 first.
    pub fn sign_with_rng<R: TryCryptoRng + ?Sized>(&self, rng: &mut R, msg: &[u8]) -> Signature {
        self.sign_prehash_with_rng(rng, &message_digest(msg))
    }

    /// Sign a message with entropy from the operating system.
    #[cfg(feature = "os_rng")]
    pub fn sign(&self, msg: &[u8]) -> Signature {
        self.sign_with_rng(&mut rand_core::OsRng, msg)
    }

    /// Sign a 32-byte message digest.
    ///
    /// Each attempt draws a fresh nonce `k`, computes `r = x(k×G) mod n`
    /// and `s = (z + r·d) / k`, and is discarded if either is zero or if
    /// the signature does not verify under this key's public key. Only the
    /// entropy source is consumed by a failed attempt; a correct
    /// implementation succeeds on the first attempt with overwhelming
    /// probability.
    pub fn sign_prehash_with_rng<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        prehash: &[u8; 32],
    ) -> Signature {
        let z = Scalar::from_be_bytes(prehash);

        let mut attempt = 0u64;
        loop {
            attempt += 1;
            let k = NonZeroScalar::random(rng);

            // `k` is in (0, n), so `k×G` is never the identity
            let r = match (&AffinePoint::generator() * &k).x() {
                Some(x) => Scalar::reduce_from(x),
                None => continue,
            };
            let s = (&z + &(&r * &*self.secret_scalar)) / &*k;

            let signature = match Signature::from_scalars(r, s) {
                Ok(signature) => signature,
                Err(_) => {
                    debug!(attempt, "zero signature component; drawing a new nonce");
                    continue;
                }
            };

            if let Err(err) = self.verifying_key.verify_prehash(prehash, &signature) {
                warn!(attempt, %err, "signature failed its self-check; drawing a new nonce");
                continue;
            }

            return signature;
        }
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl Eq for SigningKey {}

impl PartialEq for SigningKey {
    fn eq(&self, other: &SigningKey) -> bool {
        self.secret_scalar == other.secret_scalar
    }
}
