//! Error type

use core::fmt::{self, Display};

/// Result type with the `filesig` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported for malformed keys, identities, and signatures.
///
/// A signature which simply fails to verify is not an error: see
/// [`Verification`](crate::ecdsa::Verification).
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Text is not valid Base58.
    Base58,

    /// Base58Check checksum does not match the payload.
    Checksum,

    /// Unknown version byte for the expected kind of payload.
    Version(u8),

    /// Payload has the wrong length.
    Length {
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Integer is zero or not below the group order.
    ScalarRange,

    /// Bytes do not encode a point on the curve.
    PointEncoding,

    /// Malformed ASN.1 DER signature container.
    Der(der::Error),

    /// Malformed base64 transport encoding.
    Base64,

    /// No public key can be recovered for the given recovery id.
    Recovery,

    /// Signature does not verify under the given public key.
    Verification,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Base58 => f.write_str("invalid Base58 encoding"),
            Error::Checksum => f.write_str("Base58Check checksum mismatch"),
            Error::Version(byte) => write!(f, "unknown version byte 0x{byte:02x}"),
            Error::Length { expected, actual } => {
                write!(f, "expected {expected} bytes, got {actual}")
            }
            Error::ScalarRange => f.write_str("scalar out of range (0, n)"),
            Error::PointEncoding => f.write_str("invalid secp256k1 point encoding"),
            Error::Der(err) => write!(f, "malformed DER signature: {err}"),
            Error::Base64 => f.write_str("invalid base64 encoding"),
            Error::Recovery => f.write_str("public key recovery failed"),
            Error::Verification => f.write_str("signature verification failed"),
        }
    }
}

impl std::error::Error for Error {}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Error {
        Error::Der(err)
    }
}

impl From<bs58::decode::Error> for Error {
    fn from(_: bs58::decode::Error) -> Error {
        Error::Base58
    }
}

impl From<base64ct::Error> for Error {
    fn from(_: base64ct::Error) -> Error {
        Error::Base64
    }
}
