//! ASN.1 DER framing of `(r, s)`.

use der::{
    Decode, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Sequence, Tag, Tagged, Writer,
    asn1::{AnyRef, UintRef},
};

use crate::{Error, Result};

/// Borrowed `SEQUENCE { r INTEGER, s INTEGER }`.
struct DerSignature<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

impl<'a> DecodeValue<'a> for DerSignature<'a> {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        reader.read_nested(header.length, |reader| {
            Ok(Self {
                r: decode_integer(reader)?,
                s: decode_integer(reader)?,
            })
        })
    }
}

/// Read a non-negative INTEGER, tolerating redundant leading zero bytes.
///
/// Fixed-width signers emit `r` and `s` as 32-byte big endian integers, so
/// a component below 2²⁴⁸ arrives with a leading `00` that strict DER
/// forbids.
fn decode_integer<'a, R: Reader<'a>>(reader: &mut R) -> der::Result<UintRef<'a>> {
    let any = AnyRef::decode(reader)?;
    any.tag().assert_eq(Tag::Integer)?;

    let bytes = any.value();
    match bytes.first() {
        None => Err(Tag::Integer.length_error()),
        Some(&byte) if byte & 0x80 != 0 => Err(Tag::Integer.value_error()),
        Some(_) => {
            let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len() - 1);
            UintRef::new(&bytes[start..])
        }
    }
}

impl EncodeValue for DerSignature<'_> {
    fn value_len(&self) -> der::Result<Length> {
        self.r.encoded_len()? + self.s.encoded_len()?
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        self.r.encode(writer)?;
        self.s.encode(writer)
    }
}

impl<'a> Sequence<'a> for DerSignature<'a> {}

/// Encode big endian `r` and `s` as a DER signature.
pub(super) fn encode(r: &[u8; 32], s: &[u8; 32]) -> Result<Vec<u8>> {
    let signature = DerSignature {
        r: UintRef::new(r)?,
        s: UintRef::new(s)?,
    };
    Ok(signature.to_der()?)
}

/// Decode a DER signature into 32-byte big endian `r` and `s`.
pub(super) fn decode(bytes: &[u8]) -> Result<([u8; 32], [u8; 32])> {
    let signature = DerSignature::from_der(bytes)?;
    Ok((
        widen(signature.r.as_bytes())?,
        widen(signature.s.as_bytes())?,
    ))
}

/// Left-pad a minimal big endian integer to 32 bytes.
fn widen(bytes: &[u8]) -> Result<[u8; 32]> {
    if bytes.len() > 32 {
        return Err(Error::ScalarRange);
    }
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(bytes);
    Ok(out)
}
