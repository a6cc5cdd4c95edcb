//! Wallet Import Format (WIF) private keys.
//!
//! `base58check(version || key || [0x01])`: the optional trailing `0x01`
//! marks a key whose public key is used in compressed form.

use crate::{Error, Result, address::Network, address::base58check};

/// Size of a raw private key in bytes.
const KEY_SIZE: usize = 32;

/// Marker appended to keys with a compressed public key.
const COMPRESSED_MARKER: u8 = 0x01;

/// A decoded WIF private key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Wif {
    /// Network named by the version byte.
    pub network: Network,

    /// Raw big endian private key.
    pub key: [u8; KEY_SIZE],

    /// Does the key use the compressed public key encoding?
    pub compressed: bool,
}

/// Decode a WIF private key.
///
/// The checksum, version byte and compression marker are all validated:
/// a corrupted key is rejected rather than silently accepted.
pub fn decode(text: &str) -> Result<Wif> {
    let (version, payload) = base58check::decode(text)?;
    let network = Network::from_wif_version(version)?;

    let compressed = match payload.len() {
        KEY_SIZE => false,
        len if len == KEY_SIZE + 1 => {
            if payload[KEY_SIZE] != COMPRESSED_MARKER {
                return Err(Error::Version(payload[KEY_SIZE]));
            }
            true
        }
        actual => {
            return Err(Error::Length {
                expected: KEY_SIZE,
                actual,
            });
        }
    };

    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&payload[..KEY_SIZE]);
    Ok(Wif {
        network,
        key,
        compressed,
    })
}

/// Encode a private key as WIF.
pub fn encode(network: Network, key: &[u8; KEY_SIZE], compressed: bool) -> String {
    let mut payload = Vec::with_capacity(KEY_SIZE + 1);
    payload.extend_from_slice(key);
    if compressed {
        payload.push(COMPRESSED_MARKER);
    }
    base58check::encode(network.wif_version(), &payload)
}

#[cfg(test)]
mod tests {
    use super::{decode, encode};
    use crate::{Error, address::Network, address::base58check};

    const ONE: [u8; 32] = {
        let mut key = [0u8; 32];
        key[31] = 1;
        key
    };

    #[test]
    fn uncompressed() {
        let text = "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf";
        let wif = decode(text).unwrap();
        assert_eq!(wif.network, Network::Mainnet);
        assert_eq!(wif.key, ONE);
        assert!(!wif.compressed);
        assert_eq!(encode(Network::Mainnet, &ONE, false), text);
    }

    #[test]
    fn compressed() {
        let text = "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn";
        let wif = decode(text).unwrap();
        assert_eq!(wif.key, ONE);
        assert!(wif.compressed);
        assert_eq!(encode(Network::Mainnet, &ONE, true), text);
    }

    #[test]
    fn testnet() {
        let text = "cMahea7zqjxrtgAbB7LSGbcQUr1uX1ojuat9jZodMN87JcbXMTcA";
        let wif = decode(text).unwrap();
        assert_eq!(wif.network, Network::Testnet);
        assert!(wif.compressed);
        assert_eq!(encode(Network::Testnet, &ONE, true), text);
    }

    #[test]
    fn corrupted_checksum_is_fatal() {
        let err = decode("5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDg").unwrap_err();
        assert_eq!(err, Error::Checksum);
    }

    #[test]
    fn address_version_is_not_a_key() {
        let text = base58check::encode(0x00, &ONE);
        assert_eq!(decode(&text).unwrap_err(), Error::Version(0x00));
    }

    #[test]
    fn bad_compression_marker() {
        let mut payload = ONE.to_vec();
        payload.push(0x02);
        let text = base58check::encode(0x80, &payload);
        assert_eq!(decode(&text).unwrap_err(), Error::Version(0x02));
    }

    #[test]
    fn bad_length() {
        let text = base58check::encode(0x80, &[1u8; 31]);
        assert_eq!(
            decode(&text).unwrap_err(),
            Error::Length {
                expected: 32,
                actual: 31
            }
        );
    }
}
