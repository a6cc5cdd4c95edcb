//! Base58Check encoded identities ("addresses") of public keys.
//!
//! An address is `base58(version || hash160(sec1_public_key) || checksum)`
//! where the checksum is the first four bytes of the double SHA-256 of the
//! versioned payload. Leading zero bytes are preserved as leading `1`
//! characters, so mainnet addresses always start with `1`.

use core::{fmt, str::FromStr};

use crate::{
    Error, Result,
    digest::{HASH160_SIZE, hash160},
};

/// Bitcoin network, which determines version bytes of encoded keys.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Network {
    /// Bitcoin mainnet
    #[default]
    Mainnet,

    /// Bitcoin testnet
    Testnet,
}

impl Network {
    /// Version byte of a pay-to-pubkey-hash address.
    pub const fn address_version(self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet => 0x6f,
        }
    }

    /// Version byte of a WIF private key.
    pub const fn wif_version(self) -> u8 {
        match self {
            Network::Mainnet => 0x80,
            Network::Testnet => 0xef,
        }
    }

    fn from_address_version(version: u8) -> Result<Self> {
        match version {
            0x00 => Ok(Network::Mainnet),
            0x6f => Ok(Network::Testnet),
            other => Err(Error::Version(other)),
        }
    }

    pub(crate) fn from_wif_version(version: u8) -> Result<Self> {
        match version {
            0x80 => Ok(Network::Mainnet),
            0xef => Ok(Network::Testnet),
            other => Err(Error::Version(other)),
        }
    }
}

/// Base58Check framing.
pub mod base58check {
    use crate::{Error, Result, digest::sha256d};

    /// Size of the trailing checksum in bytes.
    pub const CHECKSUM_SIZE: usize = 4;

    /// Encode `version || payload || checksum` as Base58.
    pub fn encode(version: u8, payload: &[u8]) -> String {
        let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_SIZE);
        data.push(version);
        data.extend_from_slice(payload);
        let checksum = sha256d(&data);
        data.extend_from_slice(&checksum[..CHECKSUM_SIZE]);
        bs58::encode(data).into_string()
    }

    /// Decode Base58Check text into its version byte and payload,
    /// verifying the checksum.
    pub fn decode(text: &str) -> Result<(u8, Vec<u8>)> {
        let mut data = bs58::decode(text).into_vec()?;
        if data.len() < 1 + CHECKSUM_SIZE {
            return Err(Error::Length {
                expected: 1 + CHECKSUM_SIZE,
                actual: data.len(),
            });
        }

        let checksum = data.split_off(data.len() - CHECKSUM_SIZE);
        if sha256d(&data)[..CHECKSUM_SIZE] != checksum[..] {
            return Err(Error::Checksum);
        }

        let payload = data.split_off(1);
        Ok((data[0], payload))
    }
}

/// Pay-to-pubkey-hash address: the `hash160` of a SEC1-encoded public key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Address {
    network: Network,
    hash: [u8; HASH160_SIZE],
}

impl Address {
    /// Address of the given public key hash.
    pub const fn from_hash160(network: Network, hash: [u8; HASH160_SIZE]) -> Self {
        Self { network, hash }
    }

    /// Address of a SEC1-encoded public key. Compressed and uncompressed
    /// encodings of the same key have different addresses.
    pub fn from_public_key_bytes(network: Network, sec1: &[u8]) -> Self {
        Self::from_hash160(network, hash160(sec1))
    }

    /// Network this address belongs to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The public key hash.
    pub fn hash160(&self) -> &[u8; HASH160_SIZE] {
        &self.hash
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base58check::encode(
            self.network.address_version(),
            &self.hash,
        ))
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (version, payload) = base58check::decode(s)?;
        let network = Network::from_address_version(version)?;
        let hash = payload
            .as_slice()
            .try_into()
            .map_err(|_| Error::Length {
                expected: HASH160_SIZE,
                actual: payload.len(),
            })?;
        Ok(Self::from_hash160(network, hash))
    }
}

#[cfg(test)]
mod tests {
    use super::{Address, Network, base58check};
    use crate::Error;
    use hex_literal::hex;

    #[test]
    fn empty_input_identity() {
        let address = Address::from_public_key_bytes(Network::Mainnet, b"");
        assert_eq!(address.to_string(), "1HT7xU2Ngenf7D4yocz2SAcnNLW7rK8d4E");
    }

    #[test]
    fn parse_round_trip() {
        let text = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH";
        let address: Address = text.parse().unwrap();
        assert_eq!(address.network(), Network::Mainnet);
        assert_eq!(address.to_string(), text);

        let testnet: Address = "mrCDrCybB6J1vRfbwM5hemdJz73FwDBC8r".parse().unwrap();
        assert_eq!(testnet.network(), Network::Testnet);
        assert_eq!(testnet.hash160(), address.hash160());
    }

    #[test]
    fn leading_zero_bytes_become_ones() {
        let text = base58check::encode(0x00, &[0u8; 20]);
        // version byte plus 20 hash bytes, all zero
        assert!(text[..21].bytes().all(|c| c == b'1'));
        assert_ne!(text.as_bytes()[21], b'1');
        assert_eq!(base58check::decode(&text).unwrap(), (0x00, vec![0u8; 20]));
    }

    #[test]
    fn checksum_mismatch() {
        // last character altered
        let err = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMJ".parse::<Address>().unwrap_err();
        assert_eq!(err, Error::Checksum);
    }

    #[test]
    fn not_base58() {
        let err = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAM0".parse::<Address>().unwrap_err();
        assert_eq!(err, Error::Base58);
    }

    #[test]
    fn wrong_version() {
        let text = base58check::encode(0x05, &hex!("b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"));
        assert_eq!(text.parse::<Address>().unwrap_err(), Error::Version(0x05));
    }

    #[test]
    fn wrong_length() {
        let text = base58check::encode(0x00, &[1u8; 19]);
        assert_eq!(
            text.parse::<Address>().unwrap_err(),
            Error::Length {
                expected: 20,
                actual: 19
            }
        );
    }
}
