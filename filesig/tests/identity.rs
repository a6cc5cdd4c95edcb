//! Identity and key encoding regression fixtures

use filesig::{
    Address, Error, Network, Signature, SigningKey,
    digest::{hash160, message_digest},
    ecdsa::{RecoveryId, Verification, verify_with_address},
};
use hex_literal::hex;

const MSG: &[u8] = b"hello world\n";
const SIGNATURE: &str =
    "MEQCICQQl++/i2O/FFyJYdvfEMMQ77s7Jna7wPiwhQXJ4veVAiA6S9Mzox2BbkMkATvJL3INgZ6Q44H86Nvp6zXU29Az5g==";

#[test]
fn empty_input_identity() {
    let address = Address::from_hash160(Network::Mainnet, hash160(b""));
    assert_eq!(address.to_string(), "1HT7xU2Ngenf7D4yocz2SAcnNLW7rK8d4E");
}

#[test]
fn key_one_identities() {
    let signing_key =
        SigningKey::from_wif("5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf").unwrap();
    let verifying_key = signing_key.verifying_key();

    let cases = [
        (Network::Mainnet, false, "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm"),
        (Network::Mainnet, true, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"),
        (Network::Testnet, true, "mrCDrCybB6J1vRfbwM5hemdJz73FwDBC8r"),
    ];
    for (network, compressed, expected) in cases {
        assert_eq!(verifying_key.to_address(network, compressed).to_string(), expected);
    }

    assert_eq!(
        signing_key.to_wif(Network::Mainnet, true),
        "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"
    );
    assert_eq!(
        signing_key.to_wif(Network::Testnet, true),
        "cMahea7zqjxrtgAbB7LSGbcQUr1uX1ojuat9jZodMN87JcbXMTcA"
    );
}

#[test]
fn known_key_identities() {
    let signing_key =
        SigningKey::from_wif("L57sr6SzgJUg3xx2URzPEge1t58dPH6vUq1q7cTmMfmBgT4CGS9s").unwrap();
    assert_eq!(
        signing_key.to_bytes(),
        hex!("ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f")
    );
    assert_eq!(
        signing_key.to_wif(Network::Mainnet, false),
        "5Kc6BDZdBGHh7ZcaQtRnNE4QJv3dnq49wnmbTsdRYsUEJCLbnMD"
    );
    assert_eq!(
        signing_key.verifying_key().to_address(Network::Mainnet, true).to_string(),
        "159UPXfBAweK7f7nWJX4E7B3cX1CwXcPxK"
    );
}

#[test]
fn verify_known_signature() {
    let signature: Signature = SIGNATURE.parse().unwrap();

    let compressed: Address = "159UPXfBAweK7f7nWJX4E7B3cX1CwXcPxK".parse().unwrap();
    assert_eq!(
        verify_with_address(&compressed, MSG, &signature),
        Verification::Accepted {
            recovery_id: RecoveryId::new(false, false),
            compressed: true,
        }
    );

    let uncompressed: Address = "13VyQoPh4UtFBGULBwuYG3QroPYat65xHX".parse().unwrap();
    assert!(verify_with_address(&uncompressed, MSG, &signature).is_accepted());

    let other: Address = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH".parse().unwrap();
    assert_eq!(
        verify_with_address(&other, MSG, &signature),
        Verification::Rejected
    );
    assert_eq!(
        verify_with_address(&compressed, b"hello world", &signature),
        Verification::Rejected
    );
}

#[test]
fn message_digest_is_double_sha256() {
    assert_eq!(
        message_digest(b""),
        hex!("5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456")
    );
}

#[test]
fn malformed_inputs_are_errors() {
    assert_eq!(
        SigningKey::from_wif("5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDg"),
        Err(Error::Checksum)
    );
    assert_eq!("not-an-address".parse::<Address>(), Err(Error::Base58));
    assert!(matches!("AAAA".parse::<Signature>(), Err(Error::Der(_))));
}
