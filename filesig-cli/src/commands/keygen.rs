use std::process::ExitCode;

use clap::Parser;
use eyre::Result;
use filesig::{Network, SigningKey};
use rand_core::OsRng;

#[derive(Parser)]
#[command(name = "keygen", about = "Generate a private key and print its address")]
pub struct KeygenCmd {
    #[arg(long, help = "Encode for Bitcoin testnet")]
    testnet: bool,

    #[arg(long, help = "Use the uncompressed public key encoding")]
    uncompressed: bool,
}

impl KeygenCmd {
    pub fn run(&self) -> Result<ExitCode> {
        let network = if self.testnet {
            Network::Testnet
        } else {
            Network::Mainnet
        };
        let compressed = !self.uncompressed;

        let signing_key = SigningKey::random(&mut OsRng);
        println!("Private key = {}", signing_key.to_wif(network, compressed));
        println!(
            "Address = {}",
            signing_key.verifying_key().to_address(network, compressed)
        );
        Ok(ExitCode::SUCCESS)
    }
}
