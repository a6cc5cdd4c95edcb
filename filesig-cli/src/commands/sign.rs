use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use eyre::{Result, WrapErr};
use filesig::SigningKey;
use rand_core::OsRng;

use super::read_file;

#[derive(Parser)]
#[command(name = "sign", about = "Sign a file with a WIF private key")]
pub struct SignCmd {
    #[arg(help = "Path to the file to sign")]
    file: PathBuf,

    #[arg(help = "Private key in Wallet Import Format", env = "FILESIG_PRIVATE_KEY")]
    private_key: String,
}

impl SignCmd {
    pub fn run(&self) -> Result<ExitCode> {
        let signing_key =
            SigningKey::from_wif(self.private_key.trim()).wrap_err("invalid private key")?;
        let contents = read_file(&self.file)?;

        let signature = signing_key
            .sign_with_rng(&mut OsRng, &contents)
            .to_base64()
            .wrap_err("failed to encode signature")?;
        println!("Signature = {signature}");
        Ok(ExitCode::SUCCESS)
    }
}
