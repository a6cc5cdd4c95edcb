use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use eyre::{Result, WrapErr};
use filesig::{Address, Signature, ecdsa::verify_with_address};

use super::read_file;

#[derive(Parser)]
#[command(name = "verify", about = "Verify a file's signature against an address")]
pub struct VerifyCmd {
    #[arg(help = "Path to the signed file")]
    file: PathBuf,

    #[arg(help = "Base58Check address of the signer")]
    address: String,

    #[arg(help = "Base64-encoded DER signature")]
    signature: String,
}

impl VerifyCmd {
    pub fn run(&self) -> Result<ExitCode> {
        let address: Address = self.address.trim().parse().wrap_err("invalid address")?;
        let signature: Signature = self.signature.parse().wrap_err("invalid signature")?;
        let contents = read_file(&self.file)?;

        let verification = verify_with_address(&address, &contents, &signature);
        tracing::debug!(?verification, "verification finished");

        if verification.is_accepted() {
            println!("Signature verification passed");
            Ok(ExitCode::SUCCESS)
        } else {
            println!("Signature verification failed");
            Ok(ExitCode::FAILURE)
        }
    }
}
