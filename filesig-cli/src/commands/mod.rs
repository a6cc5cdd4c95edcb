mod keygen;
mod sign;
mod verify;

pub use keygen::*;
pub use sign::*;
pub use verify::*;

use std::{fs, path::Path};

use eyre::{Result, WrapErr};

/// Read the whole file to be signed or verified.
fn read_file(path: &Path) -> Result<Vec<u8>> {
    let contents =
        fs::read(path).wrap_err_with(|| format!("failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), len = contents.len(), "read input file");
    Ok(contents)
}
