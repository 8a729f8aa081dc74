//! Decrypt command.

use crate::cli::{output, CipherArgs};
use crate::core::{cipher, paths};
use crate::error::Result;

/// Decrypt the encrypted secrets file for the given stage.
pub fn execute(args: &CipherArgs) -> Result<()> {
    let location = paths::resolve(&args.dir, &args.stage);
    let password = args.resolve_password()?;

    cipher::decrypt(&location, &password)?;

    output::success(&format!(
        "decrypted '{}' to '{}'",
        location.ciphertext_name(),
        location.plaintext_name()
    ));
    Ok(())
}
