//! Encrypt command.

use crate::cli::{output, CipherArgs};
use crate::core::{cipher, paths};
use crate::error::Result;

/// Encrypt the secrets file for the given stage.
pub fn execute(args: &CipherArgs) -> Result<()> {
    let location = paths::resolve(&args.dir, &args.stage);
    let password = args.resolve_password()?;

    cipher::encrypt(&location, &password)?;

    output::success(&format!(
        "encrypted '{}' to '{}'",
        location.plaintext_name(),
        location.ciphertext_name()
    ));
    Ok(())
}
