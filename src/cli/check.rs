//! Pre-deploy check command.

use crate::cli::{output, CheckArgs};
use crate::core::{guard, paths};
use crate::error::Result;

/// Verify the plaintext secrets file for the given stage exists.
pub fn execute(args: &CheckArgs) -> Result<()> {
    let location = paths::resolve(&args.dir, &args.stage);

    guard::check_plaintext_exists(&location)?;

    output::success(&format!("found '{}'", location.plaintext_name()));
    Ok(())
}
