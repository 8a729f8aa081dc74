//! Pre-flight existence check for plaintext secrets files.

use std::fs::File;

use tracing::debug;

use crate::core::paths::SecretsLocation;
use crate::error::{Error, Result};

/// Verify that the plaintext secrets file for a stage exists and is
/// readable.
///
/// Deployment workflows run this before irreversible steps so a missing
/// file stops the deploy early rather than late. This is a precondition
/// failure for the operator to fix (create the file, or pick another
/// stage), never a transient condition worth retrying.
pub fn check_plaintext_exists(location: &SecretsLocation) -> Result<()> {
    match File::open(&location.plaintext) {
        Ok(_) => {
            debug!(stage = %location.stage, "plaintext secrets file present");
            Ok(())
        }
        Err(_) => Err(Error::SecretsFileMissing {
            stage: location.stage.clone(),
            file: location.plaintext_name(),
        }),
    }
}
