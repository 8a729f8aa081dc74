//! Deterministic naming for stage-scoped secrets files.

use std::path::{Path, PathBuf};

/// Resolved file locations for one stage's secrets.
///
/// Constructed fresh per operation by [`resolve`]; immutable afterwards.
/// The cipher pipeline and the existence guard both go through this type,
/// so they always agree on file identity without sharing any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretsLocation {
    /// Stage this location was resolved for (kept for error messages).
    pub stage: String,
    /// The human-edited, unencrypted secrets file.
    pub plaintext: PathBuf,
    /// The password-protected artifact safe to commit or share.
    pub ciphertext: PathBuf,
}

impl SecretsLocation {
    /// File name of the plaintext secrets file, e.g. `secrets.prod.yml`.
    pub fn plaintext_name(&self) -> String {
        format!("secrets.{}.yml", self.stage)
    }

    /// File name of the encrypted artifact, e.g. `secrets.prod.yml.encrypted`.
    pub fn ciphertext_name(&self) -> String {
        format!("secrets.{}.yml.encrypted", self.stage)
    }
}

/// Compute the plaintext and ciphertext paths for a stage.
///
/// Pure naming convention, no filesystem access: `secrets.<stage>.yml`
/// and `secrets.<stage>.yml.encrypted`, both under `base_dir`. The same
/// inputs always yield the same paths. The stage string is used only as
/// a name component and is never parsed for structure.
pub fn resolve(base_dir: &Path, stage: &str) -> SecretsLocation {
    SecretsLocation {
        stage: stage.to_string(),
        plaintext: base_dir.join(format!("secrets.{stage}.yml")),
        ciphertext: base_dir.join(format!("secrets.{stage}.yml.encrypted")),
    }
}
