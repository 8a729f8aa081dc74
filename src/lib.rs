//! Stagecrypt - password-protect stage-scoped secrets files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── encrypt       # Encrypt a stage's secrets file
//! │   ├── decrypt       # Decrypt a stage's ciphertext
//! │   ├── check         # Pre-deploy existence guard
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── paths         # Deterministic secrets file naming
//!     ├── cipher        # Streaming passphrase encryption (age/scrypt)
//!     └── guard         # Plaintext existence check
//! ```
//!
//! # Features
//!
//! - Deterministic `secrets.<stage>.yml` / `secrets.<stage>.yml.encrypted`
//!   naming under a caller-supplied base directory
//! - Streaming encrypt/decrypt keyed by a password (age scrypt mode), so
//!   arbitrarily large files never need to fit in memory
//! - Wrong passwords and corrupted ciphertexts fail loudly instead of
//!   producing garbage plaintext
//! - A pre-flight guard that stops a deployment early when the plaintext
//!   secrets file for a stage is missing

pub mod cli;
pub mod core;
pub mod error;
