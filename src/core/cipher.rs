//! Streaming passphrase encryption for secrets files.
//!
//! Uses the age format in scrypt (passphrase) mode. The scrypt salt and
//! work factor live in the age header, so decryption needs only the
//! password. Payloads are streamed through bounded buffers; the whole
//! file is never held in memory, so multi-megabyte secrets files work
//! without any design change.

use std::fs::File;
use std::io::{Read, Write};

use age::secrecy::SecretString;
use tracing::debug;

use crate::core::paths::SecretsLocation;
use crate::error::{Error, Result};

const CHUNK_SIZE: usize = 64 * 1024;

/// Encrypt the plaintext secrets file into its ciphertext sibling.
///
/// Streams `location.plaintext` through an age scrypt encryptor keyed
/// from `password` into `location.ciphertext`, creating or truncating
/// the destination. On success the destination is fully written and
/// flushed before this returns. On failure the destination may hold a
/// partial write; callers must not treat its presence as success.
///
/// # Errors
///
/// - `SourceUnavailable` if the plaintext file is missing or unreadable
/// - `DestinationUnwritable` if the ciphertext file can't be created or written
/// - `CipherFailure` if the encryptor itself fails
pub fn encrypt(location: &SecretsLocation, password: &str) -> Result<()> {
    let mut source = File::open(&location.plaintext)
        .map_err(|e| Error::source_unavailable(&location.plaintext, e))?;
    let dest = File::create(&location.ciphertext)
        .map_err(|e| Error::destination_unwritable(&location.ciphertext, e))?;

    let recipient = age::scrypt::Recipient::new(SecretString::from(password.to_owned()));
    let encryptor =
        age::Encryptor::with_recipients(std::iter::once(&recipient as &dyn age::Recipient))
            .map_err(|e| Error::CipherFailure(format!("{}", e)))?;
    let mut writer = encryptor
        .wrap_output(dest)
        .map_err(|e| Error::CipherFailure(format!("{}", e)))?;

    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = source
            .read(&mut buf)
            .map_err(|e| Error::source_unavailable(&location.plaintext, e))?;
        if n == 0 {
            break;
        }
        writer
            .write_all(&buf[..n])
            .map_err(|e| Error::destination_unwritable(&location.ciphertext, e))?;
    }

    // finish() writes the final STREAM chunk and hands back the file,
    // which is flushed and closed before we report success.
    let mut dest = writer
        .finish()
        .map_err(|e| Error::destination_unwritable(&location.ciphertext, e))?;
    dest.flush()
        .map_err(|e| Error::destination_unwritable(&location.ciphertext, e))?;

    debug!(stage = %location.stage, "encrypted secrets file");
    Ok(())
}

/// Decrypt the ciphertext artifact back into the plaintext secrets file.
///
/// The mirror of [`encrypt`]: streams `location.ciphertext` through an
/// age scrypt decryptor into `location.plaintext`. The password is
/// verified against the age header before the plaintext file is opened,
/// so a wrong password never clobbers an existing plaintext.
///
/// # Errors
///
/// - `SourceUnavailable` if the ciphertext file is missing or unreadable
/// - `CipherFailure` if the password is wrong or the ciphertext is
///   malformed or corrupted (these are indistinguishable here)
/// - `DestinationUnwritable` if the plaintext file can't be created or written
pub fn decrypt(location: &SecretsLocation, password: &str) -> Result<()> {
    let source = File::open(&location.ciphertext)
        .map_err(|e| Error::source_unavailable(&location.ciphertext, e))?;

    let decryptor =
        age::Decryptor::new(source).map_err(|e| Error::CipherFailure(format!("{}", e)))?;
    let identity = age::scrypt::Identity::new(SecretString::from(password.to_owned()));
    let mut reader = decryptor
        .decrypt(std::iter::once(&identity as &dyn age::Identity))
        .map_err(|e| Error::CipherFailure(format!("{}", e)))?;

    let mut dest = File::create(&location.plaintext)
        .map_err(|e| Error::destination_unwritable(&location.plaintext, e))?;

    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        // Read errors here mean a truncated or tampered payload: the
        // header already matched, so this is a cipher problem, not an
        // ordinary I/O problem with the source file.
        let n = reader
            .read(&mut buf)
            .map_err(|e| Error::CipherFailure(format!("{}", e)))?;
        if n == 0 {
            break;
        }
        dest.write_all(&buf[..n])
            .map_err(|e| Error::destination_unwritable(&location.plaintext, e))?;
    }

    dest.flush()
        .map_err(|e| Error::destination_unwritable(&location.plaintext, e))?;

    debug!(stage = %location.stage, "decrypted secrets file");
    Ok(())
}
