//! Command-line interface.

pub mod check;
pub mod decrypt;
pub mod encrypt;
pub mod output;

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};

use crate::error::{Error, Result};

/// Stagecrypt - password-protect stage-scoped secrets files.
#[derive(Parser)]
#[command(
    name = "stagecrypt",
    about = "Password-protect stage-scoped secrets files",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Encrypt the secrets file for a stage
    Encrypt(CipherArgs),

    /// Decrypt the encrypted secrets file for a stage
    Decrypt(CipherArgs),

    /// Check that the plaintext secrets file for a stage exists
    ///
    /// Run this before a deploy step so a missing file fails the
    /// workflow early.
    Check(CheckArgs),
}

/// Arguments shared by `encrypt` and `decrypt`.
#[derive(Args)]
pub struct CipherArgs {
    /// Stage of the file to encrypt or decrypt (e.g. dev, production)
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub stage: String,

    /// Password protecting the file (prompted for when omitted)
    #[arg(short, long, env = "STAGECRYPT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Directory holding the secrets files
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,
}

/// Arguments for `check`.
#[derive(Args)]
pub struct CheckArgs {
    /// Stage whose secrets file must exist
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub stage: String,

    /// Directory holding the secrets files
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,
}

impl CipherArgs {
    /// Resolve the password from the flag, the environment, or an
    /// interactive prompt, in that order.
    ///
    /// The password is held only for the duration of the operation and
    /// never logged.
    pub fn resolve_password(&self) -> Result<String> {
        match &self.password {
            Some(p) if !p.is_empty() => Ok(p.clone()),
            Some(_) => Err(Error::PasswordRequired),
            None if atty::is(atty::Stream::Stdin) => {
                let password = dialoguer::Password::new()
                    .with_prompt(format!("Password for stage '{}'", self.stage))
                    .interact()?;
                if password.is_empty() {
                    return Err(Error::PasswordRequired);
                }
                Ok(password)
            }
            None => Err(Error::PasswordRequired),
        }
    }
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    match command {
        Command::Encrypt(args) => encrypt::execute(&args),
        Command::Decrypt(args) => decrypt::execute(&args),
        Command::Check(args) => check::execute(&args),
    }
}
