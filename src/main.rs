//! Stagecrypt - password-protect stage-scoped secrets files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stagecrypt::cli::output;
use stagecrypt::cli::{execute, Cli};
use stagecrypt::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("STAGECRYPT_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("stagecrypt=debug")
        } else {
            EnvFilter::new("stagecrypt=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::CipherFailure(_) => {
                Some("check that the password matches the one used to encrypt".to_string())
            }
            Error::SecretsFileMissing { file, .. } => {
                Some(format!("create {file} or pick a different stage"))
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
