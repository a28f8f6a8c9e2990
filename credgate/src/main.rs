//! credgate entry point. Runs the bootstrap once and hands the result to the
//! host via stdout or a private file; any failure aborts with a diagnostic.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use credgate::cli::{read_password_line, BootstrapArgs, Cli, Commands, VerifyArgs};
use credgate::config::ConfigError;
use credgate::crypto::passwords::verify_password;
use credgate::output::{render, write_private};
use credgate::{logging, BootstrapError, Bootstrapper, CredentialConfig, PasswordLessLogin};
use thiserror::Error;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("render failed: {0}")]
    Render(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init(cli.log_level) {
        eprintln!("logging setup failed: {err}");
    }

    let result = match cli.command {
        Some(Commands::Verify(args)) => verify(&args),
        Some(Commands::Bootstrap(args)) => bootstrap(&args).map(|()| true),
        None => bootstrap(&BootstrapArgs::default()).map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::debug!(error = %err, "Command failed");
            match &err {
                AppError::Bootstrap(inner) => {
                    eprintln!("credgate: aborting startup ({} failed): {inner}", inner.primitive())
                }
                other => eprintln!("credgate: {other}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn bootstrap(args: &BootstrapArgs) -> Result<(), AppError> {
    let config = args.credential_config(CredentialConfig::from_env())?;

    let gate: PasswordLessLogin = Bootstrapper::new(config).run()?;
    let payload = render(&gate, args.format)?;

    match &args.output {
        Some(path) => {
            write_private(path, &payload)?;
            tracing::info!("Wrote login plugin payload to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(payload.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn verify(args: &VerifyArgs) -> Result<bool, AppError> {
    let candidate = read_password_line(io::stdin().lock())?;
    let matches = verify_password(&candidate, &args.hash);
    println!("{}", if matches { "match" } else { "no-match" });
    Ok(matches)
}
