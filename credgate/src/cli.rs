//! Command-line interface for credgate.

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use zeroize::Zeroizing;

use crate::config::{load_settings, ConfigError, CredentialConfig};
use crate::crypto::passwords::HashAlgorithm;
use crate::output::OutputFormat;

/// Hash the login password for the password-less admin login plugin
#[derive(Parser, Debug)]
#[command(name = "credgate")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    ADMINER_PASSWORD    Login password (a random one is generated if unset or empty)
"#)]
pub struct Cli {
    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Subcommand to execute (defaults to `bootstrap`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hash the login password and emit the plugin registration payload
    Bootstrap(BootstrapArgs),
    /// Check a password read from stdin against a hash
    Verify(VerifyArgs),
}

#[derive(Args, Debug, Default)]
pub struct BootstrapArgs {
    /// Hash algorithm (overrides the settings file)
    #[arg(short, long, value_enum)]
    pub algorithm: Option<HashAlgorithm>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// JSON settings file (`algorithm`, `bcryptCost`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the payload to this file (mode 0600) instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl BootstrapArgs {
    /// Layers the settings file and the `--algorithm` flag over `base`,
    /// which carries the password from the environment.
    pub fn credential_config(&self, base: CredentialConfig) -> Result<CredentialConfig, ConfigError> {
        let settings = self.config.as_ref().map(load_settings).transpose()?;
        base.layered(settings.as_ref(), self.algorithm)
    }
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Encoded hash to check against
    #[arg(long)]
    pub hash: String,
}

/// Reads one line and drops its `\n` or `\r\n` terminator. Anything else,
/// including surrounding spaces, belongs to the password.
pub fn read_password_line<R: BufRead>(mut reader: R) -> io::Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    reader.read_line(&mut *line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
