//! CLI parsing tests.

use clap::Parser;
use credgate::cli::{Cli, Commands};
use credgate::crypto::passwords::HashAlgorithm;
use credgate::output::OutputFormat;
use tracing::level_filters::LevelFilter;

#[test]
fn no_subcommand_means_bootstrap() {
    let cli = Cli::try_parse_from(["credgate"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.log_level, LevelFilter::WARN);
}

#[test]
fn version_available() {
    let err = Cli::try_parse_from(["credgate", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn help_mentions_password_variable() {
    let err = Cli::try_parse_from(["credgate", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    assert!(err.to_string().contains("ADMINER_PASSWORD"));
}

#[test]
fn bootstrap_flags_parse() {
    let cli = Cli::try_parse_from([
        "credgate",
        "--log-level",
        "debug",
        "bootstrap",
        "--algorithm",
        "bcrypt",
        "--format",
        "php",
        "--config",
        "settings.json",
        "--output",
        "login.php",
    ])
    .unwrap();

    assert_eq!(cli.log_level, LevelFilter::DEBUG);
    match cli.command {
        Some(Commands::Bootstrap(args)) => {
            assert_eq!(args.algorithm, Some(HashAlgorithm::Bcrypt));
            assert_eq!(args.format, OutputFormat::Php);
            assert_eq!(args.config.unwrap().to_str(), Some("settings.json"));
            assert_eq!(args.output.unwrap().to_str(), Some("login.php"));
        }
        other => panic!("Expected Bootstrap command, got {other:?}"),
    }
}

#[test]
fn bootstrap_defaults() {
    let cli = Cli::try_parse_from(["credgate", "bootstrap"]).unwrap();
    match cli.command {
        Some(Commands::Bootstrap(args)) => {
            assert_eq!(args.algorithm, None);
            assert_eq!(args.format, OutputFormat::Plain);
            assert!(args.config.is_none());
            assert!(args.output.is_none());
        }
        other => panic!("Expected Bootstrap command, got {other:?}"),
    }
}

#[test]
fn unknown_algorithm_is_rejected() {
    let result = Cli::try_parse_from(["credgate", "bootstrap", "--algorithm", "md5"]);
    assert!(result.is_err());
}

#[test]
fn verify_requires_hash() {
    assert!(Cli::try_parse_from(["credgate", "verify"]).is_err());

    let cli = Cli::try_parse_from(["credgate", "verify", "--hash", "$2y$04$abc"]).unwrap();
    match cli.command {
        Some(Commands::Verify(args)) => assert_eq!(args.hash, "$2y$04$abc"),
        other => panic!("Expected Verify command, got {other:?}"),
    }
}
