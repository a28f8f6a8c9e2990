//! Bootstraps the hashed login credential for a password-less database admin
//! login plugin. The password comes from `ADMINER_PASSWORD` or, when that is
//! unset or empty, from a fresh random value nobody knows; either way the host
//! only ever sees a salted hash.

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod gate;
pub mod logging;
pub mod output;

pub use bootstrap::{bootstrap_credential, Bootstrapper};
pub use config::CredentialConfig;
pub use error::BootstrapError;
pub use gate::{AuthGate, HashedCredential, PasswordLessLogin};
