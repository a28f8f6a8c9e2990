//! One-shot credential bootstrap: pick the secret, hash it, build the gate.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, info, warn};

use crate::config::{CredentialConfig, PASSWORD_ENV};
use crate::crypto::integrity::fingerprint;
use crate::crypto::passwords::hash_password;
use crate::crypto::secrets::{Secret, SecretSource};
use crate::error::BootstrapError;
use crate::gate::{AuthGate, HashedCredential};

/// Configured passwords shorter than this are accepted but flagged.
pub const RECOMMENDED_MIN_PASSWORD_LEN: usize = 12;

pub struct Bootstrapper {
    config: CredentialConfig,
}

impl Bootstrapper {
    pub fn new(config: CredentialConfig) -> Self {
        Self { config }
    }

    /// Runs the bootstrap with the operating system's random source.
    pub fn run<G: AuthGate>(&self) -> Result<G, BootstrapError> {
        self.run_with_rng(&mut OsRng)
    }

    /// Runs the bootstrap drawing every random byte from `rng`.
    pub fn run_with_rng<G, R>(&self, rng: &mut R) -> Result<G, BootstrapError>
    where
        G: AuthGate,
        R: RngCore + CryptoRng,
    {
        let (secret, source) = Secret::resolve(self.config.configured_password(), rng)?;
        report_source(source, &secret);

        let encoded = hash_password(secret.expose(), self.config.hashing, rng)?;
        drop(secret);

        info!(
            algorithm = self.config.hashing.algorithm.as_str(),
            fingerprint = %fingerprint(&encoded),
            "Login credential hashed"
        );
        Ok(G::from_password_hash(HashedCredential::new(encoded)))
    }
}

fn report_source(source: SecretSource, secret: &Secret) {
    match source {
        SecretSource::Configured => {
            debug!(source = source.as_str(), "Using password from {}", PASSWORD_ENV);
            if secret.len() < RECOMMENDED_MIN_PASSWORD_LEN {
                warn!(
                    "{} is shorter than {} characters",
                    PASSWORD_ENV, RECOMMENDED_MIN_PASSWORD_LEN
                );
            }
        }
        SecretSource::Generated => {
            warn!(
                source = source.as_str(),
                "{} not set, using a random password; login stays locked until it is configured",
                PASSWORD_ENV
            );
        }
    }
}

/// Convenience wrapper returning the bare hashed credential.
pub fn bootstrap_credential(config: CredentialConfig) -> Result<HashedCredential, BootstrapError> {
    Bootstrapper::new(config).run()
}
