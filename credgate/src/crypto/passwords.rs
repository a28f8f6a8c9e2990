//! Password hashing for the login credential. Argon2id with the library's
//! recommended parameters is the default; bcrypt is kept for hosts whose
//! verify function predates Argon2 support.
//! Salts are drawn from the caller's RNG so a missing entropy source surfaces
//! as an error instead of a panic.

use argon2::password_hash::{Salt, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use bcrypt::Version;
use rand::{CryptoRng, RngCore};
use serde::Deserialize;

use crate::error::BootstrapError;

/// Bcrypt salts are always 16 raw bytes.
const BCRYPT_SALT_LEN: usize = 16;

/// Bcrypt ignores everything past this many bytes of input.
pub const BCRYPT_MAX_PASSWORD_LEN: usize = 72;

pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    #[value(name = "argon2id")]
    Argon2id,
    #[value(name = "bcrypt")]
    Bcrypt,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Argon2id => "argon2id",
            HashAlgorithm::Bcrypt => "bcrypt",
        }
    }
}

/// Algorithm choice plus the one tunable the defaults leave open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashSettings {
    pub algorithm: HashAlgorithm,
    pub bcrypt_cost: u32,
}

impl Default for HashSettings {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

/// Hashes `plaintext` and returns the encoded string (PHC for Argon2id,
/// `$2y$` modular crypt for bcrypt). Salt and parameters are embedded.
pub fn hash_password<R>(plaintext: &str, settings: HashSettings, rng: &mut R) -> Result<String, BootstrapError>
where
    R: RngCore + CryptoRng,
{
    match settings.algorithm {
        HashAlgorithm::Argon2id => hash_argon2(plaintext, rng),
        HashAlgorithm::Bcrypt => hash_bcrypt(plaintext, settings.bcrypt_cost, rng),
    }
}

fn hash_argon2<R>(plaintext: &str, rng: &mut R) -> Result<String, BootstrapError>
where
    R: RngCore + CryptoRng,
{
    let mut salt_bytes = [0u8; Salt::RECOMMENDED_LENGTH];
    fill_salt(rng, &mut salt_bytes)?;
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| BootstrapError::HashingUnavailable(format!("{e}")))?;

    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| BootstrapError::HashingUnavailable(format!("{e}")))?;
    Ok(hash.to_string())
}

fn hash_bcrypt<R>(plaintext: &str, cost: u32, rng: &mut R) -> Result<String, BootstrapError>
where
    R: RngCore + CryptoRng,
{
    if plaintext.len() > BCRYPT_MAX_PASSWORD_LEN {
        return Err(BootstrapError::HashingUnavailable(format!(
            "bcrypt accepts at most {BCRYPT_MAX_PASSWORD_LEN} bytes, password has {}",
            plaintext.len()
        )));
    }
    let mut salt = [0u8; BCRYPT_SALT_LEN];
    fill_salt(rng, &mut salt)?;
    let parts = bcrypt::hash_with_salt(plaintext, cost, salt)
        .map_err(|e| BootstrapError::HashingUnavailable(format!("{e}")))?;
    Ok(parts.format_for_version(Version::TwoY))
}

fn fill_salt<R>(rng: &mut R, salt: &mut [u8]) -> Result<(), BootstrapError>
where
    R: RngCore + CryptoRng,
{
    rng.try_fill_bytes(salt)
        .map_err(|e| BootstrapError::EntropyUnavailable(format!("{e}")))
}

/// Checks `plaintext` against an encoded hash of either supported algorithm.
/// Unparseable or unknown hashes never verify.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    if stored_hash.starts_with("$argon2") {
        let parsed_hash = match PasswordHash::new(stored_hash) {
            Ok(hash) => hash,
            Err(_) => return false,
        };
        return Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok();
    }
    if stored_hash.starts_with("$2") {
        if plaintext.len() > BCRYPT_MAX_PASSWORD_LEN {
            return false;
        }
        return bcrypt::verify(plaintext, stored_hash).unwrap_or(false);
    }
    false
}
