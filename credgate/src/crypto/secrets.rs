//! Plaintext secret handling. A `Secret` lives only long enough to be hashed:
//! its buffer is wiped on drop and it never prints its contents.

use std::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::BootstrapError;

/// Number of random bytes behind a generated secret.
pub const GENERATED_SECRET_BYTES: usize = 16;

/// Where the secret came from. Logged so operators can tell whether login is
/// possible at all; the value itself never is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecretSource {
    Configured,
    Generated,
}

impl SecretSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretSource::Configured => "configured",
            SecretSource::Generated => "generated",
        }
    }
}

pub struct Secret {
    value: Zeroizing<String>,
}

impl Secret {
    /// Picks the configured value when it is non-empty, otherwise draws a
    /// fresh random secret from `rng`. Empty strings count as unset.
    pub fn resolve<R>(configured: Option<&str>, rng: &mut R) -> Result<(Self, SecretSource), BootstrapError>
    where
        R: RngCore + CryptoRng,
    {
        match configured {
            Some(value) if !value.is_empty() => Ok((
                Self {
                    value: Zeroizing::new(value.to_string()),
                },
                SecretSource::Configured,
            )),
            _ => Ok((generate_secret(rng)?, SecretSource::Generated)),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

/// Draws 16 bytes from `rng` and renders them as 32 lowercase hex characters.
pub fn generate_secret<R>(rng: &mut R) -> Result<Secret, BootstrapError>
where
    R: RngCore + CryptoRng,
{
    let mut bytes = Zeroizing::new([0u8; GENERATED_SECRET_BYTES]);
    rng.try_fill_bytes(&mut bytes[..])
        .map_err(|e| BootstrapError::EntropyUnavailable(format!("{e}")))?;
    Ok(Secret {
        value: Zeroizing::new(hex::encode(&bytes[..])),
    })
}
