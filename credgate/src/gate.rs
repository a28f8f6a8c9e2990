//! Construction contract of the password-less login plugin. The plugin's
//! verification logic lives in the host; this side only builds it from a
//! hashed credential.

use std::fmt;

use serde::Serialize;

use crate::crypto::passwords::verify_password;

/// Encoded password hash (PHC or modular crypt string).
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HashedCredential(String);

impl HashedCredential {
    pub fn new(encoded: String) -> Self {
        Self(encoded)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for HashedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HashedCredential").field(&self.0).finish()
    }
}

impl fmt::Display for HashedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything the host accepts as an authentication gate: built from exactly
/// one hashed credential.
pub trait AuthGate {
    fn from_password_hash(password_hash: HashedCredential) -> Self;
}

/// Registration payload for the password-less login plugin.
#[derive(Clone, Debug, Serialize)]
pub struct PasswordLessLogin {
    password_hash: HashedCredential,
}

impl PasswordLessLogin {
    /// PHP class the host registers.
    pub const PLUGIN_CLASS: &'static str = "AdminerLoginPasswordLess";
    /// Plugin source the registration file pulls in.
    pub const PLUGIN_PATH: &'static str = "plugins/login-password-less.php";

    pub fn password_hash(&self) -> &HashedCredential {
        &self.password_hash
    }

    /// Checks a login attempt the way the host's verify step would.
    pub fn verify(&self, attempt: &str) -> bool {
        verify_password(attempt, self.password_hash.as_str())
    }
}

impl AuthGate for PasswordLessLogin {
    fn from_password_hash(password_hash: HashedCredential) -> Self {
        Self { password_hash }
    }
}

impl AuthGate for HashedCredential {
    fn from_password_hash(password_hash: HashedCredential) -> Self {
        password_hash
    }
}
