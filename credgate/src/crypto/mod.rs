//! Secret generation, password hashing, and log fingerprints. The plaintext
//! secret only ever flows from `secrets` into `passwords`.

pub mod integrity;
pub mod passwords;
pub mod secrets;
