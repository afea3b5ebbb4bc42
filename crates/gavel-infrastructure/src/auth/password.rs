//! Password hashing with Argon2id
//!
//! Argon2id (NIST/OWASP recommended) in PHC string format. Verification
//! timing is handled inside the argon2 crate.

use gavel_domain::error::{Error, Result};

/// Hash a password using Argon2id
///
/// Returns the PHC string format hash that includes algorithm parameters.
pub fn hash_password(password: &str) -> Result<String> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
    };

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::internal(format!("Password hashing failed: {e}")))
}

/// Verify a password against an Argon2id PHC hash
///
/// A malformed hash is an error; a wrong password is `Ok(false)`.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHash, PasswordVerifier},
    };

    if hash.is_empty() {
        return Ok(false);
    }

    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| Error::internal(format!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
