use crate::constant::PASSWORD_HASH_COST;
use anyhow::Context;

/// Hashes a plaintext password for storage on the user row.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    bcrypt::hash(password, PASSWORD_HASH_COST).context("unable to hash password")
}

/// Checks a login attempt against the stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> anyhow::Result<bool> {
    bcrypt::verify(password, password_hash).context("unable to verify password")
}
