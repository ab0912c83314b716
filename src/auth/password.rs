/**
 * Password Hasher
 *
 * One-way salted hashing and verification of plaintext passwords, backed
 * by bcrypt. The salt is randomized per call, so hashing the same
 * plaintext twice yields different strings that both verify.
 */

use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a plaintext password for storage.
pub fn hash_password(plaintext: &str) -> Result<String, bcrypt::BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Verify a plaintext password against a stored hash.
///
/// Returns false rather than erroring on a malformed stored hash; the
/// underlying comparison is constant-time.
pub fn verify_password(plaintext: &str, hashed: &str) -> bool {
    verify(plaintext, hashed).unwrap_or(false)
}
