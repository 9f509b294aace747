use argon2::{
    password_hash::{Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// Hashes a plaintext password into a PHC string with a fresh random salt.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    match Argon2::default().hash_password(plain.as_bytes(), &salt) {
        Ok(hash) => Ok(hash.to_string()),
        Err(e) => {
            error!(error = %e, "argon2 hashing failed");
            Err(anyhow::anyhow!("password hashing failed: {e}"))
        }
    }
}

/// Checks a plaintext against a stored PHC string. A mismatch is
/// `Ok(false)`; only an unusable stored hash or a verifier fault is an
/// error.
pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| anyhow::anyhow!("stored hash is not a valid PHC string: {e}"))?;
    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(e) => {
            error!(error = %e, "argon2 verification failed");
            Err(anyhow::anyhow!("password verification failed: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_argon2_phc_strings() {
        let hash = hash_password("hunter42").expect("hash");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("hunter42", &hash).expect("verify"));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same-password").expect("hash");
        let b = hash_password("same-password").expect("hash");
        assert_ne!(a, b);
        // Both still verify despite differing salts
        assert!(verify_password("same-password", &a).expect("verify"));
        assert!(verify_password("same-password", &b).expect("verify"));
    }

    #[test]
    fn mismatch_is_false_not_an_error() {
        let hash = hash_password("right-password").expect("hash");
        let ok = verify_password("wrong-password", &hash).expect("mismatch is not an error");
        assert!(!ok);
    }

    #[test]
    fn unusable_stored_hash_is_an_error() {
        let err = verify_password("anything", "sha256:deadbeef").unwrap_err();
        assert!(err.to_string().contains("PHC"));
    }
}
