//! Argon2id hashing for user passwords before they reach the store.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;

/// Hash a plaintext password with a random salt. Returns the PHC string.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    #[test]
    fn hash_verifies_and_is_salted() {
        let a = hash_password("p").unwrap();
        let b = hash_password("p").unwrap();
        assert!(a.starts_with("$argon2id$"));
        assert_ne!(a, b);
        let parsed = PasswordHash::new(&a).unwrap();
        assert!(Argon2::default().verify_password(b"p", &parsed).is_ok());
        assert!(Argon2::default().verify_password(b"q", &parsed).is_err());
    }
}
