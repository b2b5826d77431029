//! Password value object and hasher.
//!
//! `PasswordHasher` owns the Argon2 cost policy and turns plaintext into a
//! `Password` secret. The secret is a PHC string carrying the algorithm,
//! version, cost parameters and salt, so verification needs nothing else.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::constants::{
    DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB, DEFAULT_HASH_PARALLELISM,
    MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
use crate::error::{DomainError, DomainResult};

/// Argon2 cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    /// Memory size in KiB
    pub memory_kib: u32,
    /// Number of passes over memory
    pub iterations: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl HashCost {
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        Self {
            memory_kib,
            iterations,
            parallelism,
        }
    }
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            iterations: DEFAULT_HASH_ITERATIONS,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

/// Hashes plaintext passwords with a fixed Argon2id cost.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Build a hasher for the given cost.
    ///
    /// # Errors
    /// Returns a validation error if Argon2 rejects the parameters
    /// (e.g. memory below `8 * parallelism` KiB).
    pub fn new(cost: HashCost) -> DomainResult<Self> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|e| DomainError::validation(format!("Invalid hash cost: {}", e)))?;
        Ok(Self { params })
    }

    /// Hash a plaintext password.
    ///
    /// # Errors
    /// - `Validation` if the password is empty, shorter than
    ///   `MIN_PASSWORD_LENGTH` or longer than `MAX_PASSWORD_LENGTH` bytes.
    /// - `Internal` if the underlying primitive fails.
    pub fn hash(&self, plain_text: &str) -> DomainResult<Password> {
        if plain_text.is_empty() {
            return Err(DomainError::validation("Password is required"));
        }
        if plain_text.len() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::validation(format!(
                "Password must be at least {} bytes",
                MIN_PASSWORD_LENGTH
            )));
        }
        if plain_text.len() > MAX_PASSWORD_LENGTH {
            return Err(DomainError::validation(format!(
                "Password must be at most {} bytes",
                MAX_PASSWORD_LENGTH
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;

        Ok(Password {
            hash: hash.to_string(),
        })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

/// Hashed password secret. Never holds plaintext.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Wrap an existing secret (e.g. loaded from storage).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the secret string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
    }

    /// Whether the secret parses as a PHC hash string.
    pub fn is_phc(&self) -> bool {
        PasswordHash::new(&self.hash).is_ok()
    }

    /// Verify a plaintext candidate against this secret.
    ///
    /// Uses the parameters embedded in the secret. An unparsable secret
    /// verifies as `false`.
    pub fn verify(&self, plain_text: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            tracing::warn!("Stored password secret is not a valid PHC string");
            return false;
        };
        Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_hasher() -> PasswordHasher {
        PasswordHasher::new(HashCost::new(8, 1, 1)).unwrap()
    }

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "SecurePassword123!";
        let password = cheap_hasher().hash(plain).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn test_secret_is_not_plaintext() {
        let plain = "password123";
        let password = cheap_hasher().hash(plain).unwrap();

        assert_ne!(password.as_str(), plain);
        assert!(password.as_str().starts_with("$argon2id$"));
    }

    #[test]
    fn test_secret_embeds_parameters() {
        let plain = "TestPassword123";
        let secret = cheap_hasher().hash(plain).unwrap().into_string();

        // A hasher with a different cost still verifies: params travel with the secret
        let restored = Password::from_hash(secret);
        assert!(restored.verify(plain));
        assert!(restored.as_str().contains("m=8,t=1,p=1"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let hasher = cheap_hasher();
        let plain = "SamePassword123";
        let pass1 = hasher.hash(plain).unwrap();
        let pass2 = hasher.hash(plain).unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_empty_password_rejected() {
        let err = cheap_hasher().hash("").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_password_too_short() {
        let err = cheap_hasher().hash("short").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_password_length_bounds() {
        let hasher = cheap_hasher();
        assert!(hasher.hash("12345678").is_ok());
        assert!(hasher.hash(&"a".repeat(MAX_PASSWORD_LENGTH)).is_ok());

        let err = hasher.hash(&"a".repeat(MAX_PASSWORD_LENGTH + 1)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_length_bounds_count_bytes() {
        let hasher = cheap_hasher();
        // Four two-byte characters
        assert!(hasher.hash("éééé").is_ok());
        assert!(hasher.hash("ééé").is_err());
        assert!(hasher.hash(&"é".repeat(37)).is_err());
    }

    #[test]
    fn test_garbage_secret_verifies_false() {
        let password = Password::from_hash("not-a-phc-string".to_string());
        assert!(!password.is_phc());
        assert!(!password.verify("password123"));
        assert!(cheap_hasher().hash("password123").unwrap().is_phc());
    }

    #[test]
    fn test_invalid_cost_rejected() {
        let err = PasswordHasher::new(HashCost::new(1, 1, 1)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_default_cost_round_trip() {
        let hasher = PasswordHasher::new(HashCost::default()).unwrap();
        let password = hasher.hash("DefaultCost123").unwrap();

        assert!(password.as_str().contains("t=12"));
        assert!(password.verify("DefaultCost123"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = cheap_hasher().hash("password123").unwrap();
        let debug = format!("{:?}", password);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("argon2"));
    }
}
