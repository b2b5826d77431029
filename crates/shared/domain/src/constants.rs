//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement (bytes)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length accepted by the hasher (bytes)
pub const MAX_PASSWORD_LENGTH: usize = 72;

// =============================================================================
// Password hashing cost
// =============================================================================

/// Default Argon2 memory cost in KiB
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 4096;

/// Default Argon2 iteration count (key-stretching rounds)
pub const DEFAULT_HASH_ITERATIONS: u32 = 12;

/// Default Argon2 lane count
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;
