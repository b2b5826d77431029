//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user entity, the password secret and its hasher, and the domain
//! error taxonomy.

pub mod constants;
pub mod error;
pub mod password;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::{HashCost, Password, PasswordHasher};
pub use user::{User, UserResponse};
