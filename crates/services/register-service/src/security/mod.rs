//! Credential hashing and token issuance.

mod hasher;
mod token;

pub use hasher::{Argon2Hasher, CredentialHasher};
pub use token::{Claims, JwtIssuer, TokenIssuer};

#[cfg(any(test, feature = "test-utils"))]
pub use hasher::MockCredentialHasher;
#[cfg(any(test, feature = "test-utils"))]
pub use token::MockTokenIssuer;
