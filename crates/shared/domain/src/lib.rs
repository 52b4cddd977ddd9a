//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the CPF document validator, the registration request and the user entity.

pub mod constants;
pub mod cpf;
pub mod error;
pub mod request;
pub mod user;

pub use constants::*;
pub use cpf::Cpf;
pub use error::{DomainError, DomainResult};
pub use request::RegistrationRequest;
pub use user::User;
