//! Registration business logic.

mod registration_service;

pub use registration_service::{Registrar, RegistrationOutcome, RegistrationService};
