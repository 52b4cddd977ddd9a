//! HTTP handlers.

mod register_handler;

pub use register_handler::{method_not_allowed, register, register_route};
