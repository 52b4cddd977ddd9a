//! SeaORM entities.

pub mod customer;
