//! Error handling for the Lohai engine.

pub mod domain;

pub use domain::DomainError;
