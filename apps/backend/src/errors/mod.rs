//! Error handling for the bingo backend.

pub mod domain;

pub use domain::DomainError;
