//! Shared test utilities for the bingo backend.

pub mod logging;
