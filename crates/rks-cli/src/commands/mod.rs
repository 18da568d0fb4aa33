//! CLI command implementations.

pub mod combine;
pub mod split;
