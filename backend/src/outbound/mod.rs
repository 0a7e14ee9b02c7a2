//! Outbound adapters implementing domain ports for infrastructure.
//!
//! This module follows the hexagonal architecture pattern: adapters are thin
//! translators between domain types and infrastructure representations and
//! contain no business logic.
//!
//! - **memory**: in-process stores backing the repositories and the tour
//!   catalogue, seeded from the example-data crate at startup
//! - **entropy**: randomness sources behind the domain entropy port

pub mod entropy;
pub mod memory;

pub use entropy::{SeededEntropy, ThreadEntropy};
