//! Backend library for the travel booking platform.
//!
//! Laid out hexagonally: `domain` holds the entities, ports and services,
//! `outbound` the seeded in-memory adapters behind the driven ports, and
//! `inbound` the HTTP layer translating requests into driving-port calls.
//! `server` wires the three together into a runnable Actix application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
