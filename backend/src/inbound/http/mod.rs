//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod bookings;
pub mod error;
pub mod health;
pub mod itineraries;
pub mod notifications;
pub mod payments;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod tours;
pub mod validation;

pub use error::ApiResult;
