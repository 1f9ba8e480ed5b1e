//! HTTP inbound adapter exposing the portal's REST endpoints.

pub mod chat;
pub mod customers;
pub mod error;
pub mod health;
pub mod login;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
