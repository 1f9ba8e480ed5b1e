//! Outbound adapters implementing domain ports for external collaborators.
//!
//! - **customers**: reqwest client for the KYC backend's customer listing
//! - **chat**: reqwest client for the chatbot endpoint
//! - **auth**: configured-account authenticator
//!
//! Adapters are thin translators between domain types and wire formats. They
//! contain no business logic.

pub mod auth;
pub mod chat;
pub mod customers;
pub mod http_support;
