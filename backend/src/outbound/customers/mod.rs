//! Customer listing outbound adapter.
//!
//! A thin HTTP implementation of the `CustomerSource` port against the KYC
//! backend's `/customers` endpoint.

mod dto;
mod http_source;

pub use http_source::CustomerHttpSource;
