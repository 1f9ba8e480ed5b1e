//! Driven port for fetching customer records from the KYC backend.
//!
//! The domain owns the record shape; adapters own transport and decoding.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::CustomerRecord;

define_port_error! {
    /// Errors surfaced while fetching customers.
    pub enum CustomerSourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "customer fetch transport failed: {message}"; retryable,
        /// The call exceeded its timeout.
        Timeout { message: String } =>
            "customer fetch timed out: {message}"; retryable,
        /// The backend answered with a non-success status.
        Status { status: u16, message: String } =>
            "customer fetch returned status {status}: {message}",
        /// The response body did not match the customer schema.
        Decode { message: String } =>
            "customer payload decode failed: {message}",
    }
}

impl CustomerSourceError {
    /// Whether the backend itself reported a server-side failure.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status >= 500)
    }
}

/// Port for listing customers with their KYC linkage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerSource: Send + Sync {
    /// Fetch all customers in display order.
    async fn fetch_customers(&self) -> Result<Vec<CustomerRecord>, CustomerSourceError>;
}

/// Fixture implementation returning no customers.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCustomerSource;

#[cfg(test)]
#[async_trait]
impl CustomerSource for FixtureCustomerSource {
    async fn fetch_customers(&self) -> Result<Vec<CustomerRecord>, CustomerSourceError> {
        Ok(Vec::new())
    }
}
