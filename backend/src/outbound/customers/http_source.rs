//! Reqwest-backed customer source adapter.
//!
//! This adapter owns transport details only: building the listing URL,
//! timeout and HTTP error mapping, and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::decode_customers;
use crate::domain::CustomerRecord;
use crate::domain::ports::{CustomerSource, CustomerSourceError};
use crate::outbound::http_support::{
    HttpAdapterBuildError, append_segment, body_preview, build_client,
};

const CUSTOMERS_SEGMENT: &str = "customers";

/// Customer source performing `GET {base}/customers`.
pub struct CustomerHttpSource {
    client: Client,
    customers_url: Url,
}

impl CustomerHttpSource {
    /// Build an adapter for the KYC backend rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or the
    /// base URL cannot carry a path.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, HttpAdapterBuildError> {
        Ok(Self {
            client: build_client(timeout)?,
            customers_url: append_segment(base_url, CUSTOMERS_SEGMENT)?,
        })
    }

    /// Fully resolved listing URL.
    pub fn customers_url(&self) -> &Url {
        &self.customers_url
    }
}

#[async_trait]
impl CustomerSource for CustomerHttpSource {
    async fn fetch_customers(&self) -> Result<Vec<CustomerRecord>, CustomerSourceError> {
        debug!(url = %self.customers_url, "fetching customers");
        let response = self
            .client
            .get(self.customers_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        decode_customers(body.as_ref()).map_err(|error| {
            CustomerSourceError::decode(format!("invalid customer listing JSON: {error}"))
        })
    }
}

fn map_transport_error(error: reqwest::Error) -> CustomerSourceError {
    if error.is_timeout() {
        CustomerSourceError::timeout(error.to_string())
    } else {
        CustomerSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> CustomerSourceError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            CustomerSourceError::timeout(format!("status {}", status.as_u16()))
        }
        _ => {
            let preview = body_preview(body);
            let message = if preview.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("no response body")
                    .to_owned()
            } else {
                preview
            };
            CustomerSourceError::status(status.as_u16(), message)
        }
    }
}
