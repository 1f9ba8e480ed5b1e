//! Use-case service listing customers with their resume links.
//!
//! Fetch failures abort before any mapping happens: the caller always gets
//! either the full projection or an error, never an empty list standing in
//! for an outage.

use std::sync::Arc;

use serde_json::json;
use tracing::{error, info};

use super::ports::{CustomerSource, CustomerSourceError};
use super::{CustomerResumeLink, Error, map_customers_to_resume_links};

/// Compose the customer source with the resume-link mapper.
#[derive(Clone)]
pub struct CustomerResumeLinks {
    source: Arc<dyn CustomerSource>,
}

impl CustomerResumeLinks {
    /// Build the service over a customer source port.
    pub fn new(source: Arc<dyn CustomerSource>) -> Self {
        Self { source }
    }

    /// Fetch customers fresh and derive one resume link per record.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with `service_unavailable` when the backend cannot be
    /// reached or answers with a non-success status, and `internal_error`
    /// when the payload cannot be decoded.
    pub async fn list_resume_links(&self) -> Result<Vec<CustomerResumeLink>, Error> {
        let records = self
            .source
            .fetch_customers()
            .await
            .map_err(map_source_error)?;
        let links = map_customers_to_resume_links(records);
        info!(
            customers = links.len(),
            invalid = links.iter().filter(|link| !link.valid).count(),
            "customer resume links derived"
        );
        Ok(links)
    }
}

fn map_source_error(source_error: CustomerSourceError) -> Error {
    error!(error = %source_error, "customer fetch failed");
    match source_error {
        CustomerSourceError::Decode { .. } => Error::internal(source_error.to_string()),
        _ => Error::service_unavailable("customer service is unavailable").with_details(json!({
            "retryable": source_error.is_retryable() || source_error.is_upstream_failure(),
            "reason": source_error.to_string(),
        })),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::MockCustomerSource;
    use crate::domain::{CustomerRecord, ErrorCode, KycCaseRef, KycIdentifier};
    use rstest::rstest;

    fn service_returning(
        result: Result<Vec<CustomerRecord>, CustomerSourceError>,
    ) -> CustomerResumeLinks {
        let mut source = MockCustomerSource::new();
        source
            .expect_fetch_customers()
            .times(1)
            .return_once(move || result);
        CustomerResumeLinks::new(Arc::new(source))
    }

    #[tokio::test]
    async fn maps_fetched_customers_in_order() {
        let records = vec![
            CustomerRecord {
                kyc_details_id: KycIdentifier::from(1),
                kyc_case_id: KycCaseRef::Id(KycIdentifier::from("K100")),
                name: Some("Ann".to_owned()),
                email: None,
                status: "pending".to_owned(),
            },
            CustomerRecord {
                kyc_details_id: KycIdentifier::from(2),
                kyc_case_id: KycCaseRef::Null,
                name: Some("Bo".to_owned()),
                email: None,
                status: "unknown".to_owned(),
            },
        ];
        let service = service_returning(Ok(records));

        let links = service.list_resume_links().await.expect("links");
        let summary: Vec<_> = links
            .iter()
            .map(|link| (link.customer.display_name(), link.resume_link.as_str(), link.valid))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Ann", "/self-kyc/K100", true),
                ("Bo", "/self-kyc/null", false)
            ]
        );
    }

    #[rstest]
    #[case(CustomerSourceError::status(500_u16, "Failed to list customers"), true)]
    #[case(CustomerSourceError::status(404_u16, "Not Found"), false)]
    #[case(CustomerSourceError::transport("connection refused"), true)]
    #[case(CustomerSourceError::timeout("after 10s"), true)]
    #[tokio::test]
    async fn fetch_failures_surface_as_unavailable(
        #[case] source_error: CustomerSourceError,
        #[case] expected_retryable: bool,
    ) {
        let service = service_returning(Err(source_error));

        let error = service
            .list_resume_links()
            .await
            .expect_err("fetch failure must surface");
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
        let retryable = error
            .details()
            .and_then(|details| details.get("retryable"))
            .and_then(serde_json::Value::as_bool);
        assert_eq!(retryable, Some(expected_retryable));
    }

    #[tokio::test]
    async fn undecodable_payload_is_internal() {
        let service = service_returning(Err(CustomerSourceError::decode("expected array")));
        let error = service.list_resume_links().await.expect_err("decode failure");
        assert_eq!(error.code(), ErrorCode::InternalError);
    }
}
