//! Customer resume-link handler.
//!
//! ```text
//! GET /api/v1/customers/resume-links
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CustomerRecord, CustomerResumeLink, Error, KycCaseRef, KycIdentifier};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Identifier echoed in the shape the backend sent it.
///
/// Numbers with no exact integer form are echoed as their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum IdentifierResponse {
    /// Integer identifier.
    Number(i64),
    /// Textual identifier.
    Text(String),
}

impl From<&KycIdentifier> for IdentifierResponse {
    fn from(value: &KycIdentifier) -> Self {
        match value {
            KycIdentifier::Number(number) => Self::Number(*number),
            KycIdentifier::Text(text) => Self::Text(text.clone()),
            KycIdentifier::Decimal(number) => Self::Text(number.to_string()),
        }
    }
}

/// Customer record as returned to the dashboard.
///
/// `kycCaseId` is `null` both when the backend sent `null` and when it
/// omitted the field; the resume link keeps the distinction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    /// Identifier of the customer's KYC details row.
    pub kyc_details_id: IdentifierResponse,
    /// Case identifier, if the backend supplied one.
    pub kyc_case_id: Option<IdentifierResponse>,
    /// Customer name.
    #[schema(example = "Ann")]
    pub name: Option<String>,
    /// Customer e-mail address.
    pub email: Option<String>,
    /// Verification status reported by the backend.
    #[schema(example = "pending")]
    pub status: String,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(value: CustomerRecord) -> Self {
        let kyc_case_id = match &value.kyc_case_id {
            KycCaseRef::Id(id) => Some(IdentifierResponse::from(id)),
            KycCaseRef::Null | KycCaseRef::Absent => None,
        };
        Self {
            kyc_details_id: IdentifierResponse::from(&value.kyc_details_id),
            kyc_case_id,
            name: value.name,
            email: value.email,
            status: value.status,
        }
    }
}

/// One customer and the link that resumes its KYC case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResumeLinkResponse {
    /// Customer record as fetched.
    pub customer: CustomerResponse,
    /// Self-service path resuming the customer's case.
    #[schema(example = "/self-kyc/K100")]
    pub resume_link: String,
    /// Whether `resumeLink` points at a real case.
    pub valid: bool,
}

impl From<CustomerResumeLink> for CustomerResumeLinkResponse {
    fn from(value: CustomerResumeLink) -> Self {
        Self {
            customer: value.customer.into(),
            resume_link: value.resume_link.into(),
            valid: value.valid,
        }
    }
}

/// Fetch customers fresh from the KYC backend and attach resume links.
///
/// Records without a usable case id are returned with `valid = false`.
#[utoipa::path(
    get,
    path = "/api/v1/customers/resume-links",
    responses(
        (status = 200, description = "Customers with resume links", body = [CustomerResumeLinkResponse]),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Customer service unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["customers"],
    operation_id = "listResumeLinks"
)]
#[get("/customers/resume-links")]
pub async fn list_resume_links(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<CustomerResumeLinkResponse>>> {
    session.require_username()?;
    let links = state.resume_links.list_resume_links().await?;
    Ok(web::Json(links.into_iter().map(Into::into).collect()))
}
