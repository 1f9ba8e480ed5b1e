//! Resume links letting customers continue an in-progress KYC case.
//!
//! The self-service router serves `/self-kyc/{kycCaseId}`; that path shape is
//! an external contract and must not change.

use std::fmt;

use tracing::{debug, warn};

use super::{CustomerRecord, KycCaseRef};

/// Route prefix served by the self-service KYC flow.
pub const RESUME_ROUTE_PREFIX: &str = "/self-kyc/";

/// Rendering of a case id that went missing upstream.
const STRINGIFIED_ABSENT: &str = "undefined";

/// Navigable resume URL for one KYC case.
///
/// # Examples
/// ```
/// use kyc_portal::domain::{KycCaseRef, KycIdentifier, ResumeLink};
///
/// let link = ResumeLink::for_case(&KycCaseRef::Id(KycIdentifier::from("abc123")));
/// assert_eq!(link.as_str(), "/self-kyc/abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeLink(String);

impl ResumeLink {
    /// Build the link for a case reference, whatever state it is in.
    pub fn for_case(case_ref: &KycCaseRef) -> Self {
        Self(format!("{RESUME_ROUTE_PREFIX}{case_ref}"))
    }

    /// Link text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ResumeLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ResumeLink> for String {
    fn from(value: ResumeLink) -> Self {
        value.0
    }
}

/// Return whether a case reference yields a usable resume link.
///
/// The id must be present and its rendering must be non-empty and must not
/// be the literal `undefined` left behind by upstream stringification.
pub fn is_resumable(case_ref: &KycCaseRef) -> bool {
    case_ref.id().is_some_and(|id| {
        let rendered = id.to_string();
        !rendered.is_empty() && rendered != STRINGIFIED_ABSENT
    })
}

/// Customer projection carrying its resume link and validity flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerResumeLink {
    /// Source record, unchanged.
    pub customer: CustomerRecord,
    /// Derived link, present even when invalid.
    pub resume_link: ResumeLink,
    /// Whether `resume_link` points at a real case.
    pub valid: bool,
}

/// Project each customer onto its resume link.
///
/// Output mirrors input one-to-one and in order; invalid records are flagged,
/// never dropped.
///
/// # Examples
/// ```
/// use kyc_portal::domain::{
///     map_customers_to_resume_links, CustomerRecord, KycCaseRef, KycIdentifier,
/// };
///
/// let records = vec![CustomerRecord {
///     kyc_details_id: KycIdentifier::from(1),
///     kyc_case_id: KycCaseRef::Null,
///     name: Some("Bo".to_owned()),
///     email: None,
///     status: "pending".to_owned(),
/// }];
/// let links = map_customers_to_resume_links(records);
/// assert_eq!(links[0].resume_link.as_str(), "/self-kyc/null");
/// assert!(!links[0].valid);
/// ```
pub fn map_customers_to_resume_links(records: Vec<CustomerRecord>) -> Vec<CustomerResumeLink> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, customer)| {
            let resume_link = ResumeLink::for_case(&customer.kyc_case_id);
            let valid = is_resumable(&customer.kyc_case_id);
            if valid {
                debug!(
                    position = index + 1,
                    name = customer.display_name(),
                    kyc_details_id = %customer.kyc_details_id,
                    kyc_case_id = %customer.kyc_case_id,
                    resume_link = %resume_link,
                    "resume link derived"
                );
            } else {
                warn!(
                    position = index + 1,
                    name = customer.display_name(),
                    kyc_details_id = %customer.kyc_details_id,
                    kyc_case_id = %customer.kyc_case_id,
                    "customer has no usable kyc case id"
                );
            }
            CustomerResumeLink {
                customer,
                resume_link,
                valid,
            }
        })
        .collect()
}
