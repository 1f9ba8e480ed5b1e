//! Customer records as reported by the KYC backend.
//!
//! The backend serialises identifiers as either strings or numbers, and the
//! case identifier may be missing entirely or explicitly `null`. Both states
//! are kept distinct because they render differently in resume links.

use std::fmt;

/// Placeholder shown for missing names.
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";

/// Identifier value that may arrive as text or as a number.
///
/// # Examples
/// ```
/// use kyc_portal::domain::KycIdentifier;
///
/// assert_eq!(KycIdentifier::from(42).to_string(), "42");
/// assert_eq!(KycIdentifier::from("K100").to_string(), "K100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KycIdentifier {
    /// Textual identifier, rendered verbatim.
    Text(String),
    /// Numeric identifier, rendered as decimal digits.
    Number(i64),
    /// Number with no exact `i64` form, such as `1.5` or `u64::MAX`; kept
    /// as received.
    Decimal(serde_json::Number),
}

impl fmt::Display for KycIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for KycIdentifier {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<serde_json::Number> for KycIdentifier {
    fn from(value: serde_json::Number) -> Self {
        match value.as_i64() {
            Some(number) => Self::Number(number),
            None => Self::Decimal(value),
        }
    }
}

impl From<&str> for KycIdentifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for KycIdentifier {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Reference from a customer record to its KYC case.
///
/// Rendering follows the portal's link convention: an absent field renders
/// as `undefined` and an explicit null as `null`, so links built from broken
/// records stay recognisable instead of silently pointing somewhere valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KycCaseRef {
    /// The field was not present in the payload.
    #[default]
    Absent,
    /// The field was present with a `null` value.
    Null,
    /// The field carried an identifier.
    Id(KycIdentifier),
}

impl KycCaseRef {
    /// Return the identifier, if any.
    pub fn id(&self) -> Option<&KycIdentifier> {
        match self {
            Self::Id(id) => Some(id),
            Self::Absent | Self::Null => None,
        }
    }
}

impl fmt::Display for KycCaseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Id(id) => fmt::Display::fmt(id, f),
        }
    }
}

impl From<Option<KycIdentifier>> for KycCaseRef {
    fn from(value: Option<KycIdentifier>) -> Self {
        value.map_or(Self::Null, Self::Id)
    }
}

/// One customer row from the KYC backend's `/customers` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    /// Identifier of the customer's KYC details row.
    pub kyc_details_id: KycIdentifier,
    /// Case the customer's verification belongs to.
    pub kyc_case_id: KycCaseRef,
    /// Customer name, if captured.
    pub name: Option<String>,
    /// Customer e-mail address, if captured.
    pub email: Option<String>,
    /// Free-form verification status such as `pending` or `approved`.
    pub status: String,
}

impl CustomerRecord {
    /// Name for display, falling back to [`MISSING_FIELD_PLACEHOLDER`].
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(MISSING_FIELD_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KycCaseRef::Absent, "undefined")]
    #[case(KycCaseRef::Null, "null")]
    #[case(KycCaseRef::Id(KycIdentifier::from(7)), "7")]
    #[case(KycCaseRef::Id(KycIdentifier::from("abc123")), "abc123")]
    fn case_refs_render_like_the_portal(#[case] case_ref: KycCaseRef, #[case] expected: &str) {
        assert_eq!(case_ref.to_string(), expected);
    }

    #[rstest]
    #[case(serde_json::Number::from(7_i64), KycIdentifier::Number(7), "7")]
    #[case(
        serde_json::Number::from(u64::MAX),
        KycIdentifier::Decimal(serde_json::Number::from(u64::MAX)),
        "18446744073709551615"
    )]
    fn json_numbers_keep_their_rendering(
        #[case] number: serde_json::Number,
        #[case] expected: KycIdentifier,
        #[case] rendered: &str,
    ) {
        let identifier = KycIdentifier::from(number);
        assert_eq!(identifier, expected);
        assert_eq!(identifier.to_string(), rendered);
    }

    #[rstest]
    fn fractional_numbers_are_decimals() {
        let number = serde_json::Number::from_f64(1.5).expect("finite");
        let identifier = KycIdentifier::from(number);
        assert!(matches!(identifier, KycIdentifier::Decimal(_)));
        assert_eq!(identifier.to_string(), "1.5");
    }

    #[rstest]
    fn missing_name_falls_back_to_placeholder() {
        let record = CustomerRecord {
            kyc_details_id: KycIdentifier::from(1),
            kyc_case_id: KycCaseRef::Null,
            name: None,
            email: Some("ann@example.com".to_owned()),
            status: "pending".to_owned(),
        };
        assert_eq!(record.display_name(), MISSING_FIELD_PLACEHOLDER);
    }
}
