//! DTOs for decoding the KYC backend's `/customers` payload.
//!
//! The backend emits snake_case keys; camelCase aliases are accepted for
//! frontends that proxy the listing. Decoding keeps an absent `kyc_case_id`
//! distinct from an explicit `null`.

use serde::{Deserialize, Deserializer};

use crate::domain::{CustomerRecord, KycCaseRef, KycIdentifier};

const UNKNOWN_STATUS: &str = "unknown";

// Any JSON number decodes; one odd id must not fail the whole listing.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum IdentifierDto {
    Number(serde_json::Number),
    Text(String),
}

impl From<IdentifierDto> for KycIdentifier {
    fn from(value: IdentifierDto) -> Self {
        match value {
            IdentifierDto::Number(number) => Self::from(number),
            IdentifierDto::Text(text) => Self::Text(text),
        }
    }
}

#[derive(Debug, Default)]
pub(super) struct CaseRefDto(KycCaseRef);

impl<'de> Deserialize<'de> for CaseRefDto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<IdentifierDto>::deserialize(deserializer)?;
        Ok(Self(KycCaseRef::from(value.map(KycIdentifier::from))))
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct CustomerDto {
    #[serde(alias = "kycDetailsId")]
    kyc_details_id: IdentifierDto,
    #[serde(default, alias = "kycCaseId")]
    kyc_case_id: CaseRefDto,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

impl From<CustomerDto> for CustomerRecord {
    fn from(value: CustomerDto) -> Self {
        Self {
            kyc_details_id: value.kyc_details_id.into(),
            kyc_case_id: value.kyc_case_id.0,
            name: value.name,
            email: value.email,
            status: value.status.unwrap_or_else(|| UNKNOWN_STATUS.to_owned()),
        }
    }
}

pub(super) fn decode_customers(body: &[u8]) -> Result<Vec<CustomerRecord>, serde_json::Error> {
    let decoded: Vec<CustomerDto> = serde_json::from_slice(body)?;
    Ok(decoded.into_iter().map(CustomerRecord::from).collect())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for customer payload decoding.
    use super::*;

    #[test]
    fn decodes_backend_listing() {
        let body = br#"[
            {"kyc_details_id": 1, "kyc_case_id": 100, "name": "Ann", "email": "ann@example.com", "status": "approved"},
            {"kyc_details_id": 2, "kyc_case_id": null, "name": null, "email": null, "status": "unknown"}
        ]"#;

        let records = decode_customers(body).expect("listing decodes");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kyc_details_id, KycIdentifier::Number(1));
        assert_eq!(records[0].kyc_case_id, KycCaseRef::Id(KycIdentifier::Number(100)));
        assert_eq!(records[0].status, "approved");
        assert_eq!(records[1].kyc_case_id, KycCaseRef::Null);
        assert_eq!(records[1].name, None);
    }

    #[test]
    fn distinguishes_absent_case_id_from_null() {
        let body = br#"[{"kyc_details_id": "D-7", "name": "Cy"}]"#;

        let records = decode_customers(body).expect("listing decodes");
        assert_eq!(records[0].kyc_details_id, KycIdentifier::Text("D-7".to_owned()));
        assert_eq!(records[0].kyc_case_id, KycCaseRef::Absent);
        assert_eq!(records[0].status, UNKNOWN_STATUS);
    }

    #[test]
    fn accepts_camel_case_aliases() {
        let body = br#"[{"kycDetailsId": 3, "kycCaseId": "K100", "status": "pending"}]"#;

        let records = decode_customers(body).expect("listing decodes");
        assert_eq!(
            records[0].kyc_case_id,
            KycCaseRef::Id(KycIdentifier::Text("K100".to_owned()))
        );
    }

    #[test]
    fn keeps_records_with_fractional_case_ids() {
        let body = br#"[
            {"kyc_details_id": 1, "kyc_case_id": "K1"},
            {"kyc_details_id": 2, "kyc_case_id": 1.5}
        ]"#;

        let records = decode_customers(body).expect("listing decodes");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kyc_case_id, KycCaseRef::Id(KycIdentifier::from("K1")));
        assert_eq!(records[1].kyc_case_id.to_string(), "1.5");
    }

    #[test]
    fn keeps_identifiers_beyond_i64() {
        let body = br#"[{"kyc_details_id": 18446744073709551615, "kyc_case_id": 9223372036854775808}]"#;

        let records = decode_customers(body).expect("listing decodes");
        assert_eq!(records[0].kyc_details_id.to_string(), "18446744073709551615");
        assert_eq!(records[0].kyc_case_id.to_string(), "9223372036854775808");
    }

    #[test]
    fn rejects_records_without_details_id() {
        let body = br#"[{"kyc_case_id": 5}]"#;
        assert!(decode_customers(body).is_err());
    }

    #[test]
    fn rejects_non_array_payloads() {
        let body = br#"{"detail": "Failed to list customers"}"#;
        assert!(decode_customers(body).is_err());
    }
}
