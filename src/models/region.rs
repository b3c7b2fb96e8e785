//! Region projections fetched from the external region-lookup service.

use serde::{Deserialize, Serialize};

/// Read-only projection of a region.
///
/// Regions are owned by the remote service; a summary lives only for the
/// duration of the call that fetched it and is never persisted or cached
/// as an entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    /// Unique identifier for the region
    pub id: String,

    /// Telephone area code served by the region
    pub area_code: String,
}

/// Response envelope used by every region endpoint.
///
/// The service reports explicit success or failure in the body; a `success`
/// of `false` with a 2xx status means "no match", not a transport fault.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionEnvelope {
    /// Whether the lookup matched a region
    pub success: bool,

    /// Error description supplied by the remote service, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// The matched region, present only on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RegionSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserializes_success() {
        let body = r#"{"success": true, "data": {"id": "R1", "areaCode": "41"}}"#;
        let envelope: RegionEnvelope = serde_json::from_str(body).unwrap();

        assert!(envelope.success);
        let region = envelope.data.unwrap();
        assert_eq!(region.id, "R1");
        assert_eq!(region.area_code, "41");
    }

    #[test]
    fn test_envelope_deserializes_no_match() {
        let body = r#"{"success": false, "error": "region not registered"}"#;
        let envelope: RegionEnvelope = serde_json::from_str(body).unwrap();

        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("region not registered"));
    }
}
