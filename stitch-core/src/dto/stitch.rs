//! Stitch endpoint DTOs

use serde::{Deserialize, Serialize};

/// Response body of the job-creation request
///
/// `POST <base>/LloydGeorgeStitch?patientId=<id>` returns only the initially
/// reported status; the full payload is available from the poll endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStitchResponse {
    #[serde(rename = "jobStatus")]
    pub job_status: String,
}

/// Response body of the status-check request
///
/// Payload fields are populated by the service once the job completes; the
/// status string is the only field guaranteed on every poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StitchStatusResponse {
    #[serde(rename = "jobStatus")]
    pub job_status: String,
    #[serde(rename = "numberOfFiles")]
    pub number_of_files: Option<u64>,
    #[serde(rename = "totalFileSizeInBytes")]
    pub total_file_size_in_bytes: Option<u64>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
    #[serde(rename = "presignedUrl")]
    pub presigned_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_response_deserializes() {
        let body = r#"{ "jobStatus": "Pending" }"#;
        let response: CreateStitchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.job_status, "Pending");
    }

    #[test]
    fn test_status_response_deserializes_full_payload() {
        let body = r#"{
            "jobStatus": "Completed",
            "numberOfFiles": 4,
            "totalFileSizeInBytes": 1048576,
            "lastUpdated": "2024-01-09T12:00:00Z",
            "presignedUrl": "https://example.org/artifact?sig=abc"
        }"#;
        let response: StitchStatusResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.job_status, "Completed");
        assert_eq!(response.number_of_files, Some(4));
        assert_eq!(response.total_file_size_in_bytes, Some(1048576));
        assert_eq!(response.last_updated.as_deref(), Some("2024-01-09T12:00:00Z"));
        assert_eq!(
            response.presigned_url.as_deref(),
            Some("https://example.org/artifact?sig=abc")
        );
    }

    #[test]
    fn test_status_response_tolerates_missing_payload() {
        let body = r#"{ "jobStatus": "Processing" }"#;
        let response: StitchStatusResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.job_status, "Processing");
        assert!(response.number_of_files.is_none());
        assert!(response.presigned_url.is_none());
    }
}
