//! Stitch job domain types

use serde::{Deserialize, Serialize};

/// Stitch job status as reported by the service
///
/// The service reports status as a plain string; values outside this set are
/// deliberately not representable here so that callers must treat them as an
/// unexpected response rather than silently coercing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StitchStatus {
    /// Job accepted but assembly not yet started
    Pending,
    /// Job actively being assembled
    Processing,
    /// Job finished; download locator available
    Completed,
}

impl StitchStatus {
    /// Parse a wire status string
    ///
    /// Returns `None` for any value outside the known set. Matching is
    /// case-sensitive; the service contract fixes the exact spellings.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "Processing" => Some(Self::Processing),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for StitchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Processing => write!(f, "Processing"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// A completed stitch job
///
/// Produced once the service reports `Completed` with a download locator.
/// The locator is time-limited; the file count, total size, and last-updated
/// timestamp are reported by the service and may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StitchJob {
    pub patient_id: String,
    pub status: StitchStatus,
    pub number_of_files: Option<u64>,
    pub total_file_size_in_bytes: Option<u64>,
    /// Server-side timestamp of the last job update, passed through verbatim
    pub last_updated: Option<String>,
    /// Time-limited URL granting direct access to the assembled artifact
    pub presigned_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses_parse() {
        assert_eq!(StitchStatus::from_wire("Pending"), Some(StitchStatus::Pending));
        assert_eq!(
            StitchStatus::from_wire("Processing"),
            Some(StitchStatus::Processing)
        );
        assert_eq!(
            StitchStatus::from_wire("Completed"),
            Some(StitchStatus::Completed)
        );
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert_eq!(StitchStatus::from_wire("Failed"), None);
        assert_eq!(StitchStatus::from_wire("completed"), None);
        assert_eq!(StitchStatus::from_wire(""), None);
    }

    #[test]
    fn test_status_display_round_trips() {
        for status in [
            StitchStatus::Pending,
            StitchStatus::Processing,
            StitchStatus::Completed,
        ] {
            assert_eq!(StitchStatus::from_wire(&status.to_string()), Some(status));
        }
    }
}
