//! Stitch job poller
//!
//! Drives one stitch job from creation to a downloadable artifact: submits
//! the job, then polls the status endpoint until the service reports
//! `Completed`, the pending budget runs out, or an unexpected response
//! arrives.
//!
//! `Processing` observations never consume the budget; the poller tolerates
//! arbitrarily long active assembly but gives up on a job that never leaves
//! `Pending`. Transport failures from either request propagate unmodified.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time;
use tracing::debug;

use crate::error::{ClientError, Result};
use stitch_core::domain::stitch::{StitchJob, StitchStatus};
use stitch_core::dto::stitch::{CreateStitchResponse, StitchStatusResponse};

/// Requests the poller issues against the stitch endpoint
///
/// Implemented by [`StitchClient`](crate::StitchClient) over HTTP; the seam
/// exists so the polling logic can be exercised against scripted responses.
#[async_trait]
pub trait StitchApi: Send + Sync {
    /// Submit a stitch job for a patient
    async fn create_stitch_job(&self, patient_id: &str) -> Result<CreateStitchResponse>;

    /// Check the status of a patient's stitch job
    async fn get_stitch_job(&self, patient_id: &str) -> Result<StitchStatusResponse>;
}

/// Poller configuration
///
/// The delay is an explicit parameter rather than an ambient "am I under
/// test" flag: production callers keep the default, test harnesses pass
/// `Duration::ZERO` and no suspension happens at all.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Delay between status polls
    pub poll_delay: Duration,

    /// Maximum number of `Pending` observations before giving up
    pub max_pending_polls: u32,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_delay: Duration::from_secs(3),
            max_pending_polls: 10,
        }
    }
}

impl PollerConfig {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_pending_polls == 0 {
            anyhow::bail!("max_pending_polls must be greater than 0");
        }
        Ok(())
    }
}

/// Polls a stitch job to completion
///
/// Holds no state across invocations: each [`retrieve`](Self::retrieve) call
/// is an independent sequence of requests, so one poller may serve
/// concurrent retrievals for different patients.
pub struct StitchJobPoller<A: StitchApi> {
    api: A,
    config: PollerConfig,
}

impl<A: StitchApi> StitchJobPoller<A> {
    /// Creates a new poller over the given API
    pub fn new(api: A, config: PollerConfig) -> Self {
        Self { api, config }
    }

    /// Retrieve the stitched record for a patient
    ///
    /// Submits a stitch job, then polls until the job completes or fails.
    /// Within one call the requests are strictly sequential: the creation
    /// request always precedes the first status check, and each status check
    /// follows the previous wait.
    ///
    /// # Errors
    /// * [`ClientError::UnexpectedStatus`] - the service reported a status
    ///   outside {Pending, Processing, Completed}; not retried
    /// * [`ClientError::RetryBudgetExhausted`] - the job stayed `Pending`
    ///   for the entire budget
    /// * [`ClientError::ProtocolViolation`] - `Completed` arrived without a
    ///   download locator
    /// * Transport errors from either request propagate unmodified
    pub async fn retrieve(&self, patient_id: &str) -> Result<StitchJob> {
        let created = self.api.create_stitch_job(patient_id).await?;
        let initial = parse_status(&created.job_status)?;

        debug!(patient_id, status = %initial, "stitch job submitted");

        let mut pending_polls = 0u32;
        // The first poll after a non-Completed creation response goes out
        // immediately; every later poll waits. A creation response that
        // already reports Completed still waits before its first poll.
        let mut skip_wait = initial != StitchStatus::Completed;

        while pending_polls < self.config.max_pending_polls {
            if skip_wait {
                skip_wait = false;
            } else if !self.config.poll_delay.is_zero() {
                time::sleep(self.config.poll_delay).await;
            }

            let response = self.api.get_stitch_job(patient_id).await?;
            let status = parse_status(&response.job_status)?;

            debug!(patient_id, %status, pending_polls, "stitch job polled");

            match status {
                StitchStatus::Completed => return completed_job(patient_id, response),
                StitchStatus::Processing => {}
                StitchStatus::Pending => pending_polls += 1,
            }
        }

        Err(ClientError::RetryBudgetExhausted { pending_polls })
    }
}

/// Map a wire status string onto the known set
fn parse_status(value: &str) -> Result<StitchStatus> {
    StitchStatus::from_wire(value).ok_or_else(|| ClientError::UnexpectedStatus {
        value: value.to_string(),
    })
}

/// Build the final job record from a `Completed` poll response
///
/// A completed job must carry a download locator; a bare `Completed` is a
/// broken service contract and fails as a server error.
fn completed_job(patient_id: &str, response: StitchStatusResponse) -> Result<StitchJob> {
    let presigned_url = match response.presigned_url {
        Some(url) if !url.is_empty() => url,
        _ => {
            return Err(ClientError::ProtocolViolation {
                message: "service reported Completed without a download locator".to_string(),
            });
        }
    };

    Ok(StitchJob {
        patient_id: patient_id.to_string(),
        status: StitchStatus::Completed,
        number_of_files: response.number_of_files,
        total_file_size_in_bytes: response.total_file_size_in_bytes,
        last_updated: response.last_updated,
        presigned_url,
    })
}
