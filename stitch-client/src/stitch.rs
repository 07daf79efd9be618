//! Stitch endpoint requests
//!
//! Raw HTTP calls against the stitch endpoint. Both the creation and the
//! status check hit the same path with the patient identifier as a query
//! parameter; only the verb differs.

use async_trait::async_trait;

use crate::StitchClient;
use crate::error::Result;
use crate::poller::StitchApi;
use stitch_core::dto::stitch::{CreateStitchResponse, StitchStatusResponse};

impl StitchClient {
    /// Submit a stitch job for a patient
    ///
    /// # Arguments
    /// * `patient_id` - The patient identifier (NHS number)
    ///
    /// # Returns
    /// The initially reported job status
    pub async fn create_stitch_job(&self, patient_id: &str) -> Result<CreateStitchResponse> {
        let url = format!("{}/LloydGeorgeStitch", self.base_url());
        let response = self
            .client
            .post(&url)
            .query(&[("patientId", patient_id)])
            .headers(self.auth_headers.clone())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Check the status of a patient's stitch job
    ///
    /// # Arguments
    /// * `patient_id` - The patient identifier (NHS number)
    ///
    /// # Returns
    /// The current job status plus the result payload once completed
    pub async fn get_stitch_job(&self, patient_id: &str) -> Result<StitchStatusResponse> {
        let url = format!("{}/LloydGeorgeStitch", self.base_url());
        let response = self
            .client
            .get(&url)
            .query(&[("patientId", patient_id)])
            .headers(self.auth_headers.clone())
            .send()
            .await?;

        self.handle_response(response).await
    }
}

#[async_trait]
impl StitchApi for StitchClient {
    async fn create_stitch_job(&self, patient_id: &str) -> Result<CreateStitchResponse> {
        StitchClient::create_stitch_job(self, patient_id).await
    }

    async fn get_stitch_job(&self, patient_id: &str) -> Result<StitchStatusResponse> {
        StitchClient::get_stitch_job(self, patient_id).await
    }
}
