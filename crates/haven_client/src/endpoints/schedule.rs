//! Therapist weekly schedule setup.

use super::ack;
use crate::client::ApiClient;
use crate::request::{path_segment, RequestSpec};
use haven_shared::schedule::WeeklySchedule;
use haven_shared::{ApiError, Outcome};
use tokio_util::sync::CancellationToken;

impl ApiClient {
    pub async fn get_schedule(
        &self,
        therapist_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Outcome<WeeklySchedule>, ApiError> {
        self.execute(
            RequestSpec::get(format!(
                "therapists/{}/schedule",
                path_segment(therapist_id)?
            ))
                .cancel_on(cancel)
                .fallback("Schedule loaded"),
        )
        .await
    }

    /// Replace the therapist's weekly schedule.
    ///
    /// A malformed schedule is rejected before sending, with code 0.
    pub async fn save_schedule(
        &self,
        schedule: &WeeklySchedule,
        cancel: &CancellationToken,
    ) -> Result<Outcome<WeeklySchedule>, ApiError> {
        schedule
            .validate_shape()
            .map_err(|e| ApiError::transport(format!("Schedule not sent: {}", e)))?;

        let path = format!(
            "therapists/{}/schedule",
            path_segment(&schedule.therapist_id)?
        );
        let spec = RequestSpec::put(path)
            .json(schedule)?
            .cancel_on(cancel)
            .fallback("Schedule saved");
        self.execute(spec).await
    }

    pub async fn delete_slot(
        &self,
        therapist_id: &str,
        slot_index: usize,
        cancel: &CancellationToken,
    ) -> Result<Outcome<()>, ApiError> {
        let path = format!(
            "therapists/{}/schedule/slots/{}",
            path_segment(therapist_id)?,
            slot_index
        );
        let spec = RequestSpec::delete(path)
            .cancel_on(cancel)
            .fallback("Slot removed");
        ack(self.execute(spec).await)
    }
}
