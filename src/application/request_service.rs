// Series request service - write-through for "request a data series"
use crate::application::series_repository::SeriesRepository;
use std::sync::Arc;
use thiserror::Error;

pub struct RequestService {
    repository: Arc<dyn SeriesRepository>,
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("a series id is required")]
    EmptyId,
    #[error("failed to record series request: {0:#}")]
    Store(anyhow::Error),
}

impl RequestService {
    pub fn new(repository: Arc<dyn SeriesRepository>) -> Self {
        Self { repository }
    }

    /// Trims and validates the requested id, then records the request.
    /// Nothing is written for an empty id.
    pub async fn submit(&self, requested_series_id: &str, notes: &str) -> Result<(), RequestError> {
        let trimmed = requested_series_id.trim();
        if trimmed.is_empty() {
            return Err(RequestError::EmptyId);
        }
        self.repository
            .submit_request(trimmed, notes.trim())
            .await
            .map_err(RequestError::Store)
    }
}
