// Repository trait for series data access
use crate::domain::series::SeriesPoint;
use async_trait::async_trait;

#[async_trait]
pub trait SeriesRepository: Send + Sync {
    /// Fetch all observations for one series, sorted ascending by date
    async fn fetch_points(&self, series_id: &str) -> anyhow::Result<Vec<SeriesPoint>>;

    /// Record a visitor request for a series the dashboard does not track yet
    async fn submit_request(&self, requested_series_id: &str, notes: &str) -> anyhow::Result<()>;
}
