// PostgREST store client - reads series rows, writes series requests
use crate::application::series_repository::SeriesRepository;
use crate::domain::series::SeriesPoint;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct StoreClient {
    base_url: String,
    api_key: String,
    series_table: String,
    requests_table: String,
    fetch_timeout: Duration,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct StoreRow {
    date: NaiveDate,
    value: Option<f64>,
}

impl StoreClient {
    pub fn new(
        base_url: String,
        api_key: String,
        series_table: String,
        requests_table: String,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            series_table,
            requests_table,
            fetch_timeout,
            http: reqwest::Client::new(),
        }
    }

    fn build_rows_url(&self, series_id: &str) -> String {
        format!(
            "{}/rest/v1/{}?select=date,value&series_id=eq.{}&order=date.asc",
            self.base_url,
            self.series_table,
            urlencoding::encode(series_id)
        )
    }

    fn build_requests_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.requests_table)
    }
}

/// Maps raw store rows to domain points. Rows are re-sorted by date so the
/// ascending-order contract holds even when the store misbehaves.
fn rows_to_points(mut rows: Vec<StoreRow>) -> Vec<SeriesPoint> {
    rows.sort_by_key(|row| row.date);
    rows.into_iter()
        .map(|row| SeriesPoint::new(row.date, row.value))
        .collect()
}

#[async_trait]
impl SeriesRepository for StoreClient {
    async fn fetch_points(&self, series_id: &str) -> Result<Vec<SeriesPoint>> {
        let url = self.build_rows_url(series_id);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .timeout(self.fetch_timeout)
            .send()
            .await
            .with_context(|| format!("Failed to send row query for {}", series_id))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Row query for {} failed with status {}: {}",
                series_id,
                status,
                body
            );
        }

        let rows = response
            .json::<Vec<StoreRow>>()
            .await
            .with_context(|| format!("Failed to parse rows for {}", series_id))?;

        Ok(rows_to_points(rows))
    }

    async fn submit_request(&self, requested_series_id: &str, notes: &str) -> Result<()> {
        let url = self.build_requests_url();
        let payload = serde_json::json!([{
            "requested_series_id": requested_series_id,
            "notes": notes,
        }]);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .json(&payload)
            .send()
            .await
            .context("Failed to send series request insert")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Series request insert failed with status {}: {}",
                status,
                body
            );
        }

        Ok(())
    }
}
