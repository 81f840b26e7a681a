// Dashboard service - catalog load fan-out, search, ordering, pagination
use crate::application::series_repository::SeriesRepository;
use crate::domain::catalog::SERIES_CATALOG;
use crate::domain::chart::ChartView;
use crate::domain::series::Series;
use crate::domain::settings::{DisplaySettings, SettingsError, SettingsUpdate};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;

pub const PAGE_SIZE: usize = 20;

#[derive(Default)]
struct DashboardState {
    series: Vec<Series>,
    settings: HashMap<String, DisplaySettings>,
    pinned: HashSet<String>,
}

pub struct DashboardService {
    repository: Arc<dyn SeriesRepository>,
    fetch_timeout: Duration,
    state: RwLock<DashboardState>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LoadReport {
    pub loaded: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ChartCard {
    pub description: String,
    pub pinned: bool,
    pub view: ChartView,
}

#[derive(Debug, Serialize)]
pub struct DashboardPage {
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub charts: Vec<ChartCard>,
}

#[derive(Debug, Error)]
pub enum SettingsUpdateError {
    #[error("unknown series: {0}")]
    UnknownSeries(String),
    #[error(transparent)]
    Invalid(#[from] SettingsError),
}

impl DashboardService {
    pub fn new(repository: Arc<dyn SeriesRepository>, fetch_timeout: Duration) -> Self {
        Self {
            repository,
            fetch_timeout,
            state: RwLock::new(DashboardState::default()),
        }
    }

    /// Fetches every catalog series concurrently and replaces the held state
    /// wholesale. Failed or timed-out fetches are logged and omitted; the
    /// result keeps catalog order regardless of completion order.
    pub async fn load_all(&self) -> LoadReport {
        let total = SERIES_CATALOG.len();

        let fetches = SERIES_CATALOG.iter().map(|entry| async move {
            let fetch = self.repository.fetch_points(entry.id);
            match tokio::time::timeout(self.fetch_timeout, fetch).await {
                Ok(Ok(points)) => Some(Series::new(
                    entry.id.to_string(),
                    entry.description.to_string(),
                    points,
                )),
                Ok(Err(error)) => {
                    tracing::warn!("Failed to load series {}: {:#}", entry.id, error);
                    None
                }
                Err(_) => {
                    tracing::warn!("Timed out loading series {}", entry.id);
                    None
                }
            }
        });

        let series: Vec<Series> = futures::future::join_all(fetches)
            .await
            .into_iter()
            .flatten()
            .collect();
        let loaded = series.len();

        let settings: HashMap<String, DisplaySettings> = series
            .iter()
            .map(|series| {
                (
                    series.id.clone(),
                    DisplaySettings::for_series(&series.description, series.points.len()),
                )
            })
            .collect();

        let mut state = self.state.write().await;
        state.series = series;
        state.settings = settings;
        state.pinned.clear();

        tracing::info!("Loaded {}/{} catalog series", loaded, total);
        LoadReport { loaded, total }
    }

    pub async fn dashboard_page(&self, search: Option<&str>, requested_page: i64) -> DashboardPage {
        let state = self.state.read().await;
        let ordered = filter_and_order(&state.series, &state.pinned, search);
        let total_items = ordered.len();
        let (page, total_pages) = paginate(total_items, requested_page);

        let charts = ordered
            .into_iter()
            .skip((page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .map(|series| ChartCard {
                description: series.description.clone(),
                pinned: state.pinned.contains(&series.id),
                view: ChartView::prepare(series, &settings_for(&state.settings, series)),
            })
            .collect();

        DashboardPage {
            page,
            total_pages,
            total_items,
            charts,
        }
    }

    pub async fn chart_view(&self, series_id: &str) -> Option<ChartView> {
        let state = self.state.read().await;
        let series = state.series.iter().find(|series| series.id == series_id)?;
        Some(ChartView::prepare(
            series,
            &settings_for(&state.settings, series),
        ))
    }

    /// Validates the update, then swaps in the new settings value built by
    /// the pure transition. Invalid input leaves the stored value untouched.
    pub async fn update_settings(
        &self,
        series_id: &str,
        update: &SettingsUpdate,
    ) -> Result<DisplaySettings, SettingsUpdateError> {
        update.validate()?;

        let mut state = self.state.write().await;
        let (len, description) = match state.series.iter().find(|series| series.id == series_id) {
            Some(series) => (series.points.len(), series.description.clone()),
            None => return Err(SettingsUpdateError::UnknownSeries(series_id.to_string())),
        };
        let current = state
            .settings
            .get(series_id)
            .cloned()
            .unwrap_or_else(|| DisplaySettings::for_series(&description, len));
        let next = current.apply(update, len);
        state.settings.insert(series_id.to_string(), next.clone());
        Ok(next)
    }

    /// Flips the pin state of a series. Returns the new state, or `None`
    /// for a series that is not loaded.
    pub async fn toggle_pin(&self, series_id: &str) -> Option<bool> {
        let mut state = self.state.write().await;
        if !state.series.iter().any(|series| series.id == series_id) {
            return None;
        }
        if state.pinned.remove(series_id) {
            Some(false)
        } else {
            state.pinned.insert(series_id.to_string());
            Some(true)
        }
    }

    /// Clones out one series and its settings, for export rendering outside
    /// the state lock.
    pub async fn snapshot(&self, series_id: &str) -> Option<(Series, DisplaySettings)> {
        let state = self.state.read().await;
        let series = state
            .series
            .iter()
            .find(|series| series.id == series_id)?
            .clone();
        let settings = settings_for(&state.settings, &series);
        Some((series, settings))
    }
}

fn settings_for(settings: &HashMap<String, DisplaySettings>, series: &Series) -> DisplaySettings {
    settings
        .get(&series.id)
        .cloned()
        .unwrap_or_else(|| DisplaySettings::for_series(&series.description, series.points.len()))
}

fn matches_search(series: &Series, needle: &str) -> bool {
    series.id.to_lowercase().contains(needle) || series.description.to_lowercase().contains(needle)
}

/// Applies the search filter, then orders pinned series ahead of the rest.
/// Both blocks keep their relative catalog order.
fn filter_and_order<'a>(
    series: &'a [Series],
    pinned: &HashSet<String>,
    search: Option<&str>,
) -> Vec<&'a Series> {
    let needle = search.map(|s| s.trim().to_lowercase()).unwrap_or_default();
    let filtered: Vec<&Series> = series
        .iter()
        .filter(|series| needle.is_empty() || matches_search(series, &needle))
        .collect();
    let (pinned_block, rest): (Vec<&Series>, Vec<&Series>) = filtered
        .into_iter()
        .partition(|series| pinned.contains(&series.id));
    pinned_block.into_iter().chain(rest).collect()
}

/// Clamps the requested page into `[1, total_pages]`, with page 1 standing
/// in when there are no items at all.
fn paginate(total_items: usize, requested_page: i64) -> (usize, usize) {
    let total_pages = total_items.div_ceil(PAGE_SIZE);
    let page = requested_page.clamp(1, total_pages.max(1) as i64) as usize;
    (page, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::SeriesPoint;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct StubRepository {
        failing: HashSet<&'static str>,
    }

    impl StubRepository {
        fn reliable() -> Self {
            Self {
                failing: HashSet::new(),
            }
        }

        fn failing(ids: &[&'static str]) -> Self {
            Self {
                failing: ids.iter().copied().collect(),
            }
        }
    }

    #[async_trait]
    impl SeriesRepository for StubRepository {
        async fn fetch_points(&self, series_id: &str) -> anyhow::Result<Vec<SeriesPoint>> {
            if self.failing.contains(series_id) {
                anyhow::bail!("series {} unavailable", series_id);
            }
            Ok(vec![
                SeriesPoint::new(date(1), Some(1.0)),
                SeriesPoint::new(date(2), Some(2.0)),
            ])
        }

        async fn submit_request(&self, _: &str, _: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, day).expect("valid date")
    }

    fn service(repository: StubRepository) -> DashboardService {
        DashboardService::new(Arc::new(repository), Duration::from_secs(5))
    }

    fn named_series(ids: &[&str]) -> Vec<Series> {
        ids.iter()
            .map(|id| {
                Series::new(
                    id.to_string(),
                    format!("{} description", id),
                    vec![SeriesPoint::new(date(1), Some(1.0))],
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_load_omits_failures_and_keeps_catalog_order() {
        let service = service(StubRepository::failing(&["GDP", "UNRATE"]));
        let report = service.load_all().await;
        assert_eq!(report.total, SERIES_CATALOG.len());
        assert_eq!(report.loaded, SERIES_CATALOG.len() - 2);

        let state = service.state.read().await;
        let loaded_ids: Vec<&str> = state.series.iter().map(|s| s.id.as_str()).collect();
        let expected: Vec<&str> = SERIES_CATALOG
            .iter()
            .map(|entry| entry.id)
            .filter(|id| *id != "GDP" && *id != "UNRATE")
            .collect();
        assert_eq!(loaded_ids, expected);
        assert_eq!(state.settings.len(), report.loaded);
    }

    #[tokio::test]
    async fn test_refresh_replaces_state_wholesale() {
        let service = service(StubRepository::reliable());
        service.load_all().await;
        service.toggle_pin("GDP").await;
        let report = service.load_all().await;
        assert_eq!(report.loaded, SERIES_CATALOG.len());

        let state = service.state.read().await;
        assert!(state.pinned.is_empty());
    }

    #[test]
    fn test_paginate_clamps() {
        assert_eq!(paginate(45, 1), (1, 3));
        assert_eq!(paginate(45, 5), (3, 3));
        assert_eq!(paginate(45, 0), (1, 3));
        assert_eq!(paginate(45, -3), (1, 3));
        assert_eq!(paginate(0, 7), (1, 0));
        assert_eq!(paginate(20, 1), (1, 1));
        assert_eq!(paginate(21, 2), (2, 2));
    }

    #[test]
    fn test_filter_is_case_insensitive_on_id_and_description() {
        let series = named_series(&["GDP", "UNRATE", "PAYEMS"]);
        let pinned = HashSet::new();

        let hits = filter_and_order(&series, &pinned, Some("gdp"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "GDP");

        let hits = filter_and_order(&series, &pinned, Some("DESCRIPTION"));
        assert_eq!(hits.len(), 3);

        let hits = filter_and_order(&series, &pinned, Some("  "));
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_pinned_series_come_first_in_catalog_order() {
        let series = named_series(&["A", "B", "C", "D"]);
        let pinned: HashSet<String> = ["D".to_string(), "B".to_string()].into_iter().collect();
        let ordered = filter_and_order(&series, &pinned, None);
        let ids: Vec<&str> = ordered.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "D", "A", "C"]);
    }

    #[tokio::test]
    async fn test_dashboard_page_contents() {
        let service = service(StubRepository::reliable());
        service.load_all().await;

        let page = service.dashboard_page(None, 1).await;
        assert_eq!(page.total_items, SERIES_CATALOG.len());
        assert_eq!(page.total_pages, SERIES_CATALOG.len().div_ceil(PAGE_SIZE));
        assert_eq!(page.charts.len(), PAGE_SIZE);
        assert_eq!(page.charts[0].view.series_id, SERIES_CATALOG[0].id);

        // out-of-range page clamps to the last page
        let last = service.dashboard_page(None, 99).await;
        assert_eq!(last.page, last.total_pages);
        assert_eq!(
            last.charts.len(),
            SERIES_CATALOG.len() - (last.total_pages - 1) * PAGE_SIZE
        );
    }

    #[tokio::test]
    async fn test_update_settings_validates_and_swaps() {
        let service = service(StubRepository::reliable());
        service.load_all().await;

        let bad = SettingsUpdate {
            color: Some("not-a-color".to_string()),
            ..SettingsUpdate::default()
        };
        assert!(matches!(
            service.update_settings("GDP", &bad).await,
            Err(SettingsUpdateError::Invalid(_))
        ));

        let good = SettingsUpdate {
            y_max: Some("12.5".to_string()),
            window_end: Some(9999),
            ..SettingsUpdate::default()
        };
        let updated = service
            .update_settings("GDP", &good)
            .await
            .expect("update applies");
        // the stub series has two points, so the window clamps to them
        assert_eq!(updated.window_end, 1);

        assert!(matches!(
            service.update_settings("NOPE", &good).await,
            Err(SettingsUpdateError::UnknownSeries(_))
        ));
    }

    #[tokio::test]
    async fn test_toggle_pin_flips_membership() {
        let service = service(StubRepository::reliable());
        service.load_all().await;

        assert_eq!(service.toggle_pin("GDP").await, Some(true));
        assert_eq!(service.toggle_pin("GDP").await, Some(false));
        assert_eq!(service.toggle_pin("NOPE").await, None);
    }

    #[tokio::test]
    async fn test_chart_view_for_unknown_series_is_none() {
        let service = service(StubRepository::reliable());
        service.load_all().await;
        assert!(service.chart_view("GDP").await.is_some());
        assert!(service.chart_view("NOPE").await.is_none());
    }
}
