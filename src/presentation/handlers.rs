// HTTP request handlers
use crate::application::dashboard_service::{DashboardPage, LoadReport, SettingsUpdateError};
use crate::application::export_service::{Export, ExportError};
use crate::application::request_service::RequestError;
use crate::domain::catalog::{CatalogEntry, SERIES_CATALOG};
use crate::domain::settings::SettingsUpdate;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub search: Option<String>,
    pub page: Option<i64>,
}

#[derive(Deserialize)]
pub struct SeriesRequestBody {
    pub requested_series_id: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Serialize)]
pub struct PinState {
    pub series_id: String,
    pub pinned: bool,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full catalog listing
pub async fn get_catalog() -> Json<&'static [CatalogEntry]> {
    Json(SERIES_CATALOG)
}

/// One dashboard page of chart cards, filtered and pinned-first ordered
pub async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<DashboardPage> {
    let page = state
        .dashboard_service
        .dashboard_page(query.search.as_deref(), query.page.unwrap_or(1))
        .await;
    Json(page)
}

/// Prepared chart view for one series
pub async fn get_chart(Path(id): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    match state.dashboard_service.chart_view(&id).await {
        Some(view) => Json(view).into_response(),
        None => error_response(StatusCode::NOT_FOUND, format!("unknown series: {}", id)),
    }
}

/// Partial display-settings update
pub async fn update_settings(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<SettingsUpdate>,
) -> Response {
    match state.dashboard_service.update_settings(&id, &update).await {
        Ok(settings) => Json(settings).into_response(),
        Err(error @ SettingsUpdateError::UnknownSeries(_)) => {
            error_response(StatusCode::NOT_FOUND, error.to_string())
        }
        Err(error @ SettingsUpdateError::Invalid(_)) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
    }
}

/// Toggle the pin state of a series
pub async fn toggle_pin(Path(id): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    match state.dashboard_service.toggle_pin(&id).await {
        Some(pinned) => Json(PinState {
            series_id: id,
            pinned,
        })
        .into_response(),
        None => error_response(StatusCode::NOT_FOUND, format!("unknown series: {}", id)),
    }
}

pub async fn export_csv(Path(id): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    let result = match state.dashboard_service.snapshot(&id).await {
        Some((series, _)) => state.export_service.csv(&series),
        None => Err(ExportError::UnknownSeries(id)),
    };
    export_response(result)
}

pub async fn export_png(Path(id): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    let result = match state.dashboard_service.snapshot(&id).await {
        Some((series, settings)) => state.export_service.png(&series, &settings),
        None => Err(ExportError::UnknownSeries(id)),
    };
    export_response(result)
}

pub async fn export_jpg(Path(id): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    let result = match state.dashboard_service.snapshot(&id).await {
        Some((series, settings)) => state.export_service.jpg(&series, &settings),
        None => Err(ExportError::UnknownSeries(id)),
    };
    export_response(result)
}

fn export_response(result: Result<Export, ExportError>) -> Response {
    match result {
        Ok(export) => {
            let disposition = format!("attachment; filename=\"{}\"", export.filename);
            (
                [
                    (header::CONTENT_TYPE, export.content_type.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                export.bytes,
            )
                .into_response()
        }
        Err(error) => error_response(export_status(&error), error.to_string()),
    }
}

fn export_status(error: &ExportError) -> StatusCode {
    match error {
        ExportError::UnknownSeries(_) => StatusCode::NOT_FOUND,
        ExportError::NoData(_) => StatusCode::CONFLICT,
        ExportError::Render(_) | ExportError::Csv(_) | ExportError::Encode(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Record a visitor request for an untracked series
pub async fn submit_request(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SeriesRequestBody>,
) -> Response {
    match state
        .request_service
        .submit(&body.requested_series_id, &body.notes)
        .await
    {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(error @ RequestError::EmptyId) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
        Err(error @ RequestError::Store(_)) => {
            error_response(StatusCode::BAD_GATEWAY, error.to_string())
        }
    }
}

/// Wholesale reload of every catalog series
pub async fn refresh(State(state): State<Arc<AppState>>) -> Json<LoadReport> {
    Json(state.dashboard_service.load_all().await)
}
