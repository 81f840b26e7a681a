// Canonical-host redirect - 301 apex traffic onto the www host
use crate::infrastructure::config::RedirectSettings;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

/// Permanently redirects apex-host requests to the same path and query on
/// the canonical host. Static assets always pass through.
pub async fn canonical_host_redirect(
    State(redirect): State<RedirectSettings>,
    request: Request,
    next: Next,
) -> Response {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok());

    if should_redirect(host, request.uri().path(), &redirect.apex_host) {
        let location = redirect_location(
            &redirect.canonical_host,
            request.uri().path(),
            request.uri().query(),
        );
        match Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header(header::LOCATION, location)
            .body(Body::empty())
        {
            Ok(response) => return response,
            Err(error) => {
                tracing::warn!("Failed to build redirect response: {}", error);
            }
        }
    }

    next.run(request).await
}

fn should_redirect(host: Option<&str>, path: &str, apex_host: &str) -> bool {
    let Some(host) = host else {
        return false;
    };
    let name = host.split(':').next().unwrap_or(host);
    name.eq_ignore_ascii_case(apex_host) && !is_static_asset(path)
}

fn is_static_asset(path: &str) -> bool {
    const ASSET_EXTENSIONS: &[&str] = &[".ico", ".svg", ".png", ".jpg", ".jpeg", ".gif", ".webp"];
    ASSET_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

fn redirect_location(canonical_host: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(query) => format!("https://{}{}?{}", canonical_host, path, query),
        None => format!("https://{}{}", canonical_host, path),
    }
}
