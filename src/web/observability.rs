//! Request logging, HTTP metrics and response hardening.

use axum::{
    extract::{MatchedPath, Request, State},
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, debug, info, info_span};
use uuid::Uuid;

use super::AppState;

/// Pages are static HTML with forms; nothing runs scripts or opens sockets.
const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; img-src 'self' https: data:; script-src 'none'; style-src 'self'; form-action 'self'; frame-ancestors 'none'; base-uri 'self'";

/// What a matched route serves, used as the `page` metric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Program,
    Category,
    Season,
    Episode,
    CategoryForm,
    Asset,
    Probe,
    Unmatched,
}

impl Page {
    #[must_use]
    pub fn from_route(route: Option<&str>) -> Self {
        match route {
            Some("/") => Self::Index,
            Some("/show" | "/show/" | "/show/{slug}" | "/wild/show/{slug}") => Self::Program,
            Some("/wild/category/{category_name}") => Self::Category,
            Some("/wild/{slug}/{id}") => Self::Season,
            Some("/wild/episode/{id}") => Self::Episode,
            Some("/category/add") => Self::CategoryForm,
            Some(r) if r.starts_with("/static/") => Self::Asset,
            Some("/health" | "/metrics") => Self::Probe,
            _ => Self::Unmatched,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Program => "program",
            Self::Category => "category",
            Self::Season => "season",
            Self::Episode => "episode",
            Self::CategoryForm => "category_form",
            Self::Asset => "asset",
            Self::Probe => "probe",
            Self::Unmatched => "unmatched",
        }
    }

    /// Assets and monitoring endpoints, logged at debug level only.
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Asset | Self::Probe)
    }
}

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || "Metrics not enabled or failed to initialize".to_string(),
        metrics_exporter_prometheus::PrometheusHandle::render,
    )
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string());
    let page = Page::from_route(route.as_deref());

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        page = page.as_str(),
    );

    async move {
        let mut response = next.run(req).await;
        let status = response.status();
        let elapsed = start.elapsed();

        let labels = [
            ("method", method),
            ("page", page.as_str().to_string()),
            ("status", status.as_u16().to_string()),
        ];
        metrics::counter!("http_requests_total", &labels).increment(1);
        metrics::histogram!("http_request_duration_seconds", &labels)
            .record(elapsed.as_secs_f64());

        let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        if page.is_quiet() && !status.is_server_error() {
            debug!(status_code = status.as_u16(), duration_ms, "Request finished");
        } else {
            info!(
                status_code = status.as_u16(),
                duration_ms,
                "Request finished"
            );
        }

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert("x-request-id", value);
        }

        response
    }
    .instrument(span)
    .await
}

pub async fn security_headers_middleware(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        "x-content-type-options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert("referrer-policy", HeaderValue::from_static("same-origin"));
    headers.insert(
        "content-security-policy",
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_route() {
        assert_eq!(Page::from_route(Some("/")), Page::Index);
        assert_eq!(Page::from_route(Some("/show/{slug}")), Page::Program);
        assert_eq!(Page::from_route(Some("/wild/show/{slug}")), Page::Program);
        assert_eq!(
            Page::from_route(Some("/wild/category/{category_name}")),
            Page::Category
        );
        assert_eq!(Page::from_route(Some("/wild/{slug}/{id}")), Page::Season);
        assert_eq!(Page::from_route(Some("/wild/episode/{id}")), Page::Episode);
        assert_eq!(Page::from_route(Some("/category/add")), Page::CategoryForm);
        assert_eq!(Page::from_route(Some("/static/{*path}")), Page::Asset);
        assert_eq!(Page::from_route(Some("/health")), Page::Probe);
        assert_eq!(Page::from_route(None), Page::Unmatched);
    }

    #[test]
    fn test_only_assets_and_probes_are_quiet() {
        assert!(Page::Asset.is_quiet());
        assert!(Page::Probe.is_quiet());
        assert!(!Page::Episode.is_quiet());
        assert!(!Page::Unmatched.is_quiet());
    }
}
