//! # Request/Response Logging Middleware
//!
//! Structured logging for HTTP requests and responses, correlated by request ID.
//!
//! API calls and page loads are logged at `info`; static asset fetches (wasm, js,
//! css, images) only at `debug` so a single page load does not flood the log.
//! Client errors log at `warn`, server errors at `error`. Bodies are never logged:
//! the deletion endpoint carries email addresses.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use axum::{Router, middleware, routing::get};
//! use lib_web::middleware::mw_logging::log_requests;
//!
//! let app: Router = Router::new()
//!     .route("/health", get(|| async { "OK" }))
//!     .layer(middleware::from_fn(log_requests));
//! ```

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::middleware::mw_req_stamp::RequestStamp;

/// What a request path is asking for, for log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Api,
    Asset,
    Page,
}

impl RequestKind {
    pub fn classify(path: &str) -> Self {
        if path == "/api" || path.starts_with("/api/") || path == "/health" {
            return RequestKind::Api;
        }
        let last_segment = path.rsplit('/').next().unwrap_or_default();
        if last_segment.contains('.') {
            RequestKind::Asset
        } else {
            RequestKind::Page
        }
    }
}

/// Request/response logging middleware
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let kind = RequestKind::classify(&path);

    let request_id = req
        .extensions()
        .get::<RequestStamp>()
        .map(|s| s.id.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let client_ip = req
        .headers()
        .get("x-forwarded-for")
        .or_else(|| req.headers().get("x-real-ip"))
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    if kind == RequestKind::Asset {
        debug!(request_id = %request_id, method = %method, path = %path, "[REQUEST] {} {}", method, path);
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            client_ip = ?client_ip,
            kind = ?kind,
            "[REQUEST] {} {}",
            method,
            path
        );
    }

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();
    let status_code = status.as_u16();

    if status.is_server_error() {
        error!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status_code,
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms) [SERVER ERROR]",
            method,
            path,
            status_code,
            duration.as_millis()
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status_code,
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms) [CLIENT ERROR]",
            method,
            path,
            status_code,
            duration.as_millis()
        );
    } else if kind == RequestKind::Asset {
        debug!(
            request_id = %request_id,
            status = status_code,
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {}",
            method,
            path,
            status_code
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status_code,
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms)",
            method,
            path,
            status_code,
            duration.as_millis()
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(RequestKind::classify("/api/account-deletion"), RequestKind::Api);
        assert_eq!(RequestKind::classify("/health"), RequestKind::Api);
        assert_eq!(RequestKind::classify("/site-web-3f2a_bg.wasm"), RequestKind::Asset);
        assert_eq!(RequestKind::classify("/screenshot%201.png"), RequestKind::Asset);
        assert_eq!(RequestKind::classify("/support"), RequestKind::Page);
        assert_eq!(RequestKind::classify("/"), RequestKind::Page);
        assert_eq!(RequestKind::classify("/apiary"), RequestKind::Page);
    }
}
