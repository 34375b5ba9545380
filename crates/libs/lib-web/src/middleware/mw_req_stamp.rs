//! # Request Stamping Middleware
//!
//! Adds request metadata (ID, timestamp) to requests for tracing and debugging.
//!
//! An `X-Request-ID` set by a fronting proxy is reused when it is a short printable
//! token; otherwise a fresh UUID is generated. The ID is stored in the request
//! extensions and echoed back in the response headers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use axum::{Router, middleware, routing::get};
//! use lib_web::middleware::mw_req_stamp::stamp_req;
//!
//! let app: Router = Router::new()
//!     .route("/health", get(|| async { "OK" }))
//!     .layer(middleware::from_fn(stamp_req));
//! ```
//!
//! Request ID is available in handlers via `Extension<RequestStamp>`:
//!
//! ```rust,no_run
//! use axum::extract::Extension;
//! use lib_web::middleware::mw_req_stamp::RequestStamp;
//!
//! async fn handler(Extension(stamp): Extension<RequestStamp>) -> String {
//!     format!("Request ID: {}", stamp.id)
//! }
//! ```

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::SystemTime;
use uuid::Uuid;

/// Header carrying the request identifier in both directions.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

const MAX_FORWARDED_ID_LEN: usize = 128;

/// Request metadata for tracing and debugging.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    /// Unique request identifier
    pub id: String,
    /// Request timestamp
    pub timestamp: SystemTime,
}

impl RequestStamp {
    fn new(id: String) -> Self {
        Self {
            id,
            timestamp: SystemTime::now(),
        }
    }

    fn from_headers(headers: &HeaderMap) -> Self {
        let forwarded = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|id| is_acceptable_id(id));

        match forwarded {
            Some(id) => Self::new(id.to_string()),
            None => Self::new(Uuid::new_v4().to_string()),
        }
    }
}

fn is_acceptable_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_FORWARDED_ID_LEN
        && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Request stamping middleware.
///
/// Adds a [`RequestStamp`] to the request extensions and the `X-Request-ID`
/// response header.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp::from_headers(req.headers());

    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&stamp.id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwarded_id_reused() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("edge-1234_ab"));
        assert_eq!(RequestStamp::from_headers(&headers).id, "edge-1234_ab");
    }

    #[test]
    fn test_unusable_forwarded_id_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("bad id;drop"));
        let stamp = RequestStamp::from_headers(&headers);
        assert_ne!(stamp.id, "bad id;drop");
        assert!(Uuid::parse_str(&stamp.id).is_ok());

        let stamp = RequestStamp::from_headers(&HeaderMap::new());
        assert!(Uuid::parse_str(&stamp.id).is_ok());
    }
}
