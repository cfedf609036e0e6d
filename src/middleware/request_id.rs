use axum::{
    body::Body,
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// HTTP header carrying the request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request id stored in the request extensions and echoed on the
/// response, so one recommendation run can be traced end to end
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

/// Attaches a request ID to every request.
///
/// A valid `x-request-id` header on the incoming request is reused, so
/// callers can correlate their own logs with ours; anything else gets a
/// fresh UUID v4. The id is stored in the request extensions for the
/// span factory and written back on the response headers.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .map(RequestId)
        .unwrap_or_else(RequestId::new);

    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id.as_str()) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, header_value);
    }

    response
}

/// Builds the per-request tracing span.
///
/// Profile and recommendation routes carry the target user id as a span
/// field, so every pipeline log line under the span (profile build, query
/// plan, aggregation) is attributable to the user being recommended for.
pub fn make_span_with_request_id(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.as_str())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
        user_id = user_id_from_path(request.uri().path()).unwrap_or(""),
    )
}

/// Extracts the user id from `/users/:user_id/...` paths
fn user_id_from_path(path: &str) -> Option<&str> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    match segments.next() {
        Some("users") => segments.next(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_recommendation_paths() {
        assert_eq!(user_id_from_path("/users/42/recommendations"), Some("42"));
        assert_eq!(user_id_from_path("/users/42/profile"), Some("42"));
    }

    #[test]
    fn test_user_id_absent_on_other_paths() {
        assert_eq!(user_id_from_path("/health"), None);
        assert_eq!(user_id_from_path("/"), None);
        assert_eq!(user_id_from_path("/users"), None);
    }

    #[test]
    fn test_request_id_roundtrips_as_string() {
        let id = RequestId::new();
        assert_eq!(Uuid::parse_str(&id.as_str()).unwrap(), id.0);
    }
}
