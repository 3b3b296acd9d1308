use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

/// Request/response logging middleware.
///
/// Reads the response body back to report its real size; the body is
/// re-attached to the response afterwards.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(_) => {
            tracing::warn!(
                "{} | {:>5}ms | {} {:>6} {}",
                Utc::now().format("%H:%M:%S"),
                start.elapsed().as_millis(),
                parts.status.as_u16(),
                method,
                uri.path()
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    tracing::info!(
        "{} | {:>5}ms | {:>9}B | {} {:>6} {}",
        Utc::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        bytes.len(),
        parts.status.as_u16(),
        method,
        uri.path()
    );

    Response::from_parts(parts, Body::from(bytes))
}
