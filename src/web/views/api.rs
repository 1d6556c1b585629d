use poem::handler;
use poem::http::StatusCode;

/// Liveness endpoint for deployment checks. No body, nothing to cache.
#[handler]
pub async fn get_health() -> StatusCode {
    StatusCode::NO_CONTENT
}
