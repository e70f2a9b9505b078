use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Request guard: turns an inbound bearer credential into an authenticated
/// `SafeUser` in request extensions, or a rejection.
///
/// Rejection reasons stay distinct: missing header, wrong scheme, and
/// invalid/expired token are all 401; an inactive account is 400, the only
/// outcome allowed to be distinguishable since reaching it requires a valid
/// token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let user = state.auth_service.resolve_token(token).await.map_err(|e| {
        tracing::warn!("Token resolution failed: {}", e);
        unauthorized("Invalid or expired token")
    })?;

    let user = state.auth_service.check_active(user).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Inactive user"
            })),
        )
            .into_response()
    })?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    if !auth_str.starts_with("Bearer ") {
        return Err(unauthorized(
            "Invalid authentication scheme. Expected: Bearer <token>",
        ));
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        Json(json!({
            "error": message
        })),
    )
        .into_response()
}
