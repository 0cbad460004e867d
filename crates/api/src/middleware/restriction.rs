use crate::errors::{denial_response, ApiError};
use crate::middleware::client_ip::extract_client_address;
use crate::state::AppState;
use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use ip_gate_domain::{Category, DomainError, StoreUnavailablePolicy};
use std::net::SocketAddr;
use tracing::{debug, warn};

/// Evaluates every request against the restriction rules before the inner
/// service runs.
pub async fn enforce_restrictions(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    if state.is_exempt(&path) {
        return next.run(request).await;
    }

    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let address = extract_client_address(
        request.headers(),
        peer,
        state.http.trusted_ip_header.as_deref(),
    );

    if address.ip().is_none() && state.http.reject_invalid_address {
        debug!(ip = %address, "Rejecting unparsable client address");
        return ApiError(DomainError::InvalidAddress(address.to_string())).into_response();
    }

    let decision = match state.evaluate.execute(&address).await {
        Ok(decision) => decision,
        Err(e) => match state.on_store_unavailable {
            StoreUnavailablePolicy::FailClosed => return ApiError(e).into_response(),
            StoreUnavailablePolicy::FailOpen => {
                warn!(error = %e, ip = %address, "Restrictions unavailable; failing open");
                return next.run(request).await;
            }
        },
    };

    if decision.category == Some(Category::Blocklogin) && !state.is_login_path(&path) {
        return next.run(request).await;
    }

    match (decision.status_code, decision.error_key()) {
        (Some(code), Some(key)) => denial_response(code, &key),
        _ => next.run(request).await,
    }
}
