use crate::{dto::DecisionResponse, errors::ApiError, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use ip_gate_domain::ClientAddress;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_evaluate_ip")]
pub async fn evaluate_ip(
    State(state): State<AppState>,
    Path(ip): Path<String>,
) -> Result<Json<DecisionResponse>, ApiError> {
    let address = if state.http.reject_invalid_address {
        ClientAddress::strict(&ip)?
    } else {
        ClientAddress::parse(&ip)
    };

    let decision = state.evaluate.execute(&address).await?;
    debug!(
        restricted = decision.restricted,
        category = ?decision.category,
        "Restriction evaluated"
    );

    Ok(Json(DecisionResponse::new(address.to_string(), &decision)))
}
