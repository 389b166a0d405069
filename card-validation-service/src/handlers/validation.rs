use axum::{extract::State, http::StatusCode};

use crate::{dtos::ValidationRequest, utils::ValidatedJson, AppState};

/// Looks the submitted card number up exactly once.
///
/// Valid numbers answer `200 true`, anything else the store rejects answers
/// `400 false`. Bodies that do not decode are turned away by the extractor
/// before the store is consulted.
pub async fn validate_card(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ValidationRequest>,
) -> (StatusCode, &'static str) {
    if state.store.get_card_validation(&payload.credit_card_number) {
        (StatusCode::OK, "true")
    } else {
        (StatusCode::BAD_REQUEST, "false")
    }
}
