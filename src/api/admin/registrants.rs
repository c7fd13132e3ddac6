//! Admin endpoints for reviewing registrations

use axum::extract::{Path, State};
use serde::Serialize;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, RegistrantResponse};

/// Response for listing registrants
#[derive(Debug, Serialize)]
pub struct ListRegistrantsResponse {
    pub registrants: Vec<RegistrantResponse>,
    pub total: usize,
}

/// List all registrants in signup order
///
/// GET /admin/registrants
pub async fn list_registrants(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<ListRegistrantsResponse>, ApiError> {
    let registrants = state.registration_service.list().await?;

    let registrants: Vec<RegistrantResponse> =
        registrants.iter().map(RegistrantResponse::from).collect();
    let total = registrants.len();

    Ok(Json(ListRegistrantsResponse { registrants, total }))
}

/// Approve a registrant
///
/// POST /admin/registrants/{registrant_id}/accept
///
/// Accepting an already accepted registrant answers 409.
pub async fn accept_registrant(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(registrant_id): Path<String>,
) -> Result<Json<RegistrantResponse>, ApiError> {
    let registrant = state.registration_service.accept(&registrant_id).await?;

    Ok(Json(RegistrantResponse::from(&registrant)))
}

/// Reject a registrant
///
/// POST /admin/registrants/{registrant_id}/reject
///
/// Rejecting an already rejected registrant answers 409.
pub async fn reject_registrant(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(registrant_id): Path<String>,
) -> Result<Json<RegistrantResponse>, ApiError> {
    let registrant = state.registration_service.reject(&registrant_id).await?;

    Ok(Json(RegistrantResponse::from(&registrant)))
}
