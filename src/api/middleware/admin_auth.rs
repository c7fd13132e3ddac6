//! Admin authentication middleware
//!
//! Admin routes are guarded by a static bearer token from configuration.
//! When no token is configured the routes are open, which is the expected
//! setup for local development.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Extractor that requires admin access when a token is configured
#[derive(Debug, Clone)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let expected = match &state.admin_token {
            Some(token) => token,
            None => {
                debug!("Admin routes are open, no admin token configured");
                return Ok(RequireAdmin);
            }
        };

        let provided = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| {
                ApiError::unauthorized("Admin access required. Provide 'Authorization: Bearer <token>'")
            })?;

        // Constant-time comparison; only the token length can leak.
        if provided.as_bytes().ct_eq(expected.as_bytes()).unwrap_u8() != 1 {
            return Err(ApiError::forbidden("Invalid admin token"));
        }

        Ok(RequireAdmin)
    }
}
