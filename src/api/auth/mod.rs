//! Registration and session API endpoints
//!
//! The register endpoint accepts either a JSON body or multipart/form-data.
//! Multipart is what the registration form submits when it carries a payment
//! receipt image; the JSON shape exists for programmatic clients.

use axum::{
    Router,
    extract::{FromRequest, Multipart, Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, RegistrantResponse};
use crate::domain::registrant::{LoginForm, RegisterForm};

/// Create the registration and session router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session))
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Register a new participant
///
/// POST /auth/register
///
/// Returns 201 with the created registrant and logs them in. Form failures
/// come back as 400 with per-field messages, duplicate email or national id
/// as 409.
pub async fn register(
    State(state): State<AppState>,
    request: Request,
) -> Result<(StatusCode, Json<RegistrantResponse>), ApiError> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    let (form, receipt) = if is_multipart {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {e}")))?;
        parse_multipart(multipart, &state).await?
    } else {
        let Json(form) = Json::<RegisterForm>::from_request(request, &state)
            .await
            .map_err(ApiError::from)?;
        (form, None)
    };

    let registrant = match state
        .registration_service
        .register(&form, receipt.clone())
        .await
    {
        Ok(registrant) => registrant,
        Err(e) => {
            // The receipt was written before validation; don't leave an
            // orphan upload behind when the registration is rejected.
            if let Some(reference) = receipt {
                if let Err(remove_err) = state.receipt_store.remove(&reference).await {
                    tracing::warn!(%reference, error = %remove_err, "Failed to remove receipt");
                }
            }
            return Err(e.into());
        }
    };

    Ok((StatusCode::CREATED, Json(RegistrantResponse::from(&registrant))))
}

/// Collects the text fields into a registration form and stores the receipt
/// image if one was attached.
async fn parse_multipart(
    mut multipart: Multipart,
    state: &AppState,
) -> Result<(RegisterForm, Option<String>), ApiError> {
    let mut form = RegisterForm::default();
    let mut receipt = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart field: {e}")))?
    {
        let name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        if name == "payment_receipt" {
            let file_name = field.file_name().unwrap_or("receipt").to_string();
            let content_type = field.content_type().map(String::from);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read receipt: {e}")))?;

            let reference = state
                .receipt_store
                .store(&file_name, content_type.as_deref(), &bytes)
                .await?;
            receipt = Some(reference);
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid value for '{name}': {e}")))?;

        match name.as_str() {
            "name_ar" => form.name_ar = value,
            "name_en" => form.name_en = value,
            "phone" => form.phone = value,
            "governorate" => form.governorate = value,
            "national_id" => form.national_id = value,
            "college" => form.college = value,
            "level" => form.level = value,
            "email" => form.email = value,
            "age" => form.age = value,
            "gender" => form.gender = value,
            "password" => form.password = value,
            "payment_code" => form.payment_code = Some(value),
            "needs_transport" => {
                form.needs_transport = matches!(value.as_str(), "true" | "on" | "1");
            }
            // Unknown fields are ignored, same as unknown JSON keys.
            _ => {}
        }
    }

    Ok((form, receipt))
}

/// Login with email and password
///
/// POST /auth/login
///
/// Establishes the session and returns the registrant. Failures always
/// answer 401 with the same message.
pub async fn login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Result<Json<RegistrantResponse>, ApiError> {
    let registrant = state.auth_service.login(&form).await?;

    Ok(Json(RegistrantResponse::from(&registrant)))
}

/// Logout
///
/// POST /auth/logout
///
/// Clears the session. Succeeds even when nobody is logged in.
pub async fn logout(State(state): State<AppState>) -> Result<Json<LogoutResponse>, ApiError> {
    state.auth_service.logout().await?;

    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// Get the current session's registrant
///
/// GET /auth/session
///
/// Returns 200 with the registrant, or 204 when nobody is logged in.
pub async fn session(State(state): State<AppState>) -> Result<Response, ApiError> {
    match state.auth_service.current().await? {
        Some(registrant) => {
            Ok((StatusCode::OK, Json(RegistrantResponse::from(&registrant))).into_response())
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
