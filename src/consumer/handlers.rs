use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{error::ApiError, models::User, state::ConsumerState};

use super::dto::{ConsumerHealth, CreateUserBody, UserLookup};

pub const SERVICE_NAME: &str = "Consumer";
pub const PROVIDER_UNAVAILABLE: &str = "Provider unavailable";
pub const USER_NOT_FOUND: &str = "User not found";

pub fn routes() -> Router<ConsumerState> {
    Router::new()
        .route("/consumer/health", get(health))
        .route("/consumer/user", post(create_user))
        .route("/consumer/user/:id", get(get_user))
}

#[instrument(skip(state))]
pub async fn health(State(state): State<ConsumerState>) -> Result<Json<ConsumerHealth>, ApiError> {
    match state.provider.health().await {
        Ok(provider) => Ok(Json(ConsumerHealth {
            status: "OK".into(),
            service: SERVICE_NAME.into(),
            provider,
        })),
        Err(e) => {
            warn!(error = %e, "provider health check failed");
            Err(ApiError::Unavailable(PROVIDER_UNAVAILABLE.into()))
        }
    }
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<ConsumerState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    match state.provider.get_user_by_id(&id).await {
        UserLookup::Found(user) => Ok(Json(user)),
        UserLookup::NotFound => Err(ApiError::NotFound(USER_NOT_FOUND.into())),
        UserLookup::Failed(e) => Err(ApiError::Internal(e.to_string())),
    }
}

/// POST /consumer/user { name, email }
///
/// Forwarded as-is, unreadable bodies included, so the provider is the only validator. A
/// provider 400 surfaces here as a 500 like any other client error.
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<ConsumerState>,
    payload: Result<Json<CreateUserBody>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable create body, forwarding empty fields");
            CreateUserBody::default()
        }
    };
    let name = body.name.unwrap_or_default();
    let email = body.email.unwrap_or_default();

    match state.provider.create_user(&name, &email).await {
        Ok(user) => {
            info!(user_id = %user.id, "user created via provider");
            Ok((StatusCode::CREATED, Json(user)))
        }
        Err(e) => {
            error!(error = %e, "create user via provider failed");
            Err(ApiError::Internal(e.to_string()))
        }
    }
}
