use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::ApiError,
    models::{HealthStatus, User},
    state::ProviderState,
};

use super::dto::CreateUserRequest;

pub const SERVICE_NAME: &str = "Provider";
pub const USER_NOT_FOUND: &str = "User not found";
pub const NAME_AND_EMAIL_REQUIRED: &str = "Name and email are required";

pub fn health_routes() -> Router<ProviderState> {
    Router::new().route("/health", get(health))
}

pub fn user_routes() -> Router<ProviderState> {
    Router::new()
        .route("/user", post(create_user))
        .route("/user/:id", get(get_user))
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok(SERVICE_NAME))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<ProviderState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    match state.store.get(&id) {
        Some(user) => Ok(Json(user)),
        None => {
            warn!(%id, "user not found");
            Err(ApiError::NotFound(USER_NOT_FOUND.into()))
        }
    }
}

/// POST /user { name, email }
///
/// Any body that does not carry two non-empty strings is a 400, including non-JSON bodies.
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<ProviderState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, HeaderMap, Json<User>), ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable create body");
            return Err(ApiError::BadRequest(NAME_AND_EMAIL_REQUIRED.into()));
        }
    };

    let Some(new_user) = request.validate() else {
        warn!("name or email missing");
        return Err(ApiError::BadRequest(NAME_AND_EMAIL_REQUIRED.into()));
    };

    let user = state.store.insert(new_user.name, new_user.email);
    info!(user_id = %user.id, "user created");

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/user/{}", user.id)) {
        headers.insert(header::LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, email: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            name: name.map(Into::into),
            email: email.map(Into::into),
        }
    }

    #[tokio::test]
    async fn health_reports_provider() {
        let Json(body) = health().await;
        assert_eq!(body, HealthStatus::ok("Provider"));
    }

    #[tokio::test]
    async fn get_user_returns_seeded_record() {
        let state = ProviderState::seeded();
        let Json(user) = get_user(State(state), Path("1".into())).await.unwrap();
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "john@example.com");
    }

    #[tokio::test]
    async fn get_user_unknown_is_not_found() {
        let state = ProviderState::seeded();
        let err = get_user(State(state), Path("999".into())).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), USER_NOT_FOUND);
    }

    #[tokio::test]
    async fn create_user_assigns_next_id() {
        let state = ProviderState::seeded();
        let (status, headers, Json(user)) = create_user(
            State(state.clone()),
            Ok(Json(request(Some("Alice Johnson"), Some("alice@example.com")))),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(user.id, "3");
        assert_eq!(headers[header::LOCATION], "/user/3");

        let Json(fetched) = get_user(State(state), Path("3".into())).await.unwrap();
        assert_eq!(fetched, user);
    }

    #[tokio::test]
    async fn create_user_rejects_missing_fields_without_mutation() {
        let state = ProviderState::seeded();
        for req in [
            request(None, Some("a@example.com")),
            request(Some("A"), None),
            request(Some(""), Some("a@example.com")),
            request(Some("A"), Some("")),
        ] {
            let err = create_user(State(state.clone()), Ok(Json(req)))
                .await
                .unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(err.to_string(), NAME_AND_EMAIL_REQUIRED);
        }
        assert_eq!(state.store.len(), 2);
    }
}
