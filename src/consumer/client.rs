use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};

use crate::{
    config::ConsumerConfig,
    models::{HealthStatus, NewUser, User},
};

use super::{
    dto::{ProviderHealth, UserLookup},
    error::ClientError,
};

const USER_AGENT: &str = concat!("user-contract-consumer/", env!("CARGO_PKG_VERSION"));

/// Operations the consumer needs from the provider.
#[async_trait]
pub trait ProviderApi: Send + Sync {
    async fn health(&self) -> Result<ProviderHealth, ClientError>;
    async fn get_user_by_id(&self, id: &str) -> UserLookup;
    async fn create_user(&self, name: &str, email: &str) -> Result<User, ClientError>;
}

/// HTTP client for the provider API.
///
/// Each call is a single attempt bounded by the configured timeout. Only a 404 on
/// `GET /user/:id` is treated as a normal outcome; every other failure is a `ClientError`.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ProviderClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let parsed =
            Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.into()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.into()));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub fn from_config(config: &ConsumerConfig) -> Result<Self, ClientError> {
        Self::new(&config.provider_url, config.provider_timeout)
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn fetch_health(&self) -> Result<HealthStatus, ClientError> {
        let response = self.http.get(self.endpoint(&["health"])).send().await?;
        decode(response).await
    }

    async fn fetch_user(&self, id: &str) -> Result<Option<User>, ClientError> {
        // URL parsing resolves `.`/`..` (and `%2e` forms) as dot segments, so such an id
        // cannot reach `/user/{id}`. The provider only issues numeric ids.
        if is_dot_segment(id) {
            return Ok(None);
        }
        let response = self.http.get(self.endpoint(&["user", id])).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(response).await.map(Some)
    }

    async fn post_user(&self, body: &NewUser) -> Result<User, ClientError> {
        let response = self
            .http
            .post(self.endpoint(&["user"]))
            .json(body)
            .send()
            .await?;
        decode(response).await
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    Ok(response.error_for_status()?.json::<T>().await?)
}

#[async_trait]
impl ProviderApi for ProviderClient {
    #[instrument(skip(self))]
    async fn health(&self) -> Result<ProviderHealth, ClientError> {
        match self.fetch_health().await {
            Ok(health) => Ok(health.into()),
            Err(e) => {
                error!(error = %e, "health check failed");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    async fn get_user_by_id(&self, id: &str) -> UserLookup {
        let lookup = UserLookup::from(self.fetch_user(id).await);
        match &lookup {
            UserLookup::Found(_) => debug!(%id, "user found"),
            UserLookup::NotFound => warn!(%id, "user not found"),
            UserLookup::Failed(e) => error!(error = %e, %id, "get user failed"),
        }
        lookup
    }

    #[instrument(skip(self, name, email))]
    async fn create_user(&self, name: &str, email: &str) -> Result<User, ClientError> {
        let body = NewUser {
            name: name.into(),
            email: email.into(),
        };
        let result = self.post_user(&body).await;
        if let Err(e) = &result {
            error!(error = %e, "create user failed");
        }
        result
    }
}
