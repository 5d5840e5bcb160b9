use serde::{Deserialize, Serialize};

use crate::models::{HealthStatus, User};

use super::error::ClientError;

pub const HEALTH_CHECK_MESSAGE: &str = "Health check successful";

/// Provider health as seen through the client; `message` is added client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderHealth {
    pub status: String,
    pub service: String,
    pub message: String,
}

impl From<HealthStatus> for ProviderHealth {
    fn from(health: HealthStatus) -> Self {
        Self {
            status: health.status,
            service: health.service,
            message: HEALTH_CHECK_MESSAGE.into(),
        }
    }
}

/// Outcome of looking a user up on the provider.
#[derive(Debug)]
pub enum UserLookup {
    Found(User),
    /// The provider answered 404.
    NotFound,
    Failed(ClientError),
}

impl UserLookup {
    pub fn into_result(self) -> Result<Option<User>, ClientError> {
        match self {
            UserLookup::Found(user) => Ok(Some(user)),
            UserLookup::NotFound => Ok(None),
            UserLookup::Failed(e) => Err(e),
        }
    }
}

impl From<Result<Option<User>, ClientError>> for UserLookup {
    fn from(result: Result<Option<User>, ClientError>) -> Self {
        match result {
            Ok(Some(user)) => UserLookup::Found(user),
            Ok(None) => UserLookup::NotFound,
            Err(e) => UserLookup::Failed(e),
        }
    }
}

/// Body of `GET /consumer/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerHealth {
    pub status: String,
    pub service: String,
    pub provider: ProviderHealth,
}

/// Body of `POST /consumer/user`; absent or null fields are forwarded as empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
