//! Recorded consumer/provider interactions.
//!
//! The same interactions are recorded into a pact mock server for the consumer's tests and
//! replayed against the real provider, so both sides agree on every request/response pair.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Interactions agreed between one consumer and one provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contract {
    pub consumer: Participant,
    pub provider: Participant,
    pub interactions: Vec<Interaction>,
    #[serde(default)]
    pub metadata: ContractMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interaction {
    pub description: String,
    /// Precondition the provider must be in before the request is replayed.
    #[serde(
        rename = "providerState",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub provider_state: Option<String>,
    pub request: ContractRequest,
    pub response: ContractResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContractRequest {
    pub method: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContractResponse {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContractMetadata {
    #[serde(rename = "pactSpecification")]
    pub pact_specification: PactSpecification,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PactSpecification {
    pub version: String,
}

impl Default for ContractMetadata {
    fn default() -> Self {
        Self {
            pact_specification: PactSpecification {
                version: "3.0.0".to_string(),
            },
        }
    }
}

pub const STATE_HEALTHY: &str = "provider is healthy";
pub const STATE_USER_1_EXISTS: &str = "user 1 exists";
pub const STATE_USER_MISSING: &str = "user does not exist";
pub const STATE_CAN_CREATE: &str = "a new user can be created";

impl Contract {
    /// The documented Consumer -> Provider interactions.
    pub fn consumer_provider() -> Self {
        Self {
            consumer: Participant::new("Consumer"),
            provider: Participant::new("Provider"),
            interactions: vec![
                Interaction::new(
                    "a health check request",
                    STATE_HEALTHY,
                    ContractRequest::get("/health"),
                    ContractResponse::new(200, json!({ "status": "OK", "service": "Provider" })),
                ),
                Interaction::new(
                    "a request to get user 1",
                    STATE_USER_1_EXISTS,
                    ContractRequest::get("/user/1"),
                    ContractResponse::new(
                        200,
                        json!({ "id": "1", "name": "John Doe", "email": "john@example.com" }),
                    ),
                ),
                Interaction::new(
                    "a request to get non-existent user",
                    STATE_USER_MISSING,
                    ContractRequest::get("/user/999"),
                    ContractResponse::new(404, json!({ "error": "User not found" })),
                ),
                Interaction::new(
                    "a request to create a new user",
                    STATE_CAN_CREATE,
                    ContractRequest::post(
                        "/user",
                        json!({ "name": "Alice Johnson", "email": "alice@example.com" }),
                    ),
                    ContractResponse::new(
                        201,
                        json!({ "id": "3", "name": "Alice Johnson", "email": "alice@example.com" }),
                    ),
                ),
            ],
            metadata: ContractMetadata::default(),
        }
    }

    pub fn interaction(&self, description: &str) -> Option<&Interaction> {
        self.interactions
            .iter()
            .find(|i| i.description == description)
    }

    /// First interaction whose request has this method and path.
    pub fn find_request(&self, method: &str, path: &str) -> Option<&Interaction> {
        self.interactions.iter().find(|i| {
            i.request.method.eq_ignore_ascii_case(method) && i.request.path == path
        })
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

impl Interaction {
    pub fn new(
        description: impl Into<String>,
        provider_state: impl Into<String>,
        request: ContractRequest,
        response: ContractResponse,
    ) -> Self {
        Self {
            description: description.into(),
            provider_state: Some(provider_state.into()),
            request,
            response,
        }
    }

    /// True when `status` and `body` equal the recorded response exactly.
    pub fn matches(&self, status: u16, body: &Value) -> bool {
        status == self.response.status
            && self.response.body.as_ref().map_or(true, |expected| expected == body)
    }
}

impl ContractRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: "GET".into(),
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: "POST".into(),
            path: path.into(),
            body: Some(body),
        }
    }
}

impl ContractResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }
}
