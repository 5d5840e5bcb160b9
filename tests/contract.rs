//! Consumer contracts for the provider.
//!
//! Consumer side: each recorded interaction is served by a pact mock server and exercised
//! through `ProviderClient`; the mock server fails the test if the request does not match and
//! writes the pact file on success. Provider side: the same interactions are replayed against
//! a freshly seeded provider and must come back exactly as recorded.

mod common;

use std::time::Duration;

use pact_consumer::mock_server::StartMockServerAsync;
use pact_consumer::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use user_contract::{
    consumer::{ProviderApi, ProviderClient, ProviderHealth, UserLookup},
    contract::{Contract, Interaction},
    models::User,
};

fn client(base_url: &str) -> ProviderClient {
    ProviderClient::new(base_url, Duration::from_secs(5)).expect("client")
}

/// Pact mock server holding only the recorded interaction named `description`.
async fn mock_provider(description: &str) -> Box<dyn ValidatingMockServer> {
    let contract = Contract::consumer_provider();
    let recorded = contract
        .interaction(description)
        .expect("recorded interaction")
        .clone();

    let mut pact = PactBuilderAsync::new(
        contract.consumer.name.as_str(),
        contract.provider.name.as_str(),
    );
    pact.interaction(description, "", move |mut i| async move {
        if let Some(state) = recorded.provider_state {
            i.given(state);
        }
        i.request
            .method(recorded.request.method)
            .path(recorded.request.path);
        if let Some(body) = recorded.request.body {
            i.request.json_body(body);
        }
        i.response.status(recorded.response.status);
        if let Some(body) = recorded.response.body {
            i.response.json_body(body);
        }
        i
    })
    .await;
    pact.start_mock_server_async(None, None).await
}

/// Contract: health check
#[tokio::test]
async fn contract_health() {
    let mock = mock_provider("a health check request").await;
    let health = client(mock.url().as_str()).health().await.unwrap();
    assert_eq!(
        health,
        ProviderHealth {
            status: "OK".into(),
            service: "Provider".into(),
            message: "Health check successful".into(),
        }
    );
}

/// Contract: get an existing user
#[tokio::test]
async fn contract_get_user() {
    let mock = mock_provider("a request to get user 1").await;
    match client(mock.url().as_str()).get_user_by_id("1").await {
        UserLookup::Found(user) => assert_eq!(
            user,
            User {
                id: "1".into(),
                name: "John Doe".into(),
                email: "john@example.com".into(),
            }
        ),
        other => panic!("expected user 1, got {other:?}"),
    }
}

/// Contract: get a missing user
#[tokio::test]
async fn contract_get_missing_user() {
    let mock = mock_provider("a request to get non-existent user").await;
    let lookup = client(mock.url().as_str()).get_user_by_id("999").await;
    assert!(matches!(lookup, UserLookup::NotFound), "got {lookup:?}");
}

/// Contract: create a user
#[tokio::test]
async fn contract_create_user() {
    let mock = mock_provider("a request to create a new user").await;
    let created = client(mock.url().as_str())
        .create_user("Alice Johnson", "alice@example.com")
        .await
        .unwrap();
    assert_eq!(
        created,
        User {
            id: "3".into(),
            name: "Alice Johnson".into(),
            email: "alice@example.com".into(),
        }
    );
}

async fn replay_against_provider(interaction: &Interaction) -> (u16, Value) {
    // Every provider state in the contract holds for a freshly seeded store.
    let (base, _) = common::spawn_provider().await;
    let http = reqwest::Client::new();
    let url = format!("{base}{}", interaction.request.path);
    let mut request = match interaction.request.method.as_str() {
        "POST" => http.post(url),
        _ => http.get(url),
    };
    if let Some(body) = &interaction.request.body {
        request = request.json(body);
    }
    let res = request.send().await.expect("replay request");
    let status = res.status().as_u16();
    (status, res.json().await.unwrap_or(Value::Null))
}

#[tokio::test]
async fn provider_honours_every_interaction() {
    let contract = Contract::consumer_provider();
    for interaction in &contract.interactions {
        let (status, body) = replay_against_provider(interaction).await;
        assert!(
            interaction.matches(status, &body),
            "{}: got {status} {body}",
            interaction.description
        );
    }
}

#[tokio::test]
async fn pact_file_round_trip_still_verifies() {
    let dir = std::env::temp_dir().join(format!("user-contract-pacts-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("consumer-provider.json");
    std::fs::write(&path, Contract::consumer_provider().to_json_pretty().unwrap()).unwrap();

    let loaded = Contract::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, Contract::consumer_provider());
    for interaction in &loaded.interactions {
        let (status, body) = replay_against_provider(interaction).await;
        assert!(interaction.matches(status, &body), "{}", interaction.description);
    }

    let _ = std::fs::remove_dir_all(&dir);
}
