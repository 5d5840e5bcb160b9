use crate::config::ConsumerConfig;
use crate::consumer::{ProviderApi, ProviderClient};
use crate::users::UserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProviderState {
    pub store: Arc<UserStore>,
}

impl ProviderState {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    /// State of a freshly started provider: the two seed users and nothing else.
    pub fn seeded() -> Self {
        Self::new(Arc::new(UserStore::seeded()))
    }
}

#[derive(Clone)]
pub struct ConsumerState {
    pub provider: Arc<dyn ProviderApi>,
}

impl ConsumerState {
    pub fn init(config: &ConsumerConfig) -> anyhow::Result<Self> {
        let client = ProviderClient::from_config(config)?;
        Ok(Self::from_parts(Arc::new(client)))
    }

    pub fn from_parts(provider: Arc<dyn ProviderApi>) -> Self {
        Self { provider }
    }
}
