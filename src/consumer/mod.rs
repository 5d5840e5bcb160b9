pub mod client;
pub mod dto;
pub mod error;
pub mod handlers;

use crate::state::ConsumerState;
use axum::Router;

pub use client::{ProviderApi, ProviderClient};
pub use dto::{ProviderHealth, UserLookup};
pub use error::ClientError;

pub fn router() -> Router<ConsumerState> {
    handlers::routes()
}
