pub mod dto;
pub mod handlers;
pub mod repo;

use crate::state::ProviderState;
use axum::Router;

pub use repo::UserStore;

pub fn router() -> Router<ProviderState> {
    Router::new()
        .merge(handlers::health_routes())
        .merge(handlers::user_routes())
}
