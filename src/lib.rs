//! A provider service that owns user records and a consumer service that reads them
//! through a typed HTTP client.

pub mod app;
pub mod config;
pub mod consumer;
pub mod contract;
pub mod error;
pub mod models;
pub mod state;
pub mod telemetry;
pub mod users;
