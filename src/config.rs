use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;

pub const DEFAULT_PROVIDER_URL: &str = "http://localhost:3000";
pub const DEFAULT_PROVIDER_PORT: u16 = 3000;
pub const DEFAULT_CONSUMER_PORT: u16 = 3001;
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    pub host: String,
    pub port: u16,
    pub provider_url: String,
    pub provider_timeout: Duration,
}

impl ProviderConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_or("PORT", DEFAULT_PROVIDER_PORT)?,
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        socket_addr(&self.host, self.port)
    }
}

impl ConsumerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let timeout_ms: u64 = env_or(
            "PROVIDER_TIMEOUT_MS",
            DEFAULT_PROVIDER_TIMEOUT.as_millis() as u64,
        )?;
        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_or("PORT", DEFAULT_CONSUMER_PORT)?,
            provider_url: std::env::var("PROVIDER_URL")
                .unwrap_or_else(|_| DEFAULT_PROVIDER_URL.into()),
            provider_timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        socket_addr(&self.host, self.port)
    }
}

fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_var(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_var<T>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("invalid value for {key}: {raw:?}"))
}

fn socket_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid listen address {host}:{port}"))
}
