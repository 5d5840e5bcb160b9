use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output shape of log lines, picked with `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON lines; anything else keeps the human format.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Logging setup for one binary.
#[derive(Debug, Clone)]
pub struct LogSettings {
    pub service: &'static str,
    /// Directives used when `RUST_LOG` is unset or unparsable.
    pub default_filter: String,
    pub format: LogFormat,
}

impl LogSettings {
    pub fn from_env(service: &'static str) -> Self {
        Self {
            service,
            default_filter: format!("user_contract=debug,{service}=debug,tower_http=info"),
            format: LogFormat::parse(std::env::var("LOG_FORMAT").ok().as_deref()),
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }

    /// Installs the global subscriber. Call once at startup.
    pub fn init(&self) {
        let registry = tracing_subscriber::registry().with(self.filter());
        match self.format {
            LogFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json().with_target(false))
                .init(),
            LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        }
        tracing::debug!(service = self.service, format = ?self.format, "logging ready");
    }
}
