use chrono_tz::Tz;

/// Server configuration - all tunables for the hotel backend
///
/// # Environment Variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 8000 | HTTP service port |
/// | ENVIRONMENT | development | Runtime environment |
/// | TIMEZONE | UTC | Hotel-local timezone (IANA name) |
/// | SEED_DEMO_DATA | true | Seed demo data into the store at startup |
/// | SUGGESTION_DELAY_MS | 2000 | Recommendation provider artificial delay (ms) |
/// | LOG_DIR | (unset) | Directory for daily-rolling log files |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | Graceful shutdown timeout (ms) |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 TIMEZONE=America/New_York cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API service port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Hotel-local timezone, used for statistics windows ("today", peak hours)
    pub timezone: Tz,
    /// Whether to seed demo data at startup
    pub seed_demo_data: bool,
    /// Artificial delay before recommendations are returned (milliseconds)
    pub suggestion_delay_ms: u64,
    /// Directory for log files; file logging is disabled when unset
    pub log_dir: Option<String>,
    /// Graceful shutdown timeout (milliseconds)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Falls back to defaults for anything unset or unparseable
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::UTC),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            suggestion_delay_ms: std::env::var("SUGGESTION_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
            log_dir: std::env::var("LOG_DIR").ok(),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// Override the fields tests commonly need to pin
    pub fn with_overrides(http_port: u16, seed_demo_data: bool, suggestion_delay_ms: u64) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.seed_demo_data = seed_demo_data;
        config.suggestion_delay_ms = suggestion_delay_ms;
        config
    }

    /// Whether running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether running in development
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_pin_test_fields() {
        let config = Config::with_overrides(0, false, 5);
        assert_eq!(config.http_port, 0);
        assert!(!config.seed_demo_data);
        assert_eq!(config.suggestion_delay_ms, 5);
    }
}
