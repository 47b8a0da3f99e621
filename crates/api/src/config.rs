use rust_decimal::Decimal;
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    /// Email service configuration
    #[serde(default)]
    pub email: EmailConfig,
    /// Receipt pricing configuration
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Background job configuration
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Whether outgoing email is enabled at all.
    #[serde(default)]
    pub enabled: bool,

    /// Email provider; only `console` is implemented (no real delivery).
    #[serde(default = "default_email_provider")]
    pub provider: String,

    #[serde(default = "default_sender_email")]
    pub sender_email: String,

    #[serde(default = "default_sender_name")]
    pub sender_name: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: default_email_provider(),
            sender_email: default_sender_email(),
            sender_name: default_sender_name(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Tax rate applied on receipts, as a fraction (0.10 = 10%).
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    /// Whether background jobs run at all.
    #[serde(default = "default_scheduler_enabled")]
    pub enabled: bool,

    /// Minutes between scheduled-email dispatch runs.
    #[serde(default = "default_email_dispatch_minutes")]
    pub email_dispatch_minutes: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: default_scheduler_enabled(),
            email_dispatch_minutes: default_email_dispatch_minutes(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_request_timeout() -> u64 {
    30
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_email_provider() -> String {
    "console".to_string()
}
fn default_sender_email() -> String {
    "bookings@carrentalexample.com".to_string()
}
fn default_sender_name() -> String {
    "Car Rental".to_string()
}
fn default_tax_rate() -> Decimal {
    Decimal::new(10, 2) // 0.10
}
fn default_scheduler_enabled() -> bool {
    true
}
fn default_email_dispatch_minutes() -> u64 {
    1
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with CR__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("CR").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Configuration used by tests: quiet logging, no background jobs.
    pub fn for_test() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                request_timeout_secs: 30,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
                format: LogFormat::Pretty,
            },
            security: SecurityConfig {
                cors_origins: vec![],
            },
            email: EmailConfig::default(),
            pricing: PricingConfig::default(),
            scheduler: SchedulerConfig {
                enabled: false,
                email_dispatch_minutes: 1,
            },
        }
    }

    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], self.server.port)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_tax_rate_is_ten_percent() {
        assert_eq!(PricingConfig::default().tax_rate, dec!(0.10));
    }

    #[test]
    fn test_test_config_disables_scheduler() {
        let config = Config::for_test();
        assert!(!config.scheduler.enabled);
    }

    #[test]
    fn test_socket_addr() {
        let config = Config::for_test();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:0");
    }

    #[test]
    fn test_log_format_parses_from_config_value() {
        let logging: LoggingConfig =
            serde_json::from_str(r#"{ "level": "info", "format": "pretty" }"#).unwrap();
        assert_eq!(logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_log_format_defaults_to_json() {
        let logging: LoggingConfig = serde_json::from_str(r#"{ "level": "info" }"#).unwrap();
        assert_eq!(logging.format, LogFormat::Json);
    }
}
