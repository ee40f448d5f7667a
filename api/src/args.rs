use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use larder_core::domain::{
    common::{LLMConfig, LarderConfig, SessionConfig, ShoppingConfig},
    shelf::value_objects::ShelfThresholds,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "larder", version, about = "Kitchen inventory and recipe assistant API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub shelf: ShelfArgs,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub shopping: ShoppingArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "disable-metrics", env = "DISABLE_METRICS", default_value_t = false)]
    pub disable_metrics: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long = "llm-timeout", env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    #[arg(long = "llm-max-retries", env = "LLM_MAX_RETRIES", default_value_t = 1)]
    pub max_retries: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ShelfArgs {
    #[arg(long = "low-quantity", env = "SHELF_LOW_QUANTITY", default_value_t = 2)]
    pub low_quantity: u32,

    #[arg(long = "expiring-soon-days", env = "SHELF_EXPIRING_SOON_DAYS", default_value_t = 2)]
    pub expiring_soon_days: u32,

    #[arg(long = "default-expiry-days", env = "SHELF_DEFAULT_EXPIRY_DAYS", default_value_t = 7)]
    pub default_expiry_days: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SessionArgs {
    #[arg(long = "session-idle-minutes", env = "SESSION_IDLE_MINUTES", default_value_t = 120)]
    pub idle_minutes: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ShoppingArgs {
    /// Retail search URL. `{query}` is replaced by the encoded item name.
    #[arg(
        long = "shopping-url-template",
        env = "SHOPPING_URL_TEMPLATE",
        default_value = "https://www.amazon.com/s?k={query}"
    )]
    pub search_url_template: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for LarderConfig {
    fn from(args: Args) -> Self {
        LarderConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                request_timeout: Duration::from_secs(args.llm.timeout_secs),
                max_retries: args.llm.max_retries,
            },
            shelf: ShelfThresholds {
                low_quantity: args.shelf.low_quantity,
                expiring_soon_days: args.shelf.expiring_soon_days,
                default_expiry_days: args.shelf.default_expiry_days,
            },
            session: SessionConfig {
                idle_ttl: Duration::from_secs(args.session.idle_minutes * 60),
            },
            shopping: ShoppingConfig {
                search_url_template: args.shopping.search_url_template,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["larder", "--gemini-api-key", "secret"]);

        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.root_path, "");
        assert!(!args.server.disable_metrics);
        assert_eq!(args.llm.gemini_model, "gemini-1.5-flash");

        let config = LarderConfig::from(args);
        assert_eq!(config.llm.request_timeout, Duration::from_secs(60));
        assert_eq!(config.llm.max_retries, 1);
        assert_eq!(config.shelf, ShelfThresholds::default());
        assert_eq!(config.session.idle_ttl, Duration::from_secs(7200));
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = Args::parse_from([
            "larder",
            "--gemini-api-key",
            "secret",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "--server-root-path",
            "/api",
        ]);

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(args.server.root_path, "/api");
    }
}
