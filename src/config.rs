use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_SERVICE_ID: &str = "service_triplec";
pub const DEFAULT_TEMPLATE_ID: &str = "template_contact";
pub const DEFAULT_PUBLIC_KEY: &str = "triplec_public_key";
pub const DEFAULT_API_URL: &str = "https://api.emailjs.com";
pub const DEFAULT_TO_EMAIL: &str = "training@triplec.com.lb";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub to_email: String, // fixed destination for every contact submission
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub frontend_url: String,
    pub catalog_path: Option<PathBuf>, // embedded catalog is used when unset
    pub relay: RelayConfig,
    pub relay_timeout: Duration,
    pub sentry_dsn: Option<String>,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, fallback: &str| lookup(key).unwrap_or_else(|| fallback.to_string());
        let optional = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = parse_number("PORT", lookup("PORT"), 3000)?;
        let timeout_secs = parse_number("RELAY_TIMEOUT_SECS", lookup("RELAY_TIMEOUT_SECS"), 15)?;

        Ok(Self {
            port,
            static_dir: PathBuf::from(var_or("STATIC_DIR", "dist")),
            frontend_url: var_or("FRONTEND_URL", "http://localhost:8080"),
            catalog_path: optional("CATALOG_PATH").map(PathBuf::from),
            relay: RelayConfig {
                api_url: var_or("EMAILJS_API_URL", DEFAULT_API_URL),
                service_id: var_or("EMAILJS_SERVICE_ID", DEFAULT_SERVICE_ID),
                template_id: var_or("EMAILJS_TEMPLATE_ID", DEFAULT_TEMPLATE_ID),
                public_key: var_or("EMAILJS_PUBLIC_KEY", DEFAULT_PUBLIC_KEY),
                private_key: optional("EMAILJS_PRIVATE_KEY"),
                to_email: var_or("CONTACT_TO_EMAIL", DEFAULT_TO_EMAIL),
            },
            relay_timeout: Duration::from_secs(timeout_secs),
            sentry_dsn: optional("SENTRY_DSN"),
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: Option<String>, fallback: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(fallback),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}
