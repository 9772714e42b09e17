use std::{env, fmt::Display, net::SocketAddr, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
#[error("invalid value for {key}: {message}")]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

/// Runtime settings, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_path: String,
    pub max_workers: usize,
    pub rate_limit_window_secs: u64,
    pub rate_limit_max: u32,
    pub ip_hash_secret: String,
    pub site_url: String,
    pub seed_demo_data: bool,
    pub mail: Option<MailConfig>,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_key: String,
    pub sender_email: String,
    pub recipient_email: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let ip_hash_secret = var("IP_HASH_SECRET").unwrap_or_else(|| {
            warn!("IP_HASH_SECRET not set, IP hashes are only stable for this default");
            "statiestatus-dev-secret".to_string()
        });

        let mail = match var("BREVO_API_KEY") {
            Some(api_key) => Some(MailConfig {
                api_key,
                sender_email: try_load("MAIL_SENDER", "noreply@statiestatus.nl")?,
                recipient_email: try_load("MAIL_RECIPIENT", "info@statiestatus.nl")?,
            }),
            None => {
                info!("BREVO_API_KEY not set, suggestions will only be logged");
                None
            }
        };

        Ok(Self {
            bind_addr: try_load("BIND_ADDR", "127.0.0.1:3000")?,
            database_path: try_load("DATABASE_PATH", "statiestatus.sqlite3")?,
            max_workers: try_load("MAX_WORKERS", "8")?,
            rate_limit_window_secs: try_load("RATE_LIMIT_WINDOW_SECONDS", "300")?,
            rate_limit_max: try_load("RATE_LIMIT_MAX", "3")?,
            ip_hash_secret,
            site_url: try_load("SITE_URL", "https://www.statiestatus.nl")?,
            seed_demo_data: try_load("SEED_DEMO_DATA", "false")?,
            mail,
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    parse_value(key, &raw)
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError {
        key,
        message: e.to_string(),
    })
}
