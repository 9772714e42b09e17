// src/state.rs
use chrono::{DateTime, Utc};
use tracing::info;

use crate::antispam::{NoteSanitizer, RateDecision, RateLimiter};
use crate::config::Config;
use crate::db::Database;
use crate::errors::ServerError;
use crate::mailer::{BrevoMailer, Mail};

pub type Clock = fn() -> DateTime<Utc>;

/// Everything a request handler needs, built once in `main` and shared by
/// all workers.
pub struct AppState {
    pub db: Database,
    pub limiter: RateLimiter,
    pub sanitizer: NoteSanitizer,
    pub ip_hash_secret: String,
    pub site_url: String,
    pub mailer: Option<BrevoMailer>,
    pub clock: Clock,
}

impl AppState {
    pub fn from_config(cfg: &Config, db: Database) -> Result<Self, ServerError> {
        let sanitizer = NoteSanitizer::new()
            .map_err(|e| ServerError::SetupError(format!("note filter: {e}")))?;
        let mailer = cfg
            .mail
            .as_ref()
            .map(BrevoMailer::new)
            .transpose()
            .map_err(|e| ServerError::SetupError(format!("mailer: {e}")))?;

        Ok(Self {
            db,
            limiter: RateLimiter::new(cfg.rate_limit_window_secs, cfg.rate_limit_max),
            sanitizer,
            ip_hash_secret: cfg.ip_hash_secret.clone(),
            site_url: cfg.site_url.trim_end_matches('/').to_string(),
            mailer,
            clock: Utc::now,
        })
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Rate-limit `key`, turning a rejection into `TooManyRequests`.
    pub fn throttle(&self, key: &str) -> Result<(), ServerError> {
        match self.limiter.check(key, self.now()) {
            RateDecision::Allowed => Ok(()),
            RateDecision::Limited { retry_after_secs } => Err(ServerError::TooManyRequests {
                retry_after: retry_after_secs,
            }),
        }
    }

    /// Mail the site owner, or log the message when no mailer is configured.
    pub fn deliver(&self, mail: &dyn Mail) -> Result<(), ServerError> {
        match &self.mailer {
            Some(mailer) => mailer
                .send(mail)
                .map_err(|e| ServerError::MailerError(e.to_string())),
            None => {
                info!(subject = %mail.subject(), "mailer disabled, message logged only");
                Ok(())
            }
        }
    }
}
