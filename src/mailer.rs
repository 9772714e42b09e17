// src/mailer.rs

use maud::{html, Markup};
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::MailConfig;

const BREVO_ENDPOINT: &str = "https://api.brevo.com/v3/smtp/email";
const SENDER_NAME: &str = "statiestatus.nl";

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error: {0}")]
    ApiError(String),
}

pub struct BrevoMailer {
    api_key: String,
    sender_email: String,
    recipient_email: String,
    client: Client,
}

#[derive(Serialize)]
struct BrevoSender<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct BrevoRecipient<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoPayload<'a> {
    sender: BrevoSender<'a>,
    to: Vec<BrevoRecipient<'a>>,
    subject: &'a str,
    html_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<BrevoRecipient<'a>>,
}

/// "Add this machine" request from a visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct MachineSuggestion {
    pub name: String,
    pub retailer: String,
    pub address: String,
    pub city: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Anything that can be mailed to the site owner.
pub trait Mail {
    fn subject(&self) -> String;
    fn body(&self) -> Markup;
    fn reply_to(&self) -> Option<&str> {
        None
    }
}

impl Mail for MachineSuggestion {
    fn subject(&self) -> String {
        "Nieuwe statiegeldmachine toevoegen".to_string()
    }

    fn body(&self) -> Markup {
        html! {
            h2 { "Nieuwe machine voorgesteld" }
            ul {
                li { "Naam locatie: " (self.name) }
                li { "Winkelketen: " (self.retailer) }
                li { "Adres: " (self.address) }
                li { "Plaats: " (self.city) }
            }
            @if let Some(note) = &self.note {
                p { strong { "Extra info:" } br; (note) }
            }
            p style="color: #999;" { "Verstuurd via statiestatus.nl" }
        }
    }
}

impl Mail for ContactMessage {
    fn subject(&self) -> String {
        format!("statiestatus.nl bericht van {}", self.name)
    }

    fn body(&self) -> Markup {
        html! {
            p { "Naam: " (self.name) }
            p { "Email: " (self.email) }
            p { strong { "Bericht:" } br; (self.message) }
        }
    }

    fn reply_to(&self) -> Option<&str> {
        Some(&self.email)
    }
}

impl BrevoMailer {
    pub fn new(cfg: &MailConfig) -> Result<Self, MailerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        Ok(Self {
            api_key: cfg.api_key.clone(),
            sender_email: cfg.sender_email.clone(),
            recipient_email: cfg.recipient_email.clone(),
            client,
        })
    }

    pub fn send(&self, mail: &dyn Mail) -> Result<(), MailerError> {
        let subject = mail.subject();
        let payload = BrevoPayload {
            sender: BrevoSender {
                name: SENDER_NAME,
                email: &self.sender_email,
            },
            to: vec![BrevoRecipient {
                email: &self.recipient_email,
            }],
            subject: &subject,
            html_content: mail.body().into_string(),
            reply_to: mail.reply_to().map(|email| BrevoRecipient { email }),
        };

        let resp = self
            .client
            .post(BREVO_ENDPOINT)
            .header("api-key", &self.api_key)
            .json(&payload)
            .send()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(MailerError::ApiError(format!("{status} - {error_body}")));
        }

        Ok(())
    }
}
