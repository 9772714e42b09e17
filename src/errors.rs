// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, mail).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Too Many Requests: retry after {retry_after}s")]
    TooManyRequests { retry_after: u64 },

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Mailer Error: {0}")]
    MailerError(String),

    #[error("Setup Error: {0}")]
    SetupError(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status_code(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::TooManyRequests { .. } => 429,
            ServerError::MailerError(_) => 502,
            ServerError::DbError(_) | ServerError::SetupError(_) | ServerError::InternalError => {
                500
            }
        }
    }

    /// Message safe to show to clients. Storage details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::NotFound => "Not Found".to_string(),
            ServerError::BadRequest(msg) => msg.clone(),
            ServerError::TooManyRequests { .. } => {
                "Te veel meldingen, probeer het later opnieuw.".to_string()
            }
            ServerError::MailerError(_) => "Versturen is mislukt.".to_string(),
            ServerError::DbError(_) | ServerError::SetupError(_) | ServerError::InternalError => {
                "Internal Server Error".to_string()
            }
        }
    }
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
