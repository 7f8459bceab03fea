use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("URL is required")]
    MissingUrl,

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to fetch {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AuditError {
    /// Errors caused by the request itself rather than by the page or the
    /// service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AuditError::MissingUrl | AuditError::InvalidUrl(_))
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
