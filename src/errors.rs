use astra::Response;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (storage, config).
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Payload Too Large")]
    PayloadTooLarge,
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Catalog Error: {0}")]
    CatalogError(String),
    #[error("Config Error: {0}")]
    ConfigError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::MethodNotAllowed => 405,
            ServerError::PayloadTooLarge => 413,
            ServerError::DbError(_)
            | ServerError::CatalogError(_)
            | ServerError::ConfigError(_)
            | ServerError::InternalError => 500,
        }
    }

    /// Text safe to show a visitor. Storage and config details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::NotFound
            | ServerError::MethodNotAllowed
            | ServerError::PayloadTooLarge => self.to_string(),
            ServerError::BadRequest(msg) => msg.clone(),
            _ => "Internal Server Error".to_string(),
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
