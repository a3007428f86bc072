use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketDeskError {
    #[error("ticket '{0}' not found")]
    TicketNotFound(u64),

    #[error("invalid page '{0}': pages are numbered from 1")]
    InvalidPage(u32),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no modal is open")]
    NoModalOpen,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    /// Transport-level failure; the message is surfaced to the user verbatim.
    #[error("{0}")]
    Network(String),

    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TicketDeskError>;
