use thiserror::Error;

/// Errors that can occur while sending a profile to the API.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Connection failure, timeout or unreadable response
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// API answered with anything other than 201 Created
    #[error("Profile API answered with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

impl SubmitError {
    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SubmitError::Rejected { message, .. } => message.as_deref(),
            SubmitError::ClientBuild(_) | SubmitError::Transport { .. } => None,
        }
    }

    /// Status code of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitError::Rejected { status, .. } => Some(*status),
            SubmitError::ClientBuild(_) | SubmitError::Transport { .. } => None,
        }
    }
}

/// Extracts the `message` string from a JSON error body.
///
/// Blank messages are treated as absent.
pub fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|message| message.as_str())
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
