//! Client error types
//!
//! Every failure the console can hit is tagged here, at the transport
//! boundary, so callers never need to inspect the shape of an error to decide
//! how to report it.

use std::fmt;

use serde_json::Value;

#[derive(Debug)]
pub enum ClientError {
    /// Backend answered with a non-success status
    Api {
        status: u16,
        message: String,
        /// Parsed response body, kept for diagnostics
        details: Option<Value>,
    },
    /// Request could not be sent or the response body could not be read
    Network(String),
    /// Success body did not match the expected shape
    Decode(String),
    /// Local precondition failure, no request was made
    NotFound(String),
}

impl ClientError {
    /// Text shown to the user: `"{status}: {message}"` for backend errors,
    /// the plain description for everything else.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api {
                status, message, ..
            } => format!("{}: {}", status, message),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Api { message, .. } => write!(f, "{}", message),
            ClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ClientError::Decode(msg) => write!(f, "Invalid response body: {}", msg),
            ClientError::NotFound(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}
