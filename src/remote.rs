//! Transport-layer error classification
//!
//! The engine never produces these errors; a host attaches one to a
//! form after a failed submission and [`RemoteError::user_message`]
//! picks a single human-readable message through a fixed precedence
//! table consumers rely on.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ErrorBag;

static NETWORK_FAILURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)error: network error").expect("network pattern compiles"));

/// Response body of a failed submission: an optional overall message
/// plus optional per-field error bags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub errors: IndexMap<String, ErrorBag>,
}

/// The response half of a transport error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteResponse {
    pub status: u16,
    #[serde(default)]
    pub data: RemoteBody,
}

/// A transport-layer error as reported by the host's network stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteError {
    /// The error's own rendering, e.g. `Error: Network Error`.
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<RemoteResponse>,
}

impl RemoteError {
    /// Connection-level failure with no response.
    pub fn network() -> Self {
        Self {
            message: "Error: Network Error".to_string(),
            response: None,
        }
    }

    /// Error carrying an HTTP response.
    pub fn with_response(message: impl Into<String>, status: u16, data: RemoteBody) -> Self {
        Self {
            message: message.into(),
            response: Some(RemoteResponse { status, data }),
        }
    }

    /// Select the single message shown to the user. Precedence, in
    /// order: network-failure signature, response body message,
    /// non-empty per-field error map, the 412 status, the error's own
    /// message, and a final catch-all.
    pub fn user_message(&self) -> String {
        if NETWORK_FAILURE.is_match(&self.message) {
            return "Please check your internet connection.".to_string();
        }

        if let Some(response) = &self.response {
            if let Some(message) = &response.data.message {
                if !message.is_empty() {
                    return message.clone();
                }
            }

            if !response.data.errors.is_empty() {
                return "Please check the form for incorrect or missing data.".to_string();
            }

            if response.status == 412 {
                return "You cannot perform this action.".to_string();
            }
        }

        if !self.message.is_empty() {
            return self.message.clone();
        }

        "We seem to be experiencing server issues. Please try again later.".to_string()
    }
}
