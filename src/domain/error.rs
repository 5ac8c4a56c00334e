// Fetch failures surfaced by the dashboard data client
use thiserror::Error;

const GENERIC_FETCH_FAILURE: &str = "Failed to fetch dashboard data";

#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-success status.
    #[error("{}", status_message(.status, .reason))]
    Status {
        status: u16,
        reason: String,
        /// Best-effort parsed error payload, `{}` when the body was not JSON.
        body: serde_json::Value,
    },

    /// The request never completed.
    #[error("{}", transport_message(.0))]
    Transport(String),

    /// The success body did not match the snapshot shape.
    #[error("Failed to parse dashboard data: {0}")]
    Decode(String),
}

fn status_message(status: &u16, reason: &str) -> String {
    if reason.trim().is_empty() {
        format!("API Error: {}", status)
    } else {
        format!("API Error: {} {}", status, reason)
    }
}

fn transport_message(message: &str) -> &str {
    if message.trim().is_empty() {
        GENERIC_FETCH_FAILURE
    } else {
        message
    }
}
