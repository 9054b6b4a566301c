/// Response model for the decomposition service
use serde::Deserialize;
use thiserror::Error;

/// A URL split into its parts by the service.
///
/// String fields arrive percent-encoded; see `render::display_value`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Decomposition {
    pub scheme: String,
    pub username: String,
    pub password: String,
    pub hostname: String,
    pub port: String,
    pub path: String,
    pub query: String,
    pub anchor: String,
    pub domain: String,
    pub public_suffix: String,
    pub is_rulable: bool,
    pub is_subdomain: bool,
    pub is_public_suffix: bool,
}

/// Why a request did not produce a `Decomposition`.
///
/// The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// No response arrived at all.
    #[error("We are unable to talk to the server.")]
    Transport,

    /// A response arrived but its body is not a decomposition.
    #[error("We are talking to the wrong server.")]
    ResponseFormat { reason: String },

    /// Anything else, e.g. an error status from the service.
    #[error("Something is wrong. Refresh the page.")]
    Unclassified { status: u16 },
}

/// What came back from one request, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawOutcome {
    NoResponse,
    Response { status: u16, body: String },
}

/// Interpret a raw outcome. Status is checked before the body, so an error
/// page is never reported as a wrong server.
pub fn classify(outcome: RawOutcome) -> Result<Decomposition, Failure> {
    match outcome {
        RawOutcome::NoResponse => Err(Failure::Transport),
        RawOutcome::Response { status, .. } if !(200..=299).contains(&status) => {
            Err(Failure::Unclassified { status })
        }
        RawOutcome::Response { body, .. } => {
            serde_json::from_str(&body).map_err(|e| Failure::ResponseFormat {
                reason: e.to_string(),
            })
        }
    }
}
