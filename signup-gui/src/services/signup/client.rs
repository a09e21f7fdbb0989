use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::services::http::{error_message, NotSuccessResponseInfo, ResponseExt};

/// Description used when a failure carries no message from the server.
pub const FALLBACK_ERROR_MESSAGE: &str = "Please check your information and try again.";

/// Stock-keeping flag as expected by the signup endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub branch_name: String,
    pub branch_contact_name: String,
    pub branch_whatsapp: String,
    pub branch_prefix: String,
    pub branch_email: String,
    /// Stock is kept by box.
    pub branch_d_unit: YesNo,
    /// Stock is kept by piece.
    pub branch_s_unit: YesNo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    /// The server answered with a status outside of the success range.
    Http { status: u16, body: String },
    /// The request could not be sent or its response could not be read.
    Transport(String),
    /// The server answered with a success status other than 200 or 201.
    UnexpectedResponse(u16),
}

impl SignupError {
    /// Human readable description shown to the user.
    pub fn description(&self) -> String {
        match self {
            Self::Http { body, .. } => {
                error_message(body).unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
            }
            Self::Transport(_) => FALLBACK_ERROR_MESSAGE.to_string(),
            Self::UnexpectedResponse(_) => "Unexpected response.".to_string(),
        }
    }
}

impl std::fmt::Display for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Http { status, body } => write!(f, "Signup error [{}]: {}", status, body),
            Self::Transport(e) => write!(f, "Signup transport error: {}", e),
            Self::UnexpectedResponse(status) => {
                write!(f, "Signup unexpected response status: {}", status)
            }
        }
    }
}

impl std::error::Error for SignupError {}

impl From<reqwest::Error> for SignupError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => Self::Http {
                status: status.as_u16(),
                body: String::new(),
            },
            None => Self::Transport(error.to_string()),
        }
    }
}

impl From<NotSuccessResponseInfo> for SignupError {
    fn from(info: NotSuccessResponseInfo) -> Self {
        Self::Http {
            status: info.status_code,
            body: info.text,
        }
    }
}

/// Backend provisioning new trial accounts.
#[async_trait]
pub trait SignupApi: std::fmt::Debug + Send + Sync {
    /// Sends the signup request once, without retry.
    async fn create_signup(&self, request: &SignupRequest) -> Result<(), SignupError>;
}

#[derive(Debug, Clone)]
pub struct SignupClient {
    http: reqwest::Client,
    url: String,
}

impl SignupClient {
    pub fn new(url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SignupApi for SignupClient {
    async fn create_signup(&self, request: &SignupRequest) -> Result<(), SignupError> {
        tracing::debug!("Sending signup request to {}", self.url);
        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await?
            .check_success()
            .await?;

        match response.status().as_u16() {
            200 | 201 => Ok(()),
            status => Err(SignupError::UnexpectedResponse(status)),
        }
    }
}
