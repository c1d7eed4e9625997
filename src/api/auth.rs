use crate::error::SubmitError;
use crate::models::auth::{Credentials, VerifyTotpResponse};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};

pub const VERIFY_TOTP_PATH: &str = "/verifyTotp";

/// Sends credentials to the server for TOTP verification.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn verify_totp(&self, credentials: &Credentials)
        -> Result<VerifyTotpResponse, SubmitError>;
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn verify_totp(
        &self,
        credentials: &Credentials,
    ) -> Result<VerifyTotpResponse, SubmitError> {
        verify_totp(&self.client, &self.base_url, credentials).await
    }
}

pub async fn verify_totp(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<VerifyTotpResponse, SubmitError> {
    let url = format!("{}{}", base_url, VERIFY_TOTP_PATH);
    debug!("Verifying TOTP for {:?} at {}", credentials.username, url);
    let body = serde_json::to_vec(credentials).map_err(SubmitError::Encode)?;
    let resp = client
        .post(&url)
        .header(CONTENT_TYPE, "application/json; charset=utf-8")
        .header(ACCEPT, "application/json")
        .body(body)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        debug!("TOTP verification failed: {}", status);
        return Err(SubmitError::Status(status));
    }

    let bytes = resp.bytes().await?;
    // 204 and other empty 2xx replies carry nothing to decode.
    let response = if status == StatusCode::NO_CONTENT || bytes.is_empty() {
        VerifyTotpResponse::Null
    } else {
        serde_json::from_slice::<VerifyTotpResponse>(&bytes).map_err(SubmitError::Decode)?
    };
    info!("login success");
    debug!("Response: {}", response);
    Ok(response)
}
