//! Submission of the OTP login form.

pub mod alert;

use crate::api::auth::Transport;
use crate::error::{SubmitError, ValidationError};
use crate::models::auth::Credentials;
use crate::page::{Element, Navigator, Page};
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub const DASHBOARD_PATH: &str = "/dashboard";

/// Result of one call to [`LoginHandler::submit`].
#[derive(Debug)]
pub enum Submission {
    /// A field was empty; the alert shows the reason and nothing was sent.
    Rejected(ValidationError),
    /// The request is in flight. Awaiting the handle is optional.
    Sent(JoinHandle<Result<(), SubmitError>>),
}

pub struct LoginHandler {
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
    runtime: Handle,
}

impl LoginHandler {
    pub fn new(
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
        runtime: Handle,
    ) -> Self {
        Self {
            transport,
            navigator,
            runtime,
        }
    }

    pub fn submit<P: Page + ?Sized>(&self, page: &mut P) -> Submission {
        info!("login via otp");
        alert::hide(page);

        let username = page.value(Element::Username);
        if username.is_empty() {
            return self.reject(page, ValidationError::MissingUsername);
        }

        let passcode = page.value(Element::Passcode);
        if passcode.is_empty() {
            return self.reject(page, ValidationError::MissingPasscode);
        }

        let credentials = Credentials { username, passcode };
        let transport = Arc::clone(&self.transport);
        let navigator = Arc::clone(&self.navigator);

        Submission::Sent(self.runtime.spawn(async move {
            match transport.verify_totp(&credentials).await {
                Ok(_) => {
                    navigator.navigate(DASHBOARD_PATH);
                    Ok(())
                }
                Err(e) => {
                    warn!("OTP login for {:?} failed: {}", credentials.username, e);
                    Err(e)
                }
            }
        }))
    }

    fn reject<P: Page + ?Sized>(&self, page: &mut P, error: ValidationError) -> Submission {
        debug!("Rejected OTP login: {}", error);
        alert::show(page, &error.to_string());
        Submission::Rejected(error)
    }
}
