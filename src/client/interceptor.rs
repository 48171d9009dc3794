//! Response classification and session-expiry handling
//!
//! Every call runs through [`ResponseInterceptor::intercept`], which gives all
//! resource clients the same auth-expiry and error-surfacing behaviour.

use std::sync::{Arc, RwLock};

use reqwest::StatusCode;

use super::error_message::{Failure, extract_error_message};
use super::events::{ClientEvent, EventBus};
use crate::error::ApiError;
use crate::session::CredentialStore;

/// Path of the login surface
pub const LOGIN_PATH: &str = "/login";

/// `msg` query value attached to session-expiry redirects
pub const SESSION_EXPIRED: &str = "session_expired";

/// How a finished call is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    AuthFailure,
    OtherFailure,
}

impl Outcome {
    pub fn classify(status: StatusCode) -> Self {
        if status.is_success() {
            Outcome::Success
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Outcome::AuthFailure
        } else {
            Outcome::OtherFailure
        }
    }
}

/// Location the shell is currently showing: path plus optional query and hash
#[derive(Debug, Clone, Default)]
pub struct Location {
    current: Arc<RwLock<String>>,
}

impl Location {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial.into())),
        }
    }

    pub fn set(&self, location: impl Into<String>) {
        let location = location.into();
        match self.current.write() {
            Ok(mut current) => *current = location,
            Err(poisoned) => *poisoned.into_inner() = location,
        }
    }

    /// Full location, e.g. `/app/medicines?profile=p1#top`
    pub fn get(&self) -> String {
        match self.current.read() {
            Ok(current) => current.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Whether the path component is the login surface
    pub fn is_login(&self) -> bool {
        path_of(&self.get()) == LOGIN_PATH
    }
}

/// Path component of a location (everything before `?` or `#`)
pub fn path_of(location: &str) -> &str {
    location
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
}

/// Login location that returns to `from` after signing in
pub fn login_redirect(from: &str) -> String {
    format!(
        "{}?msg={}&from={}",
        LOGIN_PATH,
        SESSION_EXPIRED,
        urlencoding::encode(from)
    )
}

/// Applies the failure policy to finished calls
#[derive(Clone)]
pub struct ResponseInterceptor {
    credentials: CredentialStore,
    events: EventBus,
    location: Location,
}

impl ResponseInterceptor {
    pub fn new(credentials: CredentialStore, events: EventBus, location: Location) -> Self {
        Self {
            credentials,
            events,
            location,
        }
    }

    /// Classify a response by status and raw body.
    ///
    /// Success passes through. 401/403 clears the stored credential and
    /// signals a session invalidation (with a redirect unless already on the
    /// login surface). Anything else publishes its normalized message. Every
    /// failure still comes back as `Err`.
    pub fn intercept(&self, status: StatusCode, body: &str) -> Result<(), ApiError> {
        match Outcome::classify(status) {
            Outcome::Success => Ok(()),
            Outcome::AuthFailure => {
                let message = extract_error_message(&Failure::http(status, body));
                self.invalidate_session();
                Err(ApiError::AuthFailure { status, message })
            }
            Outcome::OtherFailure => {
                let message = extract_error_message(&Failure::http(status, body));
                log::debug!("Request failed ({}): {}", status, message);
                self.events.publish(ClientEvent::Error(message.clone()));
                Err(ApiError::Request { status, message })
            }
        }
    }

    /// Handle a request that never produced a response
    pub fn transport_failure(&self, err: reqwest::Error) -> ApiError {
        let description = ApiError::from(err).to_string();
        let message = extract_error_message(&Failure::transport(description));
        log::debug!("Transport failure: {}", message);
        self.events.publish(ClientEvent::Error(message.clone()));
        ApiError::Network(message)
    }

    fn invalidate_session(&self) {
        if let Err(e) = self.credentials.clear_credential() {
            log::warn!("Failed to clear stored credential: {}", e);
        }

        let redirect = if self.location.is_login() {
            None
        } else {
            Some(login_redirect(&self.location.get()))
        };

        log::debug!("Session invalidated; redirect: {:?}", redirect);
        self.events
            .publish(ClientEvent::SessionInvalidated { redirect });
    }
}
