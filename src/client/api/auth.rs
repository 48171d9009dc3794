//! Authentication API

use async_trait::async_trait;
use reqwest::Method;

use crate::client::MedTrackClient;
use crate::client::models::{
    AuthResponse, FcmTokenRequest, ForgotPasswordRequest, Health, LoginRequest, RegisterRequest,
};
use crate::error::Result;

/// Authentication operations for the MedTrack API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Sign in and store the issued credential.
    ///
    /// `remember` keeps the credential in durable storage; otherwise it only
    /// lives for the current login session.
    async fn login(&self, request: &LoginRequest, remember: bool) -> Result<AuthResponse>;

    /// Create an account and store the issued credential
    async fn register(&self, request: &RegisterRequest, remember: bool) -> Result<AuthResponse>;

    /// Reset a password. Does not sign in.
    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<AuthResponse>;

    /// Forget the stored credential. There is no server-side logout.
    fn logout(&self) -> Result<()>;

    /// Register a push-notification device token
    async fn update_fcm_token(&self, fcm_token: &str) -> Result<()>;

    /// Backend health status
    async fn health(&self) -> Result<Health>;
}

#[async_trait]
impl AuthApi for MedTrackClient {
    async fn login(&self, request: &LoginRequest, remember: bool) -> Result<AuthResponse> {
        let response: AuthResponse = self
            .send_json(Method::POST, "/api/auth/login", request)
            .await?;
        self.credentials()
            .store_credential(&response.token, remember)?;
        Ok(response)
    }

    async fn register(&self, request: &RegisterRequest, remember: bool) -> Result<AuthResponse> {
        let response: AuthResponse = self
            .send_json(Method::POST, "/api/auth/register", request)
            .await?;
        self.credentials()
            .store_credential(&response.token, remember)?;
        Ok(response)
    }

    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<AuthResponse> {
        self.send_json(Method::POST, "/api/auth/forgot-password", request)
            .await
    }

    fn logout(&self) -> Result<()> {
        self.credentials().clear_credential()
    }

    async fn update_fcm_token(&self, fcm_token: &str) -> Result<()> {
        let body = FcmTokenRequest {
            fcm_token: fcm_token.to_string(),
        };
        self.request(
            Method::POST,
            "/api/users/fcm-token",
            Some(crate::client::RequestBody::json(&body)?),
            None,
        )
        .await?;
        Ok(())
    }

    async fn health(&self) -> Result<Health> {
        self.get_json("/").await
    }
}
