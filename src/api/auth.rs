//! Session endpoints
//!
//! Signup, login and password reset all answer with a session token, which
//! is stored so later requests are authenticated.

use reqwest::Method;
use serde_json::Value;
use tracing::info;

use super::LoyaltyClient;
use crate::error::Result;
use crate::models::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, SignupRequest,
};

impl LoyaltyClient {
    /// **POST** /signup
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse> {
        let response: AuthResponse = self.mutate(Method::POST, "/signup", Some(request)).await?;
        self.remember_session(&response);
        info!("signed up");
        Ok(response)
    }

    /// **POST** /login
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        let response: AuthResponse = self.mutate(Method::POST, "/login", Some(request)).await?;
        self.remember_session(&response);
        info!("logged in");
        Ok(response)
    }

    /// **POST** /password/forgot
    ///
    /// The API emails a link carrying a reset token to the user, if the
    /// address is known.
    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<Value> {
        self.mutate(Method::POST, "/password/forgot", Some(request))
            .await
    }

    /// **POST** /password/reset
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<AuthResponse> {
        let response: AuthResponse = self
            .mutate(Method::POST, "/password/reset", Some(request))
            .await?;
        self.remember_session(&response);
        Ok(response)
    }

    fn remember_session(&self, response: &AuthResponse) {
        if let Some(token) = &response.token {
            self.store_token(token);
        }
    }
}
