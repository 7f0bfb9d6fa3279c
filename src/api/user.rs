//! User endpoints

use reqwest::Method;
use serde_json::Value;

use super::LoyaltyClient;
use crate::error::Result;
use crate::models::{
    EmailVerificationRequest, HrefResponse, MultipassRequest, NotificationsResponse,
    TransactionsResponse, UpdateUserRequest, UploadAvatarRequest, UploadAvatarResponse,
    UserResponse, UsersResponse, VerifyEmailRequest,
};

impl LoyaltyClient {
    /// **GET** /user/list
    ///
    /// The top 100 users of the team, most points first.
    pub async fn list_users(&self) -> Result<UsersResponse> {
        self.fetch("/user/list", None).await
    }

    /// **GET** /user
    ///
    /// The logged in user.
    pub async fn get_user(&self) -> Result<UserResponse> {
        self.fetch("/user", None).await
    }

    /// **PUT** /user
    pub async fn update_user(&self, request: &UpdateUserRequest) -> Result<UserResponse> {
        self.mutate(Method::PUT, "/user", Some(request)).await
    }

    /// **POST** /email/request
    pub async fn request_email_verification(
        &self,
        request: &EmailVerificationRequest,
    ) -> Result<Value> {
        self.mutate(Method::POST, "/email/request", Some(request))
            .await
    }

    /// **POST** /email/verify
    pub async fn verify_email(&self, request: &VerifyEmailRequest) -> Result<Value> {
        self.mutate(Method::POST, "/email/verify", Some(request))
            .await
    }

    /// **GET** /resource
    ///
    /// Returns a signed URL to upload the image to, and the resource ID to
    /// save on the user with [`update_user`](Self::update_user).
    pub async fn upload_avatar(&self, request: &UploadAvatarRequest) -> Result<UploadAvatarResponse> {
        self.fetch_with("/resource", request).await
    }

    /// **GET** /user/multipass
    pub async fn create_shopify_multipass_session(
        &self,
        request: &MultipassRequest,
    ) -> Result<HrefResponse> {
        self.fetch_with("/user/multipass", request).await
    }

    /// **DELETE** /user/profile/{platform}
    pub async fn disconnect_platform_from_profile(&self, platform: &str) -> Result<Value> {
        self.mutate(
            Method::DELETE,
            &format!("/user/profile/{platform}"),
            None::<&Value>,
        )
        .await
    }

    /// **GET** /notification/list
    pub async fn list_notifications(&self) -> Result<NotificationsResponse> {
        self.fetch("/notification/list", None).await
    }

    /// **GET** /transaction/list
    pub async fn list_transactions(&self) -> Result<TransactionsResponse> {
        self.fetch("/transaction/list", None).await
    }
}
