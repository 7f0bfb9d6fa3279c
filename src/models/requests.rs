//! Request DTOs for the loyalty API
//!
//! Bodies of mutating calls and parameters of parameterized reads. Unset
//! optional fields are left out of the serialized JSON.

use serde::{Deserialize, Serialize};

/// Billing interval of a membership
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    #[default]
    Month,
    Year,
}

/// Body of `POST /signup`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Date of birth formatted as MM/DD/YYYY
    pub date_of_birth: String,
    pub email: String,
    pub interval: Interval,
    pub password: String,
    /// Tag IDs the user is interested in
    pub tags: Vec<u64>,
    /// Membership ID
    pub membership: u64,
    /// The URL path to return to after checkout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// The ID of the referring user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_id: Option<u64>,
}

/// Body of `POST /login`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /password/forgot`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: String,
    /// The URL path to link to in the email
    pub return_path: String,
}

/// Body of `POST /password/reset`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
    /// The token from the forgot password email
    pub token: String,
}

/// Body of `PUT /user`. Only the fields that are set are updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_suite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_resource_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<u64>>,
}

/// Body of `POST /email/request`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailVerificationRequest {
    /// The URL path to link to in the verification email
    pub return_path: String,
}

/// Body of `POST /email/verify`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

/// Parameters of `GET /resource`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadAvatarRequest {
    /// The name of the file
    pub name: String,
    /// The mime type of the file
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Request a base64 upload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<bool>,
}

/// Parameters of `GET /user/multipass`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipassRequest {
    /// The URL path to the product to open
    pub shopify_path: String,
}

/// Parameters of `GET /billing/update` and `GET /billing/confirm`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipChangeRequest {
    pub interval: Interval,
    /// Membership ID
    pub membership: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_path: Option<String>,
}

/// Parameters of `GET /billing/manage`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageBillingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_path: Option<String>,
}

/// Body of `PUT /mission/{id}/complete`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompleteMissionRequest {
    /// Required for code missions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
