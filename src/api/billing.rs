//! Billing endpoints
//!
//! All three are GETs and go through the response cache like any other read.

use super::LoyaltyClient;
use crate::error::Result;
use crate::models::{
    HrefResponse, ManageBillingRequest, MembershipChangeRequest, MembershipUpdateResponse,
};

impl LoyaltyClient {
    /// **GET** /billing/update
    ///
    /// When the response carries `amount_due`, prompt the user and follow up
    /// with [`confirm_update_membership`](Self::confirm_update_membership).
    /// When it carries `href`, redirect there.
    pub async fn update_membership(
        &self,
        request: &MembershipChangeRequest,
    ) -> Result<MembershipUpdateResponse> {
        self.fetch_with("/billing/update", request).await
    }

    /// **GET** /billing/confirm
    pub async fn confirm_update_membership(
        &self,
        request: &MembershipChangeRequest,
    ) -> Result<HrefResponse> {
        self.fetch_with("/billing/confirm", request).await
    }

    /// **GET** /billing/manage
    pub async fn manage_billing(&self, request: &ManageBillingRequest) -> Result<HrefResponse> {
        self.fetch_with("/billing/manage", request).await
    }
}
