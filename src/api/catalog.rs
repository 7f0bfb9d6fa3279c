//! Team catalog endpoints
//!
//! Memberships, tiers, creators, missions, shop items and events.

use reqwest::Method;
use serde_json::Value;

use super::LoyaltyClient;
use crate::error::Result;
use crate::models::{
    CompleteMissionRequest, CreatorsResponse, EventResponse, EventsResponse, MembershipResponse,
    MembershipsResponse, MissionResponse, MissionsResponse, ShopItemResponse, ShopItemsResponse,
    TeamResponse, TierResponse, TiersResponse,
};

impl LoyaltyClient {
    // == Team ==
    /// **GET** /
    pub async fn get_team(&self) -> Result<TeamResponse> {
        self.fetch("/", None).await
    }

    // == Memberships ==
    /// **GET** /membership/list
    pub async fn list_memberships(&self) -> Result<MembershipsResponse> {
        self.fetch("/membership/list", None).await
    }

    /// **GET** /membership/{id}
    pub async fn read_membership(&self, id: u64) -> Result<MembershipResponse> {
        self.fetch(&format!("/membership/{id}"), None).await
    }

    // == Tiers ==
    /// **GET** /tier/list
    pub async fn list_tiers(&self) -> Result<TiersResponse> {
        self.fetch("/tier/list", None).await
    }

    /// **GET** /tier/{id}
    pub async fn read_tier(&self, id: u64) -> Result<TierResponse> {
        self.fetch(&format!("/tier/{id}"), None).await
    }

    // == Creators ==
    /// **GET** /creator/list
    pub async fn list_creators(&self) -> Result<CreatorsResponse> {
        self.fetch("/creator/list", None).await
    }

    // == Missions ==
    /// **GET** /mission/list
    pub async fn list_missions(&self) -> Result<MissionsResponse> {
        self.fetch("/mission/list", None).await
    }

    /// **GET** /mission/{id}
    pub async fn read_mission(&self, id: u64) -> Result<MissionResponse> {
        self.fetch(&format!("/mission/{id}"), None).await
    }

    /// **PUT** /mission/{id}/complete
    pub async fn complete_mission(
        &self,
        id: u64,
        request: &CompleteMissionRequest,
    ) -> Result<MissionResponse> {
        self.mutate(
            Method::PUT,
            &format!("/mission/{id}/complete"),
            Some(request),
        )
        .await
    }

    // == Shop Items ==
    /// **GET** /shopItem/list
    pub async fn list_shop_items(&self) -> Result<ShopItemsResponse> {
        self.fetch("/shopItem/list", None).await
    }

    /// **GET** /shopItem/{id}
    pub async fn read_shop_item(&self, id: u64) -> Result<ShopItemResponse> {
        self.fetch(&format!("/shopItem/{id}"), None).await
    }

    /// **PUT** /shopItem/{id}/redeem
    pub async fn redeem_shop_item(&self, id: u64) -> Result<ShopItemResponse> {
        self.mutate(
            Method::PUT,
            &format!("/shopItem/{id}/redeem"),
            None::<&Value>,
        )
        .await
    }

    // == Events ==
    /// **GET** /event/list
    pub async fn list_events(&self) -> Result<EventsResponse> {
        self.fetch("/event/list", None).await
    }

    /// **GET** /event/{id}
    pub async fn read_event(&self, id: u64) -> Result<EventResponse> {
        self.fetch(&format!("/event/{id}"), None).await
    }
}
