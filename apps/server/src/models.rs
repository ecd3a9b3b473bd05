use chrono::NaiveDateTime;
use coinfolio_core::assets as core_assets;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub label: String,
    pub amount: f64,
    pub currency: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<core_assets::Asset> for Asset {
    fn from(a: core_assets::Asset) -> Self {
        Self {
            id: a.id,
            label: a.label,
            amount: a.amount,
            currency: a.currency,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AssetList {
    pub items: Vec<Asset>,
}

/// Body of `POST /assets` and `PUT /assets/{id}`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetPayload {
    pub label: String,
    pub amount: f64,
    pub currency: String,
}

impl AssetPayload {
    pub fn into_new_asset(self, user_id: &str) -> core_assets::NewAsset {
        core_assets::NewAsset {
            id: None,
            user_id: user_id.to_string(),
            label: self.label,
            amount: self.amount,
            currency: self.currency,
        }
    }
}

impl From<AssetPayload> for core_assets::AssetUpdate {
    fn from(p: AssetPayload) -> Self {
        Self {
            label: p.label,
            amount: p.amount,
            currency: p.currency,
        }
    }
}
