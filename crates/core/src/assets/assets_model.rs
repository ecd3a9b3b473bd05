//! Asset domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A holding registered by a user: some amount of a currency, under a label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub user_id: String,
    pub label: String,
    pub amount: f64,
    /// Ticker symbol, e.g. "BTC". Resolved case-insensitively at valuation time.
    pub currency: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Asset {
    /// Returns true if `user_id` owns this asset.
    pub fn belongs_to(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Input model for creating a new asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub id: Option<String>,
    pub user_id: String,
    pub label: String,
    pub amount: f64,
    pub currency: String,
}

impl NewAsset {
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.label, self.amount, &self.currency)
    }
}

/// Replacement values for the mutable fields of an asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdate {
    pub label: String,
    pub amount: f64,
    pub currency: String,
}

impl AssetUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.label, self.amount, &self.currency)
    }
}

fn validate_fields(label: &str, amount: f64, currency: &str) -> Result<()> {
    if label.trim().is_empty() {
        return Err(ValidationError::MissingField("label".to_string()).into());
    }
    if currency.trim().is_empty() {
        return Err(ValidationError::MissingField("currency".to_string()).into());
    }
    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::InvalidInput(format!(
            "Amount must be a non-negative number, got {}",
            amount
        ))
        .into());
    }
    Ok(())
}
