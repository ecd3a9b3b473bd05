//! Unit tests for the asset service.

use super::*;
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime};
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockAssetRepository {
    assets: Mutex<Vec<Asset>>,
    next_id: Mutex<u32>,
}

impl MockAssetRepository {
    fn with_assets(assets: Vec<Asset>) -> Self {
        Self {
            assets: Mutex::new(assets),
            next_id: Mutex::new(100),
        }
    }

    fn snapshot(&self) -> Vec<Asset> {
        self.assets.lock().unwrap().clone()
    }
}

fn timestamp() -> NaiveDateTime {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap().naive_utc()
}

#[async_trait]
impl AssetRepositoryTrait for MockAssetRepository {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let asset = Asset {
            id: new_asset.id.unwrap_or_else(|| format!("asset-{}", next_id)),
            user_id: new_asset.user_id,
            label: new_asset.label,
            amount: new_asset.amount,
            currency: new_asset.currency,
            created_at: timestamp(),
            updated_at: timestamp(),
        };
        self.assets.lock().unwrap().push(asset.clone());
        Ok(asset)
    }

    async fn update(&self, asset_id: &str, update: AssetUpdate) -> Result<Asset> {
        let mut assets = self.assets.lock().unwrap();
        let asset = assets
            .iter_mut()
            .find(|a| a.id == asset_id)
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(asset_id.to_string())))?;
        asset.label = update.label;
        asset.amount = update.amount;
        asset.currency = update.currency;
        Ok(asset.clone())
    }

    fn get_by_id(&self, asset_id: &str) -> Result<Asset> {
        self.assets
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == asset_id)
            .cloned()
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(asset_id.to_string())))
    }

    fn find_by_owner(&self, user_id: &str) -> Result<Vec<Asset>> {
        Ok(self
            .assets
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, asset_id: &str) -> Result<()> {
        self.assets.lock().unwrap().retain(|a| a.id != asset_id);
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn asset(id: &str, user_id: &str, amount: f64, currency: &str) -> Asset {
    Asset {
        id: id.to_string(),
        user_id: user_id.to_string(),
        label: format!("{} wallet", currency),
        amount,
        currency: currency.to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

fn setup() -> (Arc<MockAssetRepository>, AssetService) {
    let repo = Arc::new(MockAssetRepository::with_assets(vec![
        asset("a1", "alice", 1.0, "BTC"),
        asset("a2", "alice", 10.0, "ETH"),
        asset("b1", "bob", 500.0, "IOTA"),
    ]));
    let service = AssetService::new(repo.clone());
    (repo, service)
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_get_assets_is_scoped_to_owner() {
    let (_, service) = setup();

    let alice: Vec<String> = service
        .get_assets("alice")
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(alice, vec!["a1", "a2"]);

    assert!(service.get_assets("carol").unwrap().is_empty());
}

#[test]
fn test_get_owned_asset_denies_other_users() {
    let (_, service) = setup();

    assert_eq!(service.get_owned_asset("bob", "b1").unwrap().amount, 500.0);
    assert!(matches!(
        service.get_owned_asset("alice", "b1"),
        Err(Error::AccessDenied(_))
    ));
}

#[test]
fn test_get_owned_asset_missing_is_not_found() {
    let (_, service) = setup();
    let err = service.get_owned_asset("alice", "nope").unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_create_asset_assigns_caller_as_owner() {
    let (repo, service) = setup();

    let created = service
        .create_asset(
            "alice",
            NewAsset {
                id: None,
                user_id: "mallory".to_string(),
                label: "binance".to_string(),
                amount: 0.0095,
                currency: "BTC".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(created.user_id, "alice");
    assert_eq!(repo.snapshot().len(), 4);
}

#[tokio::test]
async fn test_create_asset_validates_before_persisting() {
    let (repo, service) = setup();

    let err = service
        .create_asset(
            "alice",
            NewAsset {
                id: None,
                user_id: String::new(),
                label: "binance".to_string(),
                amount: -1.0,
                currency: "BTC".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(ValidationError::InvalidInput(_))));
    assert_eq!(repo.snapshot().len(), 3);
}

#[tokio::test]
async fn test_update_asset_replaces_mutable_fields() {
    let (_, service) = setup();

    let updated = service
        .update_asset(
            "alice",
            "a1",
            AssetUpdate {
                label: "ledger".to_string(),
                amount: 2.5,
                currency: "eth".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.label, "ledger");
    assert_eq!(updated.amount, 2.5);
    assert_eq!(updated.currency, "eth");
    assert_eq!(updated.user_id, "alice");
}

#[tokio::test]
async fn test_update_asset_of_other_user_is_denied() {
    let (repo, service) = setup();

    let err = service
        .update_asset(
            "alice",
            "b1",
            AssetUpdate {
                label: "stolen".to_string(),
                amount: 0.0,
                currency: "IOTA".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::AccessDenied(_)));
    let b1 = repo.snapshot().into_iter().find(|a| a.id == "b1").unwrap();
    assert_eq!(b1.amount, 500.0);
}

#[tokio::test]
async fn test_delete_asset() {
    let (repo, service) = setup();

    assert!(matches!(
        service.delete_asset("bob", "a1").await,
        Err(Error::AccessDenied(_))
    ));
    service.delete_asset("alice", "a1").await.unwrap();

    let ids: Vec<String> = repo.snapshot().into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec!["a2", "b1"]);
}
