use log::debug;
use std::sync::Arc;

use super::assets_model::{Asset, AssetUpdate, NewAsset};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing a user's assets
pub struct AssetService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
}

impl AssetService {
    /// Creates a new AssetService instance
    pub fn new(asset_repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        Self { asset_repository }
    }

    fn ensure_owner(asset: &Asset, user_id: &str) -> Result<()> {
        if asset.belongs_to(user_id) {
            Ok(())
        } else {
            Err(Error::AccessDenied(
                "This asset does not belong to current user".to_string(),
            ))
        }
    }
}

#[async_trait::async_trait]
impl AssetServiceTrait for AssetService {
    fn get_assets(&self, user_id: &str) -> Result<Vec<Asset>> {
        self.asset_repository.find_by_owner(user_id)
    }

    fn get_owned_asset(&self, user_id: &str, asset_id: &str) -> Result<Asset> {
        let asset = self.asset_repository.get_by_id(asset_id)?;
        Self::ensure_owner(&asset, user_id)?;
        Ok(asset)
    }

    async fn create_asset(&self, user_id: &str, new_asset: NewAsset) -> Result<Asset> {
        let new_asset = NewAsset {
            user_id: user_id.to_string(),
            ..new_asset
        };
        new_asset.validate()?;
        let created = self.asset_repository.create(new_asset).await?;
        debug!("Created asset {} for user {}", created.id, user_id);
        Ok(created)
    }

    async fn update_asset(
        &self,
        user_id: &str,
        asset_id: &str,
        update: AssetUpdate,
    ) -> Result<Asset> {
        self.get_owned_asset(user_id, asset_id)?;
        update.validate()?;
        self.asset_repository.update(asset_id, update).await
    }

    async fn delete_asset(&self, user_id: &str, asset_id: &str) -> Result<()> {
        self.get_owned_asset(user_id, asset_id)?;
        self.asset_repository.delete(asset_id).await?;
        debug!("Deleted asset {} of user {}", asset_id, user_id);
        Ok(())
    }
}
