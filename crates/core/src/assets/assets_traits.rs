use super::assets_model::{Asset, AssetUpdate, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for Asset service operations.
///
/// Every operation is scoped to the authenticated user passed in by the
/// caller; assets owned by someone else are reported as access denied.
#[async_trait::async_trait]
pub trait AssetServiceTrait: Send + Sync {
    fn get_assets(&self, user_id: &str) -> Result<Vec<Asset>>;
    /// Loads an asset and checks that `user_id` owns it.
    fn get_owned_asset(&self, user_id: &str, asset_id: &str) -> Result<Asset>;
    async fn create_asset(&self, user_id: &str, new_asset: NewAsset) -> Result<Asset>;
    async fn update_asset(&self, user_id: &str, asset_id: &str, update: AssetUpdate)
        -> Result<Asset>;
    async fn delete_asset(&self, user_id: &str, asset_id: &str) -> Result<()>;
}

/// Trait defining the contract for Asset repository operations.
#[async_trait::async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset>;
    async fn update(&self, asset_id: &str, update: AssetUpdate) -> Result<Asset>;
    fn get_by_id(&self, asset_id: &str) -> Result<Asset>;
    /// All assets owned by `user_id`, oldest first.
    fn find_by_owner(&self, user_id: &str) -> Result<Vec<Asset>>;
    async fn delete(&self, asset_id: &str) -> Result<()>;
}
