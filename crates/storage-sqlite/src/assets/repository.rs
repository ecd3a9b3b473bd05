use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use coinfolio_core::assets::{Asset, AssetRepositoryTrait, AssetUpdate, NewAsset};
use coinfolio_core::errors::DatabaseError;
use coinfolio_core::{Error, Result};

use super::model::{AssetChangesetDB, AssetDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::assets;

/// Repository for managing asset data in the database
pub struct AssetRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl AssetRepository {
    /// Creates a new AssetRepository instance
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }
}

fn not_found(asset_id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!("Asset {} not found", asset_id)))
}

#[async_trait]
impl AssetRepositoryTrait for AssetRepository {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Asset> {
                let now = Utc::now().naive_utc();
                let asset_db = AssetDB {
                    id: new_asset
                        .id
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                    user_id: new_asset.user_id,
                    label: new_asset.label,
                    amount: new_asset.amount,
                    currency: new_asset.currency,
                    created_at: now,
                    updated_at: now,
                };

                let result_db = diesel::insert_into(assets::table)
                    .values(&asset_db)
                    .returning(AssetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(result_db.into())
            })
            .await
    }

    async fn update(&self, asset_id: &str, update: AssetUpdate) -> Result<Asset> {
        let asset_id = asset_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Asset> {
                let changes = AssetChangesetDB::from_update(update, Utc::now().naive_utc());
                let result_db = diesel::update(assets::table.find(asset_id.as_str()))
                    .set(&changes)
                    .returning(AssetDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?;
                result_db.map(Asset::from).ok_or_else(|| not_found(&asset_id))
            })
            .await
    }

    fn get_by_id(&self, asset_id: &str) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;

        let result = assets::table
            .select(AssetDB::as_select())
            .find(asset_id)
            .first::<AssetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        result.map(Asset::from).ok_or_else(|| not_found(asset_id))
    }

    fn find_by_owner(&self, user_id: &str) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;

        let results = assets::table
            .select(AssetDB::as_select())
            .filter(assets::user_id.eq(user_id))
            .order((assets::created_at.asc(), assets::id.asc()))
            .load::<AssetDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(Asset::from).collect())
    }

    async fn delete(&self, asset_id: &str) -> Result<()> {
        let asset_id = asset_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let affected = diesel::delete(assets::table.find(asset_id.as_str()))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(not_found(&asset_id));
                }
                Ok(())
            })
            .await
    }
}
