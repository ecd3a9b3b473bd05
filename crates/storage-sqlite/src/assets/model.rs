//! Database models for assets.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use coinfolio_core::assets::{Asset, AssetUpdate};

/// Database model for assets
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    pub id: String,
    pub user_id: String,
    pub label: String,
    pub amount: f64,
    pub currency: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset for the user-editable columns of an asset
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
pub struct AssetChangesetDB {
    pub label: String,
    pub amount: f64,
    pub currency: String,
    pub updated_at: NaiveDateTime,
}

impl From<AssetDB> for Asset {
    fn from(db: AssetDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            label: db.label,
            amount: db.amount,
            currency: db.currency,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl AssetChangesetDB {
    pub fn from_update(update: AssetUpdate, updated_at: NaiveDateTime) -> Self {
        Self {
            label: update.label,
            amount: update.amount,
            currency: update.currency,
            updated_at,
        }
    }
}
