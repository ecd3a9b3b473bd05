use std::sync::Arc;

use crate::{
    auth::{decode_secret_key, AuthConfig, AuthManager},
    config::{Config, LogFormat},
};
use coinfolio_core::{
    assets::{AssetService, AssetServiceTrait},
    users::{UserService, UserServiceTrait},
    valuation::{ValuationService, ValuationServiceTrait},
};
use coinfolio_market_data::CoinGeckoProvider;
use coinfolio_storage_sqlite::{
    assets::AssetRepository,
    db::{self, write_actor},
    users::UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub asset_service: Arc<dyn AssetServiceTrait + Send + Sync>,
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub valuation_service: Arc<dyn ValuationServiceTrait + Send + Sync>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let user_service = Arc::new(UserService::new(user_repository));

    let asset_repository = Arc::new(AssetRepository::new(pool.clone(), writer.clone()));
    let asset_service = Arc::new(AssetService::new(asset_repository));

    let price_feed = Arc::new(CoinGeckoProvider::new(&config.price_feed_url)?);
    tracing::info!("Price feed: {}", config.price_feed_url);
    let valuation_service = Arc::new(ValuationService::new(price_feed));

    let auth = Arc::new(AuthManager::new(&AuthConfig {
        jwt_secret: decode_secret_key(&config.secret_key)?,
        access_token_ttl: config.access_token_ttl,
    }));

    Ok(Arc::new(AppState {
        asset_service,
        user_service,
        valuation_service,
        auth,
    }))
}
