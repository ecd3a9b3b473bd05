//! SQLite storage implementation for assets.

mod model;
mod repository;

pub use model::{AssetChangesetDB, AssetDB};
pub use repository::AssetRepository;
