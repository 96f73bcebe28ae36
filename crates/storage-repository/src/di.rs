//! Dependency injection module using Shaku.

use crate::{DatabasePool, DatabasePoolInterface, DatabasePoolParameters, MySqlUserRepository};
use sqlx::mysql::MySqlPool;
use std::sync::Arc;
use storage_config::DatabaseConfig;
use storage_core::{module, StorageResult};

// Database pool plus the user repository that borrows it.
module! {
    pub RepositoryModule {
        components = [
            DatabasePool,
            MySqlUserRepository,
        ],
        providers = [],
    }
}

/// Connects to the configured database and builds the module.
pub async fn build_repository_module(config: &DatabaseConfig) -> StorageResult<Arc<RepositoryModule>> {
    let db_pool = DatabasePool::new(config).await?;
    Ok(Arc::new(repository_module_from_pool(db_pool.inner().clone())))
}

/// Builds the module around an existing pool.
#[must_use]
pub fn repository_module_from_pool(pool: MySqlPool) -> RepositoryModule {
    RepositoryModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters { pool })
        .build()
}
