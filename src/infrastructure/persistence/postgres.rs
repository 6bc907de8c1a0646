use crate::core::configure::app::AppConfig;
use crate::infrastructure::error::AppResult;
use crate::infrastructure::persistence::entity;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use std::time::Duration;

pub type DatabaseClient = DatabaseConnection;

pub trait DatabaseClientExt: Sized {
    async fn build_from_config(config: &AppConfig) -> AppResult<Self>;
}

impl DatabaseClientExt for DatabaseClient {
    async fn build_from_config(config: &AppConfig) -> AppResult<Self> {
        let mut options = ConnectOptions::new(config.database.url.clone());
        options
            .max_connections(config.database.max_connections)
            .min_connections(config.database.min_connections)
            .connect_timeout(Duration::from_secs(config.database.connect_timeout_secs))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        log::info!("Connected to database backend {:?}", db.get_database_backend());
        Ok(db)
    }
}

/// Creates the `addresses` table when it does not exist yet.
pub async fn migrate(db: &DatabaseClient) -> AppResult<()> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(entity::address::Entity);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;

    Ok(())
}
