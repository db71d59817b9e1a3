//! Database connection and schema bootstrap.

use anyhow::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityName, EntityTrait, Schema,
};

/// Connect to the database behind `options`.
pub(crate) async fn connect(options: ConnectOptions) -> Result<DatabaseConnection> {
    let db = Database::connect(options).await?;
    tracing::info!("Connected to {:?} database", db.get_database_backend());
    Ok(db)
}

/// Create the tables if they do not exist yet.
pub(crate) async fn setup_schema(db: &DatabaseConnection) -> Result<()> {
    create_table(db, entity::user::Entity).await?;
    create_table(db, entity::vehicle::Entity).await?;
    create_table(db, entity::repair::Entity).await?;
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let table = entity.table_name().to_owned();
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    tracing::debug!("Ensured table {}", table);
    Ok(())
}
