//! Database connection and initialization.

use std::collections::HashSet;

use common::DatabaseConfig;
use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use super::migrations::Migrator;

/// Database wrapper for connection management.
///
/// A `Database` is either connected or degraded. A degraded handle is what the
/// server keeps when the initial connection fails: every query made through
/// it returns a `DbErr`, so requests fail with a 500 instead of the process
/// exiting.
#[derive(Clone)]
pub struct Database {
    connection: Option<DatabaseConnection>,
}

impl Database {
    /// Initialize database connection and run pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let connection = Self::open(config).await?;

        Migrator::up(&connection, None).await?;
        tracing::info!("Database connected and migrations applied");

        Ok(Self {
            connection: Some(connection),
        })
    }

    /// Connect and migrate, falling back to a degraded handle on failure.
    pub async fn connect_or_degraded(config: &DatabaseConfig) -> Self {
        match Self::connect(config).await {
            Ok(db) => db,
            Err(e) => {
                tracing::error!("Failed to connect to the database: {}", e);
                Self::disconnected()
            }
        }
    }

    /// Connect without running migrations (for CLI commands).
    pub async fn connect_without_migrations(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let connection = Self::open(config).await?;
        Ok(Self {
            connection: Some(connection),
        })
    }

    /// A handle with no underlying pool.
    pub fn disconnected() -> Self {
        Self { connection: None }
    }

    async fn open(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .sqlx_logging(false);

        SeaDatabase::connect(options).await
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> Result<&DatabaseConnection, DbErr> {
        self.connection
            .as_ref()
            .ok_or_else(|| DbErr::Custom("database is not connected".to_string()))
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(self.connection()?, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(self.connection()?, Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::seaql_migrations;

        let applied: HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(self.connection()?)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        let migrations = Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect();

        Ok(migrations)
    }

    /// Reset database and run all migrations fresh.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(self.connection()?).await
    }

    /// Check database connectivity.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection()?.ping().await
    }

    /// Close the connection pool. A degraded handle closes trivially.
    pub async fn close(self) -> Result<(), DbErr> {
        match self.connection {
            Some(connection) => connection.close().await,
            None => Ok(()),
        }
    }
}
