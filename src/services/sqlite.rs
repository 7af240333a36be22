use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqliteConnection, SqlitePool};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::config::DatabaseSettings;
use crate::models::{Client, NewClient, NewProvider, NewRating, Provider, Rating};
use crate::services::seed::SeedData;

/// Errors that can occur when interacting with the store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Row counts written by one seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    pub providers: usize,
    pub clients: usize,
    pub ratings: usize,
}

/// SQLite-backed store for providers, clients and their mappings
///
/// Every operation checks a connection out of the pool and returns it when
/// the operation finishes, whether it succeeded or not. Operations that
/// write more than one row run in a transaction that rolls back on drop.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `database_url` and migrate it
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a store from settings
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        tracing::info!("Opening SQLite database: {}", settings.url);

        Self::new(
            &settings.url,
            settings.max_connections.unwrap_or(5),
            settings.min_connections.unwrap_or(1),
            Duration::from_secs(settings.acquire_timeout_secs.unwrap_or(5)),
        )
        .await
    }

    pub async fn create_provider(&self, provider: &NewProvider) -> Result<Provider, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let id = insert_provider(&mut conn, provider).await?;

        tracing::debug!("Created provider {} ({})", id, provider.name);

        Ok(Provider {
            id,
            name: provider.name.clone(),
            specialization: provider.specialization.clone(),
            location: provider.location.clone(),
            gender: provider.gender.clone(),
            language: provider.language.clone(),
            cultural_background: provider.cultural_background.clone(),
        })
    }

    /// All providers in id order
    pub async fn list_providers(&self) -> Result<Vec<Provider>, StoreError> {
        let query = r#"
            SELECT id, name, specialization, location, gender, language, cultural_background
            FROM providers
            ORDER BY id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(provider_from_row).collect())
    }

    pub async fn get_provider(&self, id: i64) -> Result<Option<Provider>, StoreError> {
        let query = r#"
            SELECT id, name, specialization, location, gender, language, cultural_background
            FROM providers
            WHERE id = ?
        "#;

        let row = sqlx::query(query).bind(id).fetch_optional(&self.pool).await?;

        Ok(row.as_ref().map(provider_from_row))
    }

    pub async fn create_client(&self, client: &NewClient) -> Result<Client, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let id = insert_client(&mut conn, client).await?;

        tracing::debug!("Created client {} ({})", id, client.name);

        Ok(Client {
            id,
            name: client.name.clone(),
            need: client.need.clone(),
            location: client.location.clone(),
            gender: client.gender.clone(),
            language: client.language.clone(),
            cultural_background: client.cultural_background.clone(),
            preferred_gender: client.preferred_gender.clone(),
            preferred_cultural_background: client.preferred_cultural_background.clone(),
        })
    }

    /// All clients in id order
    pub async fn list_clients(&self) -> Result<Vec<Client>, StoreError> {
        let query = r#"
            SELECT id, name, need, location, gender, language, cultural_background,
                   preferred_gender, preferred_cultural_background
            FROM clients
            ORDER BY id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(client_from_row).collect())
    }

    pub async fn get_client(&self, id: i64) -> Result<Option<Client>, StoreError> {
        let query = r#"
            SELECT id, name, need, location, gender, language, cultural_background,
                   preferred_gender, preferred_cultural_background
            FROM clients
            WHERE id = ?
        "#;

        let row = sqlx::query(query).bind(id).fetch_optional(&self.pool).await?;

        Ok(row.as_ref().map(client_from_row))
    }

    /// Link a client to a provider
    ///
    /// Both ids are checked inside the same transaction as the insert, so a
    /// missing client or provider leaves the table untouched.
    pub async fn create_rating(&self, rating: &NewRating) -> Result<Rating, StoreError> {
        let mut tx = self.pool.begin().await?;

        if !row_exists(&mut tx, "clients", rating.client_id).await? {
            return Err(StoreError::NotFound(format!("Client {} not found", rating.client_id)));
        }
        if !row_exists(&mut tx, "providers", rating.provider_id).await? {
            return Err(StoreError::NotFound(format!(
                "Provider {} not found",
                rating.provider_id
            )));
        }

        let id = insert_rating(&mut tx, rating).await?;
        tx.commit().await?;

        tracing::debug!(
            "Mapped client {} -> provider {} (rating: {:?})",
            rating.client_id,
            rating.provider_id,
            rating.rating
        );

        Ok(Rating {
            id,
            client_id: rating.client_id,
            provider_id: rating.provider_id,
            rating: rating.rating,
        })
    }

    /// All mappings in id order
    pub async fn list_ratings(&self) -> Result<Vec<Rating>, StoreError> {
        let query = r#"
            SELECT id, client_id, provider_id, rating
            FROM client_provider_mapping
            ORDER BY id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(rating_from_row).collect())
    }

    /// Delete a client together with its mappings
    pub async fn delete_client(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a provider together with its mappings
    pub async fn delete_provider(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM providers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Insert a seed dataset in one transaction
    ///
    /// Seed ratings point at providers and clients by their position in the
    /// dataset and are resolved to the ids generated here.
    pub async fn seed(&self, data: &SeedData) -> Result<SeedSummary, StoreError> {
        let mut tx = self.pool.begin().await?;

        let mut provider_ids = Vec::with_capacity(data.providers.len());
        for provider in &data.providers {
            provider_ids.push(insert_provider(&mut tx, provider).await?);
        }

        let mut client_ids = Vec::with_capacity(data.clients.len());
        for client in &data.clients {
            client_ids.push(insert_client(&mut tx, client).await?);
        }

        for seed in &data.ratings {
            let (Some(&client_id), Some(&provider_id)) =
                (client_ids.get(seed.client), provider_ids.get(seed.provider))
            else {
                return Err(StoreError::InvalidInput(format!(
                    "Seed rating references client #{} / provider #{} outside the dataset",
                    seed.client, seed.provider
                )));
            };

            let rating = NewRating {
                client_id,
                provider_id,
                rating: seed.rating,
            };
            insert_rating(&mut tx, &rating).await?;
        }

        tx.commit().await?;

        let summary = SeedSummary {
            providers: provider_ids.len(),
            clients: client_ids.len(),
            ratings: data.ratings.len(),
        };

        tracing::info!(
            "Seeded {} providers, {} clients, {} ratings",
            summary.providers,
            summary.clients,
            summary.ratings
        );

        Ok(summary)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

async fn row_exists(conn: &mut SqliteConnection, table: &str, id: i64) -> Result<bool, sqlx::Error> {
    let query = format!("SELECT COUNT(*) > 0 FROM {} WHERE id = ?", table);
    sqlx::query_scalar(&query).bind(id).fetch_one(conn).await
}

async fn insert_provider(conn: &mut SqliteConnection, provider: &NewProvider) -> Result<i64, sqlx::Error> {
    let query = r#"
        INSERT INTO providers (name, specialization, location, gender, language, cultural_background)
        VALUES (?, ?, ?, ?, ?, ?)
    "#;

    let result = sqlx::query(query)
        .bind(&provider.name)
        .bind(&provider.specialization)
        .bind(&provider.location)
        .bind(&provider.gender)
        .bind(&provider.language)
        .bind(&provider.cultural_background)
        .execute(conn)
        .await?;

    Ok(result.last_insert_rowid())
}

async fn insert_client(conn: &mut SqliteConnection, client: &NewClient) -> Result<i64, sqlx::Error> {
    let query = r#"
        INSERT INTO clients (
            name, need, location, gender, language, cultural_background,
            preferred_gender, preferred_cultural_background
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
    "#;

    let result = sqlx::query(query)
        .bind(&client.name)
        .bind(&client.need)
        .bind(&client.location)
        .bind(&client.gender)
        .bind(&client.language)
        .bind(&client.cultural_background)
        .bind(&client.preferred_gender)
        .bind(&client.preferred_cultural_background)
        .execute(conn)
        .await?;

    Ok(result.last_insert_rowid())
}

async fn insert_rating(conn: &mut SqliteConnection, rating: &NewRating) -> Result<i64, sqlx::Error> {
    let query = r#"
        INSERT INTO client_provider_mapping (client_id, provider_id, rating)
        VALUES (?, ?, ?)
    "#;

    let result = sqlx::query(query)
        .bind(rating.client_id)
        .bind(rating.provider_id)
        .bind(rating.rating)
        .execute(conn)
        .await?;

    Ok(result.last_insert_rowid())
}

fn provider_from_row(row: &SqliteRow) -> Provider {
    Provider {
        id: row.get("id"),
        name: row.get("name"),
        specialization: row.get("specialization"),
        location: row.get("location"),
        gender: row.get("gender"),
        language: row.get("language"),
        cultural_background: row.get("cultural_background"),
    }
}

fn client_from_row(row: &SqliteRow) -> Client {
    Client {
        id: row.get("id"),
        name: row.get("name"),
        need: row.get("need"),
        location: row.get("location"),
        gender: row.get("gender"),
        language: row.get("language"),
        cultural_background: row.get("cultural_background"),
        preferred_gender: row.get("preferred_gender"),
        preferred_cultural_background: row.get("preferred_cultural_background"),
    }
}

fn rating_from_row(row: &SqliteRow) -> Rating {
    Rating {
        id: row.get("id"),
        client_id: row.get("client_id"),
        provider_id: row.get("provider_id"),
        rating: row.get("rating"),
    }
}
