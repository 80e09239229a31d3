use anyhow::{Context, Result};
use futures::TryStreamExt;
use mongodb::options::ClientOptions;
use mongodb::{
    Client, Collection, Database as MongoDatabase,
    bson::{doc, oid::ObjectId},
};

use crate::config::CONFIG;
use crate::data_models::SearchRecord;

/// Collection names as constants for consistency
pub mod collections {
    pub const SEARCH_RECORDS: &str = "job_search_results";
}

/// How many past runs the read side returns.
pub const RECENT_RESULTS_LIMIT: i64 = 10;

/// Database wrapper providing connection management and collection access.
/// Constructed once in `main` and passed down; there is no global instance.
#[derive(Debug, Clone)]
pub struct Database {
    client: Client,
    db: MongoDatabase,
}

impl Database {
    /// Create a new Database instance with custom URI and database name.
    /// Useful for testing with a different database.
    pub async fn new(uri: &str, db_name: &str) -> Result<Self> {
        let client_options = ClientOptions::parse(uri)
            .await
            .context("Failed to parse MongoDB connection string")?;

        let client =
            Client::with_options(client_options).context("Failed to create MongoDB client")?;

        // Ping the database to verify connection
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .context("Failed to connect to MongoDB")?;

        tracing::info!("Connected to MongoDB database: {}", db_name);

        let db = client.database(db_name);

        Ok(Self { client, db })
    }

    /// Create a Database instance using environment configuration
    pub async fn from_config() -> Result<Self> {
        Self::new(&CONFIG.mongo_uri, &CONFIG.mongo_db_name).await
    }

    /// Get the underlying MongoDB client (for advanced operations)
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Get the underlying MongoDB database (for advanced operations)
    pub fn database(&self) -> &MongoDatabase {
        &self.db
    }

    pub fn search_records(&self) -> Collection<SearchRecord> {
        self.db.collection(collections::SEARCH_RECORDS)
    }
}

/// Append-only store of completed search runs. No update or delete surface.
#[derive(Clone)]
pub struct SearchRecordRepo {
    collection: Collection<SearchRecord>,
}

impl SearchRecordRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.search_records(),
        }
    }

    pub async fn insert(&self, record: &SearchRecord) -> Result<ObjectId> {
        let result = self
            .collection
            .insert_one(record)
            .await
            .context("Failed to insert search record")?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| anyhow::anyhow!("Failed to get inserted ObjectId"))
    }

    /// The most recent runs, newest first, capped at `RECENT_RESULTS_LIMIT`.
    pub async fn recent(&self) -> Result<Vec<SearchRecord>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "search_date": -1 })
            .limit(RECENT_RESULTS_LIMIT)
            .await
            .context("Failed to query search records")?;

        cursor
            .try_collect()
            .await
            .context("Failed to collect search records")
    }
}
