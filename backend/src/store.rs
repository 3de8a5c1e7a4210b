use std::sync::{Mutex, PoisonError};
use sqlx::PgPool;
use shared::models::{NewVote, VoteRecord};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(String),
    #[error("query failed")]
    NoData,
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

impl<T> From<PoisonError<T>> for StoreError {
    fn from(e: PoisonError<T>) -> Self {
        StoreError::Database(e.to_string())
    }
}

/// Where votes are kept. Writes append one row; reads filter by exact
/// scheduled time.
#[rocket::async_trait]
pub trait VoteStore: Send + Sync {
    async fn insert(&self, vote: &NewVote) -> Result<(), StoreError>;

    async fn votes_at(&self, scheduled_time: &str) -> Result<Vec<VoteRecord>, StoreError>;
}

pub struct PgVoteStore {
    pool: PgPool,
}

impl PgVoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[rocket::async_trait]
impl VoteStore for PgVoteStore {
    async fn insert(&self, vote: &NewVote) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO votes (route, delay_range, scheduled_time) VALUES ($1, $2, $3)"
        )
        .bind(vote.route.as_str())
        .bind(vote.delay_range.as_str())
        .bind(&vote.scheduled_time)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn votes_at(&self, scheduled_time: &str) -> Result<Vec<VoteRecord>, StoreError> {
        let records = sqlx::query_as::<_, VoteRecord>(
            "SELECT route, delay_range, scheduled_time FROM votes WHERE scheduled_time = $1"
        )
        .bind(scheduled_time)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }
}

/// Keeps votes in process memory. Used by the tests and by local runs
/// without a database.
#[derive(Debug, Default)]
pub struct MemoryVoteStore {
    records: Mutex<Vec<VoteRecord>>,
}

impl MemoryVoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<VoteRecord>) -> Self {
        Self { records: Mutex::new(records) }
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[rocket::async_trait]
impl VoteStore for MemoryVoteStore {
    async fn insert(&self, vote: &NewVote) -> Result<(), StoreError> {
        self.records.lock()?.push(VoteRecord::from(vote));
        Ok(())
    }

    async fn votes_at(&self, scheduled_time: &str) -> Result<Vec<VoteRecord>, StoreError> {
        let records = self.records.lock()?;
        Ok(records
            .iter()
            .filter(|record| record.scheduled_time == scheduled_time)
            .cloned()
            .collect())
    }
}
