//! # Deletion Repository
//!
//! Provides database access for account deletion requests.
//!
//! ## Example
//!
//! ```rust,no_run
//! # use lib_core::{create_pool, run_migrations, DeletionRepository, ReferenceIssuer};
//! # use lib_core::model::store::DeletionForCreate;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite:data/expenzez_site.db").await?;
//! run_migrations(&pool).await?;
//!
//! let issuer = ReferenceIssuer::starting_after(DeletionRepository::latest_reference(&pool).await?);
//! let record = DeletionRepository::create(
//!     &pool,
//!     &issuer,
//!     DeletionForCreate::new("alice@example.com".to_string(), None),
//!     chrono::Utc::now(),
//!     30,
//! ).await?;
//! println!("Accepted {}", record.reference_id());
//! # Ok(())
//! # }
//! ```

use super::models::{DeletionForCreate, DeletionRecord};
use super::DbPool;
use crate::model::ReferenceIssuer;
use chrono::{DateTime, Utc};
use lib_utils::days_after;
use shared::utils::next_reference_millis;
use sqlx::{query, query_as, query_scalar};

/// Deletion request repository for database operations.
pub struct DeletionRepository;

impl DeletionRepository {
    /// Store a new pending request and assign its reference identifier.
    ///
    /// The identifier comes from `requested_at`, bumped past the last issued one when
    /// the clock has not advanced. The purge deadline is `retention_days` later.
    pub async fn create(
        pool: &DbPool,
        issuer: &ReferenceIssuer,
        data: DeletionForCreate,
        requested_at: DateTime<Utc>,
        retention_days: u32,
    ) -> Result<DeletionRecord, sqlx::Error> {
        let mut last_issued = issuer.lock().await;
        let reference_millis = next_reference_millis(requested_at.timestamp_millis(), *last_issued);
        let purge_by = days_after(requested_at, retention_days);

        let record = query_as::<_, DeletionRecord>(
            "INSERT INTO deletion_requests
                (reference_millis, email, reason, status, requested_at_ms, purge_by_ms)
             VALUES (?, ?, ?, 'pending', ?, ?)
             RETURNING *",
        )
        .bind(reference_millis)
        .bind(&data.email)
        .bind(&data.reason)
        .bind(requested_at.timestamp_millis())
        .bind(purge_by.timestamp_millis())
        .fetch_one(pool)
        .await?;

        *last_issued = Some(reference_millis);
        Ok(record)
    }

    /// Find a request by the millisecond part of its reference identifier.
    pub async fn find_by_reference(
        pool: &DbPool,
        reference_millis: i64,
    ) -> Result<Option<DeletionRecord>, sqlx::Error> {
        query_as::<_, DeletionRecord>("SELECT * FROM deletion_requests WHERE reference_millis = ?")
            .bind(reference_millis)
            .fetch_optional(pool)
            .await
    }

    /// Highest reference millis stored so far, used to seed the issuer at startup.
    pub async fn latest_reference(pool: &DbPool) -> Result<Option<i64>, sqlx::Error> {
        query_scalar::<_, Option<i64>>("SELECT MAX(reference_millis) FROM deletion_requests")
            .fetch_one(pool)
            .await
    }

    /// Complete every pending request whose purge deadline is at or before `now`,
    /// erasing the email and reason. Returns the number of requests completed.
    pub async fn complete_due(pool: &DbPool, now: DateTime<Utc>) -> Result<u64, sqlx::Error> {
        let result = query(
            "UPDATE deletion_requests
             SET status = 'completed', email = NULL, reason = NULL
             WHERE status = 'pending' AND purge_by_ms <= ?",
        )
        .bind(now.timestamp_millis())
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
