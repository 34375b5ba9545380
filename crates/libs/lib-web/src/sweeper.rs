//! # Purge Sweeper
//!
//! Background task that completes deletion requests once their purge deadline
//! passes. Completing a request erases the stored email and reason; the reference
//! id and dates stay so the requester can still look the request up.

use lib_core::{DbPool, DeletionRepository};
use lib_utils::now_utc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Run one sweep now. Returns the number of requests completed.
pub async fn sweep_once(pool: &DbPool) -> Result<u64, lib_core::AppError> {
    let completed = DeletionRepository::complete_due(pool, now_utc()).await?;
    if completed > 0 {
        info!(completed, "[SWEEPER] Completed {} deletion request(s)", completed);
    } else {
        debug!("[SWEEPER] Nothing due");
    }
    Ok(completed)
}

/// Spawn the sweeper on the current runtime.
///
/// The first sweep runs immediately so requests that fell due while the server was
/// down are handled at startup. Failures are logged and retried on the next tick.
pub fn spawn_purge_sweeper(pool: DbPool, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if let Err(e) = sweep_once(&pool).await {
                error!(error = %e, "[SWEEPER] Sweep failed: {}", e);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;
    use lib_core::model::store::DeletionForCreate;
    use lib_core::{run_migrations, ReferenceIssuer};
    use sqlx::sqlite::SqlitePoolOptions;

    #[tokio::test]
    async fn test_sweep_once_completes_overdue_requests() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        run_migrations(&pool).await.expect("Failed to run migrations");

        let issuer = ReferenceIssuer::default();
        let overdue = DeletionRepository::create(
            &pool,
            &issuer,
            DeletionForCreate::new("old@example.com".to_string(), None),
            now_utc() - ChronoDuration::days(31),
            30,
        )
        .await
        .unwrap();
        DeletionRepository::create(
            &pool,
            &issuer,
            DeletionForCreate::new("new@example.com".to_string(), None),
            now_utc(),
            30,
        )
        .await
        .unwrap();

        assert_eq!(sweep_once(&pool).await.unwrap(), 1);
        assert_eq!(sweep_once(&pool).await.unwrap(), 0);

        let overdue = DeletionRepository::find_by_reference(&pool, overdue.reference_millis)
            .await
            .unwrap()
            .unwrap();
        assert!(overdue.email.is_none());
    }
}
