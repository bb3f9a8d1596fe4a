//! Per-account pass ledger

use chrono::{DateTime, Utc};
use matchfarm_core::{AccountIdentity, AccountStats, Error, Result, SessionReport};
use sqlx::SqlitePool;

/// Database row for account totals
#[derive(Debug, sqlx::FromRow)]
struct AccountStatsRow {
    uid: i64,
    first_name: String,
    username: String,
    total_passes: i64,
    failed_passes: i64,
    total_reward_claims: i64,
    total_tasks_claimed: i64,
    total_games_played: i64,
    last_countdown_secs: Option<i64>,
    last_run_at: DateTime<Utc>,
}

impl From<AccountStatsRow> for AccountStats {
    fn from(row: AccountStatsRow) -> Self {
        AccountStats {
            uid: row.uid,
            first_name: row.first_name,
            username: row.username,
            total_passes: row.total_passes,
            failed_passes: row.failed_passes,
            total_reward_claims: row.total_reward_claims,
            total_tasks_claimed: row.total_tasks_claimed,
            total_games_played: row.total_games_played,
            last_countdown_secs: row.last_countdown_secs,
            last_run_at: row.last_run_at,
        }
    }
}

/// Fold a completed pass into the account's totals
pub async fn record_success(pool: &SqlitePool, report: &SessionReport) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO account_stats (
            uid, first_name, username, total_passes, failed_passes,
            total_reward_claims, total_tasks_claimed, total_games_played,
            last_countdown_secs, last_run_at
        )
        VALUES (?, ?, ?, 1, 0, ?, ?, ?, ?, ?)
        ON CONFLICT(uid) DO UPDATE SET
            first_name = excluded.first_name,
            username = excluded.username,
            total_passes = total_passes + 1,
            total_reward_claims = total_reward_claims + excluded.total_reward_claims,
            total_tasks_claimed = total_tasks_claimed + excluded.total_tasks_claimed,
            total_games_played = total_games_played + excluded.total_games_played,
            last_countdown_secs = excluded.last_countdown_secs,
            last_run_at = excluded.last_run_at
        "#,
    )
    .bind(report.uid)
    .bind(&report.first_name)
    .bind(&report.username)
    .bind(i64::from(report.rewards_claimed))
    .bind(i64::from(report.tasks_claimed))
    .bind(i64::from(report.games_played))
    .bind(report.countdown_secs)
    .bind(Utc::now())
    .execute(pool)
    .await
    .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(())
}

/// Count an aborted pass for an account whose identity decoded
pub async fn record_failure(pool: &SqlitePool, identity: &AccountIdentity) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO account_stats (
            uid, first_name, username, total_passes, failed_passes, last_run_at
        )
        VALUES (?, ?, ?, 1, 1, ?)
        ON CONFLICT(uid) DO UPDATE SET
            first_name = excluded.first_name,
            username = excluded.username,
            total_passes = total_passes + 1,
            failed_passes = failed_passes + 1,
            last_run_at = excluded.last_run_at
        "#,
    )
    .bind(identity.id)
    .bind(&identity.first_name)
    .bind(&identity.username)
    .bind(Utc::now())
    .execute(pool)
    .await
    .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(())
}

/// List totals for every account seen so far
pub async fn list_account_stats(pool: &SqlitePool) -> Result<Vec<AccountStats>> {
    let rows: Vec<AccountStatsRow> = sqlx::query_as(
        r#"
        SELECT uid, first_name, username, total_passes, failed_passes,
               total_reward_claims, total_tasks_claimed, total_games_played,
               last_countdown_secs, last_run_at
        FROM account_stats
        ORDER BY last_run_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(rows.into_iter().map(AccountStats::from).collect())
}

/// Totals for a single account
pub async fn get_account_stats(pool: &SqlitePool, uid: i64) -> Result<Option<AccountStats>> {
    let row: Option<AccountStatsRow> = sqlx::query_as(
        r#"
        SELECT uid, first_name, username, total_passes, failed_passes,
               total_reward_claims, total_tasks_claimed, total_games_played,
               last_countdown_secs, last_run_at
        FROM account_stats
        WHERE uid = ?
        "#,
    )
    .bind(uid)
    .fetch_optional(pool)
    .await
    .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(row.map(AccountStats::from))
}
