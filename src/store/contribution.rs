use chrono::{DateTime, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::contribution::{Contribution, ContributionResponse};
use crate::store::employee;

pub struct NewContributionRecord {
    pub amount: f64,
    pub month: String,
    /// Defaults to the insert time when absent.
    pub date_paid: Option<DateTime<Utc>>,
    pub employee_id: String,
}

/// Partial update; the employee reference is re-validated only when the
/// payload carries one.
pub struct ContributionChanges {
    pub amount: Option<f64>,
    pub month: Option<String>,
    pub date_paid: Option<DateTime<Utc>>,
    pub employee_id: Option<String>,
}

/// Rejects the write when the referenced employee does not exist. Runs
/// on the write's own transaction so the check and the write commit
/// together.
async fn ensure_employee_exists(
    tx: &mut Transaction<'_, Sqlite>,
    employee_id: &str,
) -> Result<(), AppError> {
    let found: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM employees WHERE id = ?1")
        .bind(employee_id)
        .fetch_optional(&mut **tx)
        .await?;

    if found.is_none() {
        return Err(AppError::Reference(
            "Employee not found. Please check the employee ID.".to_string(),
        ));
    }
    Ok(())
}

pub async fn insert_checked(
    pool: &SqlitePool,
    new: NewContributionRecord,
) -> Result<Contribution, AppError> {
    let mut tx = pool.begin().await?;
    ensure_employee_exists(&mut tx, &new.employee_id).await?;

    let id = Uuid::new_v4().to_string();
    let now = Utc::now();
    let date_paid = new.date_paid.unwrap_or(now);

    sqlx::query(
        "INSERT INTO contributions (id, amount, month, date_paid, employee_id, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(&id)
    .bind(new.amount)
    .bind(&new.month)
    .bind(date_paid)
    .bind(&new.employee_id)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Contribution {
        id,
        amount: new.amount,
        month: new.month,
        date_paid,
        employee_id: new.employee_id,
        created_at: now,
        updated_at: now,
    })
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Contribution>, AppError> {
    let contributions =
        sqlx::query_as::<_, Contribution>("SELECT * FROM contributions ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?;
    Ok(contributions)
}

pub async fn get_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Contribution>, AppError> {
    let contribution = sqlx::query_as::<_, Contribution>("SELECT * FROM contributions WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(contribution)
}

pub async fn get_by_employee(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<Vec<Contribution>, AppError> {
    let contributions = sqlx::query_as::<_, Contribution>(
        "SELECT * FROM contributions WHERE employee_id = ?1 ORDER BY created_at DESC",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(contributions)
}

/// Returns None when the id is unknown. A failed employee check aborts
/// before anything is written.
pub async fn update_checked(
    pool: &SqlitePool,
    id: &str,
    changes: ContributionChanges,
) -> Result<Option<Contribution>, AppError> {
    let mut tx = pool.begin().await?;

    if let Some(employee_id) = &changes.employee_id {
        ensure_employee_exists(&mut tx, employee_id).await?;
    }

    let now = Utc::now();
    let result = sqlx::query(
        "UPDATE contributions SET
            amount = COALESCE(?1, amount),
            month = COALESCE(?2, month),
            date_paid = COALESCE(?3, date_paid),
            employee_id = COALESCE(?4, employee_id),
            updated_at = ?5
         WHERE id = ?6",
    )
    .bind(changes.amount)
    .bind(&changes.month)
    .bind(changes.date_paid)
    .bind(&changes.employee_id)
    .bind(now)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    let updated = sqlx::query_as::<_, Contribution>("SELECT * FROM contributions WHERE id = ?1")
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(Some(updated))
}

pub async fn delete_by_id(pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM contributions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Resolves the employee reference into the full record; None when the
/// employee has since been deleted.
pub async fn attach_employee(
    pool: &SqlitePool,
    contribution: Contribution,
) -> Result<ContributionResponse, AppError> {
    let employee = employee::get_by_id(pool, &contribution.employee_id).await?;
    Ok(ContributionResponse::new(contribution, employee))
}

pub async fn attach_employees(
    pool: &SqlitePool,
    contributions: Vec<Contribution>,
) -> Result<Vec<ContributionResponse>, AppError> {
    let mut responses = Vec::with_capacity(contributions.len());
    for contribution in contributions {
        responses.push(attach_employee(pool, contribution).await?);
    }
    Ok(responses)
}
