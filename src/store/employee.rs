use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::employee::Employee;

/// Partial update; absent fields keep their stored value.
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
}

pub async fn insert(
    pool: &SqlitePool,
    name: &str,
    department: &str,
    phone: &str,
) -> Result<Employee, AppError> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    sqlx::query(
        "INSERT INTO employees (id, name, department, phone, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(&id)
    .bind(name)
    .bind(department)
    .bind(phone)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Employee {
        id,
        name: name.to_string(),
        department: department.to_string(),
        phone: phone.to_string(),
        created_at: now,
        updated_at: now,
    })
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Employee>, AppError> {
    let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;
    Ok(employees)
}

pub async fn get_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Employee>, AppError> {
    let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

/// No existence check: updating an unknown id is a no-op that still
/// reports success at the API layer.
pub async fn update_by_id(
    pool: &SqlitePool,
    id: &str,
    changes: EmployeeChanges,
) -> Result<(), AppError> {
    let now = Utc::now();

    sqlx::query(
        "UPDATE employees SET
            name = COALESCE(?1, name),
            department = COALESCE(?2, department),
            phone = COALESCE(?3, phone),
            updated_at = ?4
         WHERE id = ?5",
    )
    .bind(&changes.name)
    .bind(&changes.department)
    .bind(&changes.phone)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete_by_id(pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
