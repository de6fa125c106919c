use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::env;

pub async fn create_pool() -> SqlitePool {
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://contribtrack.db?mode=rwc".to_string());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to the database");
    init_schema(&pool)
        .await
        .expect("Failed to initialize the database schema");
    pool
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS employees (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            department TEXT NOT NULL,
            phone TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    // employee_id is deliberately not a FOREIGN KEY: deleting an employee
    // must leave its contributions in place (dangling references resolve
    // to null at read time).
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS contributions (
            id TEXT PRIMARY KEY,
            amount REAL NOT NULL,
            month TEXT NOT NULL,
            date_paid TEXT NOT NULL,
            employee_id TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
