use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::errors::AppError;
use crate::store::employee::{self, EmployeeChanges};
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate)]
pub struct NewEmployee {
    #[validate(length(min = 1, message = "name must not be empty"))]
    name: String,
    #[validate(length(min = 1, message = "department must not be empty"))]
    department: String,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    phone: String,
}

#[derive(Deserialize, Validate)]
pub struct EmployeeUpdate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    name: Option<String>,
    #[validate(length(min = 1, message = "department must not be empty"))]
    department: Option<String>,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    phone: Option<String>,
}

pub async fn get_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let employees = employee::get_all(&pool).await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_employee)?;

    let created = employee::insert(
        &pool,
        &new_employee.name,
        &new_employee.department,
        &new_employee.phone,
    )
    .await?;

    Ok(HttpResponse::Created().json(created))
}

pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    match employee::get_by_id(&pool, &id).await? {
        Some(found) => Ok(HttpResponse::Ok().json(found)),
        None => Err(AppError::NotFound("Employee not found".to_string())),
    }
}

/// Reports success whether or not the id exists; the original contract
/// has no not-found distinction on this path.
pub async fn update_employee(
    pool: web::Data<SqlitePool>,
    id: web::Path<String>,
    updates: web::Json<EmployeeUpdate>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*updates)?;

    let updates = updates.into_inner();
    employee::update_by_id(
        &pool,
        &id,
        EmployeeChanges {
            name: updates.name,
            department: updates.department,
            phone: updates.phone,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Employee updated successfully",
    })))
}

pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    if !employee::delete_by_id(&pool, &id).await? {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully",
    })))
}
