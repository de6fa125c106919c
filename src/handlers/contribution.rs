use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::errors::AppError;
use crate::store::contribution::{self, ContributionChanges, NewContributionRecord};
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewContribution {
    amount: f64,
    #[validate(length(min = 1, message = "month must not be empty"))]
    month: String,
    date_paid: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "employee must not be empty"))]
    employee: String,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContributionUpdate {
    amount: Option<f64>,
    #[validate(length(min = 1, message = "month must not be empty"))]
    month: Option<String>,
    date_paid: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "employee must not be empty"))]
    employee: Option<String>,
}

pub async fn get_contributions(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let contributions = contribution::get_all(&pool).await?;
    let populated = contribution::attach_employees(&pool, contributions).await?;
    Ok(HttpResponse::Ok().json(populated))
}

pub async fn create_contribution(
    pool: web::Data<SqlitePool>,
    new_contribution: web::Json<NewContribution>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_contribution)?;

    let new_contribution = new_contribution.into_inner();
    let created = contribution::insert_checked(
        &pool,
        NewContributionRecord {
            amount: new_contribution.amount,
            month: new_contribution.month,
            date_paid: new_contribution.date_paid,
            employee_id: new_contribution.employee,
        },
    )
    .await?;

    let populated = contribution::attach_employee(&pool, created).await?;
    Ok(HttpResponse::Created().json(populated))
}

pub async fn get_contributions_by_employee(
    pool: web::Data<SqlitePool>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let contributions = contribution::get_by_employee(&pool, &employee_id).await?;
    let populated = contribution::attach_employees(&pool, contributions).await?;
    Ok(HttpResponse::Ok().json(populated))
}

pub async fn get_contribution(
    pool: web::Data<SqlitePool>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    match contribution::get_by_id(&pool, &id).await? {
        Some(found) => {
            let populated = contribution::attach_employee(&pool, found).await?;
            Ok(HttpResponse::Ok().json(populated))
        }
        None => Err(AppError::NotFound("Contribution not found".to_string())),
    }
}

pub async fn update_contribution(
    pool: web::Data<SqlitePool>,
    id: web::Path<String>,
    updates: web::Json<ContributionUpdate>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*updates)?;

    let updates = updates.into_inner();
    let updated = contribution::update_checked(
        &pool,
        &id,
        ContributionChanges {
            amount: updates.amount,
            month: updates.month,
            date_paid: updates.date_paid,
            employee_id: updates.employee,
        },
    )
    .await?;

    match updated {
        Some(updated) => {
            let populated = contribution::attach_employee(&pool, updated).await?;
            Ok(HttpResponse::Ok().json(populated))
        }
        None => Err(AppError::NotFound("Contribution not found".to_string())),
    }
}

pub async fn delete_contribution(
    pool: web::Data<SqlitePool>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    if !contribution::delete_by_id(&pool, &id).await? {
        return Err(AppError::NotFound("Contribution not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Contribution deleted successfully",
    })))
}
