use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::employee::Employee;

/// A contribution row as stored, with the employee held as a bare id.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: String,
    pub amount: f64,
    pub month: String,
    pub date_paid: DateTime<Utc>,
    pub employee_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The wire shape of a contribution: the employee reference resolved
/// into the full record, or null when the employee has been deleted.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ContributionResponse {
    pub id: String,
    pub amount: f64,
    pub month: String,
    pub date_paid: DateTime<Utc>,
    pub employee: Option<Employee>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContributionResponse {
    pub fn new(contribution: Contribution, employee: Option<Employee>) -> Self {
        ContributionResponse {
            id: contribution.id,
            amount: contribution.amount,
            month: contribution.month,
            date_paid: contribution.date_paid,
            employee,
            created_at: contribution.created_at,
            updated_at: contribution.updated_at,
        }
    }
}
