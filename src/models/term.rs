use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An academic period plus its registration window. The backend guarantees
/// registration_start <= registration_end and start_date <= end_date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    pub id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub registration_start: NaiveDate,
    pub registration_end: NaiveDate,
    pub created_at: String,
}

/// Term fields required when creating or updating. Dates are "YYYY-MM-DD".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageTermRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub registration_start: NaiveDate,
    pub registration_end: NaiveDate,
}
