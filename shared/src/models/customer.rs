//! Customer Model (고객)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Customer record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: i64,
    pub customer_name: String,
    pub car_number: String,
    pub phone: String,
    pub email: Option<String>,
    pub memo: Option<String>,
    pub created_at: NaiveDate,
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub customer_name: String,
    pub car_number: String,
    pub phone: String,
    pub email: Option<String>,
    pub memo: Option<String>,
}
