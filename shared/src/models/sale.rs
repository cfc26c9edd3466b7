//! Sale Model (매출)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a payment was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentType {
    #[serde(rename = "CASH")]
    Cash,
    #[serde(rename = "CARD")]
    Card,
    #[serde(rename = "TRANSFER")]
    Transfer,
}

/// Sale record - one billed job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub sale_id: i64,
    pub sale_date: NaiveDate,
    /// Amount in whole won
    pub amount: i64,
    pub payment_type: PaymentType,
    pub car_number: Option<String>,
    pub customer_name: Option<String>,
    pub memo: Option<String>,
}

/// Create sale payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub sale_date: NaiveDate,
    pub amount: i64,
    pub payment_type: PaymentType,
    pub car_number: Option<String>,
    pub customer_name: Option<String>,
    pub memo: Option<String>,
}
