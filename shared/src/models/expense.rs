//! Expense Model (지출)

use super::sale::PaymentType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    /// Parts purchase
    #[serde(rename = "PART")]
    Part,
    /// Outsourced work
    #[serde(rename = "OUTSOURCE")]
    Outsource,
    /// Fixed cost (rent, utilities)
    #[serde(rename = "FIXED")]
    Fixed,
    #[serde(rename = "ETC")]
    Etc,
}

/// Expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub expense_id: i64,
    pub expense_date: NaiveDate,
    pub category: ExpenseCategory,
    pub vendor_name: String,
    /// Amount in whole won
    pub amount: i64,
    pub payment_type: PaymentType,
    pub receipt_path: Option<String>,
    pub memo: Option<String>,
}

/// Create expense payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCreate {
    pub expense_date: NaiveDate,
    pub category: ExpenseCategory,
    pub vendor_name: String,
    pub amount: i64,
    pub payment_type: PaymentType,
    pub memo: Option<String>,
}
