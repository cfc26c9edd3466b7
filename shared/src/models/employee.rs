//! Employee and Payroll Models (직원/급여)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub emp_id: i64,
    pub emp_name: String,
    /// Job title, free text (정비사, ...)
    pub role: String,
    /// Monthly pay in whole won
    pub monthly_pay: i64,
    pub join_date: NaiveDate,
}

/// Payroll record - one month's payment for one employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payroll {
    pub payroll_id: i64,
    pub emp_id: i64,
    /// Pay month in "YYYY-MM" form
    pub pay_month: String,
    /// Amount in whole won
    pub pay_amount: i64,
    pub paid_date: NaiveDate,
}
