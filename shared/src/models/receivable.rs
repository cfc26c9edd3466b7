//! Receivable Model (미수금)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outstanding balance on a sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receivable {
    pub recv_id: i64,
    /// Sale this balance belongs to
    pub sale_id: i64,
    pub customer_name: String,
    /// Amount in whole won
    pub amount: i64,
    pub due_date: NaiveDate,
    /// Whether the balance has been collected
    pub paid: bool,
    pub paid_date: Option<NaiveDate>,
}
