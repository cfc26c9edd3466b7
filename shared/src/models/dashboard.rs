//! Dashboard Models (대시보드)

use serde::{Deserialize, Serialize};

/// Today's headline figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub today_sales: i64,
    pub today_expenses: i64,
    /// sales - expenses
    pub today_net_cash: i64,
}

/// One month of a trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyData {
    /// Month number, 1..=12
    pub month: u32,
    pub value: i64,
}

/// Month-by-month trend series for one year
///
/// Every series carries exactly 12 entries (months 1..=12), zero-filled
/// where no records exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrends {
    pub year: i32,
    pub sales: Vec<MonthlyData>,
    pub expenses: Vec<MonthlyData>,
    pub receivables: Vec<MonthlyData>,
    pub customers: Vec<MonthlyData>,
}

/// Totals for one "YYYY-MM" month
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub month: String,
    pub total_sales: i64,
    pub total_expenses: i64,
    /// sales - expenses
    pub net_profit: i64,
}
