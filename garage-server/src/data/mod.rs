//! Business-data boundary
//!
//! The abstract repository the rest of the server depends on for
//! financial and customer records. Handlers never touch a concrete store;
//! they call [`BusinessDataSource`] and surface [`FetchError`]s through
//! the response envelope, so a failed fetch reads as `success=false` and
//! the caller keeps its last known good state.

mod fixtures;

pub use fixtures::FixtureStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    Customer, CustomerCreate, DashboardSummary, Employee, Expense, ExpenseCreate,
    MaintenanceRecord, MonthlyReport, MonthlyTrends, Payroll, Receivable, Sale, SaleCreate,
};
use thiserror::Error;

/// Data boundary errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// The source could not serve the request at all
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    /// A specific record was asked for and does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// The write payload violated a record rule
    #[error("validation failed: {0}")]
    Invalid(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Unavailable(msg) => AppError::fetch_failed(msg),
            FetchError::NotFound(what) => {
                AppError::with_message(ErrorCode::RecordNotFound, format!("{} not found", what))
            }
            FetchError::Invalid(msg) => AppError::validation(msg),
        }
    }
}

/// Repository interface over the shop's business records
///
/// Reads return full record sets; callers filter. Writes return the
/// stored record with its assigned id.
#[async_trait]
pub trait BusinessDataSource: Send + Sync {
    async fn sales(&self) -> FetchResult<Vec<Sale>>;
    async fn record_sale(&self, input: SaleCreate) -> FetchResult<Sale>;

    async fn expenses(&self) -> FetchResult<Vec<Expense>>;
    async fn record_expense(&self, input: ExpenseCreate) -> FetchResult<Expense>;

    async fn receivables(&self) -> FetchResult<Vec<Receivable>>;
    /// Mark a receivable collected (`paid_date = Some`) or reopen it (`None`)
    async fn settle_receivable(
        &self,
        recv_id: i64,
        paid_date: Option<NaiveDate>,
    ) -> FetchResult<Receivable>;

    async fn employees(&self) -> FetchResult<Vec<Employee>>;
    async fn payrolls(&self) -> FetchResult<Vec<Payroll>>;

    async fn customers(&self) -> FetchResult<Vec<Customer>>;
    async fn record_customer(&self, input: CustomerCreate) -> FetchResult<Customer>;

    async fn maintenance_history(&self, vehicle_number: &str)
    -> FetchResult<Vec<MaintenanceRecord>>;

    async fn dashboard_summary(&self, today: NaiveDate) -> FetchResult<DashboardSummary>;
    async fn monthly_trends(&self, year: i32) -> FetchResult<MonthlyTrends>;
    async fn monthly_report(&self, month: &str) -> FetchResult<MonthlyReport>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_mapping() {
        let err: AppError = FetchError::Unavailable("boom".into()).into();
        assert_eq!(err.code, ErrorCode::FetchFailed);

        let err: AppError = FetchError::NotFound("receivable 9".into()).into();
        assert_eq!(err.code, ErrorCode::RecordNotFound);

        let err: AppError = FetchError::Invalid("amount cannot be negative".into()).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
