//! Business record models shared between server and clients
//!
//! One file per concern; record type first, create/update payloads after,
//! the way the API handlers consume them.

pub mod customer;
pub mod dashboard;
pub mod employee;
pub mod expense;
pub mod maintenance;
pub mod receivable;
pub mod sale;
pub mod session;
pub mod shop;

pub use customer::{Customer, CustomerCreate};
pub use dashboard::{DashboardSummary, MonthlyData, MonthlyReport, MonthlyTrends};
pub use employee::{Employee, Payroll};
pub use expense::{Expense, ExpenseCategory, ExpenseCreate};
pub use maintenance::MaintenanceRecord;
pub use receivable::Receivable;
pub use sale::{PaymentType, Sale, SaleCreate};
pub use session::{AuthProvider, LoginRequest, UserAccount};
pub use shop::Shop;
