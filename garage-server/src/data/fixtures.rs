//! In-memory fixture implementation of the data boundary
//!
//! Seeded with the shop's sample records; the production default here and
//! the test double for everything above the boundary. Dashboard and trend
//! figures are computed from the stored records.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use parking_lot::RwLock;
use shared::models::{
    Customer, CustomerCreate, DashboardSummary, Employee, Expense, ExpenseCategory, ExpenseCreate,
    MaintenanceRecord, MonthlyData, MonthlyReport, MonthlyTrends, Payroll, PaymentType,
    Receivable, Sale, SaleCreate,
};
use shared::util::snowflake_id;

use super::{BusinessDataSource, FetchError, FetchResult};

/// In-memory business record tables
pub struct FixtureStore {
    sales: RwLock<Vec<Sale>>,
    expenses: RwLock<Vec<Expense>>,
    receivables: RwLock<Vec<Receivable>>,
    employees: RwLock<Vec<Employee>>,
    payrolls: RwLock<Vec<Payroll>>,
    customers: RwLock<Vec<Customer>>,
    maintenance: RwLock<Vec<MaintenanceRecord>>,
    #[cfg(test)]
    unavailable: std::sync::atomic::AtomicBool,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// "YYYY-MM" of a date
fn month_of(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

impl FixtureStore {
    /// An empty store
    pub fn empty() -> Self {
        Self {
            sales: RwLock::new(Vec::new()),
            expenses: RwLock::new(Vec::new()),
            receivables: RwLock::new(Vec::new()),
            employees: RwLock::new(Vec::new()),
            payrolls: RwLock::new(Vec::new()),
            customers: RwLock::new(Vec::new()),
            maintenance: RwLock::new(Vec::new()),
            #[cfg(test)]
            unavailable: std::sync::atomic::AtomicBool::new(false),
        }
    }

    /// The store seeded with the shipped sample records
    pub fn seeded() -> Self {
        let store = Self::empty();

        *store.sales.write() = vec![
            Sale {
                sale_id: 1,
                sale_date: ymd(2026, 1, 2),
                amount: 350_000,
                payment_type: PaymentType::Card,
                car_number: Some("12가3456".into()),
                customer_name: Some("김철수".into()),
                memo: Some("엔진오일 교체".into()),
            },
            Sale {
                sale_id: 2,
                sale_date: ymd(2026, 1, 2),
                amount: 120_000,
                payment_type: PaymentType::Cash,
                car_number: Some("78나9012".into()),
                customer_name: Some("이영희".into()),
                memo: Some("타이어 교체".into()),
            },
            Sale {
                sale_id: 3,
                sale_date: ymd(2026, 1, 1),
                amount: 250_000,
                payment_type: PaymentType::Transfer,
                car_number: Some("34다5678".into()),
                customer_name: Some("박민수".into()),
                memo: Some("정기점검".into()),
            },
        ];

        *store.expenses.write() = vec![
            Expense {
                expense_id: 1,
                expense_date: ymd(2026, 1, 2),
                category: ExpenseCategory::Part,
                vendor_name: "부품상사".into(),
                amount: 150_000,
                payment_type: PaymentType::Card,
                receipt_path: None,
                memo: Some("엔진오일 구매".into()),
            },
            Expense {
                expense_id: 2,
                expense_date: ymd(2026, 1, 2),
                category: ExpenseCategory::Fixed,
                vendor_name: "임대료".into(),
                amount: 800_000,
                payment_type: PaymentType::Transfer,
                receipt_path: None,
                memo: Some("1월 임대료".into()),
            },
            Expense {
                expense_id: 3,
                expense_date: ymd(2026, 1, 1),
                category: ExpenseCategory::Outsource,
                vendor_name: "외주업체".into(),
                amount: 200_000,
                payment_type: PaymentType::Cash,
                receipt_path: None,
                memo: Some("도장 작업".into()),
            },
        ];

        *store.receivables.write() = vec![
            Receivable {
                recv_id: 1,
                sale_id: 1,
                customer_name: "정대리".into(),
                amount: 500_000,
                due_date: ymd(2026, 1, 10),
                paid: false,
                paid_date: None,
            },
            Receivable {
                recv_id: 2,
                sale_id: 2,
                customer_name: "강사장".into(),
                amount: 300_000,
                due_date: ymd(2026, 1, 5),
                paid: true,
                paid_date: Some(ymd(2026, 1, 4)),
            },
        ];

        *store.employees.write() = vec![
            Employee {
                emp_id: 1,
                emp_name: "홍길동".into(),
                role: "정비사".into(),
                monthly_pay: 3_000_000,
                join_date: ymd(2024, 1, 1),
            },
            Employee {
                emp_id: 2,
                emp_name: "김정비".into(),
                role: "정비사".into(),
                monthly_pay: 2_800_000,
                join_date: ymd(2024, 6, 1),
            },
        ];

        *store.payrolls.write() = vec![
            Payroll {
                payroll_id: 1,
                emp_id: 1,
                pay_month: "2025-12".into(),
                pay_amount: 3_000_000,
                paid_date: ymd(2025, 12, 25),
            },
            Payroll {
                payroll_id: 2,
                emp_id: 2,
                pay_month: "2025-12".into(),
                pay_amount: 2_800_000,
                paid_date: ymd(2025, 12, 25),
            },
        ];

        *store.customers.write() = vec![
            Customer {
                customer_id: 1,
                customer_name: "김철수".into(),
                car_number: "12가3456".into(),
                phone: "010-1234-5678".into(),
                email: Some("kim@example.com".into()),
                memo: Some("단골 고객".into()),
                created_at: ymd(2025, 1, 15),
            },
            Customer {
                customer_id: 2,
                customer_name: "이영희".into(),
                car_number: "78나9012".into(),
                phone: "010-2345-6789".into(),
                email: Some("lee@example.com".into()),
                memo: None,
                created_at: ymd(2025, 2, 20),
            },
            Customer {
                customer_id: 3,
                customer_name: "박민수".into(),
                car_number: "34다5678".into(),
                phone: "010-3456-7890".into(),
                email: None,
                memo: Some("정기점검 고객".into()),
                created_at: ymd(2025, 3, 10),
            },
            Customer {
                customer_id: 4,
                customer_name: "정대리".into(),
                car_number: "56라7890".into(),
                phone: "010-4567-8901".into(),
                email: Some("jung@example.com".into()),
                memo: None,
                created_at: ymd(2025, 4, 5),
            },
            Customer {
                customer_id: 5,
                customer_name: "강사장".into(),
                car_number: "90마1234".into(),
                phone: "010-5678-9012".into(),
                email: None,
                memo: None,
                created_at: ymd(2025, 5, 18),
            },
        ];

        *store.maintenance.write() = vec![
            MaintenanceRecord {
                id: "1".into(),
                date: ymd(2025, 1, 15),
                vehicle_number: "12루1234".into(),
                mileage: 45_000,
                service_type: "엔진오일 교체".into(),
                memo: "정기 점검 완료. 브레이크 패드 80% 남음".into(),
            },
            MaintenanceRecord {
                id: "2".into(),
                date: ymd(2025, 2, 20),
                vehicle_number: "12루1234".into(),
                mileage: 45_500,
                service_type: "타이어 교체".into(),
                memo: "전륜 타이어 2개 교체. 다음 점검 90,000km".into(),
            },
            MaintenanceRecord {
                id: "3".into(),
                date: ymd(2025, 3, 10),
                vehicle_number: "12루1234".into(),
                mileage: 46_000,
                service_type: "정기 점검".into(),
                memo: "에어컨 필터 교체 권장".into(),
            },
        ];

        store
    }

    /// Simulate the boundary being down
    #[cfg(test)]
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable
            .store(unavailable, std::sync::atomic::Ordering::SeqCst);
    }

    fn check_available(&self) -> FetchResult<()> {
        #[cfg(test)]
        if self.unavailable.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(FetchError::Unavailable("fixture store marked down".into()));
        }
        Ok(())
    }

    fn validate_amount(amount: i64, what: &str) -> FetchResult<()> {
        if amount < 0 {
            return Err(FetchError::Invalid(format!(
                "{what} cannot be negative: {amount}"
            )));
        }
        Ok(())
    }

    /// Sum of a series per month of `year`, 12 entries, zero-filled
    fn monthly_series<T>(
        items: &[T],
        year: i32,
        date_of: impl Fn(&T) -> NaiveDate,
        value_of: impl Fn(&T) -> i64,
    ) -> Vec<MonthlyData> {
        (1..=12)
            .map(|month| MonthlyData {
                month,
                value: items
                    .iter()
                    .filter(|item| {
                        let d = date_of(item);
                        d.year() == year && d.month() == month
                    })
                    .map(&value_of)
                    .sum(),
            })
            .collect()
    }
}

#[async_trait]
impl BusinessDataSource for FixtureStore {
    async fn sales(&self) -> FetchResult<Vec<Sale>> {
        self.check_available()?;
        Ok(self.sales.read().clone())
    }

    async fn record_sale(&self, input: SaleCreate) -> FetchResult<Sale> {
        self.check_available()?;
        Self::validate_amount(input.amount, "sale amount")?;

        let sale = Sale {
            sale_id: snowflake_id(),
            sale_date: input.sale_date,
            amount: input.amount,
            payment_type: input.payment_type,
            car_number: input.car_number,
            customer_name: input.customer_name,
            memo: input.memo,
        };
        self.sales.write().push(sale.clone());
        Ok(sale)
    }

    async fn expenses(&self) -> FetchResult<Vec<Expense>> {
        self.check_available()?;
        Ok(self.expenses.read().clone())
    }

    async fn record_expense(&self, input: ExpenseCreate) -> FetchResult<Expense> {
        self.check_available()?;
        Self::validate_amount(input.amount, "expense amount")?;

        let expense = Expense {
            expense_id: snowflake_id(),
            expense_date: input.expense_date,
            category: input.category,
            vendor_name: input.vendor_name,
            amount: input.amount,
            payment_type: input.payment_type,
            receipt_path: None,
            memo: input.memo,
        };
        self.expenses.write().push(expense.clone());
        Ok(expense)
    }

    async fn receivables(&self) -> FetchResult<Vec<Receivable>> {
        self.check_available()?;
        Ok(self.receivables.read().clone())
    }

    async fn settle_receivable(
        &self,
        recv_id: i64,
        paid_date: Option<NaiveDate>,
    ) -> FetchResult<Receivable> {
        self.check_available()?;

        let mut receivables = self.receivables.write();
        let receivable = receivables
            .iter_mut()
            .find(|r| r.recv_id == recv_id)
            .ok_or_else(|| FetchError::NotFound(format!("receivable {recv_id}")))?;

        receivable.paid = paid_date.is_some();
        receivable.paid_date = paid_date;
        Ok(receivable.clone())
    }

    async fn employees(&self) -> FetchResult<Vec<Employee>> {
        self.check_available()?;
        Ok(self.employees.read().clone())
    }

    async fn payrolls(&self) -> FetchResult<Vec<Payroll>> {
        self.check_available()?;
        Ok(self.payrolls.read().clone())
    }

    async fn customers(&self) -> FetchResult<Vec<Customer>> {
        self.check_available()?;
        Ok(self.customers.read().clone())
    }

    async fn record_customer(&self, input: CustomerCreate) -> FetchResult<Customer> {
        self.check_available()?;

        if input.customer_name.is_empty() || input.car_number.is_empty() {
            return Err(FetchError::Invalid(
                "customer name and car number are required".into(),
            ));
        }

        let customer = Customer {
            customer_id: snowflake_id(),
            customer_name: input.customer_name,
            car_number: input.car_number,
            phone: input.phone,
            email: input.email,
            memo: input.memo,
            created_at: chrono::Utc::now().date_naive(),
        };
        self.customers.write().push(customer.clone());
        Ok(customer)
    }

    async fn maintenance_history(
        &self,
        vehicle_number: &str,
    ) -> FetchResult<Vec<MaintenanceRecord>> {
        self.check_available()?;
        Ok(self
            .maintenance
            .read()
            .iter()
            .filter(|r| r.vehicle_number == vehicle_number)
            .cloned()
            .collect())
    }

    async fn dashboard_summary(&self, today: NaiveDate) -> FetchResult<DashboardSummary> {
        self.check_available()?;

        let today_sales: i64 = self
            .sales
            .read()
            .iter()
            .filter(|s| s.sale_date == today)
            .map(|s| s.amount)
            .sum();
        let today_expenses: i64 = self
            .expenses
            .read()
            .iter()
            .filter(|e| e.expense_date == today)
            .map(|e| e.amount)
            .sum();

        Ok(DashboardSummary {
            today_sales,
            today_expenses,
            today_net_cash: today_sales - today_expenses,
        })
    }

    async fn monthly_trends(&self, year: i32) -> FetchResult<MonthlyTrends> {
        self.check_available()?;

        let sales = Self::monthly_series(&self.sales.read(), year, |s| s.sale_date, |s| s.amount);
        let expenses = Self::monthly_series(
            &self.expenses.read(),
            year,
            |e| e.expense_date,
            |e| e.amount,
        );
        let receivables = Self::monthly_series(
            &self.receivables.read(),
            year,
            |r| r.due_date,
            |r| r.amount,
        );

        // Customer series is cumulative: everyone registered by month end
        let customers_table = self.customers.read();
        let customers = (1..=12)
            .map(|month| {
                let (next_year, next_month) = if month == 12 {
                    (year + 1, 1)
                } else {
                    (year, month + 1)
                };
                let value = match NaiveDate::from_ymd_opt(next_year, next_month, 1) {
                    Some(first_of_next) => customers_table
                        .iter()
                        .filter(|c| c.created_at < first_of_next)
                        .count() as i64,
                    None => 0,
                };
                MonthlyData { month, value }
            })
            .collect();

        Ok(MonthlyTrends {
            year,
            sales,
            expenses,
            receivables,
            customers,
        })
    }

    async fn monthly_report(&self, month: &str) -> FetchResult<MonthlyReport> {
        self.check_available()?;

        // Accept only well-formed "YYYY-MM"
        NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
            .map_err(|_| FetchError::Invalid(format!("invalid month: {month}")))?;

        let total_sales: i64 = self
            .sales
            .read()
            .iter()
            .filter(|s| month_of(s.sale_date) == month)
            .map(|s| s.amount)
            .sum();
        let total_expenses: i64 = self
            .expenses
            .read()
            .iter()
            .filter(|e| month_of(e.expense_date) == month)
            .map(|e| e.amount)
            .sum();

        Ok(MonthlyReport {
            month: month.to_string(),
            total_sales,
            total_expenses,
            net_profit: total_sales - total_expenses,
        })
    }
}
