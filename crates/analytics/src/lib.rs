//! `ledgerview-analytics` — the aggregation layer.
//!
//! Every public function here is a pure, read-only view over a
//! [`RecordSet`](ledgerview_core::RecordSet) snapshot: grouping, summing and
//! sorting, nothing else. Handlers fetch a snapshot from the record provider
//! and hand it to these functions; the same code therefore serves the live
//! store and in-memory fixtures.
//!
//! Amounts are [`rust_decimal::Decimal`] throughout and always non-negative
//! (derived views take absolute values; source sign is unreliable).

pub mod categories;
pub mod forecast;
pub mod invoices;
pub mod outflow;
pub mod stats;
pub mod trend;
pub mod vendors;

pub use categories::{category_spend, CategorySpend};
pub use forecast::{project, ForecastPoint};
pub use invoices::{filter_invoices, InvoiceFilter, InvoiceRow, MAX_RESULTS};
pub use outflow::{cash_outflow, OutflowPoint};
pub use stats::{dashboard_stats, DashboardStats};
pub use trend::{monthly_trend, MonthlyBucket};
pub use vendors::{top_vendors, VendorSpend};

pub(crate) fn month_start(date: chrono::NaiveDate) -> chrono::NaiveDate {
    use chrono::Datelike;
    chrono::NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}
