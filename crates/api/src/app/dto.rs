//! Response DTOs for the dashboard endpoints.
//!
//! Field names follow the charting UI's expectations (camelCase, and the
//! historical `totalSpendYTD` capitalization). Monetary amounts are
//! serialized as strings with exactly two decimal places.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerview_analytics::{
    CategorySpend, DashboardStats, ForecastPoint, InvoiceRow, MonthlyBucket, OutflowPoint,
    VendorSpend,
};

/// Two-decimal string rendering used for every monetary field.
pub fn money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(rename = "totalSpendYTD")]
    pub total_spend_ytd: String,
    pub total_invoices: u64,
    pub documents_uploaded: u64,
    pub average_invoice_value: String,
}

impl From<DashboardStats> for StatsResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_spend_ytd: money(stats.total_spend_ytd),
            total_invoices: stats.total_invoices,
            documents_uploaded: stats.documents_uploaded,
            average_invoice_value: money(stats.average_invoice_value),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// `YYYY-MM`.
    pub month: String,
    pub invoice_count: u64,
    pub invoice_sum: String,
}

impl From<&MonthlyBucket> for TrendPoint {
    fn from(bucket: &MonthlyBucket) -> Self {
        Self {
            month: bucket.label(),
            invoice_count: bucket.invoice_count,
            invoice_sum: money(bucket.invoice_sum),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VendorSpendEntry {
    pub vendor: String,
    pub spend: String,
}

impl From<VendorSpend> for VendorSpendEntry {
    fn from(v: VendorSpend) -> Self {
        Self {
            vendor: v.vendor,
            spend: money(v.spend),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategorySpendEntry {
    pub category: String,
    pub spend: String,
}

impl From<CategorySpend> for CategorySpendEntry {
    fn from(c: CategorySpend) -> Self {
        Self {
            category: c.category,
            spend: money(c.spend),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OutflowEntry {
    pub date: NaiveDate,
    pub amount: String,
}

impl From<&OutflowPoint> for OutflowEntry {
    fn from(p: &OutflowPoint) -> Self {
        Self {
            date: p.date,
            amount: money(p.amount),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ForecastEntry {
    /// `YYYY-MM`.
    pub date: String,
    pub amount: String,
}

impl From<&ForecastPoint> for ForecastEntry {
    fn from(p: &ForecastPoint) -> Self {
        Self {
            date: p.label(),
            amount: money(p.amount),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceListEntry {
    pub vendor: String,
    pub date: Option<NaiveDate>,
    pub invoice_number: String,
    pub amount: String,
    pub status: String,
}

impl From<InvoiceRow> for InvoiceListEntry {
    fn from(row: InvoiceRow) -> Self {
        Self {
            vendor: row.vendor,
            date: row.date,
            invoice_number: row.invoice_number,
            amount: money(row.amount),
            status: row.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_always_renders_two_decimals() {
        assert_eq!(money(Decimal::new(4005, 1)), "400.50");
        assert_eq!(money(Decimal::ZERO), "0.00");
        assert_eq!(money(Decimal::new(100, 0)), "100.00");
    }

    #[test]
    fn stats_serializes_with_historical_capitalization() {
        let stats = DashboardStats {
            total_spend_ytd: Decimal::new(400, 0),
            total_invoices: 4,
            documents_uploaded: 4,
            average_invoice_value: Decimal::new(100, 0),
        };
        let body = serde_json::to_value(StatsResponse::from(stats)).unwrap();
        assert_eq!(body["totalSpendYTD"], "400.00");
        assert_eq!(body["totalInvoices"], 4);
        assert_eq!(body["documentsUploaded"], 4);
        assert_eq!(body["averageInvoiceValue"], "100.00");
    }
}
