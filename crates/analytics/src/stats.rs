//! Top-level dashboard totals.

use rust_decimal::Decimal;
use serde::Serialize;

use ledgerview_core::RecordSet;

/// Headline statistics shown above the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Sum of invoice totals over everything the store holds. The YTD label
    /// is kept for wire compatibility; the window is the imported data set.
    pub total_spend_ytd: Decimal,
    pub total_invoices: u64,
    /// One document is imported per invoice, so this mirrors the invoice
    /// count.
    pub documents_uploaded: u64,
    pub average_invoice_value: Decimal,
}

/// Compute the headline totals. An empty record set yields all-zero stats
/// rather than a division-by-zero.
pub fn dashboard_stats(records: &RecordSet) -> DashboardStats {
    let total_invoices = records.invoices.len() as u64;
    let total_spend: Decimal = records.invoices.iter().map(|i| i.total_abs()).sum();

    let average = if total_invoices == 0 {
        Decimal::ZERO
    } else {
        total_spend / Decimal::from(total_invoices)
    };

    DashboardStats {
        total_spend_ytd: total_spend,
        total_invoices,
        documents_uploaded: records.document_count(),
        average_invoice_value: average,
    }
}
