//! Monthly invoice trend.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use ledgerview_core::RecordSet;

use crate::month_start;

/// One month of invoice activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucket {
    /// First day of the month.
    pub month: NaiveDate,
    pub invoice_count: u64,
    pub invoice_sum: Decimal,
}

impl MonthlyBucket {
    /// `YYYY-MM` label used on the wire and in chart axes.
    pub fn label(&self) -> String {
        self.month.format("%Y-%m").to_string()
    }
}

/// Group invoices by month of their invoice date, ascending.
///
/// Invoices without a date are excluded: bucketing them into the current
/// month would move historical rows around every time the endpoint is
/// queried.
pub fn monthly_trend(records: &RecordSet) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<NaiveDate, (u64, Decimal)> = BTreeMap::new();

    for invoice in &records.invoices {
        let Some(date) = invoice.invoice_date else { continue };
        let entry = buckets.entry(month_start(date)).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += invoice.total_abs();
    }

    buckets
        .into_iter()
        .map(|(month, (invoice_count, invoice_sum))| MonthlyBucket {
            month,
            invoice_count,
            invoice_sum,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerview_core::{CustomerId, Invoice, InvoiceId, VendorId};

    fn invoice(date: Option<NaiveDate>, total: i64) -> Invoice {
        Invoice {
            id: InvoiceId::new(),
            number: "INV".to_string(),
            vendor_id: VendorId::new(),
            customer_id: CustomerId::new(),
            invoice_date: date,
            delivery_date: None,
            document_type: None,
            currency: None,
            sub_total: None,
            tax_total: None,
            total: Some(Decimal::from(total)),
            status: "unpaid".to_string(),
            payment: None,
            line_items: Vec::new(),
        }
    }

    #[test]
    fn buckets_are_ascending_and_dateless_invoices_are_excluded() {
        let mut records = RecordSet::new();
        records
            .invoices
            .push(invoice(NaiveDate::from_ymd_opt(2025, 6, 20), 50));
        records
            .invoices
            .push(invoice(NaiveDate::from_ymd_opt(2025, 5, 2), 100));
        records
            .invoices
            .push(invoice(NaiveDate::from_ymd_opt(2025, 6, 1), 25));
        records.invoices.push(invoice(None, 999));

        let trend = monthly_trend(&records);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].label(), "2025-05");
        assert_eq!(trend[0].invoice_count, 1);
        assert_eq!(trend[0].invoice_sum, Decimal::from(100));
        assert_eq!(trend[1].label(), "2025-06");
        assert_eq!(trend[1].invoice_count, 2);
        assert_eq!(trend[1].invoice_sum, Decimal::from(75));
    }
}
