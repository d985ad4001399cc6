//! Scheduled cash outflow.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use ledgerview_core::RecordSet;

use crate::month_start;

/// Amount falling due on one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutflowPoint {
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Group invoice totals by payment due date, ascending.
///
/// Only invoices that carry a payment participate. A payment without a due
/// date is bucketed to the start of the current month; `today` is injected
/// so the view stays deterministic under test.
pub fn cash_outflow(records: &RecordSet, today: NaiveDate) -> Vec<OutflowPoint> {
    let fallback = month_start(today);
    let mut buckets: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for invoice in &records.invoices {
        let Some(payment) = &invoice.payment else { continue };
        let date = payment.due_date.unwrap_or(fallback);
        *buckets.entry(date).or_insert(Decimal::ZERO) += invoice.total_abs();
    }

    buckets
        .into_iter()
        .map(|(date, amount)| OutflowPoint { date, amount })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerview_core::{CustomerId, Invoice, InvoiceId, Payment, VendorId};

    fn invoice(due: Option<NaiveDate>, with_payment: bool, total: i64) -> Invoice {
        Invoice {
            id: InvoiceId::new(),
            number: "INV".to_string(),
            vendor_id: VendorId::new(),
            customer_id: CustomerId::new(),
            invoice_date: None,
            delivery_date: None,
            document_type: None,
            currency: None,
            sub_total: None,
            tax_total: None,
            total: Some(Decimal::from(total)),
            status: "unpaid".to_string(),
            payment: with_payment.then(|| Payment {
                due_date: due,
                terms: Some("net 30".to_string()),
                ..Payment::default()
            }),
            line_items: Vec::new(),
        }
    }

    #[test]
    fn groups_by_due_date_with_month_start_fallback() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 18).unwrap();
        let mut records = RecordSet::new();
        records
            .invoices
            .push(invoice(NaiveDate::from_ymd_opt(2025, 7, 1), true, 100));
        records
            .invoices
            .push(invoice(NaiveDate::from_ymd_opt(2025, 7, 1), true, 50));
        records.invoices.push(invoice(None, true, 25));
        // No payment attached: excluded from the schedule.
        records.invoices.push(invoice(None, false, 999));

        let outflow = cash_outflow(&records, today);
        assert_eq!(outflow.len(), 2);
        assert_eq!(outflow[0].date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(outflow[0].amount, Decimal::from(25));
        assert_eq!(outflow[1].date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(outflow[1].amount, Decimal::from(150));
    }
}
