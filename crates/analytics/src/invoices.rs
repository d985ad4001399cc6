//! Filtered invoice listing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use ledgerview_core::RecordSet;

/// Hard cap on returned rows.
pub const MAX_RESULTS: usize = 500;

/// Optional filters, combined with logical AND. Blank values (empty or
/// whitespace-only, as sent by the charting UI's empty form fields) mean
/// "no filter".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceFilter {
    /// Case-insensitive substring match against invoice number, vendor name
    /// or customer name.
    pub search: Option<String>,
    /// Exact status match.
    pub status: Option<String>,
}

/// One row of the invoice table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceRow {
    pub vendor: String,
    pub date: Option<NaiveDate>,
    pub invoice_number: String,
    pub amount: Decimal,
    pub status: String,
}

/// List invoices matching the filter, newest first (dateless rows last),
/// capped at [`MAX_RESULTS`].
pub fn filter_invoices(records: &RecordSet, filter: &InvoiceFilter) -> Vec<InvoiceRow> {
    let vendor_names = records.vendor_names();
    let customer_names = records.customer_names();
    let needle = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    let status = filter
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let mut rows: Vec<InvoiceRow> = records
        .invoices
        .iter()
        .filter(|invoice| {
            if let Some(status) = status {
                if invoice.status != status {
                    return false;
                }
            }
            if let Some(needle) = &needle {
                let vendor = vendor_names.get(&invoice.vendor_id).copied().unwrap_or("");
                let customer = customer_names
                    .get(&invoice.customer_id)
                    .copied()
                    .unwrap_or("");
                return invoice.number.to_lowercase().contains(needle)
                    || vendor.to_lowercase().contains(needle)
                    || customer.to_lowercase().contains(needle);
            }
            true
        })
        .map(|invoice| InvoiceRow {
            vendor: vendor_names
                .get(&invoice.vendor_id)
                .copied()
                .unwrap_or("Unknown Vendor")
                .to_string(),
            date: invoice.invoice_date,
            invoice_number: invoice.number.clone(),
            amount: invoice.total_abs(),
            status: invoice.status.clone(),
        })
        .collect();

    // Option<NaiveDate> orders None first, so the reverse comparison puts
    // the newest dates first and dateless rows last.
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows.truncate(MAX_RESULTS);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerview_core::{Customer, CustomerId, Invoice, InvoiceId, Vendor, VendorId};

    fn sample_records() -> RecordSet {
        let mut records = RecordSet::new();
        let acme = VendorId::new();
        let beta = VendorId::new();
        let customer = CustomerId::new();
        records.vendors.push(Vendor {
            id: acme,
            name: "ACME Corp".to_string(),
            tax_id: None,
            address: None,
        });
        records.vendors.push(Vendor {
            id: beta,
            name: "Beta GmbH".to_string(),
            tax_id: None,
            address: None,
        });
        records.customers.push(Customer {
            id: customer,
            name: "Globex".to_string(),
            address: None,
        });

        let mut push = |vendor_id, number: &str, date, status: &str| {
            records.invoices.push(Invoice {
                id: InvoiceId::new(),
                number: number.to_string(),
                vendor_id,
                customer_id: customer,
                invoice_date: date,
                delivery_date: None,
                document_type: None,
                currency: None,
                sub_total: None,
                tax_total: None,
                total: Some(Decimal::from(100)),
                status: status.to_string(),
                payment: None,
                line_items: Vec::new(),
            });
        };
        push(acme, "A-1", NaiveDate::from_ymd_opt(2025, 5, 1), "paid");
        push(acme, "A-2", NaiveDate::from_ymd_opt(2025, 6, 1), "unpaid");
        push(beta, "B-1", None, "unpaid");
        records
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows = filter_invoices(
            &sample_records(),
            &InvoiceFilter {
                search: Some("acme".to_string()),
                status: None,
            },
        );
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.vendor == "ACME Corp"));
    }

    #[test]
    fn filters_combine_with_and() {
        let rows = filter_invoices(
            &sample_records(),
            &InvoiceFilter {
                search: Some("acme".to_string()),
                status: Some("paid".to_string()),
            },
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].invoice_number, "A-1");
    }

    #[test]
    fn newest_first_with_dateless_rows_last() {
        let rows = filter_invoices(&sample_records(), &InvoiceFilter::default());
        assert_eq!(rows[0].invoice_number, "A-2");
        assert_eq!(rows[1].invoice_number, "A-1");
        assert_eq!(rows[2].invoice_number, "B-1");
    }

    #[test]
    fn blank_search_matches_everything() {
        let rows = filter_invoices(
            &sample_records(),
            &InvoiceFilter {
                search: Some("   ".to_string()),
                status: None,
            },
        );
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn blank_status_matches_everything() {
        // An empty form field arrives as `status=`; it must not filter.
        let rows = filter_invoices(
            &sample_records(),
            &InvoiceFilter {
                search: None,
                status: Some(String::new()),
            },
        );
        assert_eq!(rows.len(), 3);

        let rows = filter_invoices(
            &sample_records(),
            &InvoiceFilter {
                search: None,
                status: Some("  ".to_string()),
            },
        );
        assert_eq!(rows.len(), 3);
    }
}
