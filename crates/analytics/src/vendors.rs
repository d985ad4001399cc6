//! Vendor spend ranking.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use ledgerview_core::RecordSet;

/// Total spend attributed to one vendor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorSpend {
    pub vendor: String,
    pub spend: Decimal,
}

/// Group invoice totals by vendor name, sort descending by spend and keep
/// the first `limit` entries. The sort is stable, so ties keep the order in
/// which vendors first appear in the record set.
pub fn top_vendors(records: &RecordSet, limit: usize) -> Vec<VendorSpend> {
    let names = records.vendor_names();
    let mut order: Vec<VendorSpend> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for invoice in &records.invoices {
        let Some(name) = names.get(&invoice.vendor_id) else { continue };
        let amount = invoice.total_abs();
        match index.get(name) {
            Some(&i) => order[i].spend += amount,
            None => {
                index.insert(*name, order.len());
                order.push(VendorSpend {
                    vendor: (*name).to_string(),
                    spend: amount,
                });
            }
        }
    }

    order.sort_by(|a, b| b.spend.cmp(&a.spend));
    order.truncate(limit);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerview_core::{Customer, CustomerId, Invoice, InvoiceId, Vendor, VendorId};

    fn records_with_spend(spend: &[(&str, i64)]) -> RecordSet {
        let mut records = RecordSet::new();
        let customer_id = CustomerId::new();
        records.customers.push(Customer {
            id: customer_id,
            name: "Acme Retail".to_string(),
            address: None,
        });
        for (name, total) in spend {
            let vendor_id = records
                .vendors
                .iter()
                .find(|v| v.name == *name)
                .map(|v| v.id)
                .unwrap_or_else(|| {
                    let id = VendorId::new();
                    records.vendors.push(Vendor {
                        id,
                        name: (*name).to_string(),
                        tax_id: None,
                        address: None,
                    });
                    id
                });
            records.invoices.push(Invoice {
                id: InvoiceId::new(),
                number: format!("INV-{total}"),
                vendor_id,
                customer_id,
                invoice_date: None,
                delivery_date: None,
                document_type: None,
                currency: None,
                sub_total: None,
                tax_total: None,
                total: Some(Decimal::from(*total)),
                status: "unpaid".to_string(),
                payment: None,
                line_items: Vec::new(),
            });
        }
        records
    }

    #[test]
    fn ranks_by_total_spend_descending() {
        let records = records_with_spend(&[("Beta", 100), ("Acme", 150), ("Acme", 150)]);
        let top = top_vendors(&records, 10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].vendor, "Acme");
        assert_eq!(top[0].spend, Decimal::from(300));
        assert_eq!(top[1].vendor, "Beta");
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let records = records_with_spend(&[("Zeta", 100), ("Alpha", 100)]);
        let top = top_vendors(&records, 10);
        assert_eq!(top[0].vendor, "Zeta");
        assert_eq!(top[1].vendor, "Alpha");
    }

    #[test]
    fn truncates_to_limit() {
        let spend: Vec<(String, i64)> = (0..15).map(|i| (format!("V{i}"), 10 + i)).collect();
        let borrowed: Vec<(&str, i64)> = spend.iter().map(|(n, t)| (n.as_str(), *t)).collect();
        let top = top_vendors(&records_with_spend(&borrowed), 10);
        assert_eq!(top.len(), 10);
        assert!(top.windows(2).all(|w| w[0].spend >= w[1].spend));
    }
}
