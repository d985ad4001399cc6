//! Spend by category.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use ledgerview_core::{category_for, RecordSet};

/// Total line-item spend for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub category: String,
    pub spend: Decimal,
}

/// Group line items by category (explicit category, else the account-code
/// lookup table) and sum their totals, sorted descending by spend. The sort
/// is stable; ties keep first-seen order.
pub fn category_spend(records: &RecordSet) -> Vec<CategorySpend> {
    let mut order: Vec<CategorySpend> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for invoice in &records.invoices {
        for line in &invoice.line_items {
            let category = category_for(line);
            let amount = line.total_abs();
            match index.get(&category) {
                Some(&i) => order[i].spend += amount,
                None => {
                    index.insert(category.clone(), order.len());
                    order.push(CategorySpend {
                        category,
                        spend: amount,
                    });
                }
            }
        }
    }

    order.sort_by(|a, b| b.spend.cmp(&a.spend));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerview_core::{CustomerId, Invoice, InvoiceId, LineItem, VendorId};

    fn invoice_with_lines(lines: Vec<LineItem>) -> Invoice {
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
            total: None,
            status: "unpaid".to_string(),
            payment: None,
            line_items: lines,
        }
    }

    fn line(code: Option<&str>, total: i64) -> LineItem {
        LineItem {
            account_code: code.map(str::to_string),
            total_price: Some(Decimal::from(total)),
            ..LineItem::default()
        }
    }

    #[test]
    fn groups_by_account_code_label_with_fallbacks() {
        let mut records = RecordSet::new();
        records.invoices.push(invoice_with_lines(vec![
            line(Some("4925"), 100),
            line(Some("4925"), 200),
            line(Some("9999"), 50),
            line(None, 10),
        ]));

        let categories = category_spend(&records);
        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].category, "Software & Licenses");
        assert_eq!(categories[0].spend, Decimal::from(300));
        assert_eq!(categories[1].category, "Account 9999");
        assert_eq!(categories[2].category, "Uncategorized");
    }
}
