//! Normalized invoice records.
//!
//! These are the fixed shapes the aggregation layer reads. The ingest pass
//! maps the heterogeneous "extracted document" feed into these records once,
//! with explicit defaulting; nothing downstream re-derives optional fields.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::id::{CustomerId, InvoiceId, VendorId};

/// A vendor (supplier). Many invoices reference one vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub tax_id: Option<String>,
    pub address: Option<String>,
}

/// A customer (bill-to party). Many invoices reference one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub address: Option<String>,
}

/// Payment terms attached to an invoice (zero-or-one per invoice).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Payment {
    pub due_date: Option<NaiveDate>,
    pub terms: Option<String>,
    pub bank_account: Option<String>,
    pub bic: Option<String>,
    pub net_days: Option<i32>,
    pub discount_percent: Option<Decimal>,
    pub discount_days: Option<i32>,
    pub discount_due_date: Option<NaiveDate>,
    pub discounted_total: Option<Decimal>,
}

impl Payment {
    /// True when no field carries a value; such payments are not persisted.
    pub fn is_empty(&self) -> bool {
        self == &Payment::default()
    }
}

/// A single invoice line (belongs to exactly one invoice).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LineItem {
    pub line_no: Option<i32>,
    pub description: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit_price: Option<Decimal>,
    pub total_price: Option<Decimal>,
    /// Accounting ledger code (Sachkonto) used for category grouping.
    pub account_code: Option<String>,
    /// Tax posting key (BU-Schlüssel) carried through from the source feed.
    pub posting_key: Option<String>,
    pub vat_rate: Option<Decimal>,
    pub vat_amount: Option<Decimal>,
    pub category: Option<String>,
}

impl LineItem {
    /// Line total as a non-negative amount. Source sign is unreliable, so
    /// derived views always work on the absolute value.
    pub fn total_abs(&self) -> Decimal {
        self.total_price.unwrap_or_default().abs()
    }
}

/// An invoice. Owns its payment and line items (cascade on delete).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    /// Human-readable number; unique per vendor (a suffix is appended at
    /// import time on collision).
    pub number: String,
    pub vendor_id: VendorId,
    pub customer_id: CustomerId,
    pub invoice_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub document_type: Option<String>,
    pub currency: Option<String>,
    pub sub_total: Option<Decimal>,
    pub tax_total: Option<Decimal>,
    pub total: Option<Decimal>,
    /// Free-text status, e.g. "paid" / "unpaid" / "credit".
    pub status: String,
    pub payment: Option<Payment>,
    pub line_items: Vec<LineItem>,
}

impl Invoice {
    /// Invoice total as a non-negative amount (see [`LineItem::total_abs`]).
    pub fn total_abs(&self) -> Decimal {
        self.total.unwrap_or_default().abs()
    }
}

/// A consistent snapshot of the record store.
///
/// Aggregations are pure functions over this container, so the same code
/// serves both the live store and an in-memory fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecordSet {
    pub vendors: Vec<Vendor>,
    pub customers: Vec<Customer>,
    pub invoices: Vec<Invoice>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    /// Count of source documents. One document is imported per invoice, so
    /// this equals the invoice count.
    pub fn document_count(&self) -> u64 {
        self.invoices.len() as u64
    }

    pub fn vendor_names(&self) -> HashMap<VendorId, &str> {
        self.vendors.iter().map(|v| (v.id, v.name.as_str())).collect()
    }

    pub fn customer_names(&self) -> HashMap<CustomerId, &str> {
        self.customers.iter().map(|c| (c.id, c.name.as_str())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_abs_defaults_to_zero_and_flips_sign() {
        let mut invoice = Invoice {
            id: InvoiceId::new(),
            number: "INV-1".to_string(),
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
            line_items: Vec::new(),
        };
        assert_eq!(invoice.total_abs(), Decimal::ZERO);

        invoice.total = Some(Decimal::new(-12345, 2));
        assert_eq!(invoice.total_abs(), Decimal::new(12345, 2));
    }

    #[test]
    fn empty_payment_is_detected() {
        assert!(Payment::default().is_empty());

        let payment = Payment {
            terms: Some("net 30".to_string()),
            ..Payment::default()
        };
        assert!(!payment.is_empty());
    }
}
