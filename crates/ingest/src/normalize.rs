//! One-shot normalization of extracted documents into record seeds.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use ledgerview_core::{LineItem, Payment};

use crate::error::IngestError;
use crate::feed::{date_field, decimal_field, field, int_field, line_items, string_field};

/// Vendor attributes extracted from one document.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorSeed {
    pub name: String,
    pub tax_id: Option<String>,
    pub address: Option<String>,
}

/// Customer attributes extracted from one document.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSeed {
    pub name: String,
    pub address: Option<String>,
}

/// One fully-normalized document, ready to be persisted as an invoice with
/// its owned payment and line items. Vendor/customer deduplication and the
/// (number, vendor) uniqueness suffix are applied by the store at seed time.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSeed {
    pub vendor: VendorSeed,
    pub customer: CustomerSeed,
    pub invoice_number: String,
    pub invoice_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub document_type: Option<String>,
    pub currency: Option<String>,
    pub sub_total: Option<Decimal>,
    pub tax_total: Option<Decimal>,
    pub total: Option<Decimal>,
    pub status: String,
    pub payment: Option<Payment>,
    pub line_items: Vec<LineItem>,
}

fn s(obj: Option<&Value>, key: &str) -> Option<String> {
    obj.and_then(|o| string_field(o, key))
}

fn dec(obj: Option<&Value>, key: &str) -> Option<Decimal> {
    obj.and_then(|o| decimal_field(o, key))
}

fn int(obj: Option<&Value>, key: &str) -> Option<i32> {
    obj.and_then(|o| int_field(o, key))
}

fn date(obj: Option<&Value>, key: &str) -> Option<NaiveDate> {
    obj.and_then(|o| date_field(o, key))
}

/// Normalize a whole feed (a JSON array of documents).
pub fn normalize_feed(raw: &str) -> Result<Vec<DocumentSeed>, IngestError> {
    let root: Value = serde_json::from_str(raw)?;
    let docs = root.as_array().ok_or(IngestError::NotAnArray)?;
    let seeds: Vec<DocumentSeed> = docs.iter().map(normalize_document).collect();
    tracing::debug!(documents = seeds.len(), "normalized extracted-document feed");
    Ok(seeds)
}

/// Normalize a single extracted document.
///
/// Defaulting rules:
/// - vendor name → `"Unknown Vendor"`, customer name → `"Unknown Customer"`
/// - invoice number → the feed's `_id`, else a fresh UUID
/// - status → `"credit"` for credit notes, else `"unpaid"`
/// - a payment is kept only when at least one payment field carries a value
pub fn normalize_document(doc: &Value) -> DocumentSeed {
    let llm = field(doc, "extractedData").and_then(|d| field(d, "llmData"));
    let vendor = llm.and_then(|l| field(l, "vendor"));
    let customer = llm.and_then(|l| field(l, "customer"));
    let invoice = llm.and_then(|l| field(l, "invoice"));
    let summary = llm.and_then(|l| field(l, "summary"));
    let payment = llm.and_then(|l| field(l, "payment"));

    let invoice_number = s(invoice, "invoiceId")
        .or_else(|| string_field(doc, "_id"))
        .or_else(|| field(doc, "_id").and_then(|v| string_field(v, "$oid")))
        .unwrap_or_else(|| Uuid::now_v7().to_string());

    let document_type = s(summary, "documentType");
    let status = if document_type.as_deref() == Some("creditNote") {
        "credit".to_string()
    } else {
        "unpaid".to_string()
    };

    let payment_seed = Payment {
        due_date: date(payment, "dueDate"),
        terms: s(payment, "paymentTerms"),
        bank_account: s(payment, "bankAccountNumber"),
        bic: s(payment, "BIC"),
        net_days: int(payment, "netDays"),
        discount_percent: dec(payment, "discountPercentage"),
        discount_days: int(payment, "discountDays"),
        discount_due_date: date(payment, "discountDueDate"),
        discounted_total: dec(payment, "discountedTotal"),
    };

    let items = llm
        .map(line_items)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let item = Some(item);
            LineItem {
                line_no: int(item, "srNo").or(Some(idx as i32 + 1)),
                description: s(item, "description"),
                quantity: dec(item, "quantity"),
                unit_price: dec(item, "unitPrice"),
                total_price: dec(item, "totalPrice"),
                account_code: s(item, "Sachkonto"),
                posting_key: s(item, "BUSchluessel"),
                vat_rate: dec(item, "vatRate"),
                vat_amount: dec(item, "vatAmount"),
                category: s(item, "category"),
            }
        })
        .collect();

    DocumentSeed {
        vendor: VendorSeed {
            name: s(vendor, "vendorName").unwrap_or_else(|| "Unknown Vendor".to_string()),
            tax_id: s(vendor, "vendorTaxId"),
            address: s(vendor, "vendorAddress"),
        },
        customer: CustomerSeed {
            name: s(customer, "customerName").unwrap_or_else(|| "Unknown Customer".to_string()),
            address: s(customer, "customerAddress"),
        },
        invoice_number,
        invoice_date: date(invoice, "invoiceDate"),
        delivery_date: date(invoice, "deliveryDate"),
        document_type,
        currency: s(summary, "currencySymbol"),
        sub_total: dec(summary, "subTotal"),
        tax_total: dec(summary, "totalTax"),
        total: dec(summary, "invoiceTotal"),
        status,
        payment: if payment_seed.is_empty() { None } else { Some(payment_seed) },
        line_items: items,
    }
}
