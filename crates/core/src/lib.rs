//! `ledgerview-core` — the invoice record model.
//!
//! This crate contains the **normalized** record shapes that the rest of the
//! system reads: vendors, customers, invoices, payments and line items, plus
//! the small account-code → spend-category lookup table. Records are created
//! once by the ingest pass and never mutated afterwards; everything downstream
//! is a read-only view.

pub mod category;
pub mod id;
pub mod record;

pub use category::{account_label, category_for};
pub use id::{CustomerId, InvoiceId, VendorId};
pub use record::{Customer, Invoice, LineItem, Payment, RecordSet, Vendor};
