//! In-memory record store (fixtures, dev, tests).

use std::path::Path;
use std::sync::RwLock;

use async_trait::async_trait;

use ledgerview_core::{Customer, CustomerId, Invoice, InvoiceId, RecordSet, Vendor, VendorId};
use ledgerview_ingest::{normalize_feed, DocumentSeed};

use crate::error::StoreError;
use crate::number_suffix;
use crate::provider::RecordProvider;

/// Record store backed by a process-local [`RecordSet`].
///
/// Used when no database is configured: either empty or seeded from an
/// extracted-document fixture file. The aggregation layer sees exactly the
/// same snapshots it would get from Postgres.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<RecordSet>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: RecordSet) -> Self {
        Self {
            inner: RwLock::new(records),
        }
    }

    /// Load and seed a feed fixture file (a JSON array of extracted
    /// documents).
    pub fn load_fixture(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)?;
        let seeds = normalize_feed(&raw)?;
        let store = Self::new();
        let count = store.seed_documents(seeds);
        tracing::info!(invoices = count, "seeded in-memory record store from fixture");
        Ok(store)
    }

    /// Seed normalized documents, returning the number of invoices created.
    ///
    /// Vendors and customers are deduplicated by name. A (number, vendor)
    /// collision gets a random suffix so re-imports never clobber or reject
    /// existing rows.
    pub fn seed_documents(&self, seeds: Vec<DocumentSeed>) -> usize {
        let mut records = self.inner.write().unwrap();
        let count = seeds.len();

        for seed in seeds {
            let vendor_id = match records.vendors.iter().find(|v| v.name == seed.vendor.name) {
                Some(v) => v.id,
                None => {
                    let id = VendorId::new();
                    records.vendors.push(Vendor {
                        id,
                        name: seed.vendor.name.clone(),
                        tax_id: seed.vendor.tax_id.clone(),
                        address: seed.vendor.address.clone(),
                    });
                    id
                }
            };

            let customer_id = match records
                .customers
                .iter()
                .find(|c| c.name == seed.customer.name)
            {
                Some(c) => c.id,
                None => {
                    let id = CustomerId::new();
                    records.customers.push(Customer {
                        id,
                        name: seed.customer.name.clone(),
                        address: seed.customer.address.clone(),
                    });
                    id
                }
            };

            let mut number = seed.invoice_number.clone();
            while records
                .invoices
                .iter()
                .any(|i| i.number == number && i.vendor_id == vendor_id)
            {
                number = format!("{}-{}", seed.invoice_number, number_suffix());
            }

            records.invoices.push(Invoice {
                id: InvoiceId::new(),
                number,
                vendor_id,
                customer_id,
                invoice_date: seed.invoice_date,
                delivery_date: seed.delivery_date,
                document_type: seed.document_type,
                currency: seed.currency,
                sub_total: seed.sub_total,
                tax_total: seed.tax_total,
                total: seed.total,
                status: seed.status,
                payment: seed.payment,
                line_items: seed.line_items,
            });
        }

        count
    }
}

#[async_trait]
impl RecordProvider for InMemoryRecordStore {
    async fn snapshot(&self) -> Result<RecordSet, StoreError> {
        Ok(self.inner.read().unwrap().clone())
    }
}
