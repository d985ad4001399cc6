//! Postgres-backed record store.
//!
//! Schema mirrors the normalized document model: vendors, customers,
//! invoices, payments, line_items. Seeding enforces the same rules as the
//! in-memory store (name dedup, suffix on a (number, vendor) collision),
//! here via SELECT-then-INSERT inside a single transaction.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use ledgerview_core::{
    Customer, CustomerId, Invoice, InvoiceId, LineItem, Payment, RecordSet, Vendor, VendorId,
};
use ledgerview_ingest::DocumentSeed;

use crate::error::StoreError;
use crate::number_suffix;
use crate::provider::RecordProvider;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS vendors (
    id          UUID PRIMARY KEY,
    name        TEXT NOT NULL UNIQUE,
    tax_id      TEXT,
    address     TEXT
);

CREATE TABLE IF NOT EXISTS customers (
    id          UUID PRIMARY KEY,
    name        TEXT NOT NULL UNIQUE,
    address     TEXT
);

CREATE TABLE IF NOT EXISTS invoices (
    id              UUID PRIMARY KEY,
    number          TEXT NOT NULL,
    vendor_id       UUID NOT NULL REFERENCES vendors(id) ON DELETE CASCADE,
    customer_id     UUID NOT NULL REFERENCES customers(id) ON DELETE CASCADE,
    invoice_date    DATE,
    delivery_date   DATE,
    document_type   TEXT,
    currency        TEXT,
    sub_total       NUMERIC,
    tax_total       NUMERIC,
    total           NUMERIC,
    status          TEXT NOT NULL,
    UNIQUE (number, vendor_id)
);

CREATE TABLE IF NOT EXISTS payments (
    invoice_id          UUID PRIMARY KEY REFERENCES invoices(id) ON DELETE CASCADE,
    due_date            DATE,
    terms               TEXT,
    bank_account        TEXT,
    bic                 TEXT,
    net_days            INTEGER,
    discount_percent    NUMERIC,
    discount_days       INTEGER,
    discount_due_date   DATE,
    discounted_total    NUMERIC
);

CREATE TABLE IF NOT EXISTS line_items (
    id              UUID PRIMARY KEY,
    invoice_id      UUID NOT NULL REFERENCES invoices(id) ON DELETE CASCADE,
    line_no         INTEGER,
    description     TEXT,
    quantity        NUMERIC,
    unit_price      NUMERIC,
    total_price     NUMERIC,
    account_code    TEXT,
    posting_key     TEXT,
    vat_rate        NUMERIC,
    vat_amount      NUMERIC,
    category        TEXT
);
"#;

/// Record store backed by a Postgres database.
#[derive(Debug, Clone)]
pub struct PostgresRecordStore {
    pool: PgPool,
}

impl PostgresRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the given database URL.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
        Ok(Self::new(pool))
    }

    /// Create the schema if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Seed normalized documents, returning the number of invoices created.
    ///
    /// Runs in a single transaction: either the whole batch lands or none
    /// of it does.
    pub async fn seed_documents(&self, seeds: Vec<DocumentSeed>) -> Result<usize, StoreError> {
        let mut tx = self.pool.begin().await?;
        let count = seeds.len();

        for seed in seeds {
            let vendor_id = match sqlx::query("SELECT id FROM vendors WHERE name = $1")
                .bind(&seed.vendor.name)
                .fetch_optional(&mut *tx)
                .await?
            {
                Some(row) => row.try_get::<Uuid, _>("id")?,
                None => {
                    let id = Uuid::now_v7();
                    sqlx::query(
                        "INSERT INTO vendors (id, name, tax_id, address) VALUES ($1, $2, $3, $4)",
                    )
                    .bind(id)
                    .bind(&seed.vendor.name)
                    .bind(&seed.vendor.tax_id)
                    .bind(&seed.vendor.address)
                    .execute(&mut *tx)
                    .await?;
                    id
                }
            };

            let customer_id = match sqlx::query("SELECT id FROM customers WHERE name = $1")
                .bind(&seed.customer.name)
                .fetch_optional(&mut *tx)
                .await?
            {
                Some(row) => row.try_get::<Uuid, _>("id")?,
                None => {
                    let id = Uuid::now_v7();
                    sqlx::query("INSERT INTO customers (id, name, address) VALUES ($1, $2, $3)")
                        .bind(id)
                        .bind(&seed.customer.name)
                        .bind(&seed.customer.address)
                        .execute(&mut *tx)
                        .await?;
                    id
                }
            };

            let mut number = seed.invoice_number.clone();
            loop {
                let taken = sqlx::query(
                    "SELECT 1 AS hit FROM invoices WHERE number = $1 AND vendor_id = $2",
                )
                .bind(&number)
                .bind(vendor_id)
                .fetch_optional(&mut *tx)
                .await?;
                if taken.is_none() {
                    break;
                }
                number = format!("{}-{}", seed.invoice_number, number_suffix());
            }

            let invoice_id = Uuid::now_v7();
            sqlx::query(
                r#"
                INSERT INTO invoices (
                    id, number, vendor_id, customer_id, invoice_date, delivery_date,
                    document_type, currency, sub_total, tax_total, total, status
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                "#,
            )
            .bind(invoice_id)
            .bind(&number)
            .bind(vendor_id)
            .bind(customer_id)
            .bind(seed.invoice_date)
            .bind(seed.delivery_date)
            .bind(&seed.document_type)
            .bind(&seed.currency)
            .bind(seed.sub_total)
            .bind(seed.tax_total)
            .bind(seed.total)
            .bind(&seed.status)
            .execute(&mut *tx)
            .await?;

            if let Some(payment) = &seed.payment {
                sqlx::query(
                    r#"
                    INSERT INTO payments (
                        invoice_id, due_date, terms, bank_account, bic, net_days,
                        discount_percent, discount_days, discount_due_date, discounted_total
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                    "#,
                )
                .bind(invoice_id)
                .bind(payment.due_date)
                .bind(&payment.terms)
                .bind(&payment.bank_account)
                .bind(&payment.bic)
                .bind(payment.net_days)
                .bind(payment.discount_percent)
                .bind(payment.discount_days)
                .bind(payment.discount_due_date)
                .bind(payment.discounted_total)
                .execute(&mut *tx)
                .await?;
            }

            for item in &seed.line_items {
                sqlx::query(
                    r#"
                    INSERT INTO line_items (
                        id, invoice_id, line_no, description, quantity, unit_price,
                        total_price, account_code, posting_key, vat_rate, vat_amount, category
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                    "#,
                )
                .bind(Uuid::now_v7())
                .bind(invoice_id)
                .bind(item.line_no)
                .bind(&item.description)
                .bind(item.quantity)
                .bind(item.unit_price)
                .bind(item.total_price)
                .bind(&item.account_code)
                .bind(&item.posting_key)
                .bind(item.vat_rate)
                .bind(item.vat_amount)
                .bind(&item.category)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        tracing::info!(invoices = count, "seeded postgres record store");
        Ok(count)
    }
}

#[async_trait]
impl RecordProvider for PostgresRecordStore {
    async fn snapshot(&self) -> Result<RecordSet, StoreError> {
        let mut records = RecordSet::default();

        let vendor_rows = sqlx::query("SELECT id, name, tax_id, address FROM vendors")
            .fetch_all(&self.pool)
            .await?;
        for row in vendor_rows {
            records.vendors.push(Vendor {
                id: VendorId::from_uuid(row.try_get("id")?),
                name: row.try_get("name")?,
                tax_id: row.try_get("tax_id")?,
                address: row.try_get("address")?,
            });
        }

        let customer_rows = sqlx::query("SELECT id, name, address FROM customers")
            .fetch_all(&self.pool)
            .await?;
        for row in customer_rows {
            records.customers.push(Customer {
                id: CustomerId::from_uuid(row.try_get("id")?),
                name: row.try_get("name")?,
                address: row.try_get("address")?,
            });
        }

        let invoice_rows = sqlx::query(
            r#"
            SELECT id, number, vendor_id, customer_id, invoice_date, delivery_date,
                   document_type, currency, sub_total, tax_total, total, status
            FROM invoices
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        let mut index = std::collections::HashMap::with_capacity(invoice_rows.len());
        for row in invoice_rows {
            let id: Uuid = row.try_get("id")?;
            index.insert(id, records.invoices.len());
            records.invoices.push(Invoice {
                id: InvoiceId::from_uuid(id),
                number: row.try_get("number")?,
                vendor_id: VendorId::from_uuid(row.try_get("vendor_id")?),
                customer_id: CustomerId::from_uuid(row.try_get("customer_id")?),
                invoice_date: row.try_get::<Option<NaiveDate>, _>("invoice_date")?,
                delivery_date: row.try_get::<Option<NaiveDate>, _>("delivery_date")?,
                document_type: row.try_get("document_type")?,
                currency: row.try_get("currency")?,
                sub_total: row.try_get::<Option<Decimal>, _>("sub_total")?,
                tax_total: row.try_get::<Option<Decimal>, _>("tax_total")?,
                total: row.try_get::<Option<Decimal>, _>("total")?,
                status: row.try_get("status")?,
                payment: None,
                line_items: Vec::new(),
            });
        }

        let payment_rows = sqlx::query(
            r#"
            SELECT invoice_id, due_date, terms, bank_account, bic, net_days,
                   discount_percent, discount_days, discount_due_date, discounted_total
            FROM payments
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        for row in payment_rows {
            let invoice_id: Uuid = row.try_get("invoice_id")?;
            if let Some(&at) = index.get(&invoice_id) {
                records.invoices[at].payment = Some(Payment {
                    due_date: row.try_get("due_date")?,
                    terms: row.try_get("terms")?,
                    bank_account: row.try_get("bank_account")?,
                    bic: row.try_get("bic")?,
                    net_days: row.try_get("net_days")?,
                    discount_percent: row.try_get("discount_percent")?,
                    discount_days: row.try_get("discount_days")?,
                    discount_due_date: row.try_get("discount_due_date")?,
                    discounted_total: row.try_get("discounted_total")?,
                });
            }
        }

        let item_rows = sqlx::query(
            r#"
            SELECT invoice_id, line_no, description, quantity, unit_price, total_price,
                   account_code, posting_key, vat_rate, vat_amount, category
            FROM line_items
            ORDER BY invoice_id, line_no
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        for row in item_rows {
            let invoice_id: Uuid = row.try_get("invoice_id")?;
            if let Some(&at) = index.get(&invoice_id) {
                records.invoices[at].line_items.push(LineItem {
                    line_no: row.try_get("line_no")?,
                    description: row.try_get("description")?,
                    quantity: row.try_get("quantity")?,
                    unit_price: row.try_get("unit_price")?,
                    total_price: row.try_get("total_price")?,
                    account_code: row.try_get("account_code")?,
                    posting_key: row.try_get("posting_key")?,
                    vat_rate: row.try_get("vat_rate")?,
                    vat_amount: row.try_get("vat_amount")?,
                    category: row.try_get("category")?,
                });
            }
        }

        Ok(records)
    }
}
