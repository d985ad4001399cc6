//! `ledgerview-store` — the record-store boundary.
//!
//! Aggregations never know where records live. They ask a [`RecordProvider`]
//! for a [`RecordSet`](ledgerview_core::RecordSet) snapshot and work on
//! that; the provider is either the Postgres store or an in-memory fixture,
//! selected by configuration at startup.
//!
//! Both implementations apply the same seed-time rules: vendors and
//! customers are deduplicated by name, and a colliding (number, vendor)
//! pair gets a short disambiguating suffix instead of failing.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod provider;

pub use error::StoreError;
pub use memory::InMemoryRecordStore;
pub use postgres::PostgresRecordStore;
pub use provider::RecordProvider;

use uuid::Uuid;

/// Short random suffix appended to duplicate invoice numbers at import.
pub(crate) fn number_suffix() -> String {
    Uuid::now_v7().simple().to_string()[..6].to_string()
}
