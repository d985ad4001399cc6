//! `ledgerview-ingest` — normalization of the extracted-document feed.
//!
//! The upstream document-extraction service emits a JSON array of
//! semi-structured records where nearly every field may appear either bare
//! (`"invoiceDate": "2025-06-01"`) or wrapped in one or more confidence
//! envelopes (`"invoiceDate": {"value": "2025-06-01", "confidence": 0.9}`).
//! This crate maps that shape into the fixed record model exactly once, with
//! explicit defaulting rules, so no read site ever touches the raw feed.

pub mod error;
pub mod feed;
pub mod normalize;

pub use error::IngestError;
pub use normalize::{normalize_document, normalize_feed, CustomerSeed, DocumentSeed, VendorSeed};
