//! Tagged chat answers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Discriminant telling consumers what shape the rowset has. The dashboard
/// dispatches on this tag; it never sniffs row fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    Vendors,
    Categories,
    MonthlyInvoices,
    General,
}

/// A chat answer: a human-readable message plus a tabular rowset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub kind: AnswerKind,
    pub message: String,
    /// Rows as key/value objects, kept loose because the upstream service
    /// controls their schema.
    pub rows: Vec<Value>,
}

impl ChatAnswer {
    pub fn new(kind: AnswerKind, message: impl Into<String>, rows: Vec<Value>) -> Self {
        Self {
            kind,
            message: message.into(),
            rows,
        }
    }
}

/// Classify an untagged upstream rowset by its first row's keys.
///
/// This field probe happens exactly once, here at the boundary; everything
/// downstream sees the explicit tag.
pub fn classify_rows(rows: &[Value]) -> AnswerKind {
    let Some(first) = rows.first().and_then(Value::as_object) else {
        return AnswerKind::General;
    };
    if first.contains_key("vendor") || first.contains_key("vendor_name") {
        AnswerKind::Vendors
    } else if first.contains_key("category") {
        AnswerKind::Categories
    } else if first.contains_key("month") {
        AnswerKind::MonthlyInvoices
    } else {
        AnswerKind::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_by_first_row_keys() {
        assert_eq!(
            classify_rows(&[json!({"vendor_name": "Acme", "total_spend": 10})]),
            AnswerKind::Vendors
        );
        assert_eq!(
            classify_rows(&[json!({"category": "Travel", "spend": "10"})]),
            AnswerKind::Categories
        );
        assert_eq!(
            classify_rows(&[json!({"month": "2025-01", "invoice_count": 4})]),
            AnswerKind::MonthlyInvoices
        );
        assert_eq!(classify_rows(&[json!({"foo": 1})]), AnswerKind::General);
        assert_eq!(classify_rows(&[]), AnswerKind::General);
    }

    #[test]
    fn kind_serializes_snake_case() {
        let answer = ChatAnswer::new(AnswerKind::MonthlyInvoices, "hi", Vec::new());
        let v = serde_json::to_value(&answer).unwrap();
        assert_eq!(v["kind"], "monthly_invoices");
    }
}
