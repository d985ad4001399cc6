//! Keyword-matched canned responses.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::answer::{AnswerKind, ChatAnswer};
use crate::error::ChatError;
use crate::ChatResponder;

/// Local mock mode: the lower-cased question is matched against an ordered
/// list of substring predicates and the first hit wins. No language
/// understanding happens here.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockResponder;

impl MockResponder {
    pub fn new() -> Self {
        Self
    }
}

fn vendor_rows() -> Vec<Value> {
    vec![
        json!({"vendor_name": "EasyFirma GmbH & Co KG", "total_spend": "5680.00"}),
        json!({"vendor_name": "TechPro Solutions Inc", "total_spend": "4320.00"}),
        json!({"vendor_name": "Global Office Supplies", "total_spend": "3890.00"}),
        json!({"vendor_name": "Digital Services Ltd", "total_spend": "3450.00"}),
        json!({"vendor_name": "SmartSoft Systems", "total_spend": "2980.00"}),
    ]
}

fn category_rows() -> Vec<Value> {
    vec![
        json!({"category": "Office Supplies", "total_spend": "12500.00"}),
        json!({"category": "Software", "total_spend": "8750.00"}),
        json!({"category": "Travel", "total_spend": "6300.00"}),
        json!({"category": "Hardware", "total_spend": "5400.00"}),
        json!({"category": "Services", "total_spend": "4200.00"}),
    ]
}

fn monthly_rows() -> Vec<Value> {
    vec![
        json!({"month": "2025-01", "invoice_count": 45, "total_amount": "8750.00"}),
        json!({"month": "2025-02", "invoice_count": 52, "total_amount": "9200.00"}),
        json!({"month": "2025-03", "invoice_count": 48, "total_amount": "8950.00"}),
        json!({"month": "2025-04", "invoice_count": 50, "total_amount": "9100.00"}),
        json!({"month": "2025-05", "invoice_count": 47, "total_amount": "8800.00"}),
    ]
}

fn respond(question: &str) -> ChatAnswer {
    let q = question.to_lowercase();

    // Ordered predicates: first match wins.
    if q.contains("category") || q.contains("categories") {
        return ChatAnswer::new(
            AnswerKind::Categories,
            "Here's the spending breakdown by category:",
            category_rows(),
        );
    }
    if q.contains("vendor") || q.contains("supplier") {
        return ChatAnswer::new(
            AnswerKind::Vendors,
            "Here are the top vendors by spend:",
            vendor_rows(),
        );
    }
    if q.contains("monthly") && q.contains("invoice") {
        return ChatAnswer::new(
            AnswerKind::MonthlyInvoices,
            "Here's the monthly invoice summary:",
            monthly_rows(),
        );
    }

    // Fixed default: a nudge plus three example vendor rows.
    ChatAnswer::new(
        AnswerKind::General,
        "I understand you're asking about the data. Could you be more specific? \
         You can ask about spending categories, vendors, or invoice trends.",
        vendor_rows().into_iter().take(3).collect(),
    )
}

#[async_trait]
impl ChatResponder for MockResponder {
    async fn answer(&self, question: &str) -> Result<ChatAnswer, ChatError> {
        Ok(respond(question))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_vendor_question_returns_five_tagged_rows() {
        let answer = respond("what are the top 5 vendors by spend");
        assert_eq!(answer.kind, AnswerKind::Vendors);
        assert_eq!(answer.rows.len(), 5);
    }

    #[test]
    fn category_predicate_is_checked_first() {
        // Mentions both; the category rule is earlier in the list.
        let answer = respond("spend by category per vendor");
        assert_eq!(answer.kind, AnswerKind::Categories);
    }

    #[test]
    fn monthly_needs_both_keywords() {
        let answer = respond("monthly invoice totals please");
        assert_eq!(answer.kind, AnswerKind::MonthlyInvoices);

        let answer = respond("monthly weather report");
        assert_eq!(answer.kind, AnswerKind::General);
    }

    #[test]
    fn unmatched_question_returns_default_rowset() {
        let answer = respond("tell me a joke");
        assert_eq!(answer.kind, AnswerKind::General);
        assert_eq!(answer.rows.len(), 3);
        assert!(answer.message.contains("more specific"));
    }
}
