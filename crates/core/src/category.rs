//! Account-code → spend-category lookup.
//!
//! Line items carry a German ledger account code (Sachkonto). A small fixed
//! table maps the known codes to human labels; unknown codes fall back to
//! `Account {code}` and lines without any code land in `Uncategorized`.

use crate::record::LineItem;

/// Human label for a ledger account code.
pub fn account_label(code: &str) -> String {
    match code {
        "3400" => "Sales Revenue".to_string(),
        "4400" => "Professional Services".to_string(),
        "4910" => "Repairs & Maintenance".to_string(),
        "4920" => "Equipment & Supplies".to_string(),
        "4925" => "Software & Licenses".to_string(),
        _ => format!("Account {code}"),
    }
}

/// Spend category for a line item.
///
/// An explicit category on the line wins; otherwise the account code is
/// mapped through [`account_label`].
pub fn category_for(line: &LineItem) -> String {
    if let Some(category) = &line.category {
        if !category.is_empty() {
            return category.clone();
        }
    }
    match &line.account_code {
        Some(code) if !code.is_empty() => account_label(code),
        _ => "Uncategorized".to_string(),
    }
}
