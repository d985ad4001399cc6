//! Table rendering for the terminal dashboard.

use comfy_table::{presets::UTF8_FULL, Cell, Table};
use serde_json::Value;

use crate::client::{ChatAnswer, Dashboard};

const UNAVAILABLE: &str = "(unavailable)";

fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

fn section(title: &str) {
    println!("\n== {title} ==");
}

pub fn dashboard(d: &Dashboard) {
    section("Overview");
    match &d.stats {
        Some(s) => {
            let rows = vec![vec![
                s.total_spend_ytd.clone(),
                s.total_invoices.to_string(),
                s.documents_uploaded.to_string(),
                s.average_invoice_value.clone(),
            ]];
            println!(
                "{}",
                pretty_table(
                    &["Spend YTD", "Invoices", "Documents", "Avg Invoice"],
                    rows
                )
            );
        }
        None => println!("{UNAVAILABLE}"),
    }

    section("Monthly Trend");
    match &d.trend {
        Some(points) => {
            let rows = points
                .iter()
                .map(|p| {
                    vec![
                        p.month.clone(),
                        p.invoice_count.to_string(),
                        p.invoice_sum.clone(),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Month", "Invoices", "Sum"], rows));
        }
        None => println!("{UNAVAILABLE}"),
    }

    section("Top Vendors");
    match &d.vendors {
        Some(vendors) => {
            let rows = vendors
                .iter()
                .map(|v| vec![v.vendor.clone(), v.spend.clone()])
                .collect();
            println!("{}", pretty_table(&["Vendor", "Spend"], rows));
        }
        None => println!("{UNAVAILABLE}"),
    }

    section("Category Spend");
    match &d.categories {
        Some(categories) => {
            let rows = categories
                .iter()
                .map(|c| vec![c.category.clone(), c.spend.clone()])
                .collect();
            println!("{}", pretty_table(&["Category", "Spend"], rows));
        }
        None => println!("{UNAVAILABLE}"),
    }

    section("Cash Outflow");
    match &d.outflow {
        Some(points) => {
            let rows = points
                .iter()
                .map(|p| vec![p.date.clone(), p.amount.clone()])
                .collect();
            println!("{}", pretty_table(&["Due Date", "Amount"], rows));
        }
        None => println!("{UNAVAILABLE}"),
    }

    section("Forecast");
    match &d.forecast {
        Some(points) => {
            let rows = points
                .iter()
                .map(|p| vec![p.date.clone(), p.amount.clone()])
                .collect();
            println!("{}", pretty_table(&["Month", "Projected"], rows));
        }
        None => println!("{UNAVAILABLE}"),
    }
}

pub fn chat_answer(answer: &ChatAnswer) {
    println!("{}", answer.message);
    if answer.rows.is_empty() {
        return;
    }

    let title = match answer.kind.as_str() {
        "vendors" => "Vendors",
        "categories" => "Categories",
        "monthly_invoices" => "Monthly Invoices",
        _ => "Results",
    };
    section(title);

    // Rows are free-form JSON objects; derive the columns from the first row.
    let headers: Vec<String> = match answer.rows.first().and_then(Value::as_object) {
        Some(obj) => obj.keys().cloned().collect(),
        None => return,
    };

    let rows: Vec<Vec<String>> = answer
        .rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|h| match row.get(h) {
                    Some(Value::String(s)) => s.clone(),
                    Some(v) => v.to_string(),
                    None => String::new(),
                })
                .collect()
        })
        .collect();

    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    println!("{}", pretty_table(&header_refs, rows));
}
