//! Thin HTTP client over the dashboard API.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct Stats {
    #[serde(rename = "totalSpendYTD")]
    pub total_spend_ytd: String,
    #[serde(rename = "totalInvoices")]
    pub total_invoices: u64,
    #[serde(rename = "documentsUploaded")]
    pub documents_uploaded: u64,
    #[serde(rename = "averageInvoiceValue")]
    pub average_invoice_value: String,
}

#[derive(Debug, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    #[serde(rename = "invoiceCount")]
    pub invoice_count: u64,
    #[serde(rename = "invoiceSum")]
    pub invoice_sum: String,
}

#[derive(Debug, Deserialize)]
pub struct VendorSpend {
    pub vendor: String,
    pub spend: String,
}

#[derive(Debug, Deserialize)]
pub struct CategorySpend {
    pub category: String,
    pub spend: String,
}

#[derive(Debug, Deserialize)]
pub struct OutflowPoint {
    pub date: String,
    pub amount: String,
}

#[derive(Debug, Deserialize)]
pub struct ForecastPoint {
    pub date: String,
    pub amount: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatAnswer {
    pub kind: String,
    pub message: String,
    #[serde(default)]
    pub rows: Vec<Value>,
}

/// Everything the `show` view renders. Each widget's data is optional so
/// one failed endpoint never blanks the rest.
#[derive(Debug, Default)]
pub struct Dashboard {
    pub stats: Option<Stats>,
    pub trend: Option<Vec<TrendPoint>>,
    pub vendors: Option<Vec<VendorSpend>>,
    pub categories: Option<Vec<CategorySpend>>,
    pub outflow: Option<Vec<OutflowPoint>>,
    pub forecast: Option<Vec<ForecastPoint>>,
}

pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one endpoint, settling to `None` (with a warning) on failure.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let url = format!("{}{}", self.base, path);
        let result = async {
            let res = self.http.get(&url).send().await?.error_for_status()?;
            res.json::<T>().await
        }
        .await;

        match result {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!(url, error = %e, "widget fetch failed");
                None
            }
        }
    }

    pub async fn fetch_dashboard(&self) -> Dashboard {
        let (stats, trend, vendors, categories, outflow, forecast) = tokio::join!(
            self.get_json::<Stats>("/stats"),
            self.get_json::<Vec<TrendPoint>>("/invoice-trends"),
            self.get_json::<Vec<VendorSpend>>("/vendors/top10"),
            self.get_json::<Vec<CategorySpend>>("/category-spend"),
            self.get_json::<Vec<OutflowPoint>>("/cash-outflow"),
            self.get_json::<Vec<ForecastPoint>>("/forecast"),
        );

        Dashboard {
            stats,
            trend,
            vendors,
            categories,
            outflow,
            forecast,
        }
    }

    pub async fn chat(&self, question: &str) -> Result<ChatAnswer> {
        let url = format!("{}/chat-with-data", self.base);
        let res = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "question": question }))
            .send()
            .await
            .with_context(|| format!("POST {url} failed"))?
            .error_for_status()
            .context("chat endpoint returned an error")?;
        res.json().await.context("invalid chat response body")
    }
}
