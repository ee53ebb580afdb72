//! JSearch client — free-text job lookup via the RapidAPI JSearch endpoint.
//!
//! Pagination is fixed to page 1 / 1 page. A non-success HTTP status yields an
//! empty listing list rather than an error (the lookup is best-effort).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Capability seam for job search: query + location in, listings out.
#[async_trait]
pub trait JobSearch: Send + Sync {
    async fn search(&self, query: &str, location: &str) -> Result<Vec<JobListing>, reqwest::Error>;
}

/// A single listing as returned by the upstream API. All fields optional —
/// the upstream schema is not under our control.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub employer_name: Option<String>,
    #[serde(default)]
    pub job_city: Option<String>,
    #[serde(default)]
    pub job_country: Option<String>,
    #[serde(default)]
    pub job_employment_type: Option<String>,
    #[serde(default)]
    pub job_apply_link: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JSearchResponse {
    #[serde(default)]
    data: Vec<JobListing>,
}

/// Production JSearch client. API key and host come from `Config`, injected at
/// construction time.
#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    api_key: String,
    host: String,
}

impl JSearchClient {
    pub fn new(api_key: String, host: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            host,
        }
    }
}

#[async_trait]
impl JobSearch for JSearchClient {
    async fn search(&self, query: &str, location: &str) -> Result<Vec<JobListing>, reqwest::Error> {
        let url = format!("https://{}/search", self.host);
        let combined = if location.is_empty() {
            query.to_string()
        } else {
            format!("{query} {location}")
        };

        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.host)
            .query(&[("query", combined.as_str()), ("page", "1"), ("num_pages", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("Job search returned {}; degrading to empty list", response.status());
            return Ok(Vec::new());
        }

        let body: JSearchResponse = response.json().await?;
        Ok(body.data)
    }
}
