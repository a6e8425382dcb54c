use crate::fact::{FactError, FactSource};
use reqwest::Client;
use std::future::Future;
use tracing::debug;

/// HTTP client for `GET {base_url}/{number}/trivia`.
#[derive(Debug, Clone)]
pub struct NumbersApiClient {
    http: Client,
    base_url: String,
}

impl NumbersApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub async fn trivia(&self, number: i64) -> Result<String, FactError> {
        let url = fact_url(&self.base_url, number);
        debug!(%url, "requesting fact");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FactError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(String::from_utf8(body.to_vec())?)
    }
}

impl FactSource for NumbersApiClient {
    fn fetch(&self, number: i64) -> impl Future<Output = Result<String, FactError>> + Send {
        self.trivia(number)
    }
}

pub fn fact_url(base_url: &str, number: i64) -> String {
    format!("{}/{}/trivia", base_url.trim_end_matches('/'), number)
}
