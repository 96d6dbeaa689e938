//! Data sources for the search session.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ListResponse;

// == Client Error ==
/// Failure fetching a page of advocates.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport or decoding failure
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Failed to fetch advocates: {0}")]
    Status(u16),
}

// == Source Trait ==
/// Anything that can answer a list query.
#[async_trait]
pub trait AdvocateSource: Send + Sync {
    async fn fetch_page(
        &self,
        query: &str,
        page: u32,
        limit: u32,
    ) -> Result<ListResponse, ClientError>;
}

// == HTTP Source ==
/// Fetches pages from a running directory server.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Creates a source for the server at `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn list_url(&self) -> String {
        format!("{}/api/advocates", self.base_url)
    }
}

#[async_trait]
impl AdvocateSource for HttpSource {
    async fn fetch_page(
        &self,
        query: &str,
        page: u32,
        limit: u32,
    ) -> Result<ListResponse, ClientError> {
        let mut params: Vec<(&str, String)> = Vec::with_capacity(3);
        if !query.is_empty() {
            params.push(("searchQuery", query.to_string()));
        }
        params.push(("page", page.to_string()));
        params.push(("limit", limit.to_string()));

        let response = self.client.get(self.list_url()).query(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        Ok(response.json::<ListResponse>().await?)
    }
}
