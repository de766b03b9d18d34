use crate::model::MachineRecord;
use reqwest::Client;
use thiserror::Error;

/// Any failure of a single machines fetch. All variants are handled the same
/// way by the dashboard; the split only matters for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("malformed machines payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// HTTP client for the machines endpoint.
#[derive(Clone)]
pub struct MachinesClient {
    client: Client,
    url: String,
}

impl MachinesClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issues one GET and parses the body as a list of machines.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, non-success status or a
    /// body that is not a JSON array of machine records.
    pub async fn fetch_machines(&self) -> Result<Vec<MachineRecord>, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
