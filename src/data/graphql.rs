//! Minimal GraphQL-over-HTTP client.
//!
//! Sends `{query, variables}` as a JSON POST and maps every way the exchange
//! can fail onto [`CountryError`]:
//!
//! | Failure                          | Error                 |
//! |----------------------------------|-----------------------|
//! | request not sent / body not read | `Network`             |
//! | non-2xx status                   | `Network` (HTTP ...)  |
//! | body is not the expected JSON    | `Protocol`            |
//! | `errors` array present           | `Protocol`            |
//! | no `data`                        | `Protocol`            |

use std::time::Duration;

use log::{debug, info, warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::CountryError;

#[derive(Serialize, Debug)]
struct GraphQlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize, Debug)]
struct GraphQlResponse<D> {
    data: Option<D>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Deserialize, Debug)]
struct GraphQlErrorEntry {
    message: String,
}

pub struct GraphQlClient {
    endpoint: String,
    client: reqwest::Client,
}

impl GraphQlClient {
    pub fn new(
        endpoint: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, CountryError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| CountryError::Unknown(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Executes one query and deserializes its `data` member into `D`.
    pub async fn execute<V, D>(&self, query: &str, variables: V) -> Result<D, CountryError>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        let request = GraphQlRequest { query, variables };
        info!("GraphQL request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| CountryError::Network(format!("Network error: {e}")))?;

        let status = response.status();
        debug!("GraphQL response status: {status}");

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("GraphQL HTTP error: {} - {}", status.as_u16(), body);
            return Err(CountryError::Network(format!(
                "HTTP error: {} - {}",
                status.as_u16(),
                body
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CountryError::Network(format!("Network error: {e}")))?;
        debug!("GraphQL response body: {} bytes", body.len());

        let parsed: GraphQlResponse<D> = serde_json::from_slice(&body)
            .map_err(|e| CountryError::Protocol(format!("Malformed GraphQL response: {e}")))?;

        if !parsed.errors.is_empty() {
            let message = parsed
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            warn!("GraphQL errors: {message}");
            return Err(CountryError::Protocol(message));
        }

        parsed
            .data
            .ok_or_else(|| CountryError::Protocol("No data received from server".to_string()))
    }
}
