use std::env;

use serde::Deserialize;

use crate::{ApiError, ORS_API_URL};

#[derive(Clone, Debug)]
pub struct OrsCredentials {
    pub api_key: String,
    pub proxy: Option<String>,
}

impl OrsCredentials {
    pub fn env() -> Self {
        let api_key =
            env::var("ORS_API_KEY").expect("Expected OpenRouteService API key.");
        let proxy = env::var("ORS_PROXY").ok();

        Self { api_key, proxy }
    }
}

#[derive(Clone)]
pub struct OrsClient {
    credentials: OrsCredentials,
    client: reqwest::Client,
}

impl OrsClient {
    pub fn new(credentials: &OrsCredentials) -> Result<Self, ApiError> {
        /* build the http client with optional proxy */
        let client = if let Some(proxy_url) = &credentials.proxy {
            log::info!("Using proxy '{proxy_url}' for OpenRouteService requests.");
            reqwest::Client::builder()
                .proxy(reqwest::Proxy::all(proxy_url)?)
                .build()?
        } else {
            reqwest::Client::new()
        };

        Ok(Self {
            credentials: credentials.clone(),
            client,
        })
    }

    /// Fetch data from an endpoint using this client.
    pub(crate) async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{ORS_API_URL}/{endpoint}");
        log::debug!("Requesting endpoint '{url}'.");

        /* perform get-request */
        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.credentials.api_key)
            .header("accept", "application/json")
            .query(query)
            .send()
            .await?;

        /* parse response */
        match response.status() {
            reqwest::StatusCode::OK => Ok(response.json().await?),
            other => match response.text().await {
                Ok(val) => Err(ApiError::InvalidResponse {
                    status_code: other,
                    url,
                    response: Some(val),
                }),
                Err(_) => Err(ApiError::InvalidResponse {
                    status_code: other,
                    url,
                    response: None,
                }),
            },
        }
    }
}
