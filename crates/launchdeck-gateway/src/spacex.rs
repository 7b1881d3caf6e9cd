//! GraphQL client for the SpaceX launch API

use std::fmt;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use launchdeck_core::prelude::*;
use launchdeck_core::{LaunchId, LaunchPage, LaunchRecord, SearchQuery};

use crate::gateway::FetchGateway;
use crate::graphql::{GraphqlRequest, GraphqlResponse, LaunchData, LaunchesData};

/// Public SpaceX GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.spacex.land/graphql/";

const USER_AGENT: &str = concat!("launchdeck/", env!("CARGO_PKG_VERSION"));

/// Reads launches from a GraphQL endpoint.
#[derive(Clone)]
pub struct SpacexClient {
    http: Client,
    endpoint: Url,
}

impl fmt::Debug for SpacexClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpacexClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl SpacexClient {
    /// Build a client for `endpoint`.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::config(format!("Invalid endpoint '{}': {}", endpoint, e)))?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: &GraphqlRequest,
    ) -> std::result::Result<T, TransportError> {
        debug!(endpoint = %self.endpoint, variables = %request.variables, "GraphQL request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("GraphQL request failed: {}", e);
                TransportError::new(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        // GraphQL servers report errors in the body even on non-2xx statuses;
        // prefer that message when the body parses.
        let envelope: GraphqlResponse<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Unparseable GraphQL response ({}): {}", status, e);
                let message = if status.is_success() {
                    format!("Invalid response from launch service: {}", e)
                } else {
                    format!("Launch service returned HTTP {}", status)
                };
                return Err(TransportError::new(message));
            }
        };

        if let Some(first) = envelope.errors.into_iter().next() {
            warn!("GraphQL error: {}", first.message);
            return Err(TransportError::new(first.message));
        }

        if !status.is_success() {
            return Err(TransportError::new(format!(
                "Launch service returned HTTP {}",
                status
            )));
        }

        envelope
            .data
            .ok_or_else(|| TransportError::new("Launch service returned no data"))
    }
}

impl FetchGateway for SpacexClient {
    async fn list_launches(
        &self,
        query: &SearchQuery,
    ) -> std::result::Result<LaunchPage, TransportError> {
        let data: LaunchesData = self.execute(&GraphqlRequest::launches(query)).await?;
        let page = match data.launches_past_result {
            Some(result) => result.into_page()?,
            None => LaunchPage::default(),
        };
        debug!(
            "Fetched {} launches ({} total) for {}",
            page.items.len(),
            page.total_count,
            query
        );
        Ok(page)
    }

    async fn get_launch(
        &self,
        id: &LaunchId,
    ) -> std::result::Result<Option<LaunchRecord>, TransportError> {
        let data: LaunchData = self.execute(&GraphqlRequest::launch(id)).await?;
        data.launch.map(|dto| dto.into_record()).transpose()
    }
}
