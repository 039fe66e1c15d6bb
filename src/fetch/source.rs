use crate::core::error::FetchError;
use crate::core::routes::USERS_PATH;
use crate::models::user::UserRecord;
use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use std::sync::Arc;

/// A producer of the current user record sequence.
///
/// Presentation code is written against this capability only; whether the
/// records come from the in-process constant or over HTTP is the hosting
/// route's choice.
#[async_trait]
pub trait UserSource {
    async fn produce(&self) -> Result<Vec<UserRecord>, FetchError>;
}

/// Reads the record sequence straight out of shared state, no I/O.
pub struct DirectSource {
    records: Arc<Vec<UserRecord>>,
}

impl DirectSource {
    pub fn new(records: Arc<Vec<UserRecord>>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl UserSource for DirectSource {
    async fn produce(&self) -> Result<Vec<UserRecord>, FetchError> {
        Ok(self.records.as_ref().clone())
    }
}

/// Fetches the record sequence from the retrieval endpoint over HTTP.
///
/// Every invocation re-requests: the request carries `Cache-Control:
/// no-store` so no intermediary serves a stale copy. The client is built
/// without a timeout, so the call blocks until the endpoint's simulated
/// latency elapses (or indefinitely, if the endpoint hangs).
pub struct RemoteSource {
    client: reqwest::Client,
    users_url: String,
}

impl RemoteSource {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            users_url: format!("{}{}", base_url.trim_end_matches('/'), USERS_PATH),
        })
    }

    /// The full URL this source requests
    pub fn users_url(&self) -> &str {
        &self.users_url
    }
}

#[async_trait]
impl UserSource for RemoteSource {
    async fn produce(&self) -> Result<Vec<UserRecord>, FetchError> {
        let response = self
            .client
            .get(&self.users_url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: self.users_url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus { status });
        }

        response
            .json::<Vec<UserRecord>>()
            .await
            .map_err(FetchError::Decode)
    }
}
