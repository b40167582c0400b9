//! HTTP client for a Directus-style CMS.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::{join_url, ContentSource};
use crate::config::Config;
use crate::errors::AppError;
use crate::models::{AnnouncementInfo, HackingTime, ScheduleItem, Sponsor, WifiInfo};

/// Every CMS item response wraps its payload in `data`.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// CMS reader backed by `reqwest`.
#[derive(Clone)]
pub struct HttpCms {
    client: Client,
    base_url: String,
}

impl HttpCms {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, &config.cms_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Fetch `/items/{collection}` and unwrap its `data` field.
    async fn read_items<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let url = join_url(&self.base_url, &format!("items/{}", collection));

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                resource: collection.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let envelope: DataEnvelope<T> = serde_json::from_slice(&body)?;
        Ok(envelope.data)
    }

    /// Fetch a collection, decoding each record on its own.
    async fn read_records<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, AppError> {
        let records: Option<Vec<Value>> = self.read_items(collection, query).await?;
        Ok(decode_records(collection, records.unwrap_or_default()))
    }
}

/// Decode collection records, skipping the ones that do not fit the model.
pub(crate) fn decode_records<T: DeserializeOwned>(collection: &str, records: Vec<Value>) -> Vec<T> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!("Skipping {} record {}: {}", collection, index, e);
                None
            }
        })
        .collect()
}

#[async_trait]
impl ContentSource for HttpCms {
    async fn sponsors(&self) -> Result<Vec<Sponsor>, AppError> {
        self.read_records("sponsors", &[]).await
    }

    async fn schedule(&self) -> Result<Vec<ScheduleItem>, AppError> {
        self.read_records("schedule", &[("sort", "start")]).await
    }

    async fn wifi(&self) -> Result<Option<WifiInfo>, AppError> {
        self.read_items("wifi", &[]).await
    }

    async fn hacking_time(&self) -> Result<Option<HackingTime>, AppError> {
        self.read_items("hackingtime", &[]).await
    }

    async fn announcement(&self) -> Result<Option<AnnouncementInfo>, AppError> {
        self.read_items("announcement", &[]).await
    }
}
