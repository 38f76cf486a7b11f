//! SQS-backed queue service.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sqs::config::Region;
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::types::QueueAttributeName;
use aws_sdk_sqs::Client;

use qdepth_core::depth::{QueueRef, RawAttributes};
use qdepth_core::error::{DepthError, Result};

use crate::config::SqsSection;
use crate::service::{AttributeFetcher, QueueDirectory};

/// Queue service client backed by the AWS SDK.
///
/// Credentials come from the default provider chain (env, profile,
/// instance metadata); the config section can pin a region or point at a
/// custom endpoint. Request timeouts are the SDK client's own defaults,
/// the collection core adds none.
pub struct SqsQueueService {
    client: Client,
}

impl SqsQueueService {
    pub async fn connect(cfg: &SqsSection) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &cfg.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &cfg.endpoint_url {
            loader = loader.endpoint_url(endpoint.clone());
        }
        let shared = loader.load().await;
        Self {
            client: Client::new(&shared),
        }
    }
}

#[async_trait]
impl QueueDirectory for SqsQueueService {
    /// Single `ListQueues` call; only the first page of results is
    /// observed.
    async fn list(&self) -> Result<Vec<QueueRef>> {
        let resp = self
            .client
            .list_queues()
            .send()
            .await
            .map_err(|e| DepthError::Discovery(format!("{}", DisplayErrorContext(&e))))?;

        let urls = resp.queue_urls();
        if urls.is_empty() {
            return Err(DepthError::Discovery("service returned no queue urls".into()));
        }

        Ok(urls.iter().map(|u| QueueRef::from_url(u.as_str())).collect())
    }
}

#[async_trait]
impl AttributeFetcher for SqsQueueService {
    async fn fetch(&self, queue: &QueueRef) -> Result<RawAttributes> {
        let resp = self
            .client
            .get_queue_attributes()
            .queue_url(&queue.url)
            .attribute_names(QueueAttributeName::ApproximateNumberOfMessages)
            .attribute_names(QueueAttributeName::ApproximateNumberOfMessagesDelayed)
            .attribute_names(QueueAttributeName::ApproximateNumberOfMessagesNotVisible)
            .send()
            .await
            .map_err(|e| DepthError::Fetch {
                queue: queue.name.clone(),
                reason: format!("{}", DisplayErrorContext(&e)),
            })?;

        let attrs = resp
            .attributes()
            .map(|m| {
                m.iter()
                    .map(|(k, v)| (k.as_str().to_string(), v.clone()))
                    .collect()
            })
            .unwrap_or_default();

        Ok(attrs)
    }

    async fn tags(&self, queue: &QueueRef) -> Result<HashMap<String, String>> {
        let resp = self
            .client
            .list_queue_tags()
            .queue_url(&queue.url)
            .send()
            .await
            .map_err(|e| DepthError::Fetch {
                queue: queue.name.clone(),
                reason: format!("{}", DisplayErrorContext(&e)),
            })?;

        Ok(resp.tags().cloned().unwrap_or_default())
    }
}
