use serde::Deserialize;

use qdepth_core::error::{DepthError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,

    #[serde(default)]
    pub sqs: SqsSection,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(DepthError::Config("unsupported config version".into()));
        }

        self.exporter.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(default = "default_fetch_concurrency")]
    pub fetch_concurrency: usize,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            poll_interval_ms: default_poll_interval_ms(),
            fetch_concurrency: default_fetch_concurrency(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        if !(1000..=3_600_000).contains(&self.poll_interval_ms) {
            return Err(DepthError::Config(
                "exporter.poll_interval_ms must be between 1000 and 3600000".into(),
            ));
        }
        if !(1..=1024).contains(&self.fetch_concurrency) {
            return Err(DepthError::Config(
                "exporter.fetch_concurrency must be between 1 and 1024".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:9434".into()
}
fn default_poll_interval_ms() -> u64 {
    10000
}
fn default_fetch_concurrency() -> usize {
    16
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SqsSection {
    /// AWS region override; falls back to the environment/profile chain.
    #[serde(default)]
    pub region: Option<String>,
    /// Custom service endpoint (localstack, VPC endpoint).
    #[serde(default)]
    pub endpoint_url: Option<String>,
}
