//! # URL Probe Service
//!
//! Checks whether a list of URLs responds, on behalf of the frontend's URL checker.
//! Probing never fails as a whole: every URL yields a [`UrlStatus`], with a
//! `status_code` of `0` when no response was received.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, info, instrument};

use crate::models::UrlStatus;
use crate::utils::constant::URL_PROBE_TIMEOUT;

/// Trait for probing a single URL
#[async_trait]
pub trait UrlProber: Send + Sync {
    async fn probe(&self, url: &str) -> UrlStatus;
}

/// Probes URLs with a plain HTTP GET
pub struct HttpUrlProber {
    http_client: reqwest::Client,
}

impl HttpUrlProber {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(URL_PROBE_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl UrlProber for HttpUrlProber {
    #[instrument(skip(self))]
    async fn probe(&self, url: &str) -> UrlStatus {
        match self.http_client.get(url).send().await {
            Ok(response) => {
                let status_code = response.status().as_u16();
                debug!(status_code, "URL responded");
                UrlStatus::from_response(url, status_code)
            }
            Err(e) => {
                debug!(error = %e, "URL probe failed");
                UrlStatus::unreachable(url, e)
            }
        }
    }
}

/// Probes every URL concurrently, returning results in input order.
#[instrument(skip_all, fields(count = urls.len()))]
pub async fn check_urls(prober: &dyn UrlProber, urls: &[String]) -> Vec<UrlStatus> {
    let results = join_all(urls.iter().map(|url| prober.probe(url))).await;

    let reachable = results.iter().filter(|r| r.status_code != 0).count();
    info!(reachable, total = results.len(), "URL check completed");
    results
}
