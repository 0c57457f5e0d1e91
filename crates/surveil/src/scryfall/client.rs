use crate::prelude::*;
use futures::future::join_all;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::sync::Arc;
use surveil_core::query_set::QuerySet;
use surveil_core::resolve::{interpret_named_response, LookupOutcome, LookupResults};
use tokio::sync::Semaphore;

use super::ScryfallConfig;

const USER_AGENT: &str = concat!("surveil/", env!("CARGO_PKG_VERSION"));

/// Exact-name lookup client backed by one shared keep-alive connection pool
///
/// Cloning is cheap and every clone shares the same pool and the same
/// `max_connections` request permits, so concurrent imports wait on each other.
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    http: reqwest::Client,
    base_url: String,
    max_connections: usize,
    permits: Arc<Semaphore>,
}

impl ScryfallClient {
    pub fn new(config: &ScryfallConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .pool_max_idle_per_host(config.max_idle_connections)
            .pool_idle_timeout(config.keep_alive)
            .tcp_keepalive(config.keep_alive)
            .timeout(config.timeout)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            max_connections: config.max_connections,
            permits: Arc::new(Semaphore::new(config.max_connections)),
        })
    }

    fn named_url(&self, name: &str) -> String {
        format!(
            "{}/cards/named?exact={}",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    /// Look up a single card by exact name
    ///
    /// Never fails: transport errors and unexpected statuses become
    /// `LookupOutcome::Failed` and are logged here.
    pub async fn lookup_named(&self, name: &str) -> LookupOutcome {
        let url = self.named_url(name);

        // Held until the body is read, so the ceiling covers the whole exchange
        let _permit = match self.permits.acquire().await {
            Ok(permit) => permit,
            Err(e) => return LookupOutcome::Failed(format!("Connection pool closed: {e}")),
        };
        log::debug!("GET {url}");

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Lookup for {name:?} failed: {e}");
                return LookupOutcome::Failed(format!("Failed to fetch {name}: {e}"));
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Reading lookup response for {name:?} failed: {e}");
                return LookupOutcome::Failed(format!("Failed to read response for {name}: {e}"));
            }
        };

        let outcome = interpret_named_response(status, &body);
        match &outcome {
            LookupOutcome::Found(_) => log::debug!("Resolved {name:?}"),
            LookupOutcome::NotFound => log::debug!("No exact match for {name:?}"),
            LookupOutcome::Failed(reason) => log::warn!("Lookup for {name:?} failed: {reason}"),
        }

        outcome
    }

    /// Look up every name in the set, at most once each
    ///
    /// Names are queued on a channel and drained by at most `max_connections`
    /// workers. The client-wide permits in `lookup_named` cap requests in flight
    /// across every concurrent call. Each worker keeps its own results; they are
    /// merged into the completion map only after all workers finish. Dropping the
    /// returned future abandons in-flight lookups and leaves queued names unsent.
    pub async fn lookup_all(&self, names: &QuerySet) -> LookupResults {
        if names.is_empty() {
            return LookupResults::new();
        }

        let (sender, receiver) = async_channel::unbounded::<String>();
        for name in names.names() {
            if sender.try_send(name.clone()).is_err() {
                break;
            }
        }
        sender.close();

        let worker_count = self.max_connections.min(names.len());
        let workers = (0..worker_count).map(|_| {
            let receiver = receiver.clone();
            async move {
                let mut completed = Vec::new();
                while let Ok(name) = receiver.recv().await {
                    let outcome = self.lookup_named(&name).await;
                    completed.push((name, outcome));
                }
                completed
            }
        });

        join_all(workers).await.into_iter().flatten().collect()
    }
}
