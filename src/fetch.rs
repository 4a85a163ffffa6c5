//! Outbound HTTP client for the stats provider.

use crate::stats::{classify_response, FetchError, UserStats};
use std::sync::mpsc;

/// Public stats provider; the username is appended as the only path segment.
const STATS_ENDPOINT: &str = "https://leetcode-stats-api.herokuapp.com";

/// Completed fetch, tagged with the sequence number of the request that
/// produced it so the UI can discard responses superseded by a later fetch.
pub struct FetchOutcome {
    pub seq: u64,
    pub result: Result<UserStats, FetchError>,
}

/// Issues one GET per trigger on a worker thread and reports back over an
/// mpsc channel drained by the UI event loop. Requests are never aborted;
/// stale ones are filtered out on arrival by their sequence number.
pub struct FetchClient {
    agent: ureq::Agent,
    tx: mpsc::Sender<FetchOutcome>,
    next_seq: u64,
}

impl FetchClient {
    pub fn new(tx: mpsc::Sender<FetchOutcome>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(std::time::Duration::from_secs(30))
            .build();
        Self {
            agent,
            tx,
            next_seq: 0,
        }
    }

    /// Dispatch a fetch for `username` (sent verbatim, empty string included)
    /// and return its sequence number.
    pub fn dispatch(&mut self, username: &str) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        let url = format!("{}/{}", STATS_ENDPOINT, username);
        let agent = self.agent.clone();
        let tx = self.tx.clone();

        log::info!("Fetching stats (request #{}): {}", seq, url);
        std::thread::spawn(move || {
            let result = fetch_user_stats(&agent, &url);
            // Receiver gone means the app is shutting down
            let _ = tx.send(FetchOutcome { seq, result });
        });
        seq
    }
}

fn fetch_user_stats(agent: &ureq::Agent, url: &str) -> Result<UserStats, FetchError> {
    let body = match agent.get(url).call() {
        Ok(response) => response.into_string().map_err(|e| {
            log::error!("Failed to read response body: {}", e);
            FetchError::FetchFailed
        })?,
        // Non-2xx still carries a body the provider may have classified;
        // the status field decides, same as a 200.
        Err(ureq::Error::Status(code, response)) => {
            log::debug!("Provider returned HTTP {}", code);
            response.into_string().map_err(|e| {
                log::error!("Failed to read error response body: {}", e);
                FetchError::FetchFailed
            })?
        }
        Err(e) => {
            log::error!("Transport failure: {}", e);
            return Err(FetchError::FetchFailed);
        }
    };
    classify_response(&body)
}
