use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use murakami_core::config::MurakamiConfig;
use murakami_core::fallback::mock_events;
use murakami_core::feed::Synthesizer;
use murakami_core::{CalendarEvent, FeedError, FeedResult};
use tokio::time::timeout;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    config: Arc<MurakamiConfig>,
    synthesizer: Synthesizer,
    clock: fn() -> DateTime<Utc>,
}

impl AppState {
    /// Fails at startup when no feed is configured.
    pub fn new(config: MurakamiConfig) -> FeedResult<Self> {
        let synthesizer = Synthesizer::from_config(&config)?;
        Ok(AppState {
            config: Arc::new(config),
            synthesizer,
            clock: Utc::now,
        })
    }

    #[cfg(test)]
    /// Replace the wall clock that anchors the availability window.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub fn synthesizer(&self) -> &Synthesizer {
        &self.synthesizer
    }

    /// Fetch and expand the feed for the window starting at `now`.
    ///
    /// Every call refetches. The configured timeout bounds the fetch, and
    /// the fallback data is served only when the config asks for it.
    pub async fn entries(&self, now: DateTime<Utc>) -> FeedResult<Vec<CalendarEvent>> {
        let limit = self.config.server.fetch_timeout_secs;
        let fetch = self.synthesizer.availability(now);

        let result = if limit == 0 {
            fetch.await
        } else {
            timeout(Duration::from_secs(limit), fetch)
                .await
                .unwrap_or_else(|_| Err(FeedError::Timeout(limit)))
        };

        match result {
            Err(e) if self.config.server.fallback_to_mock => {
                tracing::warn!(error = %e, "Calendar fetch failed, serving fallback data");
                Ok(mock_events(now))
            }
            other => other,
        }
    }
}
