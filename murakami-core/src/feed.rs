//! Fetching the provider feed and running the synthesis pipeline.
//!
//! One call makes one fetch. There is no retry, no cache, and no internal
//! timeout; callers that need bounded latency wrap the future themselves.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use reqwest::header::ACCEPT;
use tracing::{debug, info, warn};
use url::Url;

use crate::availability::expand;
use crate::config::{FeedConfig, MurakamiConfig};
use crate::error::{FeedError, FeedResult};
use crate::event::CalendarEvent;
use crate::ics::parse_feed;
use crate::pricing::PricingRules;

const CALENDAR_MIME: &str = "text/calendar";

/// Where raw calendar text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// Provider iCal endpoint. The query string carries the access token.
    Url(Url),
    /// Exported .ics file on disk
    File(PathBuf),
}

impl FeedSource {
    pub fn from_config(config: &FeedConfig) -> FeedResult<Self> {
        match (&config.url, &config.path) {
            (Some(url), None) => Ok(FeedSource::Url(url.clone())),
            (None, Some(path)) => {
                let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
                Ok(FeedSource::File(PathBuf::from(expanded)))
            }
            (Some(_), Some(_)) => Err(FeedError::Config(
                "Both feed.url and feed.path are set; choose one".into(),
            )),
            (None, None) => Err(FeedError::Config(
                "No calendar feed configured. Set feed.url (or MURAKAMI_FEED__URL)".into(),
            )),
        }
    }

    /// Safe to log: the host for URLs, never the query string.
    pub fn describe(&self) -> String {
        match self {
            FeedSource::Url(url) => url.host_str().unwrap_or("<no host>").to_string(),
            FeedSource::File(path) => path.display().to_string(),
        }
    }
}

/// Fetches a feed and turns it into availability entries.
#[derive(Clone)]
pub struct Synthesizer {
    source: FeedSource,
    pricing: PricingRules,
    client: reqwest::Client,
}

impl Synthesizer {
    pub fn new(source: FeedSource, user_agent: &str, pricing: PricingRules) -> FeedResult<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Synthesizer {
            source,
            pricing,
            client,
        })
    }

    pub fn from_config(config: &MurakamiConfig) -> FeedResult<Self> {
        let source = FeedSource::from_config(&config.feed)?;
        Self::new(source, &config.feed.user_agent, config.pricing.clone())
    }

    pub fn source(&self) -> &FeedSource {
        &self.source
    }

    pub fn pricing(&self) -> &PricingRules {
        &self.pricing
    }

    /// Raw calendar text from the source.
    pub async fn fetch_text(&self) -> FeedResult<String> {
        match &self.source {
            FeedSource::Url(url) => self.fetch_url(url).await,
            FeedSource::File(path) => {
                debug!(path = %path.display(), "Reading calendar feed from file");
                tokio::fs::read_to_string(path).await.map_err(|e| {
                    warn!(path = %path.display(), error = %e, "Failed to read calendar feed");
                    FeedError::Io(e)
                })
            }
        }
    }

    async fn fetch_url(&self, url: &Url) -> FeedResult<String> {
        let host = self.source.describe();

        // Errors are stripped of the URL so the token never reaches logs or responses
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, CALENDAR_MIME)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                warn!(%host, error = %e, "Calendar feed request failed");
                FeedError::Network(e)
            })?;

        let status = response.status();
        info!(%host, status = status.as_u16(), "Fetched calendar feed");

        if !status.is_success() {
            warn!(%host, status = status.as_u16(), "Calendar provider returned an error status");
            return Err(FeedError::HttpStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FeedError::Network(e.without_url()))
    }

    /// Fetch and parse, without expanding.
    pub async fn fetch_events(&self) -> FeedResult<Vec<CalendarEvent>> {
        let text = self.fetch_text().await?;
        Ok(parse_feed(&text))
    }

    /// Feed events plus synthesized available days for the window starting at `now`.
    pub async fn availability(&self, now: DateTime<Utc>) -> FeedResult<Vec<CalendarEvent>> {
        let events = self.fetch_events().await?;
        Ok(expand(events, now, &self.pricing))
    }
}
