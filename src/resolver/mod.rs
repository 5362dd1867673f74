pub mod extract;

use std::sync::Arc;

use crate::app::FeedshipError;
use crate::fetcher::Fetcher;
use crate::report::Reporter;

/// Canonical per-channel syndication endpoint.
pub const FEED_BASE: &str = "https://www.youtube.com/feeds/videos.xml";

/// Resolves a channel URL to its RSS feed URL.
///
/// Every failure is reported through the injected [`Reporter`] and collapses
/// to `None`; no error escapes to the caller.
pub struct ChannelResolver {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    reporter: Arc<dyn Reporter>,
}

impl ChannelResolver {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, reporter: Arc<dyn Reporter>) -> Self {
        Self { fetcher, reporter }
    }

    pub async fn resolve(&self, raw: &str) -> Option<String> {
        self.reporter
            .info(&format!("Starting RSS extraction for: {raw}"));

        let url = normalize_url(raw);
        if url != raw {
            self.reporter
                .warning(&format!("Added https:// prefix: {url}"));
        }

        if !url.contains("youtube.com") && !url.contains("youtu.be") {
            self.reporter
                .error("URL doesn't appear to be a YouTube URL");
            return None;
        }

        self.reporter.info("Making request to YouTube...");
        let page = match self.fetcher.get(&url).await {
            Ok(page) => page,
            Err(err) => {
                self.reporter.error(&transport_message(&err));
                return None;
            }
        };
        self.reporter
            .info(&format!("Received response: HTTP {}", page.status));

        if page.status != 200 {
            self.reporter.error(&format!(
                "Failed to retrieve page. Status code: {}",
                page.status
            ));
            return None;
        }

        self.reporter.info("Searching for channel ID...");
        let mut channel_id = None;
        for (source, strategy) in extract::STRATEGIES {
            if let Some(id) = strategy(&page.body) {
                self.reporter
                    .success(&format!("Found channel ID in {source}: {id}"));
                channel_id = Some(id);
                break;
            }
        }

        let channel_id = match channel_id {
            Some(id) => id,
            None => {
                self.reporter
                    .error("Could not find channel ID using any method");
                match extract::channel_id_from_url(&url) {
                    Some(id) => {
                        self.reporter
                            .warning(&format!("Extracted channel ID from URL: {id}"));
                        id
                    }
                    None => {
                        self.reporter
                            .error("No channel ID found. The channel might have restrictions.");
                        return None;
                    }
                }
            }
        };

        let rss_url = feed_url(&channel_id);
        self.reporter
            .success(&format!("Generated RSS URL: {rss_url}"));

        // Best-effort probe: the assembled URL is returned no matter what
        // the verification says.
        self.reporter.info("Verifying RSS feed...");
        match self.fetcher.head(&rss_url).await {
            Ok(200) => self.reporter.success("RSS feed verified successfully!"),
            Ok(status) => self
                .reporter
                .warning(&format!("RSS feed returned status code: {status}")),
            Err(err) => self
                .reporter
                .warning(&format!("Could not verify RSS feed: {err}")),
        }

        Some(rss_url)
    }
}

/// Prefix bare host/path inputs with `https://`.
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// Deterministic feed URL for a resolved channel id.
pub fn feed_url(channel_id: &str) -> String {
    format!("{FEED_BASE}?channel_id={channel_id}")
}

fn transport_message(err: &FeedshipError) -> String {
    match err {
        FeedshipError::Http(e) if e.is_timeout() => {
            "Request timed out. The server might be slow or unresponsive.".into()
        }
        FeedshipError::Http(e) if e.is_connect() => {
            "Connection error. Please check your internet connection.".into()
        }
        err => format!("Request failed: {err}"),
    }
}
