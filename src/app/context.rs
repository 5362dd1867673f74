use std::sync::Arc;

use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::report::{ConsoleReporter, Reporter};
use crate::resolver::ChannelResolver;

pub struct AppContext {
    pub reporter: Arc<dyn Reporter>,
    pub resolver: ChannelResolver,
}

impl AppContext {
    pub fn new() -> Self {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new());
        let reporter: Arc<dyn Reporter> = Arc::new(ConsoleReporter);
        let resolver = ChannelResolver::new(fetcher, reporter.clone());

        Self { reporter, resolver }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
