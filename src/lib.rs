//! # Feedship
//!
//! Resolve a YouTube channel URL into its RSS feed URL.
//!
//! ## Architecture
//!
//! Feedship is a single linear pipeline:
//!
//! ```text
//! CLI → Resolver → Fetcher
//!           ↓
//!        Reporter
//! ```
//!
//! - [`resolver`]: normalizes the input URL, fetches the channel page and
//!   tries an ordered list of channel-id extraction strategies
//! - [`fetcher`]: HTTP GET/HEAD with a browser user-agent and bounded timeouts
//! - [`report`]: severity-tagged diagnostics, injected so the resolver never
//!   prints directly
//!
//! ## Quick Start
//!
//! ```bash
//! # Resolve from an argument
//! feedship https://www.youtube.com/@SomeChannel
//!
//! # Or interactively
//! feedship
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`cli`]: Command-line interface definitions
//! - [`fetcher`]: HTTP fetching
//! - [`report`]: Diagnostic reporting
//! - [`resolver`]: Channel-id resolution and feed URL assembly

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all components:
/// fetcher, reporter, resolver.
pub mod app;

/// Command-line interface using clap.
///
/// `feedship [channel_url]` — prompts interactively when the argument is
/// omitted.
pub mod cli;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for page fetching
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Severity-tagged diagnostic reporting.
///
/// - [`Severity`](report::Severity): Info / Success / Warning / Error
/// - [`ConsoleReporter`](report::ConsoleReporter): colored stdout rendering
pub mod report;

/// Channel resolution.
///
/// Ordered extraction strategies over the fetched page, a URL-path fallback,
/// feed URL assembly and a best-effort HEAD verification.
pub mod resolver;
