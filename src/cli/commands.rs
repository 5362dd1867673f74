use std::io::{self, BufRead, Write};

use crate::app::{AppContext, FeedshipError, Result};

const RULE: &str = "============================================================";

pub fn print_banner() {
    println!("{RULE}");
    println!("YouTube Channel RSS Feed Extractor");
    println!("{RULE}");
}

/// URL from the CLI argument, or an interactive prompt when absent.
///
/// Input that is empty after trimming is fatal.
pub fn read_url(arg: Option<String>) -> Result<String> {
    let raw = match arg {
        Some(url) => url,
        None => {
            print!("Enter YouTube channel URL: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };

    let url = raw.trim().to_string();
    if url.is_empty() {
        return Err(FeedshipError::EmptyInput);
    }

    Ok(url)
}

pub async fn resolve(ctx: &AppContext, url: &str) {
    ctx.reporter.info(&format!("Processing URL: {url}"));
    let rss_url = ctx.resolver.resolve(url).await;

    println!("\n{RULE}");
    match rss_url {
        Some(rss_url) => {
            println!("\n✅ RSS Feed URL: {rss_url}");
            println!("\nYou can use this RSS URL with any RSS reader to get updates");
            println!("from this YouTube channel.");
        }
        None => {
            // Advisory list; not derived from which branch actually failed.
            println!("\n❌ Failed to extract RSS URL.");
            println!("\nPossible reasons:");
            println!("- The channel might not exist or be unavailable");
            println!("- The channel might have restrictions");
            println!("- YouTube might have changed their page structure");
            println!("- There might be a network issue");
        }
    }
    println!("{RULE}");
}
