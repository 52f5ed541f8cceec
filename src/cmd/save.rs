use anyhow::{bail, Result};
use futures::future::join_all;
use tracing::warn;

use linkstash::{Config, Pipeline};

use super::output::{print_bookmark, print_json};
use crate::OutputFormat;

/// Save every URL concurrently. Rejected URLs are reported, not fatal.
pub async fn cmd_save(urls: &[String], config: &Config, format: OutputFormat) -> Result<()> {
    let pipeline = Pipeline::from_config(config)?;

    let results = join_all(urls.iter().map(|url| pipeline.save(url))).await;

    let mut bookmarks = Vec::with_capacity(results.len());
    for (url, result) in urls.iter().zip(results) {
        match result {
            Ok(bookmark) => bookmarks.push(bookmark),
            Err(e) => warn!("Skipping {}: {}", url, e),
        }
    }

    if bookmarks.is_empty() {
        bail!("none of the {} URL(s) could be saved", urls.len());
    }

    match format {
        OutputFormat::Json if bookmarks.len() == 1 => print_json(&bookmarks[0]),
        OutputFormat::Json => print_json(&bookmarks),
        OutputFormat::Text => {
            for bookmark in &bookmarks {
                print_bookmark(bookmark, format)?;
            }
            Ok(())
        }
    }
}
