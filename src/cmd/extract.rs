use std::time::Instant;

use anyhow::Result;
use tracing::info;

use linkstash::{Config, ExtractorRouter};

use super::output::print_content;
use crate::OutputFormat;

pub async fn cmd_extract(url: &str, config: &Config, format: OutputFormat) -> Result<()> {
    let router = ExtractorRouter::from_config(config)?;

    let start = Instant::now();
    let content = router.extract(url).await;
    info!("Extracted in {:.0}ms", start.elapsed().as_secs_f64() * 1000.0);

    print_content(&content, format)
}
