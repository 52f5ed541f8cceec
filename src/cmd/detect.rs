use anyhow::Result;
use serde_json::json;

use linkstash::platform::{detect, is_instagram_reel};

use super::output::print_json;
use crate::OutputFormat;

pub fn cmd_detect(url: &str, format: OutputFormat) -> Result<()> {
    let platform = detect(url);

    match format {
        OutputFormat::Json => print_json(&json!({
            "url": url,
            "platform": platform,
            "reel": is_instagram_reel(url),
        })),
        OutputFormat::Text => {
            println!("{platform}");
            Ok(())
        }
    }
}
