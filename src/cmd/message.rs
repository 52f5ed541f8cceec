use anyhow::Result;

use linkstash::{Config, Pipeline};

pub async fn cmd_message(text: &str, config: &Config) -> Result<()> {
    let pipeline = Pipeline::from_config(config)?;
    let reply = pipeline.reply_to(text, &config.frontend_url).await;
    println!("{reply}");
    Ok(())
}
