use anyhow::Result;
use clap::Args;

use linkstash::{Classifier, ClassifyInput, Config, Platform};

use super::output::print_classification;
use crate::OutputFormat;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Content title
    #[arg(long, default_value = "")]
    pub title: String,

    /// Caption or description text
    #[arg(long, default_value = "")]
    pub caption: String,

    /// Source platform (instagram, twitter, youtube, article)
    #[arg(long, default_value = "article")]
    pub platform: String,

    /// Author handle or name
    #[arg(long, default_value = "")]
    pub author: String,

    /// Source URL
    #[arg(long, default_value = "")]
    pub url: String,
}

pub async fn cmd_classify(args: &ClassifyArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let classifier = Classifier::from_config(config)?;

    let input = ClassifyInput {
        title: args.title.clone(),
        caption: args.caption.clone(),
        platform: Platform::from_name(&args.platform),
        author: args.author.clone(),
        url: args.url.clone(),
    };

    let result = classifier.classify(&input).await;
    print_classification(&result, format)
}
