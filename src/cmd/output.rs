use anyhow::Result;
use serde::Serialize;

use linkstash::{Bookmark, ClassificationResult, ExtractedContent};

use crate::OutputFormat;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_content(content: &ExtractedContent, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(content);
    }

    println!("🌐 Platform:  {}", content.platform);
    println!("📌 Title:     {}", content.title);
    print_field("👤 Author:   ", &content.author);
    print_field("🖼️  Thumbnail:", &content.thumbnail);
    print_field("🎬 Video:    ", &content.video_url);
    if let Some(embed) = &content.embed_url {
        print_field("🔗 Embed:    ", embed);
    }
    if !content.caption.is_empty() {
        println!("\n{}", content.caption);
    }
    Ok(())
}

pub fn print_classification(result: &ClassificationResult, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(result);
    }

    println!("📌 Title:    {}", result.title);
    println!("📂 Category: {}", result.category);
    println!("🏷️  Tags:     {}", tag_list(&result.tags));
    println!("📝 {}", result.summary);
    Ok(())
}

pub fn print_bookmark(bookmark: &Bookmark, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(bookmark);
    }

    println!("🔖 {}", bookmark.url);
    println!("   {} · {} · {}", bookmark.platform, bookmark.category, bookmark.title);
    println!("   🏷️  {}", tag_list(&bookmark.tags));
    println!("   📝 {}", bookmark.summary);
    Ok(())
}

fn print_field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("{label} {value}");
    }
}

fn tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        "none".to_string()
    } else {
        tags.join(", ")
    }
}
