//! yt-dlp bridge for direct media URLs
//!
//! Spawns `yt-dlp -g` and reads the resolved stream URL from stdout. The
//! binary is located once per process; a missing binary, a non-zero exit and
//! the 30 second timeout all resolve to `None`.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use super::MediaResolver;

/// Hard limit on a single yt-dlp invocation.
pub const YTDLP_TIMEOUT: Duration = Duration::from_secs(30);

/// Prefer a progressive mp4; fall back to whatever is best.
const FORMAT: &str = "best[ext=mp4]/best";

/// yt-dlp-based media resolver
#[derive(Debug, Default)]
pub struct YtDlpResolver {
    /// Explicit binary path; `None` means search `PATH` on first use
    configured_path: Option<PathBuf>,
    resolved_path: OnceLock<Option<PathBuf>>,
}

impl YtDlpResolver {
    /// Resolver that searches `PATH` for `yt-dlp` on first use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify custom yt-dlp binary path
    #[must_use]
    pub fn with_binary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.configured_path = Some(path.into());
        self
    }

    fn binary(&self) -> Option<&PathBuf> {
        self.resolved_path
            .get_or_init(|| match &self.configured_path {
                Some(path) => Some(path.clone()),
                None => which::which("yt-dlp").ok(),
            })
            .as_ref()
    }

    fn build_args(url: &str) -> Vec<String> {
        vec![
            "-f".to_string(),
            FORMAT.to_string(),
            "-g".to_string(),
            "--no-warnings".to_string(),
            "--no-playlist".to_string(),
            url.to_string(),
        ]
    }
}

#[async_trait]
impl MediaResolver for YtDlpResolver {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    async fn resolve(&self, url: &str) -> Option<String> {
        let Some(binary) = self.binary() else {
            debug!("yt-dlp not found on PATH, skipping");
            return None;
        };

        let child = Command::new(binary)
            .args(Self::build_args(url))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(YTDLP_TIMEOUT, child).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                warn!("Failed to run {}: {}", binary.display(), e);
                return None;
            }
            Err(_) => {
                warn!("yt-dlp timed out after {:?} for {}", YTDLP_TIMEOUT, url);
                return None;
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("yt-dlp failed for {}: {}", url, stderr.trim());
            return None;
        }

        parse_stream_url(&String::from_utf8_lossy(&output.stdout))
    }
}

/// First `http(s)` line of `yt-dlp -g` output.
fn parse_stream_url(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("http://") || line.starts_with("https://"))
        .map(String::from)
}
