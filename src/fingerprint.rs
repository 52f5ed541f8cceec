//! Crawler and browser identities.
//!
//! Social platforms server-render different markup depending on who asks.
//! Link-preview crawlers usually get the full Open Graph set (including
//! `og:video`), while anonymous browsers get a login wall. These profiles let
//! a fetch present itself as a specific crawler.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const EN_LANGUAGE: &str = "en-US,en;q=0.5";

/// Request identity: user agent plus the content-negotiation headers it sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserProfile {
    /// Short name for logs.
    pub name: &'static str,
    pub user_agent: &'static str,
    pub accept: &'static str,
    pub accept_language: &'static str,
}

/// Google's crawler. Most publishers serve it complete Open Graph markup.
pub const GOOGLEBOT: BrowserProfile = BrowserProfile {
    name: "googlebot",
    user_agent: "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
    accept: HTML_ACCEPT,
    accept_language: EN_LANGUAGE,
};

/// Facebook's link-preview crawler.
pub const FACEBOOK_CRAWLER: BrowserProfile = BrowserProfile {
    name: "facebookexternalhit",
    user_agent: "facebookexternalhit/1.1 (+http://www.facebook.com/externalhit_uatext.php)",
    accept: HTML_ACCEPT,
    accept_language: EN_LANGUAGE,
};

/// Twitter's card crawler.
pub const TWITTERBOT: BrowserProfile = BrowserProfile {
    name: "twitterbot",
    user_agent: "Twitterbot/1.0",
    accept: HTML_ACCEPT,
    accept_language: EN_LANGUAGE,
};

/// Plain desktop Chrome, used for API endpoints that reject crawler agents.
pub const DESKTOP_CHROME: BrowserProfile = BrowserProfile {
    name: "chrome",
    user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    accept: "application/json,text/html;q=0.9,*/*;q=0.8",
    accept_language: EN_LANGUAGE,
};

/// Identities tried in order when hunting for `og:video` on Instagram pages.
pub const VIDEO_DISCOVERY_PROFILES: [BrowserProfile; 4] =
    [FACEBOOK_CRAWLER, TWITTERBOT, GOOGLEBOT, DESKTOP_CHROME];

impl BrowserProfile {
    /// Convert profile to request headers.
    #[must_use]
    pub fn to_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(self.user_agent));
        headers.insert(ACCEPT, HeaderValue::from_static(self.accept));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(self.accept_language));
        headers
    }
}

impl Default for BrowserProfile {
    fn default() -> Self {
        GOOGLEBOT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_identifies_as_bot() {
        let profile = BrowserProfile::default();
        assert!(profile.user_agent.contains("Googlebot"));
    }

    #[test]
    fn headers_include_identity() {
        let headers = FACEBOOK_CRAWLER.to_headers();
        assert_eq!(
            headers.get(USER_AGENT).unwrap(),
            FACEBOOK_CRAWLER.user_agent
        );
        assert!(headers.contains_key(ACCEPT));
        assert!(headers.contains_key(ACCEPT_LANGUAGE));
    }

    #[test]
    fn video_discovery_profiles_are_distinct() {
        let names: std::collections::HashSet<_> =
            VIDEO_DISCOVERY_PROFILES.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), VIDEO_DISCOVERY_PROFILES.len());
    }
}
