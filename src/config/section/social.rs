//! `[[social_links]]` entries: icon links in the navigation bar.
//!
//! # Example
//!
//! ```toml
//! [[social_links]]
//! icon = "github"
//! link = "https://github.com/example/dida365-api"
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::nav::check_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Icon identifiers the renderer ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Gitee,
    Discord,
    X,
    Twitter,
    Mastodon,
    Youtube,
    Linkedin,
    Slack,
    Facebook,
    Instagram,
    Npm,
}

impl SocialIcon {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitee => "gitee",
            Self::Discord => "discord",
            Self::X => "x",
            Self::Twitter => "twitter",
            Self::Mastodon => "mastodon",
            Self::Youtube => "youtube",
            Self::Linkedin => "linkedin",
            Self::Slack => "slack",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Npm => "npm",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

impl SocialLink {
    pub const FIELD: FieldPath = FieldPath::new("social_links");

    pub fn new(icon: SocialIcon, link: impl Into<String>) -> Self {
        Self {
            icon,
            link: link.into(),
        }
    }

    /// Validate every link is a full URL and each icon appears once.
    pub fn validate_all(links: &[Self], diag: &mut ConfigDiagnostics) {
        let mut icons = FxHashSet::default();
        for (i, social) in links.iter().enumerate() {
            let field = Self::FIELD.index(i);

            if let Err(message) = check_http_url(&social.link) {
                diag.error_with_hint(
                    field.field("link"),
                    message,
                    "use format like https://github.com/owner/repo",
                );
            }
            if !icons.insert(social.icon) {
                diag.error(
                    field.field("icon"),
                    format!("icon '{}' is used more than once", social.icon.as_str()),
                );
            }
        }
    }
}
