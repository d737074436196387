//! Site configuration: title, header/footer layout, social links and the
//! copy button's icons.
//!
//! The TOML file is embedded at compile time so the server render and the
//! hydrated client always see the same values.

use anyhow::{Context, Result};
use leptos::logging::warn;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

const EMBEDDED: &str = include_str!("../site.toml");

/// Process-wide configuration, parsed on first use.
pub static CONFIG: LazyLock<SiteConfig> =
    LazyLock::new(|| SiteConfig::embedded().expect("embedded site.toml is invalid"));

// ── TOML shape ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<SocialImage>,
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub footer: FooterConfig,
    #[serde(default)]
    pub socials: BTreeMap<String, SocialEntry>,
    #[serde(default)]
    pub prose: ProseConfig,
}

/// Preview image for link unfurls.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialImage {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPosition {
    Left,
    Center,
    #[default]
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterAlignment {
    None,
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeaderConfig {
    #[serde(default)]
    pub position: HeaderPosition,
    #[serde(default)]
    pub logo: Option<LogoConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogoConfig {
    pub path: String,
    /// Leave empty to use `path` in dark mode too.
    #[serde(default)]
    pub path_dark: Option<String>,
    #[serde(default)]
    pub alt: String,
}

impl LogoConfig {
    pub fn dark_path(&self) -> &str {
        match self.path_dark.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => &self.path,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FooterConfig {
    #[serde(default)]
    pub credits: CreditsConfig,
    #[serde(default = "default_true")]
    pub navigation: bool,
    #[serde(default)]
    pub alignment: FooterAlignment,
    /// Shown before the social links. Empty disables it.
    #[serde(default)]
    pub message: Option<String>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            credits: CreditsConfig::default(),
            navigation: true,
            alignment: FooterAlignment::default(),
            message: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreditsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub repository: Option<String>,
}

/// A social entry is either a bare handle on a known platform or a full link.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SocialEntry {
    Handle(String),
    Link(SocialLink),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProseConfig {
    #[serde(default)]
    pub copy_button: CopyButtonIcons,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CopyButtonIcons {
    #[serde(default = "default_icon_copy")]
    pub icon_copy: String,
    #[serde(default = "default_icon_copied")]
    pub icon_copied: String,
}

impl Default for CopyButtonIcons {
    fn default() -> Self {
        Self {
            icon_copy: default_icon_copy(),
            icon_copied: default_icon_copied(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_icon_copy() -> String {
    "ph:copy".into()
}

fn default_icon_copied() -> String {
    "ph:check".into()
}

// ── Loading & resolution ──────────────────────────────────────────────────────

/// (platform, profile URL prefix, icon, label)
const KNOWN_PLATFORMS: &[(&str, &str, &str, &str)] = &[
    ("facebook", "https://www.facebook.com/", "mdi:facebook", "Facebook"),
    ("github", "https://github.com/", "mdi:github", "GitHub"),
    ("instagram", "https://www.instagram.com/", "mdi:instagram", "Instagram"),
    ("linkedin", "https://www.linkedin.com/in/", "mdi:linkedin", "LinkedIn"),
    ("medium", "https://medium.com/@", "mdi:medium", "Medium"),
    ("twitter", "https://twitter.com/", "mdi:twitter", "Twitter"),
    ("youtube", "https://www.youtube.com/@", "mdi:youtube", "YouTube"),
];

impl SiteConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).context("Failed to parse site config")?;
        anyhow::ensure!(!config.title.trim().is_empty(), "Site config has an empty title");
        Ok(config)
    }

    /// The configuration compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml(EMBEDDED).context("Invalid embedded site.toml")
    }

    pub fn footer_message(&self) -> Option<&str> {
        self.footer.message.as_deref().filter(|m| !m.trim().is_empty())
    }

    /// Social links in platform-name order. Bare handles on platforms we don't
    /// know how to link are skipped.
    pub fn social_links(&self) -> Vec<SocialLink> {
        self.socials
            .iter()
            .filter_map(|(platform, entry)| match entry {
                SocialEntry::Link(link) => Some(link.clone()),
                SocialEntry::Handle(handle) if handle.trim().is_empty() => None,
                SocialEntry::Handle(handle) => {
                    let resolved = resolve_handle(platform, handle.trim());
                    if resolved.is_none() {
                        warn!("No profile URL known for social platform '{}', skipping", platform);
                    }
                    resolved
                }
            })
            .collect()
    }
}

fn resolve_handle(platform: &str, handle: &str) -> Option<SocialLink> {
    KNOWN_PLATFORMS
        .iter()
        .find(|(name, ..)| *name == platform)
        .map(|(_, prefix, icon, label)| SocialLink {
            icon: (*icon).to_string(),
            label: (*label).to_string(),
            href: format!("{}{}", prefix, handle),
        })
}
