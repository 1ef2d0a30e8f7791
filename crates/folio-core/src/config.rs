//! Site configuration.
//!
//! Every timing and geometry constant the controllers use. The browser layer
//! loads overrides from `site-config.json`; absent fields keep their defaults.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub words: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    /// Pause once a word is fully typed.
    pub word_pause_ms: u32,
    /// Pause once a word is fully deleted, before the next one starts.
    pub next_word_pause_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            words: [
                "Web Developer",
                "UI/UX Designer",
                "Freelancer",
                "Creative Designer",
                "Problem Solver",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            type_ms: 150,
            delete_ms: 100,
            word_pause_ms: 2000,
            next_word_pause_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub nav_scrolled_threshold: f64,
    pub section_lookahead: f64,
    pub scroll_top_threshold: f64,
    pub header_offset: f64,
    pub parallax_factor: f64,

    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_offset_px: u32,
    pub reveal_stagger_ms: u32,

    pub section_trigger_threshold: f64,
    pub counter_steps: u32,

    pub filter_show_delay_ms: u32,
    pub filter_transition_ms: u32,

    pub carousel_interval_ms: u32,

    pub notice_lifetime_ms: u32,
    pub submit_delay_ms: u32,
    /// When set, the contact form posts here instead of simulating the send.
    pub contact_endpoint: Option<String>,

    pub preloader_delay_ms: u32,
    pub preloader_fade_ms: u32,

    pub typing: TypingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_scrolled_threshold: 100.0,
            section_lookahead: 200.0,
            scroll_top_threshold: 300.0,
            header_offset: 80.0,
            parallax_factor: 0.5,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -100px 0px".to_owned(),
            reveal_offset_px: 30,
            reveal_stagger_ms: 100,
            section_trigger_threshold: 0.5,
            counter_steps: 100,
            filter_show_delay_ms: 10,
            filter_transition_ms: 300,
            carousel_interval_ms: 5000,
            notice_lifetime_ms: 5000,
            submit_delay_ms: 2000,
            contact_endpoint: None,
            preloader_delay_ms: 1000,
            preloader_fade_ms: 500,
            typing: TypingConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Parse `raw`, falling back to defaults when it is malformed.
    pub fn from_json_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("ignoring malformed site config: {}", err);
                Self::default()
            }
        }
    }

    pub fn contact_endpoint(&self) -> Option<&str> {
        self.contact_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty())
    }
}
