use log::Level;
use serde::Deserialize;
use web_sys::ScrollBehavior;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Motion preference handed to every behavior that animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Full,
    Reduced,
}

impl Motion {
    pub fn is_reduced(self) -> bool {
        self == Motion::Reduced
    }

    pub fn scroll_behavior(self) -> ScrollBehavior {
        match self {
            Motion::Full => ScrollBehavior::Smooth,
            Motion::Reduced => ScrollBehavior::Auto,
        }
    }
}

/// Page-wide settings. Every field is optional when read from JS; missing
/// fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// `None` means "ask the browser" at start-up.
    pub reduced_motion: Option<bool>,
    pub navbar_threshold: f64,
    pub back_to_top_threshold: f64,
    /// Non-zero switches anchor scrolling to `scrollTo` minus this offset.
    pub anchor_offset: f64,
    /// 0 runs scroll handlers on every event.
    pub scroll_debounce_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub selectors: Selectors,
    pub download: DownloadConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reduced_motion: None,
            navbar_threshold: 50.0,
            back_to_top_threshold: 300.0,
            anchor_offset: 0.0,
            scroll_debounce_ms: 0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            selectors: Selectors::default(),
            download: DownloadConfig::default(),
        }
    }
}

impl Config {
    /// Resolves the motion preference, consulting `detect` only when the
    /// caller left it unset.
    pub fn motion(&self, detect: impl FnOnce() -> bool) -> Motion {
        if self.reduced_motion.unwrap_or_else(detect) {
            Motion::Reduced
        } else {
            Motion::Full
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub navbar: String,
    pub anchors: String,
    pub reveal: String,
    pub back_to_top: String,
    pub menu_toggle: String,
    pub nav_links: String,
    pub faq_item: String,
    pub faq_question: String,
    pub faq_answer: String,
    pub card: String,
    pub download_button: String,
    pub download_text: String,
    pub download_icon: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar: ".navbar".to_string(),
            anchors: "a[href^=\"#\"]".to_string(),
            reveal: ".reveal-on-scroll".to_string(),
            back_to_top: ".back-to-top".to_string(),
            menu_toggle: ".menu-toggle".to_string(),
            nav_links: ".nav-links".to_string(),
            faq_item: ".faq-item".to_string(),
            faq_question: ".faq-question".to_string(),
            faq_answer: ".faq-answer".to_string(),
            card: ".card".to_string(),
            download_button: ".download-btn".to_string(),
            download_text: ".download-text".to_string(),
            download_icon: ".download-icon".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadConfig {
    pub busy_icon: String,
    pub success_icon: String,
    pub success_text: String,
    pub min_busy_ms: u32,
    pub success_hold_ms: u32,
    pub probe_timeout_ms: u32,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            busy_icon: "⏳".to_string(),
            success_icon: "✓".to_string(),
            success_text: "Downloaded!".to_string(),
            min_busy_ms: 300,
            success_hold_ms: 2000,
            probe_timeout_ms: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_object_keeps_defaults() {
        let config: Config = serde_json::from_str(
            r##"{
                "navbarThreshold": 60,
                "selectors": { "navbar": "#nav" },
                "download": { "successText": "Ready!" }
            }"##,
        )
        .unwrap();

        assert_eq!(config.navbar_threshold, 60.0);
        assert_eq!(config.back_to_top_threshold, 300.0);
        assert_eq!(config.selectors.navbar, "#nav");
        assert_eq!(config.selectors.back_to_top, ".back-to-top");
        assert_eq!(config.download.success_text, "Ready!");
        assert_eq!(config.download.min_busy_ms, 300);
        assert_eq!(config.download.success_hold_ms, 2000);
        assert_eq!(config.reduced_motion, None);
    }

    #[test]
    fn empty_object_is_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn explicit_motion_wins_over_detection() {
        let config = Config {
            reduced_motion: Some(false),
            ..Config::default()
        };
        assert_eq!(config.motion(|| panic!("must not detect")), Motion::Full);

        let config = Config {
            reduced_motion: Some(true),
            ..Config::default()
        };
        assert_eq!(config.motion(|| false), Motion::Reduced);
    }

    #[test]
    fn unset_motion_falls_back_to_detection() {
        let config = Config::default();
        assert_eq!(config.motion(|| true), Motion::Reduced);
        assert_eq!(config.motion(|| false), Motion::Full);
    }

    #[test]
    fn reduced_motion_scrolls_instantly() {
        assert_eq!(Motion::Reduced.scroll_behavior(), ScrollBehavior::Auto);
        assert_eq!(Motion::Full.scroll_behavior(), ScrollBehavior::Smooth);
        assert!(Motion::Reduced.is_reduced());
    }
}
