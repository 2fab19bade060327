use log::{warn, Level};

use crate::reveal::RevealThreshold;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Local trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Pixels scrolled before the header switches to its compact look.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// How long the contact form acknowledgement stays on screen.
pub const ACKNOWLEDGEMENT_MS: u32 = 4_000;

/// `<body data-reveal-threshold="...">` overrides the default trigger.
pub const REVEAL_THRESHOLD_ATTRIBUTE: &str = "data-reveal-threshold";

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: RevealThreshold,
    pub markers: &'static [&'static str],
    pub visible_class: &'static str,
    /// Set on `<html>` while a watch is attached. The stylesheet only hides
    /// animated elements under it, so a page without a watch stays readable.
    pub ready_class: &'static str,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: RevealThreshold::AnyOverlap,
            markers: &["slide-in-left", "slide-in-right", "scale-in"],
            visible_class: "visible",
            ready_class: "reveal-ready",
        }
    }
}

impl RevealConfig {
    /// CSS selector matching every animated element.
    pub fn selector(&self) -> String {
        self.markers
            .iter()
            .map(|marker| format!(".{}", marker))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Apply an optional override, keeping the current threshold when the
    /// value does not parse.
    pub fn with_threshold_override(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw {
            match raw.parse::<RevealThreshold>() {
                Ok(threshold) => self.threshold = threshold,
                Err(e) => warn!("{}, using {:?}", e, self.threshold),
            }
        }
        self
    }
}

/// Reveal settings for the current document.
pub fn reveal_config() -> RevealConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .and_then(|body| body.get_attribute(REVEAL_THRESHOLD_ATTRIBUTE));
    RevealConfig::default().with_threshold_override(raw.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_covers_all_markers() {
        let config = RevealConfig::default();
        assert_eq!(config.selector(), ".slide-in-left, .slide-in-right, .scale-in");
    }

    /// Every rule that hides an animated element must be scoped to the
    /// ready class, otherwise a failed attach leaves content invisible.
    #[test]
    fn test_stylesheet_hides_markers_only_when_ready() {
        let config = RevealConfig::default();
        let css = include_str!("../styles/main.css");
        let scope = format!(".{} ", config.ready_class);
        let mut hiding_rules = 0;

        for rule in css.split('}') {
            let Some((selectors, body)) = rule.split_once('{') else {
                continue;
            };
            if !body.contains("opacity: 0;") && !body.contains("transform: translate") {
                continue;
            }
            for selector in selectors.split(',').map(str::trim) {
                let selector = selector.rsplit("*/").next().unwrap_or(selector).trim();
                if config.markers.iter().any(|marker| selector.contains(marker)) {
                    hiding_rules += 1;
                    assert!(selector.starts_with(&scope), "unscoped rule `{}`", selector);
                }
            }
        }
        assert!(hiding_rules >= config.markers.len());
    }

    #[test]
    fn test_threshold_override() {
        let config = RevealConfig::default().with_threshold_override(Some("offset:120"));
        assert_eq!(config.threshold, RevealThreshold::Offset(120.0));

        let config = RevealConfig::default().with_threshold_override(Some("nope"));
        assert_eq!(config.threshold, RevealThreshold::AnyOverlap);

        let config = RevealConfig::default().with_threshold_override(None);
        assert_eq!(config, RevealConfig::default());
    }
}
