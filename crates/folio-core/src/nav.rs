//! Navigation bar state: mobile menu, sticky "scrolled" look, and the
//! section link that matches the scroll position.

use crate::config::SiteConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Last section in document order whose top, minus `lookahead`, has been
/// scrolled past.
pub fn current_section(scroll_y: f64, sections: &[SectionOffset], lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| scroll_y >= section.top - lookahead)
        .last()
        .map(|section| section.id.as_str())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
    pub active_section: Option<String>,
}

impl NavState {
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionOffset], config: &SiteConfig) {
        self.scrolled = scroll_y > config.nav_scrolled_threshold;
        self.active_section =
            current_section(scroll_y, sections, config.section_lookahead).map(str::to_owned);
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Whether a nav link with this `href` should carry the active class.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (&self.active_section, href.strip_prefix('#')) {
            (Some(active), Some(target)) => active == target,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionOffset> {
        vec![
            SectionOffset::new("home", 0.0),
            SectionOffset::new("about", 700.0),
            SectionOffset::new("services", 1400.0),
            SectionOffset::new("contact", 2600.0),
        ]
    }

    #[test]
    fn picks_last_section_within_lookahead() {
        let s = sections();
        assert_eq!(current_section(0.0, &s, 200.0), Some("home"));
        assert_eq!(current_section(499.0, &s, 200.0), Some("home"));
        assert_eq!(current_section(500.0, &s, 200.0), Some("about"));
        assert_eq!(current_section(5000.0, &s, 200.0), Some("contact"));
    }

    #[test]
    fn no_section_when_none_reached() {
        let s = vec![SectionOffset::new("about", 900.0)];
        assert_eq!(current_section(0.0, &s, 200.0), None);
    }

    #[test]
    fn exactly_one_link_active_after_scroll() {
        let config = SiteConfig::default();
        let mut nav = NavState::default();
        nav.on_scroll(1500.0, &sections(), &config);

        let hrefs = ["#home", "#about", "#services", "#contact"];
        let active: Vec<_> = hrefs.iter().filter(|h| nav.is_link_active(h)).collect();
        assert_eq!(active, vec![&"#services"]);
        assert!(nav.scrolled);
    }

    #[test]
    fn scrolled_flag_uses_strict_threshold() {
        let config = SiteConfig::default();
        let mut nav = NavState::default();
        nav.on_scroll(100.0, &sections(), &config);
        assert!(!nav.scrolled);
        nav.on_scroll(101.0, &sections(), &config);
        assert!(nav.scrolled);
    }

    #[test]
    fn placeholder_link_is_never_active() {
        let nav = NavState::default();
        assert!(!nav.is_link_active("#"));
    }

    #[test]
    fn link_click_closes_menu() {
        let mut nav = NavState::default();
        assert!(nav.toggle_menu());
        nav.close_menu();
        assert!(!nav.menu_open);
        nav.close_menu();
        assert!(!nav.menu_open);
    }
}
