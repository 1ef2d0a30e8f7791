//! Small scroll-driven effects: scroll-to-top control, in-page anchor
//! scrolling, and the hero parallax.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTopControl {
    threshold: f64,
    visible: bool,
}

impl ScrollTopControl {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.visible = scroll_y > self.threshold;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Scroll position the control sends the page to.
    pub fn target(&self) -> f64 {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Bare `#`: swallow the click.
    Placeholder,
    /// Scroll to the element with this id.
    Target(&'a str),
    /// Not a same-page anchor; leave the click alone.
    Ignore,
}

pub fn anchor_action(href: &str) -> AnchorAction<'_> {
    match href.strip_prefix('#') {
        Some("") => AnchorAction::Placeholder,
        Some(id) => AnchorAction::Target(id),
        None => AnchorAction::Ignore,
    }
}

/// Where to scroll so the target clears the fixed header.
pub fn anchor_scroll_top(target_top: f64, header_offset: f64) -> f64 {
    target_top - header_offset
}

pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translateY({}px)", scroll_y * factor)
}
