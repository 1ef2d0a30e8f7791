//! Portfolio gallery filter.
//!
//! One control is active at a time. Selecting a control yields a transition
//! per item; the browser layer animates hides before removing items from
//! layout.

use tracing::debug;

pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub category: String,
    pub visible: bool,
}

impl GalleryItem {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            visible: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTransition {
    Show,
    Hide,
}

#[derive(Debug, Clone)]
pub struct GalleryFilter {
    controls: Vec<String>,
    active: Option<usize>,
    items: Vec<GalleryItem>,
}

impl GalleryFilter {
    /// Starts with the `all` control active (or the first one if there is none).
    pub fn new(controls: Vec<String>, items: Vec<GalleryItem>) -> Self {
        let active = controls
            .iter()
            .position(|c| c == ALL)
            .or(if controls.is_empty() { None } else { Some(0) });
        Self {
            controls,
            active,
            items,
        }
    }

    pub fn matches(filter: &str, category: &str) -> bool {
        filter == ALL || filter == category
    }

    /// Activate control `index` and return the transition for every item.
    pub fn select(&mut self, index: usize) -> Option<Vec<ItemTransition>> {
        let filter = self.controls.get(index)?.clone();
        self.active = Some(index);
        debug!("gallery filter -> {}", filter);
        let transitions = self
            .items
            .iter_mut()
            .map(|item| {
                item.visible = Self::matches(&filter, &item.category);
                if item.visible {
                    ItemTransition::Show
                } else {
                    ItemTransition::Hide
                }
            })
            .collect();
        Some(transitions)
    }

    pub fn active_filter(&self) -> Option<&str> {
        self.active.map(|i| self.controls[i].as_str())
    }

    pub fn is_control_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }
}
