//! Project details overlay.
//!
//! The controller knows nothing about project content; records come from an
//! injected [`ProjectLookup`].

use folio_types::ProjectRecord;
use std::collections::HashMap;
use tracing::debug;

pub trait ProjectLookup {
    fn project(&self, id: &str) -> Option<&ProjectRecord>;
}

impl ProjectLookup for HashMap<String, ProjectRecord> {
    fn project(&self, id: &str) -> Option<&ProjectRecord> {
        self.get(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Button,
    Backdrop,
    Escape,
}

/// Overlay state. Open implies page scroll is locked.
pub struct DetailsOverlay<L> {
    lookup: L,
    open: Option<String>,
}

impl<L: ProjectLookup> DetailsOverlay<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup, open: None }
    }

    /// Open on `id`. Unknown ids leave the overlay untouched.
    pub fn open(&mut self, id: &str) -> Option<&ProjectRecord> {
        let record = self.lookup.project(id)?;
        self.open = Some(id.to_owned());
        debug!("details overlay opened for project {}", id);
        Some(record)
    }

    /// Close from any trigger. Returns whether the overlay was open.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        let was_open = self.open.take().is_some();
        if was_open {
            debug!("details overlay closed via {:?}", trigger);
        }
        was_open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn current(&self) -> Option<&ProjectRecord> {
        self.open.as_deref().and_then(|id| self.lookup.project(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> HashMap<String, ProjectRecord> {
        let record = ProjectRecord {
            id: "1".to_owned(),
            title: "E-Commerce Website".to_owned(),
            category: "Web Design / Development".to_owned(),
            image_path: "images/portfolio-1.jpg".to_owned(),
            description: "Shop".to_owned(),
            technologies: vec!["HTML5".to_owned(), "CSS3".to_owned()],
        };
        HashMap::from([(record.id.clone(), record)])
    }

    #[test]
    fn open_then_close_unlocks_scroll() {
        let mut overlay = DetailsOverlay::new(table());
        let record = overlay.open("1").unwrap();
        assert_eq!(record.technologies.len(), 2);
        assert!(overlay.is_open());
        assert!(overlay.scroll_locked());

        assert!(overlay.close(CloseTrigger::Button));
        assert!(!overlay.is_open());
        assert!(!overlay.scroll_locked());
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut overlay = DetailsOverlay::new(table());
        assert!(overlay.open("99").is_none());
        assert!(!overlay.is_open());
        assert!(!overlay.scroll_locked());
    }

    #[test]
    fn unknown_id_keeps_current_project() {
        let mut overlay = DetailsOverlay::new(table());
        overlay.open("1");
        assert!(overlay.open("nope").is_none());
        assert_eq!(overlay.current().map(|r| r.id.as_str()), Some("1"));
    }

    #[test]
    fn all_close_triggers_end_in_same_state() {
        for trigger in [CloseTrigger::Button, CloseTrigger::Backdrop, CloseTrigger::Escape] {
            let mut overlay = DetailsOverlay::new(table());
            overlay.open("1");
            overlay.close(trigger);
            assert!(!overlay.is_open());
            assert!(!overlay.scroll_locked());
            assert!(overlay.current().is_none());
        }
    }

    #[test]
    fn closing_closed_overlay_reports_false() {
        let mut overlay = DetailsOverlay::new(table());
        assert!(!overlay.close(CloseTrigger::Escape));
    }
}
