//! Portfolio filter buttons.
//!
//! Shown items are unhidden first and animated in on the next tick; hidden
//! items animate out and leave layout once the transition ends. A newer
//! selection cancels any pending step for the same item.

use crate::dom;
use crate::events::on_click;
use folio_core::SiteConfig;
use folio_core::filter::{GalleryFilter, GalleryItem, ItemTransition};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

struct GalleryView {
    buttons: Vec<Element>,
    items: Vec<Element>,
    pending: RefCell<Vec<Option<Timeout>>>,
    show_delay_ms: u32,
    transition_ms: u32,
}

impl GalleryView {
    fn render_controls(&self, filter: &GalleryFilter) {
        for (i, button) in self.buttons.iter().enumerate() {
            dom::toggle_class(button, "active", filter.is_control_active(i));
        }
    }

    fn apply(&self, transitions: &[ItemTransition]) {
        let mut pending = self.pending.borrow_mut();
        let steps = self.items.iter().zip(transitions).zip(pending.iter_mut());
        for ((item, transition), slot) in steps {
            let el = item.clone();
            let step = match transition {
                ItemTransition::Show => {
                    dom::set_style(item, "display", "block");
                    Timeout::new(self.show_delay_ms, move || {
                        dom::set_style(&el, "opacity", "1");
                        dom::set_style(&el, "transform", "scale(1)");
                    })
                }
                ItemTransition::Hide => {
                    dom::set_style(item, "opacity", "0");
                    dom::set_style(item, "transform", "scale(0.8)");
                    Timeout::new(self.transition_ms, move || {
                        dom::set_style(&el, "display", "none");
                    })
                }
            };
            // Dropping the previous timeout cancels it.
            *slot = Some(step);
        }
    }
}

pub fn init(config: &SiteConfig) -> Option<()> {
    let buttons = dom::query_all(".filter-btn");
    if buttons.is_empty() {
        return None;
    }
    let items = dom::query_all(".portfolio-item");

    let controls = buttons.iter().map(|b| dom::attr(b, "data-filter")).collect();
    let gallery_items = items
        .iter()
        .map(|i| GalleryItem::new(dom::attr(i, "data-category")))
        .collect();
    let filter = Rc::new(RefCell::new(GalleryFilter::new(controls, gallery_items)));

    let view = Rc::new(GalleryView {
        buttons: buttons.clone(),
        pending: RefCell::new(items.iter().map(|_| None).collect()),
        items,
        show_delay_ms: config.filter_show_delay_ms,
        transition_ms: config.filter_transition_ms,
    });
    view.render_controls(&filter.borrow());

    for (index, button) in buttons.iter().enumerate() {
        let filter = filter.clone();
        let view = view.clone();
        on_click!(button, move |_: web_sys::MouseEvent| {
            let mut filter = filter.borrow_mut();
            let Some(transitions) = filter.select(index) else {
                return;
            };
            view.render_controls(&filter);
            view.apply(&transitions);
        });
    }
    Some(())
}
