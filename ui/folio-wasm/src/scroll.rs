//! Scroll-to-top button, smooth in-page anchors, and hero parallax.

use crate::dom;
use crate::events::{on_click, on_scroll};
use folio_core::SiteConfig;
use folio_core::scroll::{
    AnchorAction, ScrollTopControl, anchor_action, anchor_scroll_top, parallax_transform,
};
use std::cell::RefCell;
use std::rc::Rc;

pub fn init_scroll_top(config: &SiteConfig) -> Option<()> {
    let button = dom::by_id("scroll-top")?;
    let control = Rc::new(RefCell::new(ScrollTopControl::new(config.scroll_top_threshold)));

    {
        let control = control.clone();
        let b = button.clone();
        on_scroll!(move |_: web_sys::Event| {
            let visible = control.borrow_mut().on_scroll(dom::scroll_y());
            dom::toggle_class(&b, "active", visible);
        });
    }

    on_click!(button, move |_: web_sys::MouseEvent| {
        dom::smooth_scroll_to(control.borrow().target());
    });
    Some(())
}

pub fn init_smooth_anchors(config: &SiteConfig) -> Option<()> {
    let links = dom::query_all(r##"a[href^="#"]"##);
    if links.is_empty() {
        return None;
    }

    let header_offset = config.header_offset;
    for link in links {
        let l = link.clone();
        on_click!(link, move |e: web_sys::MouseEvent| {
            let href = dom::attr(&l, "href");
            match anchor_action(&href) {
                AnchorAction::Placeholder => e.prevent_default(),
                AnchorAction::Target(id) => {
                    // Unknown targets keep the browser's default jump.
                    if let Some(target) = dom::by_id(id) {
                        e.prevent_default();
                        dom::smooth_scroll_to(anchor_scroll_top(
                            dom::offset_top(&target),
                            header_offset,
                        ));
                    }
                }
                AnchorAction::Ignore => {}
            }
        });
    }
    Some(())
}

pub fn init_parallax(config: &SiteConfig) -> Option<()> {
    let layers = dom::query_all(".hero");
    if layers.is_empty() {
        return None;
    }

    let factor = config.parallax_factor;
    on_scroll!(move |_: web_sys::Event| {
        let transform = parallax_transform(dom::scroll_y(), factor);
        for layer in &layers {
            dom::set_style(layer, "transform", &transform);
        }
    });
    Some(())
}
