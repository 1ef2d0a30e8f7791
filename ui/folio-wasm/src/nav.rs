//! Navigation bar: hamburger menu, sticky look, and scroll-spy links.

use crate::dom;
use crate::events::{on_click, on_scroll};
use folio_core::SiteConfig;
use folio_core::nav::{NavState, SectionOffset};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

fn render_menu(hamburger: &Element, menu: &Element, open: bool) {
    dom::toggle_class(hamburger, "active", open);
    dom::toggle_class(menu, "active", open);
}

pub fn init(config: &Rc<SiteConfig>) -> Option<()> {
    let navbar = dom::by_id("navbar")?;
    let hamburger = dom::by_id("hamburger")?;
    let menu = dom::by_id("nav-menu")?;
    let links = dom::query_all(".nav-link");
    let sections: Vec<Element> = dom::query_all(".section, .hero")
        .into_iter()
        .filter(|s| !s.id().is_empty())
        .collect();

    let state = Rc::new(RefCell::new(NavState::default()));

    {
        let state = state.clone();
        let (h, m) = (hamburger.clone(), menu.clone());
        on_click!(hamburger, move |_: web_sys::MouseEvent| {
            let open = state.borrow_mut().toggle_menu();
            render_menu(&h, &m, open);
        });
    }

    for link in &links {
        let state = state.clone();
        let (h, m) = (hamburger.clone(), menu.clone());
        on_click!(link, move |_: web_sys::MouseEvent| {
            state.borrow_mut().close_menu();
            render_menu(&h, &m, false);
        });
    }

    let config = config.clone();
    on_scroll!(move |_: web_sys::Event| {
        // Offsets shift with layout, so measure on every tick.
        let offsets: Vec<SectionOffset> = sections
            .iter()
            .map(|s| SectionOffset::new(s.id(), dom::offset_top(s)))
            .collect();

        let mut nav = state.borrow_mut();
        nav.on_scroll(dom::scroll_y(), &offsets, &config);
        dom::toggle_class(&navbar, "scrolled", nav.scrolled);
        for link in &links {
            let active = nav.is_link_active(&dom::attr(link, "href"));
            dom::toggle_class(link, "active", active);
        }
    });
    Some(())
}
