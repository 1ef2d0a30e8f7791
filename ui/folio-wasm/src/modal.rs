//! Project details overlay (`#portfolio-modal`).
//!
//! Opened from `.view-btn[data-project]`; closed by `.close-modal`, a click
//! on the backdrop, or Escape. Overlay visibility and body scroll lock are
//! always written together.

use crate::dom;
use crate::events::{listen, on_click};
use folio_content::ProjectCatalog;
use folio_core::DetailsOverlay;
use folio_core::modal::CloseTrigger;
use folio_types::ProjectRecord;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

struct ModalView {
    modal: Element,
    title: Element,
    category: Element,
    image: HtmlImageElement,
    description: Element,
    tech: Element,
}

impl ModalView {
    fn bind() -> Option<Self> {
        Some(Self {
            modal: dom::by_id("portfolio-modal")?,
            title: dom::by_id("modal-title")?,
            category: dom::by_id("modal-category")?,
            image: dom::by_id_typed("modal-img")?,
            description: dom::by_id("modal-description")?,
            tech: dom::by_id("modal-tech")?,
        })
    }

    fn fill(&self, record: &ProjectRecord) {
        self.title.set_text_content(Some(&record.title));
        self.category.set_text_content(Some(&record.category));
        self.image.set_src(&record.image_path);
        self.description.set_text_content(Some(&record.description));

        self.tech.set_inner_html("");
        for tech in &record.technologies {
            if let Some(span) = dom::create_element("span") {
                span.set_text_content(Some(tech));
                let _ = self.tech.append_child(&span);
            }
        }
    }

    fn sync(&self, open: bool) {
        dom::toggle_class(&self.modal, "active", open);
        dom::set_scroll_locked(open);
    }
}

type Overlay = Rc<RefCell<DetailsOverlay<ProjectCatalog>>>;

fn close(overlay: &Overlay, view: &ModalView, trigger: CloseTrigger) {
    if overlay.borrow_mut().close(trigger) {
        view.sync(false);
    }
}

pub fn init(catalog: ProjectCatalog) -> Option<()> {
    let view = Rc::new(ModalView::bind()?);
    let close_btn = dom::query(".close-modal")?;
    let overlay: Overlay = Rc::new(RefCell::new(DetailsOverlay::new(catalog)));

    for button in dom::query_all(".view-btn") {
        let id = dom::attr(&button, "data-project");
        let overlay = overlay.clone();
        let view = view.clone();
        on_click!(button, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let mut overlay = overlay.borrow_mut();
            if let Some(record) = overlay.open(&id) {
                view.fill(record);
                view.sync(true);
            }
        });
    }

    {
        let overlay = overlay.clone();
        let view = view.clone();
        on_click!(close_btn, move |_: web_sys::MouseEvent| {
            close(&overlay, &view, CloseTrigger::Button);
        });
    }

    {
        let overlay = overlay.clone();
        let v = view.clone();
        on_click!(view.modal, move |e: web_sys::MouseEvent| {
            let on_backdrop = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|t| t == v.modal);
            if on_backdrop {
                close(&overlay, &v, CloseTrigger::Backdrop);
            }
        });
    }

    listen!(dom::document(), "keydown", web_sys::KeyboardEvent, move |e: web_sys::KeyboardEvent| {
        if e.key() == "Escape" && overlay.borrow().is_open() {
            close(&overlay, &view, CloseTrigger::Escape);
        }
    });
    Some(())
}
