//! Deferred images: `img[data-src]` gets its real source on first sight.

use crate::dom;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

pub fn init() -> Option<()> {
    let images = dom::query_all("img[data-src]");
    if images.is_empty() {
        return None;
    }

    let observer = dom::intersection_observer(0.0, None, |target, observer| {
        if let Some(img) = target.dyn_ref::<HtmlImageElement>() {
            if let Some(src) = img.get_attribute("data-src").filter(|s| !s.is_empty()) {
                img.set_src(&src);
            }
        }
        dom::add_class(target, "loaded");
        observer.unobserve(target);
    })?;

    for img in &images {
        observer.observe(img);
    }
    Some(())
}
