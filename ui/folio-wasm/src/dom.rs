//! DOM helpers.
//!
//! Lookups return `Option` so each controller can skip itself when its
//! markup is absent. Setters swallow DOM exceptions.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, NodeList,
    ScrollBehavior, ScrollToOptions, Window,
};

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> Window {
    gloo_utils::window()
}

pub fn body() -> HtmlElement {
    gloo_utils::body()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

fn collect(nl: NodeList) -> Vec<Element> {
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

pub fn create_element(tag: &str) -> Option<Element> {
    document().create_element(tag).ok()
}

pub fn attr(el: &Element, name: &str) -> String {
    el.get_attribute(name).unwrap_or_default()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Current value of an input, textarea, or select; empty for anything else.
pub fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

pub fn offset_top(el: &Element) -> f64 {
    el.dyn_ref::<HtmlElement>()
        .map(|h| f64::from(h.offset_top()))
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Lock or release page scrolling behind an overlay.
pub fn set_scroll_locked(locked: bool) {
    let overflow = if locked { "hidden" } else { "auto" };
    let _ = body().style().set_property("overflow", overflow);
}

/// Build an observer that calls `on_enter` for every entry that becomes
/// visible. `None` when the browser has no IntersectionObserver.
pub fn intersection_observer<F>(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_enter: F,
) -> Option<IntersectionObserver>
where
    F: FnMut(&Element, &IntersectionObserver) + 'static,
{
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_enter(&entry.target(), &observer);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        opts.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts).ok()?;
    cb.forget();
    Some(observer)
}
