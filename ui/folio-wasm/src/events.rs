//! Event listener wiring.
//!
//! Listeners live for the page lifetime, so their closures are leaked with
//! `forget()` once attached.

/// Attach `$handler` (a closure taking `$ty`) to `$target` for `$event`.
///
/// The handler must not capture `$target` by move; pass it a clone.
macro_rules! listen {
    ($target:expr, $event:expr, $ty:ty, $handler:expr) => {{
        let handler: Box<dyn FnMut($ty)> = Box::new($handler);
        let cb = ::wasm_bindgen::closure::Closure::wrap(handler);
        let _ = $target.add_event_listener_with_callback(
            $event,
            ::wasm_bindgen::JsCast::unchecked_ref(cb.as_ref()),
        );
        cb.forget();
    }};
}

/// Shorthand for click listeners.
macro_rules! on_click {
    ($target:expr, $handler:expr) => {
        $crate::events::listen!($target, "click", ::web_sys::MouseEvent, $handler)
    };
}

/// Shorthand for window scroll listeners.
macro_rules! on_scroll {
    ($handler:expr) => {
        $crate::events::listen!($crate::dom::window(), "scroll", ::web_sys::Event, $handler)
    };
}

pub(crate) use listen;
pub(crate) use on_click;
pub(crate) use on_scroll;
