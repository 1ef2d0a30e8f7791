//! Loading curtain, lifted shortly after the window finishes loading.

use crate::dom;
use crate::events::listen;
use folio_core::SiteConfig;
use gloo_timers::future::TimeoutFuture;
use web_sys::Element;

fn dismiss(preloader: Element, delay_ms: u32, fade_ms: u32) {
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        dom::add_class(&preloader, "hide");
        TimeoutFuture::new(fade_ms).await;
        dom::set_style(&preloader, "display", "none");
    });
}

pub fn init(config: &SiteConfig) -> Option<()> {
    let preloader = dom::query(".preloader")?;
    let (delay_ms, fade_ms) = (config.preloader_delay_ms, config.preloader_fade_ms);

    // The module may start after `load` has already fired.
    if dom::document().ready_state() == "complete" {
        dismiss(preloader, delay_ms, fade_ms);
    } else {
        listen!(dom::window(), "load", web_sys::Event, move |_: web_sys::Event| {
            dismiss(preloader.clone(), delay_ms, fade_ms);
        });
    }
    Some(())
}
