//! Folio portfolio WASM frontend
//!
//! Binds the `folio-core` controllers to the page. Each concern lives in its
//! own module and guards its own markup: a missing element disables that
//! controller only.

pub mod api;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod counters;
pub mod dom;
pub mod events;
pub mod gallery;
pub mod lazy;
pub mod modal;
pub mod nav;
pub mod preloader;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod tasks;
pub mod theme;
pub mod typing;

use folio_content::ProjectCatalog;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

fn bound(name: &str, result: Option<()>) {
    if result.is_none() {
        gloo_console::debug!(format!("{}: markup not found, skipped", name));
    }
}

fn greet() {
    gloo_console::log!(
        "%c\u{1F44B} Welcome to My Portfolio!",
        "font-size: 20px; font-weight: bold; color: #6366f1;"
    );
    gloo_console::log!(
        "%cInterested in the code? Check out my GitHub!",
        "font-size: 14px; color: #8b5cf6;"
    );
    gloo_console::log!(
        "%cLet's work together: your.email@example.com",
        "font-size: 14px; color: #ec4899;"
    );
}

/// Binders that need no site config, run in order before the config fetch is
/// awaited. The theme comes first so a stored preference is applied before
/// the page paints.
const IMMEDIATE: &[(&str, fn() -> Option<()>)] = &[
    ("theme", theme::init),
    ("lazy images", lazy::init),
    ("newsletter", contact::init_newsletter),
];

fn init_immediate() {
    for (name, bind) in IMMEDIATE {
        bound(name, bind());
    }

    match ProjectCatalog::embedded() {
        Ok(catalog) => bound("details overlay", modal::init(catalog)),
        Err(err) => gloo_console::warn!(format!("project table unusable: {}", err)),
    }
}

async fn init() -> Result<(), JsValue> {
    init_immediate();

    let config = Rc::new(config::load().await);

    bound("preloader", preloader::init(&config));
    bound("navigation", nav::init(&config));
    bound("typing", typing::init(&config));
    bound("reveal", reveal::init(&config));
    bound("counters", counters::init_counters(&config));
    bound("skill bars", counters::init_skill_bars(&config));
    bound("gallery filter", gallery::init(&config));
    bound("testimonials", carousel::init(&config));
    bound("contact form", contact::init(&config));
    bound("scroll to top", scroll::init_scroll_top(&config));
    bound("smooth scroll", scroll::init_smooth_anchors(&config));
    bound("parallax", scroll::init_parallax(&config));

    greet();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_binds_first_and_before_config() {
        assert_eq!(IMMEDIATE.first().map(|(name, _)| *name), Some("theme"));
    }

    #[test]
    fn immediate_binders_are_unique() {
        let mut names: Vec<&str> = IMMEDIATE.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), IMMEDIATE.len());
    }
}
