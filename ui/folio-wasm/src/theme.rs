//! Light/dark toggle.
//!
//! Dark mode is the `dark-theme` class on `<body>`; the toggle's icon swaps
//! between `fa-moon` and `fa-sun`.

use crate::dom;
use crate::events::on_click;
use crate::storage::LocalPreferenceStore;
use folio_core::{ThemeController, prefs};
use folio_types::ThemePreference;
use web_sys::Element;

fn apply(body: &Element, icon: &Element, theme: ThemePreference) {
    dom::toggle_class(body, "dark-theme", theme == ThemePreference::Dark);
    dom::remove_class(icon, ThemePreference::Light.icon_class());
    dom::remove_class(icon, ThemePreference::Dark.icon_class());
    dom::add_class(icon, theme.icon_class());
}

pub fn init() -> Option<()> {
    let toggle = dom::by_id("theme-toggle")?;
    let icon = dom::query_within(&toggle, "i")?;
    let body: Element = dom::body().into();

    let store = prefs::or_in_memory(LocalPreferenceStore::available());
    let controller = ThemeController::new(store);
    apply(&body, &icon, controller.load());

    on_click!(toggle, move |_: web_sys::MouseEvent| {
        let theme = controller.toggle();
        apply(&body, &icon, theme);
    });
    Some(())
}
