//! Fade/slide cards into view as they scroll in.

use crate::dom;
use folio_core::SiteConfig;
use folio_core::reveal::RevealAnimator;
use web_sys::Element;

const TARGETS: &str =
    ".service-card, .portfolio-item, .blog-card, .skill-item, .timeline-item, .contact-item";

pub fn init(config: &SiteConfig) -> Option<()> {
    let targets = dom::query_all(TARGETS);
    if targets.is_empty() {
        return None;
    }

    let mut animator = RevealAnimator::new(targets.len(), config);
    let hidden = animator.hidden_transform();
    let transitions: Vec<String> = (0..targets.len())
        .map(|i| animator.transition_css(i))
        .collect();

    let elements: Vec<Element> = targets.clone();
    let observer = dom::intersection_observer(
        config.reveal_threshold,
        Some(config.reveal_root_margin.as_str()),
        move |target, observer| {
            let Some(index) = elements.iter().position(|el| el == target) else {
                return;
            };
            if animator.reveal(index) {
                dom::set_style(target, "opacity", "1");
                dom::set_style(target, "transform", "translateY(0)");
                observer.unobserve(target);
            }
        },
    )?;

    for (el, transition) in targets.iter().zip(&transitions) {
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "transform", &hidden);
        dom::set_style(el, "transition", transition);
        observer.observe(el);
    }
    Some(())
}
