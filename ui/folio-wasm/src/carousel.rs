//! Testimonial slider: prev/next buttons, generated dots, and auto-advance.

use crate::dom;
use crate::events::on_click;
use crate::tasks;
use folio_core::{Carousel, SiteConfig};
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

pub(crate) const TASK: &str = "testimonials";

struct CarouselView {
    slides: Vec<Element>,
    dots: Vec<Element>,
}

impl CarouselView {
    fn render(&self, carousel: &Carousel) {
        let flags = carousel.active_flags();
        for ((slide, dot), active) in self.slides.iter().zip(&self.dots).zip(flags) {
            dom::toggle_class(slide, "active", active);
            dom::toggle_class(dot, "active", active);
        }
    }
}

fn make_dots(container: &Element, count: usize) -> Option<Vec<Element>> {
    (0..count)
        .map(|_| {
            let dot = dom::create_element("div")?;
            dom::add_class(&dot, "dot");
            container.append_child(&dot).ok()?;
            Some(dot)
        })
        .collect()
}

pub fn init(config: &SiteConfig) -> Option<()> {
    let slides = dom::query_all(".testimonial-card");
    let carousel = Rc::new(RefCell::new(Carousel::new(slides.len())?));
    let prev = dom::by_id("prev-testimonial")?;
    let next = dom::by_id("next-testimonial")?;
    let dots_container = dom::by_id("testimonial-dots")?;

    let dots = make_dots(&dots_container, slides.len())?;
    let view = Rc::new(CarouselView { slides, dots });

    for (index, dot) in view.dots.iter().enumerate() {
        let carousel = carousel.clone();
        let view = view.clone();
        on_click!(dot, move |_: web_sys::MouseEvent| {
            let mut c = carousel.borrow_mut();
            if c.goto(index).is_some() {
                view.render(&c);
            }
        });
    }

    {
        let carousel = carousel.clone();
        let view = view.clone();
        on_click!(prev, move |_: web_sys::MouseEvent| {
            let mut c = carousel.borrow_mut();
            c.prev();
            view.render(&c);
        });
    }
    {
        let carousel = carousel.clone();
        let view = view.clone();
        on_click!(next, move |_: web_sys::MouseEvent| {
            let mut c = carousel.borrow_mut();
            c.next();
            view.render(&c);
        });
    }

    view.render(&carousel.borrow());

    // Fixed cadence; manual navigation does not reset it.
    let auto_advance = Interval::new(config.carousel_interval_ms, move || {
        let mut c = carousel.borrow_mut();
        c.next();
        view.render(&c);
    });
    tasks::hold(TASK, auto_advance);
    Some(())
}
