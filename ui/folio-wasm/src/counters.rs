//! Stat counters (`.about`) and skill bars (`.skills`), each run once when
//! their section is half visible.

use crate::dom;
use folio_core::SiteConfig;
use folio_core::counter::{CountUp, CounterAnimator, SkillBarAnimator};
use gloo_render::{AnimationFrame, request_animation_frame};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

/// One counter's ramp plus its pending frame. The frame callback holds the
/// only other reference, so the ramp is freed once no frame is scheduled.
struct Ramp {
    counter: Element,
    ramp: RefCell<CountUp>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl Ramp {
    fn schedule(self: &Rc<Self>) {
        let ramp = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            ramp.frame.borrow_mut().take();
            ramp.step();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn step(self: &Rc<Self>) {
        let text = self.ramp.borrow_mut().next();
        if let Some(text) = text {
            self.counter.set_text_content(Some(&text));
            self.schedule();
        }
    }
}

fn run_ramp(counter: Element, ramp: CountUp) {
    Rc::new(Ramp {
        counter,
        ramp: RefCell::new(ramp),
        frame: RefCell::new(None),
    })
    .schedule();
}

pub fn init_counters(config: &SiteConfig) -> Option<()> {
    let section = dom::query(".about")?;
    let counters = dom::query_all(".stat-number");
    let steps = config.counter_steps;
    let animator = CounterAnimator::new();

    let observer = dom::intersection_observer(
        config.section_trigger_threshold,
        None,
        move |_, observer| {
            let targets: Vec<String> = counters
                .iter()
                .map(|c| dom::attr(c, "data-target"))
                .collect();
            let Some(ramps) = animator.trigger(targets.iter().map(String::as_str), steps) else {
                return;
            };
            observer.disconnect();
            for (counter, ramp) in counters.iter().zip(ramps) {
                if let Some(ramp) = ramp {
                    run_ramp(counter.clone(), ramp);
                }
            }
        },
    )?;
    observer.observe(&section);
    Some(())
}

pub fn init_skill_bars(config: &SiteConfig) -> Option<()> {
    let section = dom::query(".skills")?;
    let bars = dom::query_all(".skill-progress");
    let animator = SkillBarAnimator::new();

    let observer = dom::intersection_observer(
        config.section_trigger_threshold,
        None,
        move |_, observer| {
            let progress: Vec<String> = bars
                .iter()
                .map(|b| dom::attr(b, "data-progress"))
                .collect();
            let Some(widths) = animator.trigger(progress.iter().map(String::as_str)) else {
                return;
            };
            observer.disconnect();
            for (bar, width) in bars.iter().zip(widths) {
                if let Some(width) = width {
                    dom::set_style(bar, "width", &width);
                }
            }
        },
    )?;
    observer.observe(&section);
    Some(())
}
