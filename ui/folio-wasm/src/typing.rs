//! Hero typing effect, driven by a chain of held timeouts.

use crate::dom;
use crate::tasks;
use folio_core::SiteConfig;
use folio_core::typing::TypingEffect;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

pub(crate) const TASK: &str = "typing";

struct Typing {
    el: Element,
    effect: RefCell<TypingEffect>,
}

/// Render one frame and schedule the next. Cancelling the task stops the chain.
fn step(typing: Rc<Typing>) {
    let frame = typing.effect.borrow_mut().tick();
    typing.el.set_text_content(Some(&frame.text));

    let next = Rc::clone(&typing);
    tasks::hold(TASK, Timeout::new(frame.delay_ms, move || step(next)));
}

pub fn init(config: &SiteConfig) -> Option<()> {
    let el = dom::query(".typing-text")?;
    let effect = TypingEffect::new(&config.typing)?;

    step(Rc::new(Typing {
        el,
        effect: RefCell::new(effect),
    }));
    Some(())
}
