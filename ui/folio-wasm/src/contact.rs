//! Contact and newsletter forms.
//!
//! The contact form is a `folio_core::ContactForm` over the page's fields.
//! With `contact_endpoint` configured it posts to a backend; otherwise the
//! send is simulated with a timer.

use crate::api::HttpSubmitter;
use crate::dom;
use crate::events::listen;
use async_trait::async_trait;
use folio_core::form::{Delay, SimulatedSubmitter, SubmitError};
use folio_core::{ContactForm, ContactFormView, ContactSubmitter, Notice, NoticeBoard, SiteConfig};
use folio_types::{ContactPayload, ContactReceipt};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement};

const NEWSLETTER_THANKS: &str = "Thank you for subscribing to our newsletter!";
const BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;

pub struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn wait(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}

enum PageSubmitter {
    Simulated(SimulatedSubmitter<TimerDelay>),
    Http(HttpSubmitter),
}

#[async_trait(?Send)]
impl ContactSubmitter for PageSubmitter {
    async fn submit(&self, payload: &ContactPayload) -> Result<ContactReceipt, SubmitError> {
        match self {
            PageSubmitter::Simulated(s) => s.submit(payload).await,
            PageSubmitter::Http(h) => h.submit(payload).await,
        }
    }
}

/// The `#form-message` element and its pending auto-hide.
struct NoticeDisplay {
    el: Element,
    board: NoticeBoard,
    hide: RefCell<Option<Timeout>>,
    lifetime_ms: u32,
}

impl NoticeDisplay {
    fn show(self: &Rc<Self>, notice: Notice) {
        self.el.set_text_content(Some(&notice.text));
        self.el.set_class_name(&notice.class_name());
        dom::set_style(&self.el, "display", "block");

        let ticket = self.board.post(notice);
        let this = Rc::clone(self);
        let timer = Timeout::new(self.lifetime_ms, move || {
            if this.board.expire(ticket) {
                dom::set_style(&this.el, "display", "none");
            }
        });
        // Replacing the handle cancels the older notice's hide.
        *self.hide.borrow_mut() = Some(timer);
    }
}

struct DomFormView {
    form: HtmlFormElement,
    name: Element,
    email: Element,
    subject: Element,
    message: Element,
    submit: HtmlButtonElement,
    idle_label: RefCell<String>,
    notices: Rc<NoticeDisplay>,
}

impl ContactFormView for DomFormView {
    fn read(&self) -> ContactPayload {
        ContactPayload {
            name: dom::field_value(&self.name),
            email: dom::field_value(&self.email),
            subject: dom::field_value(&self.subject),
            message: dom::field_value(&self.message),
        }
    }

    fn set_submitting(&self, submitting: bool) {
        if submitting {
            *self.idle_label.borrow_mut() = self.submit.inner_html();
            self.submit.set_inner_html(BUSY_LABEL);
        } else {
            self.submit.set_inner_html(&self.idle_label.borrow());
        }
        self.submit.set_disabled(submitting);
    }

    fn show_notice(&self, notice: Notice) {
        self.notices.show(notice);
    }

    fn clear(&self) {
        self.form.reset();
    }
}

pub fn init(config: &SiteConfig) -> Option<()> {
    let form: HtmlFormElement = dom::by_id_typed("contact-form")?;
    let submit = dom::query_within(&form, r#"button[type="submit"]"#)?
        .dyn_into::<HtmlButtonElement>()
        .ok()?;

    let notices = Rc::new(NoticeDisplay {
        el: dom::by_id("form-message")?,
        board: NoticeBoard::new(),
        hide: RefCell::new(None),
        lifetime_ms: config.notice_lifetime_ms,
    });

    let view = DomFormView {
        form: form.clone(),
        name: dom::by_id("name")?,
        email: dom::by_id("email")?,
        subject: dom::by_id("subject")?,
        message: dom::by_id("message")?,
        idle_label: RefCell::new(submit.inner_html()),
        submit,
        notices,
    };

    let submitter = match config.contact_endpoint() {
        Some(endpoint) => PageSubmitter::Http(HttpSubmitter::new(endpoint)),
        None => {
            let simulated = SimulatedSubmitter::new(TimerDelay, config.submit_delay_ms);
            PageSubmitter::Simulated(simulated)
        }
    };

    let controller = Rc::new(ContactForm::new(view, submitter));
    listen!(form, "submit", web_sys::Event, move |e: web_sys::Event| {
        e.prevent_default();
        let controller = controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = controller.submit().await;
            gloo_console::debug!(format!("contact form: {:?}", outcome));
        });
    });
    Some(())
}

pub fn init_newsletter() -> Option<()> {
    let form: HtmlFormElement = dom::query(".newsletter-form")?.dyn_into().ok()?;
    let input = dom::query_within(&form, r#"input[type="email"]"#)?;

    let f = form.clone();
    listen!(form, "submit", web_sys::Event, move |e: web_sys::Event| {
        e.prevent_default();
        if !dom::field_value(&input).is_empty() {
            let _ = dom::window().alert_with_message(NEWSLETTER_THANKS);
            f.reset();
        }
    });
    Some(())
}
