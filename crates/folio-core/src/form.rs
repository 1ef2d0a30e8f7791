//! Contact form controller.
//!
//! Validation is local and synchronous. Sending goes through a
//! [`ContactSubmitter`], so the simulated send and a real HTTP endpoint are
//! interchangeable. The page surface is abstracted as a [`ContactFormView`].

use crate::notice::Notice;
use async_trait::async_trait;
use folio_types::{ContactPayload, ContactReceipt};
use regex::Regex;
use std::cell::Cell;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, warn};

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const FAILURE_MESSAGE: &str = "Oops! Something went wrong. Please try again.";

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Display strings are shown to the visitor as-is.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Check every field and return the trimmed payload.
pub fn validate(payload: &ContactPayload) -> Result<ContactPayload, ValidationError> {
    let payload = payload.trimmed();
    let fields = [
        &payload.name,
        &payload.email,
        &payload.subject,
        &payload.message,
    ];
    if fields.iter().any(|f| f.is_empty()) {
        return Err(ValidationError::MissingField);
    }
    if !is_valid_email(&payload.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(payload)
}

#[async_trait(?Send)]
pub trait ContactSubmitter {
    async fn submit(&self, payload: &ContactPayload) -> Result<ContactReceipt, SubmitError>;
}

/// Cooperative pause, supplied by the runtime (browser timer or tokio).
#[async_trait(?Send)]
pub trait Delay {
    async fn wait(&self, millis: u32);
}

/// Stand-in for a backend: waits, then always accepts.
pub struct SimulatedSubmitter<D> {
    delay: D,
    millis: u32,
}

impl<D: Delay> SimulatedSubmitter<D> {
    pub fn new(delay: D, millis: u32) -> Self {
        Self { delay, millis }
    }
}

#[async_trait(?Send)]
impl<D: Delay> ContactSubmitter for SimulatedSubmitter<D> {
    async fn submit(&self, _payload: &ContactPayload) -> Result<ContactReceipt, SubmitError> {
        self.delay.wait(self.millis).await;
        Ok(ContactReceipt { accepted: true })
    }
}

pub trait ContactFormView {
    fn read(&self) -> ContactPayload;
    /// Disable the submit control and show the busy label, or restore it.
    fn set_submitting(&self, submitting: bool);
    fn show_notice(&self, notice: Notice);
    fn clear(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(ValidationError),
    /// A previous submission is still in flight.
    Busy,
    Sent,
    Failed,
}

pub struct ContactForm<V, S> {
    view: V,
    submitter: S,
    submitting: Cell<bool>,
}

impl<V: ContactFormView, S: ContactSubmitter> ContactForm<V, S> {
    pub fn new(view: V, submitter: S) -> Self {
        Self {
            view,
            submitter,
            submitting: Cell::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub async fn submit(&self) -> SubmitOutcome {
        if self.submitting.get() {
            debug!("contact submit ignored, already sending");
            return SubmitOutcome::Busy;
        }

        let payload = match validate(&self.view.read()) {
            Ok(payload) => payload,
            Err(err) => {
                self.view.show_notice(Notice::error(err.to_string()));
                return SubmitOutcome::Invalid(err);
            }
        };

        self.submitting.set(true);
        self.view.set_submitting(true);

        let outcome = match self.submitter.submit(&payload).await {
            Ok(receipt) if receipt.accepted => {
                self.view.show_notice(Notice::success(SUCCESS_MESSAGE));
                self.view.clear();
                SubmitOutcome::Sent
            }
            Ok(_) => {
                warn!("contact submission was not accepted");
                self.view.show_notice(Notice::error(FAILURE_MESSAGE));
                SubmitOutcome::Failed
            }
            Err(err) => {
                warn!("contact submission failed: {}", err);
                self.view.show_notice(Notice::error(FAILURE_MESSAGE));
                SubmitOutcome::Failed
            }
        };

        self.view.set_submitting(false);
        self.submitting.set(false);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum ViewEvent {
        Submitting(bool),
        Notice(Notice),
        Cleared,
    }

    struct FakeView {
        fields: RefCell<ContactPayload>,
        events: RefCell<Vec<ViewEvent>>,
    }

    impl FakeView {
        fn with(name: &str, email: &str, subject: &str, message: &str) -> Self {
            Self {
                fields: RefCell::new(ContactPayload {
                    name: name.to_owned(),
                    email: email.to_owned(),
                    subject: subject.to_owned(),
                    message: message.to_owned(),
                }),
                events: RefCell::new(Vec::new()),
            }
        }

        fn valid() -> Self {
            Self::with("Ada", "ada@example.com", "Hello", "Let's build something")
        }

        fn events(&self) -> Vec<ViewEvent> {
            self.events.borrow().clone()
        }
    }

    impl ContactFormView for FakeView {
        fn read(&self) -> ContactPayload {
            self.fields.borrow().clone()
        }

        fn set_submitting(&self, submitting: bool) {
            self.events.borrow_mut().push(ViewEvent::Submitting(submitting));
        }

        fn show_notice(&self, notice: Notice) {
            self.events.borrow_mut().push(ViewEvent::Notice(notice));
        }

        fn clear(&self) {
            *self.fields.borrow_mut() = ContactPayload::default();
            self.events.borrow_mut().push(ViewEvent::Cleared);
        }
    }

    struct TokioDelay;

    #[async_trait(?Send)]
    impl Delay for TokioDelay {
        async fn wait(&self, millis: u32) {
            tokio::time::sleep(std::time::Duration::from_millis(u64::from(millis))).await;
        }
    }

    struct YieldingSubmitter {
        result: fn() -> Result<ContactReceipt, SubmitError>,
        calls: Cell<usize>,
    }

    impl YieldingSubmitter {
        fn new(result: fn() -> Result<ContactReceipt, SubmitError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl ContactSubmitter for YieldingSubmitter {
        async fn submit(&self, _payload: &ContactPayload) -> Result<ContactReceipt, SubmitError> {
            self.calls.set(self.calls.get() + 1);
            tokio::task::yield_now().await;
            (self.result)()
        }
    }

    fn accepted() -> Result<ContactReceipt, SubmitError> {
        Ok(ContactReceipt { accepted: true })
    }

    fn unreachable_backend() -> Result<ContactReceipt, SubmitError> {
        Err(SubmitError::Transport("connection refused".to_owned()))
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.de"));
    }

    #[test]
    fn validate_trims_fields() {
        let raw = ContactPayload {
            name: "  Ada ".to_owned(),
            email: " ada@example.com ".to_owned(),
            subject: "Hi".to_owned(),
            message: "Msg".to_owned(),
        };
        let clean = validate(&raw).unwrap();
        assert_eq!(clean.name, "Ada");
        assert_eq!(clean.email, "ada@example.com");
    }

    #[tokio::test]
    async fn any_empty_field_reports_missing_and_never_submits() {
        let cases = [
            FakeView::with("", "ada@example.com", "Hi", "Msg"),
            FakeView::with("Ada", "", "Hi", "Msg"),
            FakeView::with("Ada", "ada@example.com", "", "Msg"),
            FakeView::with("Ada", "ada@example.com", "Hi", "   "),
        ];
        for view in cases {
            let form = ContactForm::new(view, YieldingSubmitter::new(accepted));
            let outcome = form.submit().await;

            assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::MissingField));
            assert_eq!(
                form.view().events(),
                vec![ViewEvent::Notice(Notice::error("Please fill in all fields"))]
            );
            assert!(!form.is_submitting());
        }
    }

    #[tokio::test]
    async fn malformed_email_reports_invalid_email() {
        let view = FakeView::with("Ada", "not-an-email", "Hi", "Msg");
        let form = ContactForm::new(view, YieldingSubmitter::new(accepted));

        assert_eq!(
            form.submit().await,
            SubmitOutcome::Invalid(ValidationError::InvalidEmail)
        );
        assert_eq!(
            form.view().events(),
            vec![ViewEvent::Notice(Notice::error(
                "Please enter a valid email address"
            ))]
        );
    }

    #[tokio::test]
    async fn simulated_send_succeeds_and_clears_fields() {
        let submitter = SimulatedSubmitter::new(TokioDelay, 20);
        let form = ContactForm::new(FakeView::valid(), submitter);

        assert_eq!(form.submit().await, SubmitOutcome::Sent);
        assert_eq!(
            form.view().events(),
            vec![
                ViewEvent::Submitting(true),
                ViewEvent::Notice(Notice::success(SUCCESS_MESSAGE)),
                ViewEvent::Cleared,
                ViewEvent::Submitting(false),
            ]
        );
        assert_eq!(form.view().read(), ContactPayload::default());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn failed_send_keeps_fields_and_restores_control() {
        let form = ContactForm::new(FakeView::valid(), YieldingSubmitter::new(unreachable_backend));

        assert_eq!(form.submit().await, SubmitOutcome::Failed);
        let events = form.view().events();
        assert!(events.contains(&ViewEvent::Notice(Notice::error(FAILURE_MESSAGE))));
        assert!(!events.contains(&ViewEvent::Cleared));
        assert_eq!(events.last(), Some(&ViewEvent::Submitting(false)));
        assert_eq!(form.view().read().name, "Ada");
    }

    #[tokio::test]
    async fn overlapping_submit_is_ignored() {
        let form = ContactForm::new(FakeView::valid(), YieldingSubmitter::new(accepted));

        let (first, second) = tokio::join!(form.submit(), form.submit());
        assert_eq!(first, SubmitOutcome::Sent);
        assert_eq!(second, SubmitOutcome::Busy);
        assert_eq!(form.submitter.calls.get(), 1);
    }
}
