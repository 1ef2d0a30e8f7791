//! Status notices shown under the contact form.
//!
//! Every posted notice gets a ticket. An auto-hide only clears the notice it
//! was scheduled for, so a stale timer cannot hide a newer message.

use folio_types::NoticeKind;
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    /// Class list for the message element, e.g. `form-message error`.
    pub fn class_name(&self) -> String {
        format!("form-message {}", self.kind.css_class())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket(u64);

#[derive(Debug, Default)]
pub struct NoticeBoard {
    shown: RefCell<Option<(NoticeTicket, Notice)>>,
    issued: Cell<u64>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&self, notice: Notice) -> NoticeTicket {
        let ticket = NoticeTicket(self.issued.get() + 1);
        self.issued.set(ticket.0);
        *self.shown.borrow_mut() = Some((ticket, notice));
        ticket
    }

    /// Hide the notice if `ticket` is still the one on display.
    pub fn expire(&self, ticket: NoticeTicket) -> bool {
        let mut shown = self.shown.borrow_mut();
        match shown.as_ref() {
            Some((current, _)) if *current == ticket => {
                *shown = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.shown.borrow().as_ref().map(|(_, n)| n.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expire_hides_current_notice() {
        let board = NoticeBoard::new();
        let ticket = board.post(Notice::success("sent"));
        assert!(board.expire(ticket));
        assert!(board.current().is_none());
    }

    #[test]
    fn stale_ticket_does_not_hide_newer_notice() {
        let board = NoticeBoard::new();
        let old = board.post(Notice::error("Please fill in all fields"));
        let new = board.post(Notice::success("sent"));

        assert!(!board.expire(old));
        assert_eq!(board.current(), Some(Notice::success("sent")));
        assert!(board.expire(new));
    }

    #[test]
    fn class_name_carries_kind() {
        assert_eq!(Notice::error("x").class_name(), "form-message error");
        assert_eq!(Notice::success("x").class_name(), "form-message success");
    }
}
