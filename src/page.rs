//! View capabilities consumed by the login handler.
//!
//! The handler never owns a rendering surface. The host hands it something
//! implementing [`Page`] for the synchronous part of a submission, and a
//! [`Navigator`] that outlives the call so the completion task can redirect.

use std::fmt;

/// Elements of the login view the handler reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Username,
    Passcode,
    Alert,
    AlertMessage,
}

impl Element {
    pub fn id(self) -> &'static str {
        match self {
            Element::Username => "otp-username",
            Element::Passcode => "otp-passcode",
            Element::Alert => "otp-alert",
            Element::AlertMessage => "otp-alert-msg",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

pub trait Page {
    /// Current value of an input element. Non-input elements read as empty.
    fn value(&self, element: Element) -> String;
    fn set_text(&mut self, element: Element, text: &str);
    fn set_visible(&mut self, element: Element, visible: bool);
}

/// Full-page navigation. Called from the request task, hence `Send + Sync`.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}
