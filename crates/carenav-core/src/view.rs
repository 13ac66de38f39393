//! Rendering collaborators.
//!
//! Front-ends implement these; the application layer only describes what
//! to show.

use crate::report::ReportMeta;
use crate::session::ChatMessage;

/// The control that triggers a turn (send button, prompt).
pub trait Control: Send + Sync {
    /// Disables (`true`) or re-enables (`false`) the trigger.
    fn set_busy(&self, busy: bool);
}

/// The B2C message log.
pub trait ChatView: Control {
    fn clear(&self);

    fn append(&self, message: ChatMessage);
}

/// The B2B report log and its result header.
pub trait ReportView: Control {
    fn clear(&self);

    fn append(&self, message: ChatMessage);

    /// Renders a long multi-line report, preserving whitespace and line breaks.
    fn append_report(&self, text: &str);

    fn set_meta(&self, meta: &ReportMeta);
}

/// Marks a control busy until dropped.
pub struct BusyGuard<'a, C: Control + ?Sized> {
    control: &'a C,
}

impl<'a, C: Control + ?Sized> BusyGuard<'a, C> {
    pub fn new(control: &'a C) -> Self {
        control.set_busy(true);
        Self { control }
    }
}

impl<C: Control + ?Sized> Drop for BusyGuard<'_, C> {
    fn drop(&mut self) {
        self.control.set_busy(false);
    }
}
