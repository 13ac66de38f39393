use carenav_core::report::ReportMeta;
use carenav_core::session::{ChatMessage, MessageRole};
use carenav_core::view::{ChatView, Control, ReportView};

/// Plain stdout rendering for one-shot commands.
///
/// Only bot replies and reports go to stdout; everything else is a
/// status line on stderr, so the output can be piped.
pub struct PlainView;

impl PlainView {
    fn print(message: &ChatMessage) {
        match message.role {
            MessageRole::Bot => println!("{}", message.content),
            MessageRole::System => eprintln!("{}", message.content),
            MessageRole::User => {}
        }
    }
}

impl Control for PlainView {
    fn set_busy(&self, _busy: bool) {}
}

impl ChatView for PlainView {
    fn clear(&self) {}

    fn append(&self, message: ChatMessage) {
        Self::print(&message);
    }
}

impl ReportView for PlainView {
    fn clear(&self) {}

    fn append(&self, message: ChatMessage) {
        match message.role {
            // Notices like "초안 생성 완료." would mix into the report text
            MessageRole::Bot | MessageRole::System => eprintln!("{}", message.content),
            MessageRole::User => {}
        }
    }

    fn append_report(&self, text: &str) {
        println!("{}", text);
    }

    fn set_meta(&self, meta: &ReportMeta) {
        eprintln!("{}", meta.hint);
    }
}
