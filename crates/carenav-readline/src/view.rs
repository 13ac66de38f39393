//! Terminal renderings of the chat and report logs.

use colored::Colorize;

use carenav_core::report::ReportMeta;
use carenav_core::session::{ChatMessage, MessageRole};
use carenav_core::view::{ChatView, Control, ReportView};

fn print_message(message: &ChatMessage) {
    for line in message.content.lines() {
        match message.role {
            MessageRole::User => println!("{}", format!("> {}", line).green()),
            MessageRole::Bot => println!("{}", line.bright_blue()),
            MessageRole::System => println!("{}", line.yellow()),
        }
    }
}

fn print_busy(busy: bool) {
    if busy {
        println!("{}", "…".bright_black());
    }
}

/// The B2C chat log on stdout.
pub struct TerminalChatView;

impl Control for TerminalChatView {
    fn set_busy(&self, busy: bool) {
        print_busy(busy);
    }
}

impl ChatView for TerminalChatView {
    fn clear(&self) {
        println!();
    }

    fn append(&self, message: ChatMessage) {
        print_message(&message);
    }
}

/// The B2B report log and its result header on stdout.
pub struct TerminalReportView;

impl Control for TerminalReportView {
    fn set_busy(&self, busy: bool) {
        print_busy(busy);
    }
}

impl ReportView for TerminalReportView {
    fn clear(&self) {
        println!("{}", "─".repeat(40).bright_black());
    }

    fn append(&self, message: ChatMessage) {
        print_message(&message);
    }

    fn append_report(&self, text: &str) {
        println!();
        for line in text.lines() {
            println!("{}", line);
        }
        println!();
    }

    fn set_meta(&self, meta: &ReportMeta) {
        let tag = meta.tag();
        if !tag.is_empty() {
            println!("{}", format!("[{}]", tag).bright_magenta());
        }
        println!("{}", meta.hint.bright_black());
    }
}
