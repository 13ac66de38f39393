pub mod chat;
pub mod config;
pub mod report;
pub mod signals;
mod view;
