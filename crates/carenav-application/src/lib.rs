//! Application layer for carenav.
//!
//! This crate provides the use cases that coordinate the core heuristics,
//! the backend endpoints and the views: the B2C chat turn and the B2B
//! report draft.

pub mod dialogue_turn;
pub mod report_usecase;
pub mod session;

pub use dialogue_turn::DialogueTurnOrchestrator;
pub use report_usecase::ReportDraftUsecase;
pub use session::{ChatSession, ClientFactory};
