mod context;
mod factory;

pub use context::ChatSession;
pub use factory::ClientFactory;
