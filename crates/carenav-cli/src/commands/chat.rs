use std::sync::Arc;

use anyhow::Result;
use carenav_application::ClientFactory;
use carenav_core::turn::TurnOutcome;
use carenav_infrastructure::ConfigService;

use super::view::PlainView;

pub async fn run(config: &ConfigService, message: &str) -> Result<()> {
    let factory = ClientFactory::new(config.load()?);
    let session = factory.create_session()?;
    let chat = factory.create_chat(session, Arc::new(PlainView))?;

    match chat.handle_turn(message).await {
        TurnOutcome::Ignored => anyhow::bail!("Message is empty"),
        TurnOutcome::Answered { .. } => Ok(()),
        TurnOutcome::Aborted(err) => anyhow::bail!("Turn failed: {}", err),
    }
}
