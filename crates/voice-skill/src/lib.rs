//! voice-skill: voice command dispatch for the remote-controlled arm
//!
//! Turns intents recognized by a voice host (open the claw, drive forward, stop, ...) into
//! commands against the remote device API and answers with a spoken phrase. The dispatcher
//! validates slot values before any network call and maps the remote outcome to either a
//! follow-up question or a closing statement.

mod commands;
mod config;
mod directive;
mod dispatcher;
mod envelope;
mod error;
mod intent;
mod metrics;
mod phrases;
mod skill;

pub use commands::{translate, CommandError, Domain};
pub use config::{SkillConfig, API_BASE_URL_ENV, APP_ID_ENV, DEFAULT_API_BASE_URL};
pub use directive::{DirectiveMode, Reply, ResponseDirective};
pub use dispatcher::IntentDispatcher;
pub use envelope::{RequestEnvelope, ResponseEnvelope};
pub use error::SkillError;
pub use intent::{Intent, IntentEvent, Slot};
pub use metrics::SkillMetrics;
pub use phrases::{MessageKey, PhraseCatalog};
pub use skill::RemoteControlSkill;

use device_api::{CommandExecutor, HttpExecutor};
use std::sync::Arc;

/// Initialize the voice skill system
pub fn init() -> Result<(), SkillError> {
    tracing::info!("Initializing voice skill");
    device_api::init()?;
    Ok(())
}

/// Build a dispatcher over the built-in phrases and the given executor
pub fn create_dispatcher(
    config: &SkillConfig,
    executor: Arc<dyn CommandExecutor>,
) -> Result<IntentDispatcher, SkillError> {
    let catalog = PhraseCatalog::builtin().with_default_locale(&config.default_locale);
    IntentDispatcher::new(catalog, executor)
}

/// Build the skill against the real remote API named in `config`
pub fn create_skill(config: SkillConfig) -> Result<RemoteControlSkill, SkillError> {
    let executor = HttpExecutor::new(config.api_base_url.as_str())?;
    tracing::info!(base_url = executor.base_url(), "remote api configured");
    let dispatcher = create_dispatcher(&config, Arc::new(executor))?;
    Ok(RemoteControlSkill::new(config, dispatcher))
}
