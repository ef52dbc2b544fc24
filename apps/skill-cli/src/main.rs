use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use device_api::{CommandExecutor, HttpExecutor, MockExecutor};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use voice_skill::{
    create_dispatcher, Intent, IntentEvent, RemoteControlSkill, ResponseEnvelope, SkillConfig,
    SkillMetrics,
};

#[derive(Parser, Debug)]
#[command(
    name = "rc-skill",
    version,
    about = "Voice remote control for the arm: feed intents, hear what the skill answers",
    disable_help_subcommand = true
)]
struct Cli {
    /// YAML config file (app_id, api_base_url, default_locale)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the remote API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Override the expected application id
    #[arg(long, global = true)]
    app_id: Option<String>,

    /// Answer remote calls in-process instead of calling the API
    #[arg(long, value_enum, global = true)]
    mock: Option<MockMode>,

    /// Print dispatch metrics after the command
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum MockMode {
    Succeed,
    Fail,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Handle a host request envelope (JSON file, or - for stdin) and print the response
    Handle {
        #[arg(long, default_value = "-")]
        event: String,
    },
    /// Dispatch an intent built from arguments
    Say {
        /// Intent name, e.g. ClawIntent, MoveIntent, StopIntent, or "launch"
        intent: String,
        /// Slot as NAME=VALUE (repeatable)
        #[arg(long = "slot")]
        slots: Vec<String>,
        #[arg(long)]
        locale: Option<String>,
    },
    /// Print the phrase table for a locale
    Phrases {
        #[arg(long)]
        locale: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    voice_skill::init().context("initializing voice skill")?;
    let config = load_config(&cli)?;
    let metrics = SkillMetrics::new().map_err(|e| anyhow::anyhow!(e))?;
    let skill = build_skill(config, cli.mock, metrics.clone())?;

    match cli.command {
        Commands::Handle { event } => {
            let raw = read_event(&event)?;
            let directive = skill
                .handle_envelope(&voice_skill::RequestEnvelope::from_json(&raw)?)
                .await?;
            let out = serde_json::to_string_pretty(&ResponseEnvelope::from(&directive))?;
            println!("{out}");
        }
        Commands::Say {
            intent,
            slots,
            locale,
        } => {
            let intent = parse_intent(&intent, &slots)?;
            let directive = skill
                .dispatcher()
                .handle(locale.as_deref(), &intent)
                .await?;
            println!("[{:?}] {}", directive.mode, directive.text);
            if let Some(reprompt) = directive.reprompt {
                println!("[reprompt] {reprompt}");
            }
        }
        Commands::Phrases { locale } => {
            let catalog = skill.dispatcher().catalog();
            let resolved = catalog.resolve_locale(locale.as_deref());
            println!("locale: {resolved}");
            for (key, text) in catalog.entries(locale.as_deref())? {
                println!("{key:<24} {text}");
            }
        }
    }

    if cli.metrics {
        print!("{}", metrics.encode_text());
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<SkillConfig> {
    let mut config = match &cli.config {
        Some(path) => SkillConfig::load_file(path)?,
        None => SkillConfig::default(),
    }
    .with_env();
    if let Some(url) = &cli.base_url {
        config.api_base_url = url.clone();
    }
    if let Some(app_id) = &cli.app_id {
        config.app_id = Some(app_id.clone());
    }
    Ok(config)
}

fn build_skill(
    config: SkillConfig,
    mock: Option<MockMode>,
    metrics: SkillMetrics,
) -> Result<RemoteControlSkill> {
    let executor: Arc<dyn CommandExecutor> = match mock {
        Some(MockMode::Succeed) => Arc::new(MockExecutor::succeeding()),
        Some(MockMode::Fail) => Arc::new(MockExecutor::failing()),
        None => {
            let http = HttpExecutor::new(config.api_base_url.as_str())
                .with_context(|| format!("remote api base url: {}", config.api_base_url))?;
            info!(base_url = http.base_url(), "using remote api");
            Arc::new(http)
        }
    };
    let dispatcher = create_dispatcher(&config, executor)?.with_metrics(metrics);
    Ok(RemoteControlSkill::new(config, dispatcher))
}

fn read_event(source: &str) -> Result<String> {
    if source == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("reading event from stdin")?;
        Ok(raw)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("reading event: {source}"))
    }
}

fn parse_intent(name: &str, slots: &[String]) -> Result<Intent> {
    if name.eq_ignore_ascii_case("launch") || name == "LaunchRequest" {
        return Ok(Intent::Launch);
    }
    let mut event = IntentEvent::new(name);
    for slot in slots {
        let (slot_name, value) = slot
            .split_once('=')
            .with_context(|| format!("slot must be NAME=VALUE: {slot}"))?;
        event = event.with_slot(slot_name, value);
    }
    Ok(Intent::from_event(&event))
}

fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_intent_with_slots() {
        let intent = parse_intent("ClawIntent", &["ClawOperation=open".to_string()]).unwrap();
        assert_eq!(
            intent,
            Intent::Claw {
                operation: Some("open".to_string())
            }
        );
        assert_eq!(parse_intent("launch", &[]).unwrap(), Intent::Launch);
        assert!(parse_intent("ClawIntent", &["open".to_string()]).is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "rc-skill",
            "--mock",
            "fail",
            "say",
            "MoveIntent",
            "--slot",
            "MoveOperation=forward",
        ])
        .unwrap();
        assert_eq!(cli.mock, Some(MockMode::Fail));
        assert!(matches!(cli.command, Commands::Say { ref slots, .. } if slots.len() == 1));
    }
}
