use anyhow::{Context, Result};
use pushmock::config::{load_config, HarnessConfig};
use pushmock::envelope::EnvelopeBuilder;
use pushmock::event::CloudEvent;
use serde_json::json;
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pushmock=info".into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)
            .map_err(|e| anyhow::anyhow!("Failed to load config from '{}': {}", path, e))?,
        None => HarnessConfig::default(),
    };

    info!(
        project_id = %config.pubsub.project_id,
        subscription_id = %config.pubsub.subscription_id,
        "Generating sample delivery envelope"
    );

    let event = CloudEvent::builder()
        .source(config.event.source.clone())
        .subject(config.event.subject.clone())
        .event_type(config.event.event_type.clone())
        .data(json!({"email": {"type": "bn"}}))
        .build();

    let envelope = EnvelopeBuilder::from_config(&config)
        .wrap(&event)
        .context("Failed to build envelope")?;

    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}
