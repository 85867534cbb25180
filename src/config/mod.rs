use serde::Deserialize;

/// Complete harness configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HarnessConfig {
    #[serde(default)]
    pub pubsub: PubsubConfig,
    #[serde(default)]
    pub event: EventDefaults,
}

/// Delivery fixture configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PubsubConfig {
    #[serde(default = "default_project_id")]
    pub project_id: String,
    #[serde(default = "default_subscription_id")]
    pub subscription_id: String,
    #[serde(default = "default_delivery_id")]
    pub message_id: u64,
    #[serde(default = "default_delivery_id")]
    pub envelope_id: u64,
}

fn default_project_id() -> String {
    "PUBSUB_PROJECT_ID".to_string()
}

fn default_subscription_id() -> String {
    "SUBSCRIPTION_ID".to_string()
}

fn default_delivery_id() -> u64 {
    1
}

impl Default for PubsubConfig {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
            subscription_id: default_subscription_id(),
            message_id: default_delivery_id(),
            envelope_id: default_delivery_id(),
        }
    }
}

/// Default event fields for generated fixtures
#[derive(Debug, Clone, Deserialize)]
pub struct EventDefaults {
    #[serde(default = "default_event_source")]
    pub source: String,
    #[serde(default = "default_event_subject")]
    pub subject: String,
    #[serde(rename = "type", default = "default_event_type")]
    pub event_type: String,
}

fn default_event_source() -> String {
    crate::event::DEFAULT_SOURCE.to_string()
}

fn default_event_subject() -> String {
    "fake-subject".to_string()
}

fn default_event_type() -> String {
    crate::event::DEFAULT_TYPE.to_string()
}

impl Default for EventDefaults {
    fn default() -> Self {
        Self {
            source: default_event_source(),
            subject: default_event_subject(),
            event_type: default_event_type(),
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            pubsub: PubsubConfig::default(),
            event: EventDefaults::default(),
        }
    }
}

/// Load configuration from TOML file
pub fn load_config(path: &str) -> Result<HarnessConfig, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let config: HarnessConfig = toml::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.pubsub.project_id, "PUBSUB_PROJECT_ID");
        assert_eq!(config.pubsub.subscription_id, "SUBSCRIPTION_ID");
        assert_eq!(config.pubsub.message_id, 1);
        assert_eq!(config.pubsub.envelope_id, 1);
        assert_eq!(config.event.source, "fake-for-tests");
        assert_eq!(config.event.subject, "fake-subject");
        assert_eq!(config.event.event_type, "fake-message-type");
    }

    #[test]
    fn test_config_deserialization() {
        let toml = r#"
            [pubsub]
            project_id = "notify-project"
            subscription_id = "notify-sub"
            message_id = 12
            envelope_id = 34

            [event]
            source = "notify-api"
            subject = "registration"
            type = "bc.registry.notification"
        "#;

        let config: HarnessConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.pubsub.project_id, "notify-project");
        assert_eq!(config.pubsub.message_id, 12);
        assert_eq!(config.pubsub.envelope_id, 34);
        assert_eq!(config.event.source, "notify-api");
        assert_eq!(config.event.event_type, "bc.registry.notification");
    }

    #[test]
    fn test_partial_config() {
        // Missing sections and fields fall back to defaults
        let toml = r#"
            [pubsub]
            project_id = "notify-project"
        "#;

        let config: HarnessConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.pubsub.project_id, "notify-project");
        assert_eq!(config.pubsub.subscription_id, "SUBSCRIPTION_ID"); // Default
        assert_eq!(config.event.source, "fake-for-tests"); // Default
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[pubsub]\nsubscription_id = \"from-file\"\n"
        )
        .unwrap();

        let config = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.pubsub.subscription_id, "from-file");
        assert_eq!(config.pubsub.project_id, "PUBSUB_PROJECT_ID");
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("/nonexistent/pushmock.toml").is_err());
    }
}
