use crate::codec::{self, SerializationError};
use crate::config::HarnessConfig;
use crate::event::CloudEvent;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;


/// One push-style delivery as a subscriber endpoint would receive it.
///
/// This mimics the envelope GCP Pub/Sub creates when it calls a push
/// endpoint with a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Full subscription path: projects/{project}/subscriptions/{subscription}
    pub subscription: String,
    pub message: EnvelopeMessage,
    /// Delivery identifier assigned by the queue system
    pub id: u64,
}

/// The message body carried inside an [`Envelope`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeMessage {
    /// Base64 text of the encoded event
    pub data: String,
    #[serde(rename = "messageId")]
    pub message_id: String,
    /// String attributes, ordered so serialization is deterministic
    pub attributes: BTreeMap<String, String>,
}

/// Builds delivery envelopes for a fixed project/subscription pair.
///
/// The builder is reusable: `wrap` borrows it, so one builder can produce
/// any number of envelopes. Output is fully determined by the inputs —
/// callers that need byte-level reproducibility must supply an event with
/// an explicit `id` and `time`.
#[derive(Debug, Clone)]
pub struct EnvelopeBuilder {
    project_id: String,
    subscription_id: String,
    message_id: u64,
    envelope_id: u64,
    attributes: BTreeMap<String, String>,
}

impl EnvelopeBuilder {
    /// Create a builder with message and envelope ids of 1 and no attributes.
    pub fn new(project_id: impl Into<String>, subscription_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            subscription_id: subscription_id.into(),
            message_id: 1,
            envelope_id: 1,
            attributes: BTreeMap::new(),
        }
    }

    /// Seed the builder from fixture configuration.
    pub fn from_config(config: &HarnessConfig) -> Self {
        Self {
            project_id: config.pubsub.project_id.clone(),
            subscription_id: config.pubsub.subscription_id.clone(),
            message_id: config.pubsub.message_id,
            envelope_id: config.pubsub.envelope_id,
            attributes: BTreeMap::new(),
        }
    }

    pub fn message_id(mut self, message_id: u64) -> Self {
        self.message_id = message_id;
        self
    }

    pub fn envelope_id(mut self, envelope_id: u64) -> Self {
        self.envelope_id = envelope_id;
        self
    }

    /// Add a single delivery attribute.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Replace all delivery attributes.
    pub fn attributes(mut self, attributes: BTreeMap<String, String>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Full subscription path for this builder.
    pub fn subscription_path(&self) -> String {
        format!(
            "projects/{}/subscriptions/{}",
            self.project_id, self.subscription_id
        )
    }

    /// Wrap one event into a delivery envelope.
    ///
    /// The event is encoded via the codec, base64-encoded into
    /// `message.data`, and the builder's delivery metadata is copied in
    /// verbatim. No I/O, no side effects beyond a trace line.
    pub fn wrap(&self, event: &CloudEvent) -> Result<Envelope, SerializationError> {
        let encoded = codec::encode(event)?;

        debug!(
            event_id = %event.id,
            subscription = %self.subscription_path(),
            payload_bytes = encoded.len(),
            "Wrapping event into delivery envelope"
        );

        Ok(Envelope {
            subscription: self.subscription_path(),
            message: EnvelopeMessage {
                data: BASE64.encode(&encoded),
                message_id: self.message_id.to_string(),
                attributes: self.attributes.clone(),
            },
            id: self.envelope_id,
        })
    }
}
