use crate::event::CloudEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;


/// Structural version marker written into every encoded event.
pub const SPEC_VERSION: &str = "1.0";

/// Errors raised when an encoded event cannot be decoded
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    InvalidJson(String),
    MissingId,
    MissingSource,
    MissingType,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidJson(detail) => {
                write!(f, "payload is not a valid queue message: {}", detail)
            }
            DecodeError::MissingId => write!(f, "id is required"),
            DecodeError::MissingSource => write!(f, "source is required"),
            DecodeError::MissingType => write!(f, "type is required"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors raised when a value cannot be represented as structured text
#[derive(Debug, Clone, PartialEq)]
pub enum SerializationError {
    Unserializable(String),
    NotAnObject,
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationError::Unserializable(detail) => {
                write!(f, "value cannot be serialized to JSON: {}", detail)
            }
            SerializationError::NotAnObject => {
                write!(f, "payload must be a JSON object")
            }
        }
    }
}

impl std::error::Error for SerializationError {}

/// On-the-wire shape of an encoded event.
///
/// Field declaration order is the canonical key order; together with
/// serde_json's sorted maps this makes encoding deterministic, so equal
/// events always produce byte-identical output. Unknown keys from future
/// producers are ignored on decode.
#[derive(Serialize, Deserialize)]
struct WireEvent {
    #[serde(default)]
    specversion: String,
    #[serde(default)]
    id: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    subject: String,
    #[serde(rename = "type", default)]
    event_type: String,
    #[serde(default)]
    time: Option<DateTime<Utc>>,
    #[serde(default)]
    data: Value,
}

/// Encodes a CloudEvent into its canonical queue-message bytes.
///
/// The output is a JSON object with keys exactly `specversion`, `id`,
/// `source`, `subject`, `type`, `time`, `data`.
pub fn encode(event: &CloudEvent) -> Result<Vec<u8>, SerializationError> {
    let wire = WireEvent {
        specversion: SPEC_VERSION.to_string(),
        id: event.id.clone(),
        source: event.source.clone(),
        subject: event.subject.clone(),
        event_type: event.event_type.clone(),
        time: Some(event.time),
        data: event.data.clone(),
    };

    serde_json::to_vec(&wire).map_err(|e| SerializationError::Unserializable(e.to_string()))
}

/// Decodes queue-message bytes back into a CloudEvent.
///
/// Fails when the bytes are not valid JSON or when `id`, `source` or
/// `type` is missing or empty. `subject` decodes empty when absent,
/// `data` as JSON null, and a missing `time` is filled with the decode
/// instant (mirroring the builder's default rule).
pub fn decode(bytes: &[u8]) -> Result<CloudEvent, DecodeError> {
    let wire: WireEvent = serde_json::from_slice(bytes).map_err(|e| {
        debug!(error = %e, "Failed to parse queue message");
        DecodeError::InvalidJson(e.to_string())
    })?;

    if wire.id.is_empty() {
        return Err(DecodeError::MissingId);
    }
    if wire.source.is_empty() {
        return Err(DecodeError::MissingSource);
    }
    if wire.event_type.is_empty() {
        return Err(DecodeError::MissingType);
    }

    Ok(CloudEvent {
        id: wire.id,
        source: wire.source,
        subject: wire.subject,
        event_type: wire.event_type,
        time: wire.time.unwrap_or_else(Utc::now),
        data: wire.data,
    })
}
