use crate::codec::SerializationError;
use rand::Rng;
use serde::Serialize;
use serde_json::Value;


/// Upper bound (exclusive) for fabricated sequence numbers.
const SEQUENCE_RANGE: u32 = 1000;

/// A synthetic inbound queue message for feeding a consumer under test.
///
/// Fabricated directly from a raw payload, bypassing the CloudEvent model,
/// for tests that only care about payload shape.
#[derive(Debug, Clone, PartialEq)]
pub struct MockMessage {
    /// Simulated queue ordering position, random in [0, 1000)
    pub sequence: u32,
    pub data: MockData,
}

/// The payload of a [`MockMessage`], with dual access.
///
/// Consumers under test read it two ways: structured field access via
/// [`get`](MockData::get) for tests that inspect fields, and
/// [`decode`](MockData::decode) for tests that exercise the consumer's own
/// deserialization path. `decode` returns the JSON text of the payload as
/// originally fabricated, so decode-then-parse recovers it exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct MockData {
    value: Value,
    raw: String,
}

impl MockData {
    /// Look up a nested value by dot-separated path.
    ///
    /// Path segments traverse objects by key and arrays by index:
    /// `get("email.recipients.0")`. Returns None when any segment is
    /// absent.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.value;
        for segment in path.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// JSON text of the original payload.
    pub fn decode(&self) -> &str {
        &self.raw
    }

    /// Structured view of the whole payload.
    pub fn as_value(&self) -> &Value {
        &self.value
    }
}

/// Fabricates a mock queue message from a raw payload.
///
/// The payload must serialize to a JSON object; anything else fails with
/// [`SerializationError`]. The sequence number is drawn from a thread-local
/// RNG (not cryptographic, none needed) and each call is independent.
pub fn fabricate<T: Serialize>(payload: &T) -> Result<MockMessage, SerializationError> {
    let raw = serde_json::to_string(payload)
        .map_err(|e| SerializationError::Unserializable(e.to_string()))?;
    let value: Value = serde_json::from_str(&raw)
        .map_err(|e| SerializationError::Unserializable(e.to_string()))?;

    if !value.is_object() {
        return Err(SerializationError::NotAnObject);
    }

    Ok(MockMessage {
        sequence: rand::thread_rng().gen_range(0..SEQUENCE_RANGE),
        data: MockData { value, raw },
    })
}
