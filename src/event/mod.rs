use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

#[cfg(test)]
mod tests;

/// Fallback origin identifier when the caller does not supply one.
pub const DEFAULT_SOURCE: &str = "fake-for-tests";

/// Fallback event category when the caller does not supply one.
pub const DEFAULT_TYPE: &str = "fake-message-type";

/// CloudEvent represents one immutable, discrete occurrence.
///
/// Events have a fixed envelope structure with a domain-agnostic payload.
/// `id`, `source` and `event_type` are guaranteed non-empty after
/// construction through [`CloudEventBuilder`]; `subject` may be empty and
/// `data` may be any JSON value the producer chose.
///
/// Wire-format knowledge lives in [`crate::codec`], not here.
#[derive(Clone, Debug, PartialEq)]
pub struct CloudEvent {
    /// UUIDv7 identifier (time-ordered, globally unique)
    /// Auto-generated if not provided
    pub id: String,

    /// Producer identity (free-form origin identifier)
    pub source: String,

    /// Subject the event refers to (may be empty)
    pub subject: String,

    /// Event category (e.g. "bc.registry.notification")
    pub event_type: String,

    /// Producer timestamp, defaults to the construction instant
    pub time: DateTime<Utc>,

    /// Domain-specific event data (opaque to the codec)
    pub data: Value,
}

impl CloudEvent {
    /// Start building an event. Omitted fields take defaults on `build()`.
    pub fn builder() -> CloudEventBuilder {
        CloudEventBuilder::default()
    }
}

/// Builder for [`CloudEvent`] with default substitution.
///
/// Substitution rules applied by `build()`:
/// - `id`: fresh UUIDv7 when missing or empty
/// - `source`: [`DEFAULT_SOURCE`] when missing or empty
/// - `event_type`: [`DEFAULT_TYPE`] when missing or empty
/// - `subject`: empty string when missing
/// - `time`: `Utc::now()` when missing
/// - `data`: empty JSON object when missing
///
/// An empty string counts as missing so the non-empty guarantee holds even
/// for callers that pass through unvalidated input. Callers that need exact
/// reproducibility must supply an explicit `id` and `time`.
#[derive(Debug, Default)]
pub struct CloudEventBuilder {
    id: Option<String>,
    source: Option<String>,
    subject: Option<String>,
    event_type: Option<String>,
    time: Option<DateTime<Utc>>,
    data: Option<Value>,
}

impl CloudEventBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Finalize the event, substituting defaults for anything omitted.
    pub fn build(self) -> CloudEvent {
        CloudEvent {
            id: non_empty_or(self.id, || Uuid::now_v7().to_string()),
            source: non_empty_or(self.source, || DEFAULT_SOURCE.to_string()),
            subject: self.subject.unwrap_or_default(),
            event_type: non_empty_or(self.event_type, || DEFAULT_TYPE.to_string()),
            time: self.time.unwrap_or_else(Utc::now),
            data: self.data.unwrap_or_else(|| Value::Object(Default::default())),
        }
    }
}

/// Treat `None` and `Some("")` the same: both fall back.
fn non_empty_or(value: Option<String>, fallback: impl FnOnce() -> String) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback(),
    }
}
