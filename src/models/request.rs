use serde::{self, Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/chat`. `message` is kept as raw JSON so the truthiness
/// check can see exactly what the caller sent.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(Value::String(message.into())),
        }
    }

    /// Text to forward to the model, or `None` when the message is missing
    /// or falsy (`null`, `""`, `false`, `0`). Arrays and objects are not
    /// accepted as message text.
    pub fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Bool(true) => Some("true".to_string()),
            Value::Number(n) => match n.as_f64() {
                Some(f) if f == 0.0 => None,
                // f64 Display drops an integral fraction: 1.0 -> "1", 1e2 -> "100".
                Some(f) if n.is_f64() => Some(f.to_string()),
                _ => Some(n.to_string()),
            },
            _ => None,
        }
    }
}
