//! API request types.

use serde::Deserialize;
use serde_json::Value;

/// One unit of caller-supplied work.
///
/// Identity and validity of the context are deliberately unchecked; unknown
/// fields are ignored and a missing `context` defaults to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkItem {
    /// Opaque caller payload interpolated verbatim into the agent prompt.
    #[serde(default)]
    pub context: Value,
}

/// Render a context value for prompt interpolation.
///
/// Strings are rendered bare (no surrounding quotes), a missing context
/// renders empty, and anything else renders as compact JSON.
pub fn render_context(context: &Value) -> String {
    match context {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_context_defaults_to_empty() {
        let item: WorkItem = serde_json::from_str("{}").unwrap();
        assert_eq!(render_context(&item.context), "");
    }

    #[test]
    fn string_context_renders_bare() {
        let item: WorkItem =
            serde_json::from_value(json!({"context": "guest@example.com"})).unwrap();
        assert_eq!(render_context(&item.context), "guest@example.com");
    }

    #[test]
    fn object_context_renders_as_compact_json() {
        let item: WorkItem =
            serde_json::from_value(json!({"context": {"hotel_id": "RH-TOKYO-001"}})).unwrap();
        assert_eq!(render_context(&item.context), r#"{"hotel_id":"RH-TOKYO-001"}"#);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let item: WorkItem =
            serde_json::from_value(json!({"context": "x", "priority": 9})).unwrap();
        assert_eq!(render_context(&item.context), "x");
    }
}
