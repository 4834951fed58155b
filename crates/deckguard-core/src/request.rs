use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Topic used when the request body is not valid JSON
pub const FALLBACK_TOPIC: &str = "General Presentation";

/// Body of `POST /generate-outline`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutlineRequest {
    #[serde(default)]
    pub topic: String,
}

/// Extract the raw topic from a request body.
///
/// Lenient by intent, mirroring a JSON tree lookup: only the first JSON value
/// is read and trailing content is ignored, a body that does not parse yields
/// [`FALLBACK_TOPIC`], an empty body or a missing/structured topic becomes the
/// empty string, and scalars (including `null`) are rendered as text.
pub fn topic_from_body(body: &[u8]) -> String {
    let value = match serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
    {
        Some(Ok(value)) => value,
        Some(Err(_)) => return FALLBACK_TOPIC.to_string(),
        None => return String::new(),
    };

    match value.get("topic") {
        Some(Value::String(topic)) => topic.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) => "null".to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_topic() {
        let body = br#"{"topic": "my password is confidential"}"#;
        assert_eq!(topic_from_body(body), "my password is confidential");
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(topic_from_body(b"not json"), FALLBACK_TOPIC);
        assert_eq!(topic_from_body(br#"{"topic": "#), FALLBACK_TOPIC);
        assert_eq!(topic_from_body(b"}{"), FALLBACK_TOPIC);
    }

    #[test]
    fn test_empty_body_is_missing_topic() {
        assert_eq!(topic_from_body(b""), "");
        assert_eq!(topic_from_body(b"  \n\t "), "");
    }

    #[test]
    fn test_trailing_content_ignored() {
        assert_eq!(topic_from_body(br#"{"topic": "x"} junk"#), "x");
        assert_eq!(topic_from_body(br#"{"topic": "a"}{"topic": "b"}"#), "a");
    }

    #[test]
    fn test_missing_topic_is_empty() {
        assert_eq!(topic_from_body(br#"{"idea": "x"}"#), "");
        assert_eq!(topic_from_body(br#"["topic"]"#), "");
        assert_eq!(topic_from_body(b"42"), "");
    }

    #[test]
    fn test_null_topic_as_text() {
        assert_eq!(topic_from_body(br#"{"topic": null}"#), "null");
    }

    #[test]
    fn test_structured_topic_is_empty() {
        assert_eq!(topic_from_body(br#"{"topic": {"a": 1}}"#), "");
        assert_eq!(topic_from_body(br#"{"topic": ["a"]}"#), "");
    }

    #[test]
    fn test_scalar_topic_as_text() {
        assert_eq!(topic_from_body(br#"{"topic": 42}"#), "42");
        assert_eq!(topic_from_body(br#"{"topic": true}"#), "true");
    }

    #[test]
    fn test_request_deserialization() {
        let req: OutlineRequest = serde_json::from_str(r#"{"topic": "Roadmap"}"#).unwrap();
        assert_eq!(req.topic, "Roadmap");

        let req: OutlineRequest = serde_json::from_str("{}").unwrap();
        assert!(req.topic.is_empty());
    }
}
