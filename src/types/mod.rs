use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

pub mod api;

/// Placeholder for metadata the paste service left out.
pub const NOT_AVAILABLE: &str = "N/A";

/// A paste as returned by the paste service's read API.
///
/// Metadata is taken as whatever JSON the service sends and flattened to text later.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamPaste {
    pub content: Option<String>,
    pub title: Option<Value>,
    pub language: Option<Value>,
    pub created: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paste {
    pub content: String,
    pub title: String,
    pub language: String,
    pub created: String,
    pub paste_id: String,
    pub time_taken_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchFailure {
    pub error: String,
    pub paste_id: String,
    pub time_taken_ms: f64,
}

/// Outcome of one lookup against the paste service.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    Success(Paste),
    Failure(FetchFailure),
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success(_))
    }
}

impl Paste {
    pub fn from_upstream(upstream: UpstreamPaste, paste_id: String, time_taken_ms: f64) -> Self {
        fn or_placeholder(field: Option<Value>) -> String {
            match field.filter(is_truthy) {
                Some(Value::String(s)) => s,
                Some(other) => other.to_string(),
                None => NOT_AVAILABLE.to_owned(),
            }
        }

        Paste {
            content: upstream.content.unwrap_or_default(),
            title: or_placeholder(upstream.title),
            language: or_placeholder(upstream.language),
            created: or_placeholder(upstream.created),
            paste_id,
            time_taken_ms,
        }
    }
}

/// Whether a metadata value counts as present: not null, false, zero, or empty.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Adds the `success` flag clients use to tell the two shapes apart.
#[derive(Serialize)]
struct Flagged<'a, T> {
    success: bool,
    #[serde(flatten)]
    inner: &'a T,
}

impl Serialize for FetchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FetchResult::Success(paste) => Flagged {
                success: true,
                inner: paste,
            }
            .serialize(serializer),
            FetchResult::Failure(failure) => Flagged {
                success: false,
                inner: failure,
            }
            .serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_metadata_becomes_placeholder() {
        let upstream: UpstreamPaste = serde_json::from_value(json!({
            "title": "",
            "language": null,
        }))
        .unwrap();
        let paste = Paste::from_upstream(upstream, "abcdef".to_owned(), 1.5);

        assert_eq!(paste.content, "");
        assert_eq!(paste.title, NOT_AVAILABLE);
        assert_eq!(paste.language, NOT_AVAILABLE);
        assert_eq!(paste.created, NOT_AVAILABLE);
    }

    #[test]
    fn empty_content_is_kept() {
        let upstream = UpstreamPaste {
            content: Some(String::new()),
            title: Some(json!("notes")),
            ..Default::default()
        };
        let paste = Paste::from_upstream(upstream, "abcdef".to_owned(), 0.0);
        assert_eq!(paste.content, "");
        assert_eq!(paste.title, "notes");
    }

    #[test]
    fn non_string_metadata_is_rendered_as_text() {
        let upstream: UpstreamPaste = serde_json::from_value(json!({
            "content": "x",
            "title": 42,
            "language": false,
            "created": 0,
        }))
        .unwrap();
        let paste = Paste::from_upstream(upstream, "abcdef".to_owned(), 0.0);

        assert_eq!(paste.title, "42");
        assert_eq!(paste.language, NOT_AVAILABLE);
        assert_eq!(paste.created, NOT_AVAILABLE);
    }

    #[test]
    fn serializes_with_success_flag() {
        let result = FetchResult::Failure(FetchFailure {
            error: "Error: nope".to_owned(),
            paste_id: "abcdef".to_owned(),
            time_taken_ms: 12.34,
        });
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "success": false,
                "error": "Error: nope",
                "paste_id": "abcdef",
                "time_taken_ms": 12.34,
            })
        );

        let result = FetchResult::Success(Paste {
            content: "hi".to_owned(),
            title: "N/A".to_owned(),
            language: "python".to_owned(),
            created: "2024-01-01".to_owned(),
            paste_id: "mFGLQfek".to_owned(),
            time_taken_ms: 0.5,
        });
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["content"], json!("hi"));
        assert_eq!(value["paste_id"], json!("mFGLQfek"));
    }
}
