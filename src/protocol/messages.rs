//! Request and response bodies for the `generateContent` endpoint.
//!
//! The response schema sent with each request is advisory: the service may
//! still return anything, so [`parse_explanation`] checks every field itself.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::models::Explanation;

/// JSON names of the explanation fields, in display order.
pub const EXPLANATION_FIELDS: [&str; 4] = ["meaning", "origin", "example", "vietnameseContext"];

/// Body of a `generateContent` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

/// Body returned by `generateContent`. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentRequest {
    /// Structured-output request asking for an [`Explanation`] of one idiom.
    pub fn explanation(english: &str, vietnamese: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(explanation_prompt(english, vietnamese)),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: explanation_schema(),
            },
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first candidate, all parts joined and trimmed.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        let text = text.trim();

        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

pub fn explanation_prompt(english: &str, vietnamese: &str) -> String {
    format!(
        "Provide a detailed explanation for the English idiom: \"{}\". It means \"{}\" in Vietnamese.",
        english, vietnamese
    )
}

pub fn explanation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "meaning": {
                "type": "STRING",
                "description": "The core meaning of the idiom."
            },
            "origin": {
                "type": "STRING",
                "description": "The historical origin or why it is phrased this way."
            },
            "example": {
                "type": "STRING",
                "description": "A natural English example sentence."
            },
            "vietnameseContext": {
                "type": "STRING",
                "description": "Equivalent Vietnamese proverb or cultural context."
            }
        },
        "required": EXPLANATION_FIELDS,
    })
}

/// Ways a response can fail to describe an explanation.
#[derive(Debug)]
pub enum SchemaError {
    /// The response carried no candidate text.
    NoCandidateText,
    /// A body was not valid JSON.
    NotJson(serde_json::Error),
    /// The candidate text was JSON but not an object.
    NotAnObject,
    MissingField(&'static str),
    NotAString(&'static str),
    EmptyField(&'static str),
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::NoCandidateText => write!(f, "response has no candidate text"),
            SchemaError::NotJson(e) => write!(f, "response is not valid JSON: {}", e),
            SchemaError::NotAnObject => write!(f, "response is not a JSON object"),
            SchemaError::MissingField(name) => write!(f, "field `{}` is missing", name),
            SchemaError::NotAString(name) => write!(f, "field `{}` is not a string", name),
            SchemaError::EmptyField(name) => write!(f, "field `{}` is empty", name),
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SchemaError::NotJson(e) => Some(e),
            _ => None,
        }
    }
}

/// Parse candidate text into an [`Explanation`], requiring every field to be
/// a non-empty string.
pub fn parse_explanation(text: &str) -> Result<Explanation, SchemaError> {
    let value: Value = serde_json::from_str(text.trim()).map_err(SchemaError::NotJson)?;
    let object = value.as_object().ok_or(SchemaError::NotAnObject)?;

    let field = |name: &'static str| match object.get(name) {
        None | Some(Value::Null) => Err(SchemaError::MissingField(name)),
        Some(Value::String(s)) if s.trim().is_empty() => Err(SchemaError::EmptyField(name)),
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(_) => Err(SchemaError::NotAString(name)),
    };

    let [meaning, origin, example, vietnamese_context] = EXPLANATION_FIELDS;
    Ok(Explanation {
        meaning: field(meaning)?,
        origin: field(origin)?,
        example: field(example)?,
        vietnamese_context: field(vietnamese_context)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "meaning": "To die.",
        "origin": "Possibly from a slaughterhouse beam called a bucket.",
        "example": "The old car finally kicked the bucket.",
        "vietnameseContext": "Tương tự \"về với ông bà\"."
    }"#;

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest::explanation("kick the bucket", "chết");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        let prompt = json["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("\"kick the bucket\""));
        assert!(prompt.contains("\"chết\""));

        let config = &json["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["type"], "OBJECT");
        assert_eq!(
            config["responseSchema"]["required"],
            json!(["meaning", "origin", "example", "vietnameseContext"])
        );
        for name in EXPLANATION_FIELDS {
            assert_eq!(config["responseSchema"]["properties"][name]["type"], "STRING");
        }
    }

    #[test]
    fn test_response_text_joins_parts() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": " {\"a\": "}, {"text": "1} "}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"totalTokenCount": 12}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.text().as_deref(), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_response_without_text() {
        for body in [
            r#"{}"#,
            r#"{"candidates": []}"#,
            r#"{"candidates": [{"finishReason": "SAFETY"}]}"#,
            r#"{"candidates": [{"content": {"parts": [{"text": "   "}]}}]}"#,
        ] {
            let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
            assert!(response.text().is_none(), "{body}");
        }
    }

    #[test]
    fn test_parse_explanation() {
        let explanation = parse_explanation(VALID).unwrap();

        assert_eq!(explanation.meaning, "To die.");
        assert_eq!(explanation.example, "The old car finally kicked the bucket.");
        assert_eq!(explanation.vietnamese_context, "Tương tự \"về với ông bà\".");
    }

    #[test]
    fn test_parse_explanation_missing_origin() {
        let text = r#"{"meaning": "m", "example": "e", "vietnameseContext": "v"}"#;
        assert!(matches!(
            parse_explanation(text),
            Err(SchemaError::MissingField("origin"))
        ));

        let text = r#"{"meaning": "m", "origin": null, "example": "e", "vietnameseContext": "v"}"#;
        assert!(matches!(
            parse_explanation(text),
            Err(SchemaError::MissingField("origin"))
        ));
    }

    #[test]
    fn test_parse_explanation_rejects_wrong_types() {
        let text = r#"{"meaning": "m", "origin": "o", "example": ["e"], "vietnameseContext": "v"}"#;
        assert!(matches!(
            parse_explanation(text),
            Err(SchemaError::NotAString("example"))
        ));

        let text = r#"{"meaning": "m", "origin": "o", "example": "e", "vietnameseContext": "  "}"#;
        assert!(matches!(
            parse_explanation(text),
            Err(SchemaError::EmptyField("vietnameseContext"))
        ));

        assert!(matches!(parse_explanation("[1, 2]"), Err(SchemaError::NotAnObject)));
        assert!(matches!(
            parse_explanation("Sure! Here is the explanation"),
            Err(SchemaError::NotJson(_))
        ));
    }
}
