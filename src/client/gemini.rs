use lazy_static::lazy_static;
use regex::{Captures, Regex};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};

use super::service::DefinitionService;
use crate::constants::{
    DEFAULT_DEFINITION_LANGUAGE, DEFAULT_MODEL, DICTIONARY_PROMPT, GEMINI_API_BASE,
    WORD_DEFINITIONS_PROMPT,
};
use crate::error::{ErrorContext, HubResult};
use crate::hub_error;
use crate::logging::log_debug;
use crate::models::WordDefinition;

lazy_static! {
    static ref CODE_FENCE: Regex =
        Regex::new(r"(?s)^\s*```[A-Za-z]*\s*(.*?)\s*```\s*$").expect("valid fence pattern");
    static ref PLACEHOLDER: Regex = Regex::new(r"\{(\w+)\}").expect("valid placeholder pattern");
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DefinitionPayload {
    List(Vec<WordDefinition>),
    Wrapped { words: Vec<WordDefinition> },
}

/// `DefinitionService` backed by the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    language: String,
}

impl GeminiClient {
    pub fn new(api_key: &str) -> HubResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|_| hub_error!(InvalidInput, "API key contains invalid characters"))?;
        key.set_sensitive(true);
        headers.insert("x-goog-api-key", key);

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: GEMINI_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            language: DEFAULT_DEFINITION_LANGUAGE.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    async fn generate(&self, prompt: &str, response_schema: Option<Value>) -> HubResult<String> {
        let mut body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }]
        });
        if let Some(schema) = response_schema {
            body["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": schema
            });
        }

        log_debug(&format!("POST {}", self.endpoint()));
        let response = self.client.post(self.endpoint()).json(&body).send().await?;
        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            return Err(hub_error!(ApiError, describe_http_error(status.as_u16(), &raw)));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&raw)
            .context("Unexpected response from the definition service")?;
        extract_text(parsed)
    }
}

impl DefinitionService for GeminiClient {
    async fn word_definitions(
        &self,
        student_level: f64,
        book_title: &str,
        book_level: f64,
        excerpt: &str,
    ) -> HubResult<Vec<WordDefinition>> {
        let student_level = student_level.to_string();
        let book_level = book_level.to_string();
        let prompt = fill_prompt(
            WORD_DEFINITIONS_PROMPT,
            &[
                ("student_level", student_level.as_str()),
                ("book_title", book_title),
                ("book_level", book_level.as_str()),
                ("language", self.language.as_str()),
                ("excerpt", excerpt),
            ],
        );

        let text = self.generate(&prompt, Some(word_list_schema())).await?;
        parse_word_definitions(&text)
    }

    async fn dictionary_definition(&self, word: &str) -> HubResult<String> {
        let prompt = fill_prompt(DICTIONARY_PROMPT, &[("word", word), ("language", self.language.as_str())]);

        let text = self.generate(&prompt, None).await?;
        let text = strip_code_fence(&text).trim().to_string();
        if text.is_empty() {
            return Err(hub_error!(ApiError, "The service returned an empty definition"));
        }
        Ok(text)
    }
}

/// Fill `{name}` placeholders in a single pass. Substituted text is never
/// scanned again, and unknown placeholders are left as they are.
fn fill_prompt(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            values
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map_or_else(|| caps[0].to_string(), |(_, value)| value.to_string())
        })
        .into_owned()
}

fn word_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "word": { "type": "STRING" },
                "definition": { "type": "STRING" }
            },
            "required": ["word", "definition"]
        }
    })
}

fn extract_text(response: GenerateContentResponse) -> HubResult<String> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(hub_error!(ApiError, "Request was blocked: {}", reason));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| hub_error!(ApiError, "The service returned no answer"))?;

    let text: String = candidate
        .content
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(hub_error!(ApiError, "The service returned no text ({})", reason));
    }

    Ok(text)
}

fn describe_http_error(status: u16, raw: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(raw) {
        Ok(envelope) => match envelope.error.status {
            Some(code) => format!("HTTP {} {}: {}", status, code, envelope.error.message),
            None => format!("HTTP {}: {}", status, envelope.error.message),
        },
        Err(_) => format!("HTTP error: {}", status),
    }
}

fn strip_code_fence(text: &str) -> &str {
    CODE_FENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or(text, |m| m.as_str())
}

/// Decode the model's JSON answer, tolerating a Markdown code fence and a
/// `{"words": [...]}` wrapper. Entries with a blank word are dropped.
pub fn parse_word_definitions(text: &str) -> HubResult<Vec<WordDefinition>> {
    let payload: DefinitionPayload = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| hub_error!(ParseError, "Unexpected definition format: {}", e))?;

    let definitions = match payload {
        DefinitionPayload::List(list) => list,
        DefinitionPayload::Wrapped { words } => words,
    };

    Ok(definitions
        .into_iter()
        .filter(|d| !d.word.trim().is_empty())
        .map(|d| WordDefinition {
            word: d.word.trim().to_string(),
            definition: d.definition.trim().to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HubError;

    #[test]
    fn test_parse_plain_list() {
        let defs = parse_word_definitions(
            r#"[{"word":"pigeon","definition":"비둘기"},{"word":" ","definition":"x"}]"#,
        )
        .unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].word, "pigeon");
        assert_eq!(defs[0].definition, "비둘기");
    }

    #[test]
    fn test_parse_fenced_and_wrapped() {
        let text = "```json\n{\"words\": [{\"word\": \"bus\", \"definition\": \"버스\"}]}\n```";
        let defs = parse_word_definitions(text).unwrap();
        assert_eq!(defs, vec![WordDefinition {
            word: "bus".to_string(),
            definition: "버스".to_string(),
        }]);
    }

    #[test]
    fn test_parse_rejects_prose() {
        assert!(matches!(
            parse_word_definitions("Sorry, I cannot help."),
            Err(HubError::ParseError(_))
        ));
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "[{\"word\":" }, { "text": "\"a\",\"definition\":\"b\"}]" }] },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        let text = extract_text(response).unwrap();
        assert_eq!(parse_word_definitions(&text).unwrap().len(), 1);
    }

    #[test]
    fn test_extract_text_reports_block_and_empty() {
        let blocked: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();
        assert!(extract_text(blocked).unwrap_err().to_string().contains("SAFETY"));

        let empty: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert!(matches!(extract_text(empty), Err(HubError::ApiError(_))));
    }

    #[test]
    fn test_describe_http_error() {
        let raw = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            describe_http_error(400, raw),
            "HTTP 400 INVALID_ARGUMENT: API key not valid."
        );
        assert_eq!(describe_http_error(503, "<html>"), "HTTP error: 503");
    }

    #[test]
    fn test_fill_prompt_leaves_braces_in_values_alone() {
        let prompt = fill_prompt(
            WORD_DEFINITIONS_PROMPT,
            &[
                ("student_level", "1"),
                ("book_title", "The {excerpt} of {language}"),
                ("book_level", "2.5"),
                ("language", "Korean"),
                ("excerpt", "Read {book_title} aloud."),
            ],
        );

        assert!(prompt.contains(r#""The {excerpt} of {language}" (book level 2.5)"#));
        assert!(prompt.contains("Read {book_title} aloud."));
        assert!(prompt.contains("definition in Korean"));
        assert!(!prompt.contains("{student_level}"));
    }

    #[test]
    fn test_fill_prompt_keeps_unknown_placeholders() {
        assert_eq!(fill_prompt("{word} and {other}", &[("word", "cat")]), "cat and {other}");
    }

    #[test]
    fn test_endpoint_uses_model() {
        let client = GeminiClient::new("key")
            .unwrap()
            .with_model("gemini-test")
            .with_base_url("http://localhost:9/v1beta/models/");
        assert_eq!(client.endpoint(), "http://localhost:9/v1beta/models/gemini-test:generateContent");
    }
}
