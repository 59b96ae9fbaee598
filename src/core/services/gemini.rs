// Client for the Gemini `generateContent` endpoint.
//
// Only the slice of the API the assistant needs is modelled: a single user
// turn made of text and inline image parts, and the text of the first
// candidate in the reply.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::config::AssistantConfig;
use crate::core::error::AssistantError;

// One piece of request content.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text(String),
    InlineData { mime_type: String, data: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub parts: Vec<Part>,
    pub response_mime_type: Option<String>,
}

impl GenerateRequest {
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            parts: vec![Part::Text(prompt.into())],
            response_mime_type: None,
        }
    }

    // Concatenated text parts, mostly for logging and tests.
    pub fn prompt_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text(t) => Some(t.as_str()),
                Part::InlineData { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// The external generative-language service.
#[async_trait(?Send)]
pub trait GenerativeService {
    async fn generate(&self, request: GenerateRequest) -> Result<String, AssistantError>;
}

// Wire format
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest<'a> {
    contents: Vec<WireContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<WireGenerationConfig<'a>>,
}

#[derive(Serialize)]
struct WireContent<'a> {
    role: &'static str,
    parts: Vec<WirePart<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum WirePart<'a> {
    Text {
        text: &'a str,
    },
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: WireBlob<'a>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireBlob<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig<'a> {
    response_mime_type: &'a str,
}

#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Deserialize)]
struct WireCandidate {
    content: Option<WireCandidateContent>,
}

#[derive(Deserialize)]
struct WireCandidateContent {
    #[serde(default)]
    parts: Vec<WireResponsePart>,
}

#[derive(Deserialize)]
struct WireResponsePart {
    text: Option<String>,
}

fn to_wire(request: &GenerateRequest) -> WireRequest<'_> {
    let parts = request
        .parts
        .iter()
        .map(|part| match part {
            Part::Text(text) => WirePart::Text { text },
            Part::InlineData { mime_type, data } => WirePart::Inline {
                inline_data: WireBlob { mime_type, data },
            },
        })
        .collect();

    WireRequest {
        contents: vec![WireContent { role: "user", parts }],
        generation_config: request
            .response_mime_type
            .as_deref()
            .map(|response_mime_type| WireGenerationConfig { response_mime_type }),
    }
}

fn first_candidate_text(response: WireResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: Option<String>,
    api_base: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_base, model)
    }
}

#[async_trait(?Send)]
impl GenerativeService for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<String, AssistantError> {
        let api_key = self.api_key.as_deref().ok_or(AssistantError::MissingApiKey)?;

        let res = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", api_key)
            .json(&to_wire(&request))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(AssistantError::Status { status, body });
        }

        let parsed: WireResponse = res.json().await?;
        let text = first_candidate_text(parsed);
        if text.trim().is_empty() {
            return Err(AssistantError::EmptyResponse);
        }
        Ok(text)
    }
}
