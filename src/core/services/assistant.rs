use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::config::AssistantConfig;
use crate::core::error::AssistantError;
use crate::core::models::ProjectStatus;

use super::gemini::{GeminiClient, GenerateRequest, GenerativeService, Part};

pub const FALLBACK_TITLE: &str = "New Project";
pub const FALLBACK_SUMMARY: &str = "Asset uploaded for review.";
pub const EMAIL_ERROR_TEXT: &str = "Error generating email. Please check API key.";
pub const EMAIL_EMPTY_TEXT: &str = "Could not generate email.";

const DESCRIBE_PROMPT: &str = "Analyze this image. Suggest a short, professional project title (max 5 words) \
and a 1-sentence summary of what it is (e.g., 'Modern minimalist logo design for tech startup'). \
Return JSON with the keys \"title\" and \"summary\".";

// Outcome of an assistant call: either what the service produced or the
// fixed stand-in used when the call failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Assisted<T> {
    Generated(T),
    Fallback(T),
}

impl<T> Assisted<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Assisted::Fallback(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Assisted::Generated(v) | Assisted::Fallback(v) => v,
        }
    }

    // The generated value, discarding fallbacks.
    pub fn generated(self) -> Option<T> {
        match self {
            Assisted::Generated(v) => Some(v),
            Assisted::Fallback(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub title: String,
    pub summary: String,
}

impl ImageMetadata {
    pub fn fallback() -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            summary: FALLBACK_SUMMARY.to_string(),
        }
    }
}

// Image bytes as the service expects them: base64 plus MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub base64_data: String,
}

impl InlineImage {
    // Parses a `data:<mime>;base64,<payload>` URL as produced by
    // `FileReader.readAsDataURL`.
    pub fn from_data_url(url: &str) -> Option<Self> {
        let rest = url.strip_prefix("data:")?;
        let (header, payload) = rest.split_once(',')?;
        let mime_type = header.strip_suffix(";base64")?;
        if mime_type.is_empty() || payload.is_empty() {
            return None;
        }
        Some(Self {
            mime_type: mime_type.to_string(),
            base64_data: payload.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailPurpose {
    Initial,
    Followup,
    ApprovalThanks,
}

impl EmailPurpose {
    // The email a freelancer most likely wants to send next.
    pub fn for_status(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Pending => EmailPurpose::Initial,
            ProjectStatus::ChangesRequested => EmailPurpose::Followup,
            ProjectStatus::Approved => EmailPurpose::ApprovalThanks,
        }
    }

    pub fn word_limit(&self) -> u32 {
        match self {
            EmailPurpose::Initial => 100,
            EmailPurpose::Followup => 80,
            EmailPurpose::ApprovalThanks => 50,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmailPurpose::Initial => "Review request",
            EmailPurpose::Followup => "Follow-up",
            EmailPurpose::ApprovalThanks => "Thank-you note",
        }
    }

    pub fn prompt(&self, client_name: &str, project_name: &str) -> String {
        let limit = self.word_limit();
        match self {
            EmailPurpose::Initial => format!(
                "Write a short, professional, and friendly email to a client named \"{client_name}\".\n\
                 I am sending them a link to review the project \"{project_name}\".\n\
                 The goal is to get them to click the link and approve it or leave feedback.\n\
                 Keep it under {limit} words. Do not include subject line placeholders. Just the body.\n\
                 Tone: Efficient but warm."
            ),
            EmailPurpose::Followup => format!(
                "Write a polite but firm follow-up email to \"{client_name}\" regarding project \"{project_name}\".\n\
                 They haven't approved it yet. Remind them that approval is needed to move forward (or finalize payment).\n\
                 Keep it under {limit} words.\n\
                 Tone: Professional urgency."
            ),
            EmailPurpose::ApprovalThanks => format!(
                "Write a very short thank you note to \"{client_name}\" for approving \"{project_name}\".\n\
                 Mention that the final files will be sent shortly (or invoice).\n\
                 Keep it under {limit} words."
            ),
        }
    }
}

// Title/summary suggestions and outreach drafts. Never touches project
// state; callers decide what to do with the result.
#[derive(Clone)]
pub struct MetadataAssistant {
    service: Rc<dyn GenerativeService>,
    text_model: String,
    vision_model: String,
}

impl MetadataAssistant {
    pub fn new(service: Rc<dyn GenerativeService>, config: &AssistantConfig) -> Self {
        Self {
            service,
            text_model: config.text_model.clone(),
            vision_model: config.vision_model.clone(),
        }
    }

    pub fn gemini(config: &AssistantConfig) -> Self {
        Self::new(Rc::new(GeminiClient::new(config)), config)
    }

    pub async fn describe_image(&self, image: InlineImage) -> Assisted<ImageMetadata> {
        let request = GenerateRequest {
            model: self.vision_model.clone(),
            parts: vec![
                Part::InlineData {
                    mime_type: image.mime_type,
                    data: image.base64_data,
                },
                Part::Text(DESCRIBE_PROMPT.to_string()),
            ],
            response_mime_type: Some("application/json".to_string()),
        };

        let result = self
            .service
            .generate(request)
            .await
            .and_then(|text| parse_metadata(&text));

        match result {
            Ok(metadata) => {
                tracing::info!(title = %metadata.title, "image described");
                Assisted::Generated(metadata)
            }
            Err(e) => {
                tracing::warn!(error = %e, "image description failed, using fallback");
                Assisted::Fallback(ImageMetadata::fallback())
            }
        }
    }

    pub async fn draft_email(
        &self,
        client_name: &str,
        project_name: &str,
        purpose: EmailPurpose,
    ) -> Assisted<String> {
        let request = GenerateRequest::text(
            self.text_model.clone(),
            purpose.prompt(client_name, project_name),
        );

        match self.service.generate(request).await {
            Ok(text) if !text.trim().is_empty() => {
                tracing::info!(?purpose, "email drafted");
                Assisted::Generated(text.trim().to_string())
            }
            Ok(_) | Err(AssistantError::EmptyResponse) => {
                tracing::warn!(?purpose, "email draft came back empty");
                Assisted::Fallback(EMAIL_EMPTY_TEXT.to_string())
            }
            Err(e) => {
                tracing::warn!(?purpose, error = %e, "email draft failed");
                Assisted::Fallback(EMAIL_ERROR_TEXT.to_string())
            }
        }
    }
}

// Models sometimes wrap JSON in a markdown fence even when asked not to
fn parse_metadata(text: &str) -> Result<ImageMetadata, AssistantError> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str(body).map_err(|e| AssistantError::Decode(e.to_string()))
}
