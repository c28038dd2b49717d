//! Video project document model and DTOs.

use prompttube_core::video_project::{
    generate_placeholders, ProjectStatus, VideoMode, DEFAULT_DURATION_SECS, DEFAULT_LANGUAGE,
    MAX_DURATION_SECS, MIN_DURATION_SECS,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

/// A video project as stored in the `videoproject` collection.
///
/// Identity is not part of the body; it lives on the enclosing document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoProject {
    pub prompt: String,
    pub mode: VideoMode,
    pub duration_sec: i32,
    pub language: String,
    pub voice: Option<String>,
    pub template: Option<String>,
    pub brand_name: Option<String>,
    pub status: ProjectStatus,

    // Generated assets / metadata.
    pub script: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub captions_srt: Option<String>,
}

impl VideoProject {
    /// Build a new project from a creation request, filling in placeholder
    /// script, title, tags, and suggestions.
    pub fn from_request(input: &CreateVideoProject) -> Self {
        let generated = generate_placeholders(&input.prompt, input.mode);
        Self {
            prompt: input.prompt.clone(),
            mode: input.mode,
            duration_sec: input.duration_sec,
            language: input.language.clone(),
            voice: input.voice.clone(),
            template: input.template.clone(),
            brand_name: input.brand_name.clone(),
            status: ProjectStatus::Created,
            script: Some(generated.script),
            title: Some(generated.title),
            tags: generated.tags,
            suggestions: generated.suggestions,
            thumbnail_url: None,
            video_url: None,
            captions_srt: None,
        }
    }

    /// Serialize into a document body.
    pub fn to_body(&self) -> Result<Map<String, Value>, serde_json::Error> {
        serde_json::from_value(serde_json::to_value(self)?)
    }
}

/// DTO for creating a new project. Only `prompt` is required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVideoProject {
    #[validate(custom(function = "not_blank"))]
    pub prompt: String,
    #[serde(default)]
    pub mode: VideoMode,
    #[serde(default = "default_duration")]
    #[validate(range(min = MIN_DURATION_SECS, max = MAX_DURATION_SECS))]
    pub duration_sec: i32,
    #[serde(default = "default_language")]
    pub language: String,
    pub voice: Option<String>,
    pub template: Option<String>,
    pub brand_name: Option<String>,
}

/// DTO for a partial update. Absent and `null` fields are left untouched.
///
/// Unknown keys (including `id`) are rejected at deserialization time, and
/// enum fields must hold one of their declared values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateVideoProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<VideoMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = MIN_DURATION_SECS, max = MAX_DURATION_SECS))]
    pub duration_sec: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captions_srt: Option<String>,
}

impl UpdateVideoProject {
    /// The fields to overwrite, with every unset field dropped.
    pub fn to_fields(&self) -> Result<Map<String, Value>, serde_json::Error> {
        serde_json::from_value(serde_json::to_value(self)?)
    }
}

fn default_duration() -> i32 {
    DEFAULT_DURATION_SECS
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}
