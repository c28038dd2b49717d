//! Video project domain rules: enumerations, duration bounds, and the
//! deterministic placeholder content attached to every new project.
//!
//! Placeholder generation stands in for real script/title generation until
//! a generation backend exists. It is a pure function of prompt and mode.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Collection holding video project documents.
pub const COLLECTION: &str = "videoproject";

/// Shortest allowed target duration, in seconds.
pub const MIN_DURATION_SECS: i32 = 10;

/// Longest allowed target duration, in seconds.
pub const MAX_DURATION_SECS: i32 = 3600;

/// Duration used when the creation payload omits one.
pub const DEFAULT_DURATION_SECS: i32 = 60;

/// Narration language used when the creation payload omits one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Number of prompt characters carried into the generated title.
pub const TITLE_PROMPT_CHARS: usize = 60;

/// Suffix appended to every generated title.
pub const TITLE_SUFFIX: &str = " | PromptToTube";

/// Edit suggestions attached to every new project.
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "Trim pauses for tighter pacing",
    "Add your logo to the lower-right corner",
    "Use upbeat background music around 100-120 BPM",
];

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Output format of the video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoMode {
    #[default]
    Short,
    Long,
}

impl VideoMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for VideoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generation status of a project.
///
/// Transitions are not enforced; any status may be written by a partial update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Created,
    Generating,
    Generated,
    Error,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Generating => "generating",
            Self::Generated => "generated",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Placeholder generation
// ---------------------------------------------------------------------------

/// Generated fields attached to a freshly created project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub script: String,
    pub title: String,
    pub tags: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Build the placeholder script, title, tags, and suggestions for a prompt.
pub fn generate_placeholders(prompt: &str, mode: VideoMode) -> Placeholders {
    Placeholders {
        script: format!("Generated {mode} video script for: {prompt}"),
        title: generate_title(prompt),
        tags: ["ai", "video", "prompt", mode.as_str()]
            .into_iter()
            .map(String::from)
            .collect(),
        suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}

/// First [`TITLE_PROMPT_CHARS`] characters of the prompt plus [`TITLE_SUFFIX`].
///
/// Truncation counts `char`s, so multi-byte prompts are never split mid-character.
pub fn generate_title(prompt: &str) -> String {
    let head: String = prompt.chars().take(TITLE_PROMPT_CHARS).collect();
    format!("{head}{TITLE_SUFFIX}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
