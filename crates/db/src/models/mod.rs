//! Row models and request DTOs.

pub mod document;
pub mod video_project;
