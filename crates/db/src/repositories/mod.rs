//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod document_repo;
pub mod video_project_repo;

pub use document_repo::DocumentRepo;
pub use video_project_repo::VideoProjectRepo;
