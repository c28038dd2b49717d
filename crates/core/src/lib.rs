//! Domain types shared by the storage and HTTP crates.
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod pagination;
pub mod types;
pub mod video_project;
