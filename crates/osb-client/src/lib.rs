//! Retrieval layer for the OpenStudyBuilder authoring API.
//!
//! The [`StudyBuilderAdaptor`] trait is the seam between the mapping layer
//! and the source system. Two implementations ship here: [`ApiAdaptor`]
//! talks to the live REST API with bearer authentication, [`FileAdaptor`]
//! reads exported JSON dumps from disk. Both are pass-through: no retry,
//! no re-sorting, no partial-result suppression.

pub mod adaptor;
pub mod api;
pub mod config;
pub mod error;
pub mod file;

mod page;

pub use adaptor::StudyBuilderAdaptor;
pub use api::ApiAdaptor;
pub use config::ClientConfig;
pub use error::{AdaptorError, Result};
pub use file::FileAdaptor;
