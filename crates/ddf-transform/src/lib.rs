//! Object mapping from OpenStudyBuilder entities to the DDF exchange model.
//!
//! The mapping is a stateless, one-directional field transcription: one
//! target object per source object, missing optional source data becomes
//! `None` on the target, and nothing here validates input. The only
//! fallible operation is the full-study composition, which consults the
//! [`StudyObjectFactory`] for related entities and propagates retrieval
//! failures unchanged.

pub mod factory;
pub mod mapper;

pub use factory::{SourceMode, StudyObjectFactory};
pub use mapper::StudyObjectMapper;
