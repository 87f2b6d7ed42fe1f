//! Data model for entities returned by the OpenStudyBuilder REST API.
//!
//! These structs mirror the API's snake_case JSON payloads. Deserialization
//! is deliberately lenient: every struct carries `#[serde(default)]` so an
//! incomplete payload produces a partially populated value instead of an
//! error. Downstream mapping treats missing optional fields as absence.

pub mod design;
pub mod selections;
pub mod study;
pub mod terms;

pub use design::{Arm, Element, Epoch, Visit};
pub use selections::{Criteria, Endpoint, Objective, Population, StudySelectionEndpoint};
pub use study::OpenStudy;
pub use terms::{Code, Duration};
