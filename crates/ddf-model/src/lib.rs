//! CDISC DDF study-definition exchange model.
//!
//! Target-side structs for the cross-sponsor study design interchange
//! format. Serialized field names are camelCase per the exchange format's
//! JSON representation. All types compare by value; a mapped entity is a
//! plain data carrier with no behavior.

pub mod design;
pub mod objective;
pub mod study;
pub mod terms;

pub use design::{Encounter, StudyArm, StudyElement, StudyEpoch};
pub use objective::{Endpoint, Objective};
pub use study::{Study, StudyDesignPopulation};
pub use terms::{Code, TransitionRule};
