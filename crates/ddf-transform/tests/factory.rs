//! Factory pass-through over a dump directory.

use std::fs;
use std::path::Path;

use ddf_transform::{SourceMode, StudyObjectFactory, StudyObjectMapper};

const STUDY_UID: &str = "Study_000002";

fn write(root: &Path, relative: &str, body: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn seed_minimal_dump(root: &Path) {
    write(
        root,
        "Study_000002/study.json",
        r#"{"uid": "Study_000002", "study_acronym": "T2DM-PoC"}"#,
    );
    write(
        root,
        "Study_000002/visits.json",
        r#"[{"uid": "StudyVisit_000001", "visit_name": "Visit 1",
             "epoch_uid": "StudyEpoch_000001", "show_visit": true}]"#,
    );
    write(
        root,
        "Study_000002/epochs.json",
        r#"[{"uid": "StudyEpoch_000001", "epoch_name": "Screening", "order": 1}]"#,
    );
    write(root, "Study_000002/arms.json", "[]");
    write(root, "Study_000002/elements.json", "[]");
    write(
        root,
        "Study_000002/endpoints.json",
        r#"[{"study_endpoint_uid": "StudyEndpoint_000007",
             "study_objective": {"uid": "StudyObjective_000010",
                                 "objective": "To demonstrate superiority"}}]"#,
    );
    write(
        root,
        "Study_000002/criteria.json",
        r#"[{"uid": "StudyCriteria_000001", "name": "Age 18 or older"}]"#,
    );
    write(
        root,
        "Study_000002/population.json",
        r#"{"uid": "0", "description": "Patients with Type 2 diabetes mellitus"}"#,
    );
}

#[test]
fn dump_dir_factory_is_file_mode() {
    let dir = tempfile::tempdir().unwrap();
    seed_minimal_dump(dir.path());
    let factory = StudyObjectFactory::from_dump_dir(dir.path());
    assert_eq!(factory.mode(), SourceMode::File);
}

#[test]
fn accessors_pass_dump_contents_through() {
    let dir = tempfile::tempdir().unwrap();
    seed_minimal_dump(dir.path());
    let factory = StudyObjectFactory::from_dump_dir(dir.path());

    assert_eq!(factory.visits(STUDY_UID).unwrap().len(), 1);
    assert_eq!(factory.epochs(STUDY_UID).unwrap().len(), 1);
    assert!(factory.arms(STUDY_UID).unwrap().is_empty());
    assert_eq!(
        factory.criteria(STUDY_UID).unwrap()[0].name,
        "Age 18 or older"
    );
}

#[test]
fn file_mode_aggregate_from_dump() {
    let dir = tempfile::tempdir().unwrap();
    seed_minimal_dump(dir.path());
    let factory = StudyObjectFactory::from_dump_dir(dir.path());
    let mapper = StudyObjectMapper::new();

    let source = factory.study(STUDY_UID).unwrap();
    let study = mapper.map_study(&source, &factory).unwrap();

    assert_eq!(study.encounters.len(), 1);
    assert_eq!(study.encounters[0].encounter_name, "Visit 1");
    assert_eq!(study.objectives.len(), 1);
    // File dumps carry no objective level.
    assert!(study.objectives[0].objective_level.is_none());
}
