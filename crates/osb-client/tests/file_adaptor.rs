//! Integration tests for the file-backed adaptor.

use std::fs;
use std::path::Path;

use osb_client::{AdaptorError, FileAdaptor, StudyBuilderAdaptor};

const STUDY_UID: &str = "Study_000002";

fn write(root: &Path, relative: &str, body: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn seed_dump(root: &Path) {
    write(
        root,
        "studies.json",
        r#"[{"uid": "Study_000002", "study_id": "CDISC DEV-0002", "study_acronym": "T2DM-PoC"}]"#,
    );
    write(
        root,
        "Study_000002/study.json",
        r#"{"uid": "Study_000002", "study_id": "CDISC DEV-0002", "study_acronym": "T2DM-PoC"}"#,
    );
    write(
        root,
        "Study_000002/epochs.json",
        r#"{"items": [
            {"uid": "StudyEpoch_000001", "epoch_name": "Screening", "order": 1},
            {"uid": "StudyEpoch_000002", "epoch_name": "Treatment", "order": 2}
        ]}"#,
    );
    write(
        root,
        "Study_000002/visits.json",
        r#"[
            {"uid": "StudyVisit_000001", "visit_name": "Visit 1",
             "epoch_uid": "StudyEpoch_000001", "visit_number": 1, "show_visit": true},
            {"uid": "StudyVisit_000002", "visit_name": "Visit 2",
             "epoch_uid": "StudyEpoch_000002", "visit_number": 2, "show_visit": true}
        ]"#,
    );
    write(
        root,
        "Study_000002/arms.json",
        r#"[{"arm_uid": "StudyArm_000009", "name": "Metformin arm",
             "arm_type": {"term_uid": "CTTerm_000081", "name": "Investigational Arm"}}]"#,
    );
    write(
        root,
        "Study_000002/elements.json",
        r#"[{"element_uid": "StudyElement_000014", "name": "Treatment A",
             "start_rule": "Randomization", "end_rule": "End of treatment"}]"#,
    );
    write(
        root,
        "Study_000002/objectives.json",
        r#"[{"uid": "StudyObjective_000010", "objective": "To demonstrate superiority"}]"#,
    );
    write(
        root,
        "Study_000002/endpoints.json",
        r#"[
            {"study_endpoint_uid": "StudyEndpoint_000007",
             "endpoint": {"uid": "Endpoint_000007", "endpoint": "Change in HbA1c"}},
            {"study_endpoint_uid": "StudyEndpoint_000008",
             "endpoint": {"uid": "Endpoint_000008", "endpoint": "Change in body weight"},
             "study_objective": {"uid": "StudyObjective_000010",
                                 "objective": "To demonstrate superiority"}}
        ]"#,
    );
    write(
        root,
        "Study_000002/criteria.json",
        r#"[{"uid": "StudyCriteria_000001", "name": "Age 18 or older",
             "criteria_type": {"term_uid": "CTTerm_000091", "name": "INCLUSION"}}]"#,
    );
    write(
        root,
        "Study_000002/population.json",
        r#"{"uid": "0", "description": "Patients with Type 2 diabetes mellitus"}"#,
    );
}

#[test]
fn reads_all_entity_kinds_from_dump() {
    let dir = tempfile::tempdir().unwrap();
    seed_dump(dir.path());
    let adaptor = FileAdaptor::new(dir.path());

    assert_eq!(adaptor.get_studies().unwrap().len(), 1);
    assert_eq!(adaptor.get_study(STUDY_UID).unwrap().uid, STUDY_UID);
    assert_eq!(adaptor.get_epochs(STUDY_UID).unwrap().len(), 2);
    assert_eq!(adaptor.get_visits(STUDY_UID).unwrap().len(), 2);
    assert_eq!(adaptor.get_arms(STUDY_UID).unwrap().len(), 1);
    assert_eq!(adaptor.get_elements(STUDY_UID).unwrap().len(), 1);
    assert_eq!(adaptor.get_objectives(STUDY_UID).unwrap().len(), 1);
    assert_eq!(adaptor.get_endpoints(STUDY_UID).unwrap().len(), 2);
    assert_eq!(adaptor.get_criteria(STUDY_UID).unwrap().len(), 1);
    assert!(
        adaptor
            .get_population(STUDY_UID)
            .unwrap()
            .description
            .contains("Type 2 diabetes mellitus")
    );
}

#[test]
fn preserves_source_order() {
    let dir = tempfile::tempdir().unwrap();
    seed_dump(dir.path());
    let adaptor = FileAdaptor::new(dir.path());

    let epochs = adaptor.get_epochs(STUDY_UID).unwrap();
    assert_eq!(epochs[0].epoch_name, "Screening");
    assert_eq!(epochs[1].epoch_name, "Treatment");

    let visits = adaptor.get_visits(STUDY_UID).unwrap();
    assert_eq!(visits[0].visit_name, "Visit 1");
    assert_eq!(visits[1].visit_name, "Visit 2");
}

#[test]
fn missing_dump_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let adaptor = FileAdaptor::new(dir.path());
    match adaptor.get_epochs("Study_999999") {
        Err(AdaptorError::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn malformed_dump_surfaces_json_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Study_000002/epochs.json", "{not json");
    let adaptor = FileAdaptor::new(dir.path());
    match adaptor.get_epochs(STUDY_UID) {
        Err(AdaptorError::Json(_)) => {}
        other => panic!("expected json error, got {other:?}"),
    }
}
