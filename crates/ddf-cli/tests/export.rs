//! End-to-end export from a dump directory.

use std::fs;
use std::path::Path;

use ddf_cli::export::{list_studies, write_study};
use ddf_transform::StudyObjectFactory;

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
        r#"[{"uid": "StudyEpoch_000001", "epoch_name": "Screening", "order": 1},
            {"uid": "StudyEpoch_000002", "epoch_name": "Treatment", "order": 2}]"#,
    );
    write(
        root,
        "Study_000002/visits.json",
        r#"[{"uid": "StudyVisit_000001", "visit_name": "Visit 1",
             "epoch_uid": "StudyEpoch_000001", "show_visit": true}]"#,
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
        "Study_000002/population.json",
        r#"{"uid": "0", "description": "Patients with Type 2 diabetes mellitus"}"#,
    );
}

#[test]
fn exports_dump_study_as_camel_case_json() {
    let dir = tempfile::tempdir().unwrap();
    seed_dump(dir.path());
    let factory = StudyObjectFactory::from_dump_dir(dir.path());

    let mut buffer = Vec::new();
    write_study(&factory, STUDY_UID, &mut buffer).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(json["studyIdentifier"], "Study_000002");
    assert_eq!(json["studyTitle"], "T2DM-PoC");
    assert_eq!(json["studyEpochs"].as_array().unwrap().len(), 2);
    assert_eq!(json["encounters"][0]["encounterName"], "Visit 1");
    assert_eq!(json["objectives"].as_array().unwrap().len(), 1);
    assert!(
        json["studyDesignPopulations"][0]["populationDescription"]
            .as_str()
            .unwrap()
            .contains("Type 2 diabetes mellitus")
    );
}

#[test]
fn missing_study_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    seed_dump(dir.path());
    let factory = StudyObjectFactory::from_dump_dir(dir.path());

    let mut buffer = Vec::new();
    let error = write_study(&factory, "Study_999999", &mut buffer).unwrap_err();
    assert!(error.to_string().contains("Study_999999"));
    assert!(buffer.is_empty());
}

#[test]
fn lists_studies_from_dump() {
    let dir = tempfile::tempdir().unwrap();
    seed_dump(dir.path());
    let factory = StudyObjectFactory::from_dump_dir(dir.path());

    let studies = list_studies(&factory).unwrap();
    assert_eq!(studies.len(), 1);
    assert_eq!(studies[0].uid, STUDY_UID);
}
