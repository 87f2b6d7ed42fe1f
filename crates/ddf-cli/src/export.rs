//! Export operations: fetch, map and serialize one study.

use std::io::Write;

use anyhow::Context;
use tracing::info;

use ddf_transform::{StudyObjectFactory, StudyObjectMapper};
use osb_client::StudyBuilderAdaptor;
use osb_model::OpenStudy;

/// Fetch `study_uid` through the factory, map it to a DDF study definition
/// and write it as pretty-printed JSON.
pub fn write_study<A: StudyBuilderAdaptor>(
    factory: &StudyObjectFactory<A>,
    study_uid: &str,
    writer: &mut impl Write,
) -> anyhow::Result<()> {
    let mapper = StudyObjectMapper::new();
    let source = factory
        .study(study_uid)
        .with_context(|| format!("fetching study {study_uid}"))?;
    let study = mapper
        .map_study(&source, factory)
        .with_context(|| format!("composing study definition for {study_uid}"))?;

    info!(
        study_uid,
        encounters = study.encounters.len(),
        objectives = study.objectives.len(),
        "exporting study definition"
    );

    serde_json::to_writer_pretty(&mut *writer, &study).context("serializing study definition")?;
    writeln!(writer)?;
    Ok(())
}

/// List the studies visible through the factory.
pub fn list_studies<A: StudyBuilderAdaptor>(
    factory: &StudyObjectFactory<A>,
) -> anyhow::Result<Vec<OpenStudy>> {
    factory.studies().context("listing studies")
}
