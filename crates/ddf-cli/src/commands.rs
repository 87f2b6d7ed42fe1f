//! Command implementations: source selection and dispatch.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;

use ddf_cli::export::{list_studies, write_study};
use ddf_transform::{SourceMode, StudyObjectFactory};
use osb_client::config::AUTH_TOKEN_ENV;
use osb_client::{ApiAdaptor, ClientConfig, StudyBuilderAdaptor};

use crate::cli::{ExportArgs, SourceArgs};

pub fn run_export(args: &ExportArgs) -> anyhow::Result<()> {
    match &args.source.input_dir {
        Some(dir) => export_with(&StudyObjectFactory::from_dump_dir(dir), args),
        None => export_with(&api_factory(&args.source)?, args),
    }
}

pub fn run_studies(args: &SourceArgs) -> anyhow::Result<()> {
    match &args.input_dir {
        Some(dir) => print_studies(&StudyObjectFactory::from_dump_dir(dir)),
        None => print_studies(&api_factory(args)?),
    }
}

fn export_with<A: StudyBuilderAdaptor>(
    factory: &StudyObjectFactory<A>,
    args: &ExportArgs,
) -> anyhow::Result<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_study(factory, &args.study_uid, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_study(factory, &args.study_uid, &mut writer)?;
        }
    }
    Ok(())
}

fn print_studies<A: StudyBuilderAdaptor>(factory: &StudyObjectFactory<A>) -> anyhow::Result<()> {
    for study in list_studies(factory)? {
        let label = study
            .study_id
            .or(study.study_acronym)
            .unwrap_or_else(|| "-".to_string());
        println!("{}\t{}", study.uid, label);
    }
    Ok(())
}

fn api_factory(source: &SourceArgs) -> anyhow::Result<StudyObjectFactory<ApiAdaptor>> {
    let config = match &source.base_url {
        Some(url) => {
            let token = std::env::var(AUTH_TOKEN_ENV)
                .with_context(|| format!("{AUTH_TOKEN_ENV} must be set"))?;
            ClientConfig::new(url, token)
        }
        None => ClientConfig::from_env()?,
    };
    Ok(StudyObjectFactory::new(
        ApiAdaptor::new(config)?,
        SourceMode::Api,
    ))
}
