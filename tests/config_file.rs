use std::io::Write;

use inspectio::{EngineConfig, IngestError, Session, Variant};
use tempfile::NamedTempFile;

#[test]
fn english_headers_from_yaml_file() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        "variant: basic
columns:
  number: Id
  kind: Type
  status: State
  priority: Priority
  location: Location
  notified_on: Reported
limits:
  classifications: 2
  assignees: 8
  companies: 8
  units: 10
  detail_rows: 1"
    )?;

    let config = EngineConfig::load(file.path())?;
    assert_eq!(config.variant, Variant::Basic);
    assert_eq!(config.limits().classifications, 2);

    let mut session = Session::new(config);
    let count = session.ingest(
        "english.csv",
        "Id,Type,State,Priority,Location,Reported\n\
         1,Seguridad,Cerrado,Urgent,TOWER>PISO 2,01/01/26\n\
         2,Acabados,Abierto,Low,TOWER>PISO 3,02/01/26\n",
    )?;
    assert_eq!(count, 2);

    let today = chrono::NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
    let summary = session.summary(&Default::default(), today);
    assert_eq!(summary.kpis.closure_rate, 50);
    assert_eq!(summary.detail.len(), 1);
    assert_eq!(summary.floors[0].name, "PISO 3");
    assert_eq!(summary.kpis.average_age_days, 1.5);
    Ok(())
}

#[test]
fn missing_file_names_the_path() {
    let err = EngineConfig::load("/nonexistent/inspectio.yaml").unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/inspectio.yaml"));
}

#[test]
fn blank_header_name_is_rejected() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "columns:\n  status: \"  \"")?;
    let err = EngineConfig::load(file.path()).unwrap_err();
    assert!(err.chain().any(|cause| matches!(
        cause.downcast_ref::<IngestError>(),
        Some(IngestError::Config(_))
    )));
    Ok(())
}
