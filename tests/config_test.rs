//! Configuration Loading Tests
//!
//! Layering of defaults, YAML files and `LEXFLOW__*` overrides. Overrides are
//! passed as explicit maps so tests never mutate the process environment.

use lexflow_core::config::{ConfigManager, ConfigurationError, EngineConfig};
use lexflow_core::{EngineError, ProcessEngine};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CUSTOM_CATALOG: &str = r#"
processes:
  - id: alta-cliente
    name: Alta de Cliente
    description: Registro de un cliente nuevo
    agents:
      - id: secretaria
        name: Secretaria
        color: amber
        description: Registro
    steps:
      - id: inicio
        label: Solicitud
        description: ""
        agent_id: secretaria
        type: start
        next_steps:
          - target: registro
      - id: registro
        label: Registrar cliente
        description: Ficha y documentos
        agent_id: secretaria
        type: task
        next_steps:
          - target: fin
      - id: fin
        label: Cliente activo
        description: ""
        agent_id: secretaria
        type: end
        next_steps: []
status_tables:
  alta-cliente:
    pending: registro
    active: fin
"#;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

fn no_env() -> Option<HashMap<String, String>> {
    Some(HashMap::new())
}

#[test]
fn missing_files_yield_defaults() {
    let dir = TempDir::new().unwrap();
    let manager =
        ConfigManager::load_with_overrides(Some(dir.path().to_path_buf()), "test", no_env()).unwrap();

    assert_eq!(manager.config(), &EngineConfig::default());
    assert_eq!(manager.environment(), "test");
    assert_eq!(manager.config_directory(), dir.path());
    assert!(manager.catalog_path().is_none());
}

#[test]
fn environment_file_overrides_base_file() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "lexflow.yaml",
        "urgency:\n  sla_warning_hours: 6\n  stale_urgent_days: 10\n",
    );
    write(dir.path(), "lexflow.production.yaml", "urgency:\n  sla_warning_hours: 8\n");

    let manager =
        ConfigManager::load_with_overrides(Some(dir.path().to_path_buf()), "production", no_env())
            .unwrap();

    assert_eq!(manager.config().urgency.sla_warning_hours, 8);
    assert_eq!(manager.config().urgency.stale_urgent_days, 10);
    assert_eq!(manager.config().urgency.due_date_warning_days, 3);
}

#[test]
fn environment_variables_override_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "lexflow.yaml", "urgency:\n  due_date_warning_days: 5\n");

    let variables = HashMap::from([
        ("LEXFLOW__URGENCY__DUE_DATE_WARNING_DAYS".to_string(), "2".to_string()),
        (
            "LEXFLOW__URGENCY__FLAGGED_STATUSES".to_string(),
            "overdue,on_hold".to_string(),
        ),
        ("LEXFLOW__LOGGING__JSON".to_string(), "true".to_string()),
    ]);

    let manager =
        ConfigManager::load_with_overrides(Some(dir.path().to_path_buf()), "test", Some(variables))
            .unwrap();

    let config = manager.config();
    assert_eq!(config.urgency.due_date_warning_days, 2);
    assert_eq!(config.urgency.flagged_statuses, vec!["overdue", "on_hold"]);
    assert!(config.logging.json);
}

#[test]
fn invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "lexflow.yaml",
        "urgency:\n  new_entity_urgent_hours: 2\n  new_entity_warning_hours: 4\n",
    );

    let err = ConfigManager::load_with_overrides(Some(dir.path().to_path_buf()), "test", no_env())
        .unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidValue { .. }));
}

#[test]
fn malformed_yaml_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "lexflow.yaml", "urgency: [unclosed\n");

    let err = ConfigManager::load_with_overrides(Some(dir.path().to_path_buf()), "staging", no_env())
        .unwrap_err();
    assert!(
        matches!(&err, ConfigurationError::LoadError { environment, .. } if environment == "staging")
    );
}

#[test]
fn relative_catalog_path_resolves_against_config_directory() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "alta.yaml", CUSTOM_CATALOG);
    write(dir.path(), "lexflow.yaml", "catalog:\n  path: alta.yaml\n");

    let manager =
        ConfigManager::load_with_overrides(Some(dir.path().to_path_buf()), "test", no_env()).unwrap();
    assert_eq!(manager.catalog_path(), Some(dir.path().join("alta.yaml")));

    let engine = ProcessEngine::from_config(&manager).unwrap();
    assert_eq!(engine.catalog().len(), 1);

    let progress = engine.compute_progress("alta-cliente", "pending");
    assert_eq!(progress.step_label, "Registrar cliente");
    assert_eq!(progress.percentage, 50);
    assert_eq!(engine.compute_progress("proceso-cobranza", "overdue").total, 1);
}

#[test]
fn broken_catalog_file_surfaces_catalog_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "broken.yaml", "processes: {not: a list}\n");
    write(dir.path(), "lexflow.yaml", "catalog:\n  path: broken.yaml\n");

    let manager =
        ConfigManager::load_with_overrides(Some(dir.path().to_path_buf()), "test", no_env()).unwrap();
    assert!(matches!(manager.catalog(), Err(EngineError::Catalog(_))));
}

#[test]
fn missing_catalog_file_surfaces_read_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "lexflow.yaml", "catalog:\n  path: nowhere.yaml\n");

    let manager =
        ConfigManager::load_with_overrides(Some(dir.path().to_path_buf()), "test", no_env()).unwrap();
    let err = manager.catalog().unwrap_err();
    assert!(err.to_string().contains("nowhere.yaml"));
}

#[test]
fn from_config_validates() {
    let mut config = EngineConfig::default();
    config.urgency.sla_warning_hours = -1;
    assert!(ConfigManager::from_config(config, "test").is_err());

    let manager = ConfigManager::from_config(EngineConfig::default(), "test").unwrap();
    assert!(ProcessEngine::from_config(&manager).is_ok());
}

#[test]
fn shipped_example_catalog_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/catalogs/intake.yaml");
    let catalog = lexflow_core::ProcessCatalog::from_yaml_file(&path).unwrap();

    assert_eq!(catalog.process_ids().collect::<Vec<_>>(), vec!["consulta-web"]);
    let progress = catalog.compute_progress("consulta-web", "accepted");
    assert_eq!(progress.step_label, "Agendar reunión");
    assert_eq!(progress.percentage, 60);
}

#[test]
fn shipped_configuration_matches_defaults() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("config");
    let manager = ConfigManager::load_with_overrides(Some(dir), "development", no_env()).unwrap();
    assert_eq!(manager.config(), &EngineConfig::default());
}
