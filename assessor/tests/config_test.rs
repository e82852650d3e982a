//! Config file loading integration tests

use std::io::Write;

use rmf_assessor::{AssessmentService, AssessorConfig, AssessorError, Submission};

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "service:\n  default_organization_name: Example Org\n  audit_enabled: false\nstore:\n  max_records: 3\ngeneral:\n  log_level: debug"
    )
    .unwrap();

    let config = AssessorConfig::from_file(file.path()).unwrap();
    assert_eq!(config.service.default_organization_name, "Example Org");
    assert!(!config.service.audit_enabled);
    assert_eq!(config.store.max_records, Some(3));
    assert_eq!(config.general.log_level, "debug");
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AssessorConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, AssessorError::Config(_)));
}

#[test]
fn test_saved_config_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assessor.yaml");
    let config = AssessorConfig::default().with_max_records(25);
    std::fs::write(&path, config.to_yaml().unwrap()).unwrap();

    assert_eq!(AssessorConfig::from_file(&path).unwrap(), config);
}

#[tokio::test]
async fn test_service_uses_configured_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "service:\n  default_organization_name: Fallback Inc").unwrap();

    let service = AssessmentService::new(AssessorConfig::from_file(file.path()).unwrap()).unwrap();
    let id = service.submit(Submission::new("energy", vec![])).await.unwrap();
    assert_eq!(
        service.get_assessment(&id).await.unwrap().organization_name,
        "Fallback Inc"
    );
}

#[test]
fn test_capped_store_from_config() {
    let config = AssessorConfig::from_yaml("store:\n  max_records: 1\n").unwrap();
    let service = AssessmentService::new(config).unwrap();

    tokio_test::block_on(async {
        service.submit(Submission::new("education", vec![])).await.unwrap();
        let err = service
            .submit(Submission::new("education", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, AssessorError::StoreFull { capacity: 1 }));
    });
}
