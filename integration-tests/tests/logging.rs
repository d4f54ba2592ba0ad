use integration_tests::harness::{CertDir, Scenario, init_test_tracing, run_setup};

/// Every written document is logged with its path
#[test]
fn document_writes_are_logged() {
    // Arrange
    let events = init_test_tracing();
    let root = tempfile::tempdir().unwrap();
    let config_dir = root.path().join("config");
    let certs = CertDir::complete();

    // Act
    let run = run_setup(&config_dir, &Scenario::new(certs.path_str()));
    run.result.as_ref().expect("setup failed");

    // Assert
    let events = events.lock().unwrap();
    for file in ["server.json", "api.json", "mongo.json"] {
        let path = config_dir.join(file).display().to_string();
        assert!(
            events.iter().any(|e| e.field("path") == Some(path.as_str())),
            "expected a log event for {path}"
        );
    }
}

/// Secrets and API keys never reach the log output
#[test]
fn secrets_are_not_logged() {
    // Arrange
    let events = init_test_tracing();
    let root = tempfile::tempdir().unwrap();
    let certs = CertDir::complete();
    let mut scenario = Scenario::new(certs.path_str());
    scenario.azure_key = "azure-secret-value".to_string();

    // Act
    let run = run_setup(&root.path().join("config"), &scenario);
    run.result.as_ref().expect("setup failed");
    let server = run.read_json("server.json");
    let admin_secret = server["adminSecret"].as_str().unwrap().to_string();

    // Assert
    let events = events.lock().unwrap();
    assert!(!events.is_empty(), "expected setup to emit log events");
    for event in events.iter() {
        for (_, value) in &event.fields {
            assert!(!value.contains(&admin_secret));
            assert!(!value.contains("azure-secret-value"));
        }
    }
}
