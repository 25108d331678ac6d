use qhub_domain::config::{ApiConfig, DatabaseConfig, SelectionPolicy, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4710);

    let db = DatabaseConfig::default();
    assert_eq!(db.url, "mem://");
    assert_eq!(db.namespace, "qhub");
    assert_eq!(db.database, "core");
    assert!(db.credentials.is_none());

    assert_eq!(SelectionPolicy::default(), SelectionPolicy::AllKinds);
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "database": { "url": "mem://", "namespace": "n", "database": "d", "credentials": null },
        "underwriting": { "policy": "selected-only" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.database.namespace, "n");
    assert_eq!(cfg.underwriting.policy, SelectionPolicy::SelectedOnly);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("empty config");
    assert_eq!(cfg.server.port, 4710);
    assert_eq!(cfg.underwriting.policy, SelectionPolicy::AllKinds);
}
