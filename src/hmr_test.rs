use super::*;
use serde_json::json;

#[test]
fn connected_event_serializes_without_paths() {
    let value = serde_json::to_value(ReloadEvent::connected()).unwrap();
    assert_eq!(value, json!({ "type": "connected" }));
}

#[test]
fn full_reload_event_serializes_paths() {
    let event = ReloadEvent::full_reload(vec!["src/app.rs".into(), "style/main.css".into()]);
    let value = serde_json::to_value(event).unwrap();
    assert_eq!(value, json!({ "type": "full-reload", "paths": ["src/app.rs", "style/main.css"] }));
}

#[test]
fn event_parses_without_paths_field() {
    let event: ReloadEvent = serde_json::from_str(r#"{"type":"full-reload"}"#).unwrap();
    assert_eq!(event, ReloadEvent::full_reload(Vec::new()));
}

#[test]
fn client_config_uses_camel_case() {
    let value = serde_json::to_value(HmrClientConfig { client_port: 3000 }).unwrap();
    assert_eq!(value, json!({ "clientPort": 3000 }));
}
