use super::*;
use serde_json::json;

fn loaded() -> ProjectTypeSpecifications {
    serde_json::from_value(json!({
        "owl": {
            "TeachingTool": ["DefaultProject", "is_private.value(False)", "has_topic.min(1, Topic)"],
        },
        "shacl": {
            "FinishedResearchProject": ["  sh:path props:is_private ;\n", "sh:path props:has_topic ;"],
            "InternalDocumentation": "sh:path props:has_readme ;",
            "Broken": 42,
        },
    }))
    .unwrap()
}

#[test]
fn default_is_seeded_with_empty_families() {
    let specs = ProjectTypeSpecifications::default();
    assert_eq!(specs.families().collect::<Vec<_>>(), vec!["owl", "shacl"]);
    assert_eq!(specs.get("owl"), Some(&json!({})));
    assert_eq!(specs.get("shacl"), Some(&json!({})));
    assert!(!specs.is_loaded());
}

#[test]
fn serializes_as_plain_map() {
    let specs = ProjectTypeSpecifications::default();
    assert_eq!(serde_json::to_value(&specs).unwrap(), json!({ "owl": {}, "shacl": {} }));
}

#[test]
fn loaded_specs_report_loaded() {
    assert!(loaded().is_loaded());
}

#[test]
fn project_types_are_sorted_keys() {
    let specs = loaded();
    assert_eq!(
        specs.project_types(ValidationMode::Shacl),
        vec!["Broken", "FinishedResearchProject", "InternalDocumentation"]
    );
    assert_eq!(specs.project_types(ValidationMode::Owl), vec!["TeachingTool"]);
}

#[test]
fn criteria_trim_list_entries() {
    let specs = loaded();
    assert_eq!(
        specs.criteria(ValidationMode::Shacl, "FinishedResearchProject"),
        vec!["sh:path props:is_private ;", "sh:path props:has_topic ;"]
    );
}

#[test]
fn criteria_accept_single_string() {
    assert_eq!(
        loaded().criteria(ValidationMode::Shacl, "InternalDocumentation"),
        vec!["sh:path props:has_readme ;"]
    );
}

#[test]
fn criteria_for_unknown_or_malformed_type_are_empty() {
    let specs = loaded();
    assert!(specs.criteria(ValidationMode::Shacl, "Broken").is_empty());
    assert!(specs.criteria(ValidationMode::Owl, "FinishedResearchProject").is_empty());
}

#[test]
fn insert_replaces_family() {
    let mut specs = ProjectTypeSpecifications::default();
    specs.insert("owl", json!({ "OngoingResearchProject": ["has_branch.min(2, Branch)"] }));
    assert!(specs.is_loaded());
    assert_eq!(specs.project_types(ValidationMode::Owl), vec!["OngoingResearchProject"]);
}
