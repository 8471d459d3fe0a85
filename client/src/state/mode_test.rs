use super::*;

#[test]
fn default_mode_is_shacl() {
    assert_eq!(ValidationMode::default(), ValidationMode::Shacl);
}

#[test]
fn wire_values_are_lowercase() {
    assert_eq!(serde_json::to_string(&ValidationMode::Shacl).unwrap(), r#""shacl""#);
    assert_eq!(serde_json::to_string(&ValidationMode::Owl).unwrap(), r#""owl""#);
    assert_eq!(serde_json::from_str::<ValidationMode>(r#""owl""#).unwrap(), ValidationMode::Owl);
}

#[test]
fn display_matches_wire_value() {
    for mode in ValidationMode::ALL {
        assert_eq!(mode.to_string(), mode.as_str());
    }
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("SHACL".parse::<ValidationMode>().unwrap(), ValidationMode::Shacl);
    assert_eq!(" Owl ".parse::<ValidationMode>().unwrap(), ValidationMode::Owl);
}

#[test]
fn parse_unknown_mode_errors() {
    let err = "sparql".parse::<ValidationMode>().unwrap_err();
    assert_eq!(err.to_string(), "unknown validation mode: sparql");
}

#[test]
fn labels_are_distinct() {
    assert_ne!(ValidationMode::Shacl.label(), ValidationMode::Owl.label());
}
