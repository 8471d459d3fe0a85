use super::*;

#[test]
fn form_values_become_settings() {
    let settings = settings_from_form("  ghp_token ", "owl");
    assert_eq!(settings.access_token, "ghp_token");
    assert_eq!(settings.method, Some(ValidationMode::Owl));
}

#[test]
fn follow_mode_clears_override() {
    assert_eq!(settings_from_form("", FOLLOW_MODE).method, None);
    assert_eq!(method_choice(None), FOLLOW_MODE);
    assert_eq!(method_choice(Some(ValidationMode::Shacl)), "shacl");
}
