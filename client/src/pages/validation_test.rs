use super::*;
use crate::state::validation::RunStatus;

fn types(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn choose_project_type_keeps_offered_selection() {
    let offered = types(&["InternalDocumentation", "TeachingTool"]);
    assert_eq!(choose_project_type(&offered, "TeachingTool"), "TeachingTool");
}

#[test]
fn choose_project_type_falls_back_to_first() {
    let offered = types(&["InternalDocumentation", "TeachingTool"]);
    assert_eq!(choose_project_type(&offered, "Gone"), "InternalDocumentation");
    assert_eq!(choose_project_type(&[], "Gone"), "");
}

#[test]
fn newest_first_skips_placeholder_and_reverses() {
    let mut data = ValidationData::default();
    data.record(ValidationRun::pending("o/a", "TeachingTool"));
    data.record(ValidationRun::failed("o/b", "TeachingTool", "boom"));

    let runs = newest_first(&data);

    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].0, 1);
    assert_eq!(runs[0].1.status, RunStatus::Failed);
    assert_eq!(runs[1].1.repo_name, "o/a");
}

#[test]
fn newest_first_is_empty_for_fresh_data() {
    assert!(newest_first(&ValidationData::default()).is_empty());
}
