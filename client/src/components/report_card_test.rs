use super::*;

#[test]
fn title_is_one_based_and_names_project_type() {
    let run = ValidationRun::pending("octo/hello", "TeachingTool");
    assert_eq!(report_title(0, &run), "#1 octo/hello (TeachingTool)");
}

#[test]
fn title_omits_missing_project_type() {
    let run = ValidationRun::pending("octo/hello", "");
    assert_eq!(report_title(4, &run), "#5 octo/hello");
}

#[test]
fn each_status_has_its_own_badge() {
    let classes: Vec<_> = [RunStatus::Unknown, RunStatus::Pending, RunStatus::Valid, RunStatus::Invalid, RunStatus::Failed]
        .into_iter()
        .map(status_class)
        .collect();
    let mut unique = classes.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), classes.len());
    assert_eq!(status_class(RunStatus::Valid), "badge badge--valid");
}
