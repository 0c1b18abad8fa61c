use super::*;

#[test]
fn demo_projects_stay_within_percent_range() {
    let projects = demo_projects();
    assert!(!projects.is_empty());
    for project in &projects {
        assert!(project.progress <= 100, "{} is over 100%", project.name);
    }
}

#[test]
fn done_projects_are_complete() {
    for project in demo_projects() {
        if project.status == ProjectStatus::Done {
            assert_eq!(project.progress, 100);
        }
    }
}

#[test]
fn progress_style_clamps_to_full_width() {
    assert_eq!(progress_style(42), "width:42%");
    assert_eq!(progress_style(100), "width:100%");
    assert_eq!(progress_style(250), "width:100%");
}

#[test]
fn status_classes_are_distinct() {
    let classes = [
        project_status_class(ProjectStatus::OnTrack),
        project_status_class(ProjectStatus::AtRisk),
        project_status_class(ProjectStatus::Done),
    ];
    let mut deduped = classes.to_vec();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), classes.len());
}
