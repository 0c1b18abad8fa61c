//! Projects page showing a fixed demo portfolio with progress bars.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use crate::components::layout::AppLayout;

/// Delivery health of a demo project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProjectStatus {
    OnTrack,
    AtRisk,
    Done,
}

fn project_status_label(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::OnTrack => "On Track",
        ProjectStatus::AtRisk => "At Risk",
        ProjectStatus::Done => "Done",
    }
}

fn project_status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::OnTrack => "badge badge--ontrack",
        ProjectStatus::AtRisk => "badge badge--atrisk",
        ProjectStatus::Done => "badge badge--done",
    }
}

/// One demo project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Project {
    name: &'static str,
    client: &'static str,
    status: ProjectStatus,
    /// Percent complete, 0..=100.
    progress: u8,
    due: &'static str,
}

fn demo_projects() -> Vec<Project> {
    vec![
        Project {
            name: "Warehouse Relocation",
            client: "Internal",
            status: ProjectStatus::OnTrack,
            progress: 65,
            due: "2025-04-18",
        },
        Project {
            name: "Supplier Portal Rollout",
            client: "Procurement",
            status: ProjectStatus::AtRisk,
            progress: 30,
            due: "2025-03-31",
        },
        Project {
            name: "Barcode Scanning Pilot",
            client: "Operations",
            status: ProjectStatus::OnTrack,
            progress: 80,
            due: "2025-05-09",
        },
        Project {
            name: "Year-End Stocktake",
            client: "Finance",
            status: ProjectStatus::Done,
            progress: 100,
            due: "2025-01-15",
        },
    ]
}

/// Inline width style for a progress bar, clamped to 100%.
fn progress_style(progress: u8) -> String {
    format!("width:{}%", progress.min(100))
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <AppLayout title="Projects">
            <p class="page-note">"Demo workspace - data resets on reload."</p>
            <div class="project-grid">
                {demo_projects()
                    .into_iter()
                    .map(|project| {
                        view! {
                            <div class="project-card">
                                <div class="project-card__head">
                                    <span class="project-card__name">{project.name}</span>
                                    <span class=project_status_class(project.status)>
                                        {project_status_label(project.status)}
                                    </span>
                                </div>
                                <p class="project-card__client">{project.client}</p>
                                <div class="progress">
                                    <div class="progress__fill" style=progress_style(project.progress)></div>
                                </div>
                                <p class="project-card__meta">
                                    {format!("{}% complete, due {}", project.progress, project.due)}
                                </p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </AppLayout>
    }
}
