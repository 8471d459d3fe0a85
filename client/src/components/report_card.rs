//! One validation run rendered as a card.
//!
//! The card is read-only: it receives a snapshot of the run and is rebuilt
//! whenever the owning list re-renders.

#[cfg(test)]
#[path = "report_card_test.rs"]
mod report_card_test;

use leptos::prelude::*;

use crate::state::validation::{RunStatus, ValidationRun};

#[component]
pub fn ReportCard(index: u32, run: ValidationRun) -> impl IntoView {
    let title = report_title(index, &run);
    let badge_class = status_class(run.status);
    let badge = run.status.label();
    let summary = run.criteria_summary();
    let show_report = !run.report.is_empty();
    let show_verbalized = !run.verbalized.is_empty();

    view! {
        <article class="report-card">
            <header class="report-card__header">
                <h3 class="report-card__title">{title}</h3>
                <span class=badge_class>{badge}</span>
            </header>
            {summary.map(|text| view! { <p class="report-card__criteria">{text}</p> })}
            {show_verbalized.then(|| view! { <p class="report-card__verbalized">{run.verbalized.clone()}</p> })}
            {show_report.then(|| view! { <pre class="report-card__report">{run.report.clone()}</pre> })}
        </article>
    }
}

fn report_title(index: u32, run: &ValidationRun) -> String {
    if run.repo_type.is_empty() {
        format!("#{} {}", index + 1, run.repo_name)
    } else {
        format!("#{} {} ({})", index + 1, run.repo_name, run.repo_type)
    }
}

fn status_class(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Unknown => "badge badge--unknown",
        RunStatus::Pending => "badge badge--pending",
        RunStatus::Valid => "badge badge--valid",
        RunStatus::Invalid => "badge badge--invalid",
        RunStatus::Failed => "badge badge--failed",
    }
}
