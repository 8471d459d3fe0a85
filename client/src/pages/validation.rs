//! Validation page: submit repositories and list their reports.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `mode`, `project_type_specifications` and `validation_data` through
//! signal mirrors. Submitting hands off to `actions::submit_validation`,
//! which owns the pending/outcome writes to `validation_data`.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use leptos::prelude::*;

use crate::actions::check_submission;
use crate::components::mode_select::ModeSelect;
use crate::components::report_card::ReportCard;
use crate::state::registry::AppState;
use crate::state::validation::{ValidationData, ValidationRun};
use crate::util::reactive::mirror;

#[component]
pub fn ValidationPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let mode = mirror(&state.mode);
    let specs = mirror(&state.project_type_specifications);
    let data = mirror(&state.validation_data);
    let settings = mirror(&state.validation_settings);

    let repo_name = RwSignal::new(String::new());
    let repo_type = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let project_types = Memo::new(move |_| specs.with(|s| s.project_types(mode.get())));

    // Keep the selection inside the list offered for the current mode.
    Effect::new(move || {
        let types = project_types.get();
        let next = choose_project_type(&types, &repo_type.get_untracked());
        if next != repo_type.get_untracked() {
            repo_type.set(next);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = repo_name.get();
        let kind = repo_type.get();
        if let Err(e) = check_submission(&name, &kind) {
            info.set(e.to_string());
            return;
        }
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let state = state.clone();
            leptos::task::spawn_local(async move {
                let _ = crate::actions::submit_validation(&state, &name, &kind).await;
            });
        }
    };

    view! {
        <section class="validation-page">
            <form class="validation-form" on:submit=on_submit>
                <label>
                    "Repository"
                    <input
                        type="text"
                        placeholder="owner/name"
                        prop:value=move || repo_name.get()
                        on:input=move |ev| repo_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Project type"
                    <select
                        prop:value=move || repo_type.get()
                        on:change=move |ev| repo_type.set(event_target_value(&ev))
                    >
                        {move || {
                            project_types
                                .get()
                                .into_iter()
                                .map(|t| view! { <option value=t.clone()>{t.clone()}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <ModeSelect/>
                <button class="btn" type="submit" disabled=move || data.with(ValidationData::has_pending)>
                    "Validate"
                </button>
            </form>
            <Show when=move || !settings.with(|s| s.has_token())>
                <p class="validation-page__hint">"No access token set; only public repositories can be checked."</p>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="validation-page__error">{move || info.get()}</p>
            </Show>
            <div class="validation-page__reports">
                {move || {
                    data.with(newest_first)
                        .into_iter()
                        .map(|(index, run)| view! { <ReportCard index=index run=run/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}

/// Keep `current` when it is offered, otherwise fall back to the first type.
fn choose_project_type(types: &[String], current: &str) -> String {
    if types.iter().any(|t| t == current) {
        current.to_owned()
    } else {
        types.first().cloned().unwrap_or_default()
    }
}

fn newest_first(data: &ValidationData) -> Vec<(u32, ValidationRun)> {
    let mut runs: Vec<_> = data.submitted().map(|(index, run)| (index, run.clone())).collect();
    runs.reverse();
    runs
}
