//! Specifications page: project types and their criteria per family.

#[cfg(test)]
#[path = "specifications_test.rs"]
mod specifications_test;

use leptos::prelude::*;

use crate::state::mode::ValidationMode;
use crate::state::registry::AppState;
use crate::state::specs::ProjectTypeSpecifications;
use crate::util::reactive::mirror;

/// One project type and its criteria.
#[derive(Clone, Debug, PartialEq, Eq)]
struct TypeRow {
    name: String,
    criteria: Vec<String>,
}

#[component]
pub fn SpecificationsPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let mode = mirror(&state.mode);
    let specs = mirror(&state.project_type_specifications);

    let families = move || {
        ValidationMode::ALL
            .into_iter()
            .map(|family| {
                let rows = specs.with(|s| type_rows(s, family));
                view! {
                    <section class=move || family_class(family, mode.get())>
                        <h2>{family.label()}</h2>
                        {if rows.is_empty() {
                            view! { <p class="specs-family__empty">"No project types published."</p> }.into_any()
                        } else {
                            view! {
                                <dl>
                                    {rows
                                        .into_iter()
                                        .map(|row| {
                                            view! {
                                                <dt>{row.name}</dt>
                                                <dd>
                                                    <ul>
                                                        {row
                                                            .criteria
                                                            .into_iter()
                                                            .map(|c| view! { <li>{c}</li> })
                                                            .collect::<Vec<_>>()}
                                                    </ul>
                                                </dd>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </dl>
                            }
                                .into_any()
                        }}
                    </section>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="specifications-page">
            <Show
                when=move || specs.with(ProjectTypeSpecifications::is_loaded)
                fallback=|| view! { <p>"Loading specifications..."</p> }
            >
                {families}
            </Show>
        </div>
    }
}

fn family_class(family: ValidationMode, mode: ValidationMode) -> &'static str {
    if family == mode { "specs-family specs-family--active" } else { "specs-family" }
}

fn type_rows(specs: &ProjectTypeSpecifications, family: ValidationMode) -> Vec<TypeRow> {
    specs
        .project_types(family)
        .into_iter()
        .map(|name| {
            let criteria = specs.criteria(family, &name);
            TypeRow { name, criteria }
        })
        .collect()
}
