//! Validation method selector bound to the `mode` cell.

use leptos::prelude::*;

use crate::state::mode::ValidationMode;
use crate::state::registry::AppState;
use crate::util::reactive::mirror;

#[component]
pub fn ModeSelect() -> impl IntoView {
    let state = expect_context::<AppState>();
    let mode = mirror(&state.mode);
    let cell = state.mode.clone();

    let on_change = move |ev: leptos::ev::Event| {
        if let Ok(next) = event_target_value(&ev).parse::<ValidationMode>() {
            cell.set(next);
        }
    };

    view! {
        <label class="mode-select">
            "Method"
            <select prop:value=move || mode.get().as_str() on:change=on_change>
                {ValidationMode::ALL
                    .into_iter()
                    .map(|m| view! { <option value=m.as_str()>{m.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
