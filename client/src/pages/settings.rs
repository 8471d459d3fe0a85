//! Settings page: access token and method override.
//!
//! Edits stay in local drafts until saved. Saving writes the
//! `validation_settings` cell; persistence to `localStorage` follows from the
//! subscription `util::persistence::restore_settings` installs.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::state::mode::ValidationMode;
use crate::state::registry::AppState;
use crate::state::settings::ValidationSettings;

/// Select value meaning "use whatever mode is selected".
const FOLLOW_MODE: &str = "";

#[component]
pub fn SettingsPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let current = state.validation_settings.get();

    let token = RwSignal::new(current.access_token.clone());
    let method = RwSignal::new(method_choice(current.method).to_owned());
    let saved = RwSignal::new(false);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.validation_settings.set(settings_from_form(&token.get(), &method.get()));
        saved.set(true);
    };

    view! {
        <section class="settings-page">
            <form class="settings-form" on:submit=on_save>
                <label>
                    "GitHub access token"
                    <input
                        type="password"
                        autocomplete="off"
                        prop:value=move || token.get()
                        on:input=move |ev| {
                            token.set(event_target_value(&ev));
                            saved.set(false);
                        }
                    />
                </label>
                <label>
                    "Method override"
                    <select
                        prop:value=move || method.get()
                        on:change=move |ev| {
                            method.set(event_target_value(&ev));
                            saved.set(false);
                        }
                    >
                        <option value=FOLLOW_MODE>"Follow selected mode"</option>
                        {ValidationMode::ALL
                            .into_iter()
                            .map(|m| view! { <option value=m.as_str()>{m.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <button class="btn" type="submit">"Save"</button>
                <Show when=move || saved.get()>
                    <span class="settings-form__saved">"Saved"</span>
                </Show>
            </form>
        </section>
    }
}

fn method_choice(method: Option<ValidationMode>) -> &'static str {
    method.map_or(FOLLOW_MODE, ValidationMode::as_str)
}

fn settings_from_form(token: &str, method: &str) -> ValidationSettings {
    ValidationSettings { access_token: token.trim().to_owned(), method: method.parse().ok() }
}
