//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::nav_bar::NavBar;
use crate::pages::{settings::SettingsPage, specifications::SpecificationsPage, validation::ValidationPage};
use crate::state::page::Page;
use crate::state::registry::AppState;
use crate::util::persistence::restore_settings;
use crate::util::reactive::mirror;

/// Root application component.
///
/// Builds the single `AppState` for this page load, restores persisted
/// settings, provides the state as context, and switches on the selected
/// page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = AppState::new();
    restore_settings(&state);
    provide_context(state.clone());

    #[cfg(feature = "hydrate")]
    {
        let state = state.clone();
        leptos::task::spawn_local(async move {
            let _ = crate::actions::load_specifications(&state).await;
        });
        #[cfg(debug_assertions)]
        crate::net::hot_reload::spawn_hot_reload();
    }

    let page = mirror(&state.selected_page);

    view! {
        <Stylesheet id="bootstrap" href="/~bootstrap/dist/css/bootstrap.min.css"/>
        <Stylesheet id="repocheck" href="/pkg/repocheck.css"/>
        <Title text="repocheck"/>

        <NavBar/>
        <main class="app-main">
            {move || match page.get() {
                Page::Validation => view! { <ValidationPage/> }.into_any(),
                Page::Specifications => view! { <SpecificationsPage/> }.into_any(),
                Page::Settings => view! { <SettingsPage/> }.into_any(),
            }}
        </main>
    }
}
