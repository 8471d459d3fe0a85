//! Top navigation between the three pages.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::state::page::Page;
use crate::state::registry::AppState;
use crate::util::reactive::mirror;

#[component]
pub fn NavBar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let selected = mirror(&state.selected_page);

    let items = Page::ALL
        .into_iter()
        .map(|page| {
            let cell = state.selected_page.clone();
            view! {
                <li>
                    <button
                        class=move || nav_item_class(page, selected.get())
                        aria-current=move || (page == selected.get()).then_some("page")
                        on:click=move |_| cell.set(page)
                    >
                        {page.label()}
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"repocheck"</span>
            <ul class="navbar__items">{items}</ul>
        </nav>
    }
}

fn nav_item_class(page: Page, selected: Page) -> &'static str {
    if page == selected { "navbar__item navbar__item--active" } else { "navbar__item" }
}
