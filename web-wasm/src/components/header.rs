//! Header component with view navigation

use leptos::prelude::*;

use crate::app::Page;

#[component]
pub fn Header<F>(page: ReadSignal<Page>, on_navigate: F) -> impl IntoView
where
    F: Fn(Page) + 'static + Clone,
{
    let nav_gallery = on_navigate.clone();
    let nav_add = on_navigate.clone();

    view! {
        <header class="header">
            <h1>"Museo dei Minerali"</h1>
            <nav class="nav">
                <button
                    class="nav-link"
                    class:active=move || page.get() == Page::Gallery
                    on:click=move |_| nav_gallery(Page::Gallery)
                >
                    "Collezione"
                </button>
                <button
                    class="nav-link"
                    class:active=move || page.get() == Page::AddMineral
                    on:click=move |_| nav_add(Page::AddMineral)
                >
                    "Aggiungi Minerale"
                </button>
            </nav>
        </header>
    }
}
