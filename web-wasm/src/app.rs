//! Main application component

use leptos::prelude::*;

use crate::components::{add_form::AddMineralForm, gallery::Gallery, header::Header};
use mineral_museum_common::ApiConfig;

/// The two views of the catalog.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Gallery,
    AddMineral,
}

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Gallery);
    // One config value for both controllers.
    let config = StoredValue::new(ApiConfig::default());

    let go_to = move |target: Page| set_page.set(target);

    view! {
        <div class="container">
            <Header page=page on_navigate=go_to />

            // Re-entering the gallery re-creates it, which is what
            // reloads the collection after a successful submission.
            <Show
                when=move || page.get() == Page::Gallery
                fallback=move || view! {
                    <AddMineralForm
                        config=config.get_value()
                        on_saved=move |_| set_page.set(Page::Gallery)
                    />
                }
            >
                <Gallery
                    config=config.get_value()
                    on_add=move |_| set_page.set(Page::AddMineral)
                />
            </Show>
        </div>
    }
}
