//! Gallery component
//!
//! One read of the full collection on mount, then one card per record
//! in backend order. Empty result set renders the localized
//! empty-state with a link to the add view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::directus;
use mineral_museum_common::{ApiConfig, CardModel};

#[derive(Clone, PartialEq)]
enum GalleryState {
    Loading,
    Loaded(Vec<CardModel>),
    Failed(String),
}

#[component]
pub fn Gallery<F>(config: ApiConfig, on_add: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    let (state, set_state) = signal(GalleryState::Loading);

    spawn_local(async move {
        match directus::fetch_minerals(&config).await {
            Ok(records) => {
                let cards = records
                    .iter()
                    .map(|record| CardModel::from_record(record, &config))
                    .collect();
                set_state.set(GalleryState::Loaded(cards));
            }
            Err(err) => {
                gloo::console::error!(format!("Errore nel caricamento: {}", err));
                set_state.set(GalleryState::Failed(err.to_string()));
            }
        }
    });

    view! {
        <div class="gallery">
            {move || match state.get() {
                GalleryState::Loading => view! {
                    <p class="loading">"Caricamento..."</p>
                }
                .into_any(),
                GalleryState::Failed(detail) => view! {
                    <p class="error">{format!("Errore nel caricamento: {}", detail)}</p>
                }
                .into_any(),
                GalleryState::Loaded(cards) if cards.is_empty() => {
                    let on_add = on_add.clone();
                    view! {
                        <p class="empty-state">
                            "Nessun minerale trovato. "
                            <button class="link" on:click=move |_| on_add(())>
                                "Aggiungi il primo!"
                            </button>
                        </p>
                    }
                    .into_any()
                }
                GalleryState::Loaded(cards) => view! {
                    <div class="minerals-grid">
                        {cards
                            .into_iter()
                            .map(|card| view! { <MineralCard card=card /> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

/// One collection card. A record without a photo gets an empty
/// placeholder element, never a broken image reference.
#[component]
fn MineralCard(card: CardModel) -> impl IntoView {
    view! {
        <div class="mineral-card">
            {match card.image_url {
                Some(url) => view! {
                    <img src=url alt=card.name.clone() class="mineral-image" />
                }
                .into_any(),
                None => view! { <div class="mineral-image"></div> }.into_any(),
            }}
            <div class="mineral-info">
                <div class="mineral-name">{card.name}</div>
                {card.size.map(|size| view! {
                    <div class="mineral-detail">
                        <strong>"Dimensioni: "</strong>
                        {size}
                    </div>
                })}
                {card.weight.map(|weight| view! {
                    <div class="mineral-detail">
                        <strong>"Peso: "</strong>
                        {weight}
                    </div>
                })}
                <div class="mineral-detail">
                    <strong>"Data acquisizione: "</strong>
                    {card.date}
                </div>
                {card.notes.map(|notes| view! {
                    <div class="mineral-notes">{notes}</div>
                })}
            </div>
        </div>
    }
}
