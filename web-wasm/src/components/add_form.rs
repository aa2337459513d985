//! Add-item form component
//!
//! Drives the submission state machine: submitting disables the
//! control and swaps its label, success shows the confirmation,
//! clears the form and navigates back to the gallery after a fixed
//! delay, failure shows the detail and re-enables the control.

use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

use crate::api::DirectusBackend;
use mineral_museum_common::{submit_mineral, ApiConfig, MineralForm, SubmitState};

/// Fixed delay between the success message and the redirect.
const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub fn AddMineralForm<F>(config: ApiConfig, on_saved: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let (state, set_state) = signal(SubmitState::Idle);

    let (nome, set_nome) = signal(String::new());
    let (dimensioni, set_dimensioni) = signal(String::new());
    let (peso, set_peso) = signal(String::new());
    let (data_acquisizione, set_data_acquisizione) = signal(String::new());
    let (note, set_note) = signal(String::new());

    // The file input is uncontrolled: the selected file is read off
    // the element at submit time, the preview on every change.
    let file_input: NodeRef<Input> = NodeRef::new();
    let (preview_url, set_preview_url) = signal(None::<String>);

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            read_preview(file, set_preview_url);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().is_busy() {
            return;
        }
        set_state.set(SubmitState::Submitting);

        let form = MineralForm {
            nome: nome.get_untracked(),
            dimensioni: dimensioni.get_untracked(),
            peso: peso.get_untracked(),
            data_acquisizione: data_acquisizione.get_untracked(),
            note: note.get_untracked(),
        };
        let photo = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let backend = DirectusBackend::new(config.clone());
        let on_saved = on_saved.clone();

        spawn_local(async move {
            match submit_mineral(&backend, form, photo).await {
                Ok(()) => {
                    set_state.set(SubmitState::Success);
                    set_nome.set(String::new());
                    set_dimensioni.set(String::new());
                    set_peso.set(String::new());
                    set_data_acquisizione.set(String::new());
                    set_note.set(String::new());
                    set_preview_url.set(None);
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }

                    gloo::timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    on_saved(());
                }
                Err(err) => {
                    gloo::console::error!(format!("Errore nel salvataggio: {}", err));
                    set_state.set(SubmitState::Failed(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="form-container">
            <h2>"Aggiungi Minerale"</h2>

            <Show when=move || state.get() == SubmitState::Success>
                <div class="message success">"✓ Minerale aggiunto con successo!"</div>
            </Show>
            {move || {
                state
                    .with(|s| s.error().map(str::to_string))
                    .map(|detail| view! {
                        <div class="message error">{format!("Errore: {}", detail)}</div>
                    })
            }}

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="nome">"Nome"</label>
                    <input
                        type="text"
                        id="nome"
                        placeholder="es. Quarzo rosa"
                        prop:value=move || nome.get()
                        on:input=move |ev| set_nome.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="dimensioni">"Dimensioni"</label>
                    <input
                        type="text"
                        id="dimensioni"
                        placeholder="es. 5x3 cm"
                        prop:value=move || dimensioni.get()
                        on:input=move |ev| set_dimensioni.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="peso">"Peso (grammi)"</label>
                    <input
                        type="number"
                        id="peso"
                        step="0.01"
                        prop:value=move || peso.get()
                        on:input=move |ev| set_peso.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="data_acquisizione">"Data di acquisizione"</label>
                    <input
                        type="date"
                        id="data_acquisizione"
                        prop:value=move || data_acquisizione.get()
                        on:input=move |ev| set_data_acquisizione.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="note">"Note"</label>
                    <textarea
                        id="note"
                        prop:value=move || note.get()
                        on:input=move |ev| set_note.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="foto">"Foto"</label>
                    <input
                        type="file"
                        id="foto"
                        accept="image/*"
                        node_ref=file_input
                        on:change=on_file_change
                    />
                </div>

                <Show when=move || preview_url.get().is_some()>
                    <div class="photo-preview">
                        <img
                            src=move || preview_url.get().unwrap_or_default()
                            alt="Anteprima foto"
                        />
                    </div>
                </Show>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || state.get().is_busy()
                >
                    {move || state.get().button_label()}
                </button>
            </form>
        </div>
    }
}

/// Reads the selected file as a data URL and publishes it for the
/// preview element. No client-side validation of type or size.
fn read_preview(file: File, set_preview: WriteSignal<Option<String>>) {
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                set_preview.set(Some(data_url));
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
