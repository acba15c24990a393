//! Chart selection panel: picker, preview strip, and the start control.

use leptos::prelude::*;

use crate::controller;
use crate::state::files::{FileQueue, MAX_FILES};
use crate::state::session::SessionState;

/// Upload-phase panel.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let files = expect_context::<RwSignal<FileQueue>>();

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(list) = input.files() {
                controller::add_files(session, files, crate::util::browser::file_list_to_vec(&list));
            }
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, session, files);
        }
    };

    let count_label = move || format!("{} / {MAX_FILES} selected", files.get().len());
    let start_disabled = move || !controller::can_start(&session.get(), &files.get());
    let start_text = move || controller::start_label(&session.get());
    let hint = move || controller::start_blocked_hint(&session.get(), &files.get());

    view! {
        <div class="upload-panel">
            <p class="upload-panel__intro">
                "Drop chart images on the transcript or pick up to "
                {MAX_FILES}
                " files. The members will discuss them and submit a proposal."
            </p>
            <label class="upload-panel__picker">
                "Choose charts"
                <input type="file" accept="image/*" multiple on:change=on_pick/>
            </label>
            <div class="upload-panel__count">{count_label}</div>

            <div class="upload-panel__strip">
                {move || {
                    files
                        .get()
                        .entries
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let name = entry.name.clone();
                            let thumb = match entry.preview_url.clone() {
                                Some(url) => {
                                    view! { <img class="thumb__img" src=url alt=name.clone()/> }
                                        .into_any()
                                }
                                None => view! { <span class="thumb__name">{name.clone()}</span> }
                                    .into_any(),
                            };
                            view! {
                                <div class="thumb">
                                    {thumb}
                                    <button
                                        class="thumb__remove"
                                        title=format!("Remove {name}")
                                        on:click=move |_| controller::remove_file(files, index)
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <button
                class="btn btn--primary upload-panel__start"
                disabled=start_disabled
                on:click=move |_| controller::start_session(session, files)
            >
                {start_text}
            </button>
            <Show when=move || hint().is_some()>
                <p class="upload-panel__hint">{move || hint().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
