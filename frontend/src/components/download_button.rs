//! Button saving the last parsed response as `parsed_result.json`.

use leptos::*;
use serde_json::Value;

use crate::config::DOWNLOAD_FILE_NAME;
use crate::services::save_json;

/// Rendered only while a successful response is held, so clearing the
/// signal removes the control.
#[component]
pub fn DownloadButton(download: ReadSignal<Option<Value>>) -> impl IntoView {
    let on_click = move |_| {
        let Some(value) = download.get_untracked() else {
            return;
        };
        match save_json(&value, DOWNLOAD_FILE_NAME) {
            Ok(()) => log::info!("💾 Downloaded {}", DOWNLOAD_FILE_NAME),
            Err(e) => log::error!("{}", e),
        }
    };

    view! {
        <Show
            when=move || download.with(Option::is_some)
            fallback=|| view! { }
        >
            <button
                type="button"
                class="btn btn-secondary"
                id="downloadJsonBtn"
                on:click=on_click
            >
                "Download JSON"
            </button>
        </Show>
    }
}
