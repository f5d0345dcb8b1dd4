//! PDF upload form.
//!
//! Handles file selection, the multipart POST to the backend, and the
//! transition of the result view for one submission.

use leptos::*;
use serde_json::Value;

use crate::config::parse_url;
use crate::services::{parse_pdf, SubmissionTracker, ViewUpdate};
use crate::ResultView;

#[component]
pub fn UploadForm(
    set_result: WriteSignal<ResultView>,
    set_download: WriteSignal<Option<Value>>,
) -> impl IntoView {
    let file_input = create_node_ref::<html::Input>();
    let tracker = store_value(SubmissionTracker::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let apply = move |update: ViewUpdate| {
            set_download.set(update.download);
            set_result.set(update.result);
        };

        // Clear whatever the previous submission left behind
        apply(ViewUpdate::default());

        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let Some((update, request)) = tracker.try_update_value(|t| t.submit(file)) else {
            return;
        };
        apply(update);

        let Some((file, ticket)) = request else {
            return;
        };
        log::info!("📤 Uploading {} ({} bytes)", file.name(), file.size());

        spawn_local(async move {
            let outcome = parse_pdf(file, &parse_url()).await;

            if let Some(update) = tracker.try_with_value(|t| t.complete(ticket, outcome)).flatten() {
                apply(update);
            }
        });
    };

    view! {
        <form id="uploadForm" class="upload-section" on:submit=on_submit>
            <div class="upload-icon">"📄"</div>
            <input
                type="file"
                id="pdfFile"
                name="pdf"
                accept=".pdf,application/pdf"
                node_ref=file_input
            />
            <button type="submit" class="upload-button">
                "Upload & Parse"
            </button>
        </form>
    }
}
