//! The `result` container: status messages or the parsed table.

use leptos::*;

use crate::config::COLUMNS;
use crate::{ParseResponse, ResultView};

#[component]
pub fn ResultPanel(result: ReadSignal<ResultView>) -> impl IntoView {
    view! {
        <div id="result" class=move || result.with(|r| r.css_class())>
            {move || match result.get() {
                ResultView::Empty => ().into_view(),
                ResultView::Info(msg) | ResultView::Error(msg) => msg.into_view(),
                ResultView::Success(parsed) => view! { <ResultTable parsed=parsed/> }.into_view(),
            }}
        </div>
    }
}

/// Heading, row count and table for a successful parse.
///
/// Cell values go in as text nodes, so server strings are never parsed as markup.
#[component]
fn ResultTable(parsed: ParseResponse) -> impl IntoView {
    let heading = parsed.heading();

    view! {
        <h2>{heading}</h2>
        <p>"Rows parsed: " <b>{parsed.count}</b></p>
        {parsed.message.map(|msg| view! { <p class="response-note">{msg}</p> })}
        <table>
            <thead>
                <tr>
                    {COLUMNS.iter().map(|col| view! { <th>{*col}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {parsed
                    .rows
                    .into_iter()
                    .map(|row| {
                        let cells = row.cells().map(str::to_string);
                        view! {
                            <tr>
                                {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
