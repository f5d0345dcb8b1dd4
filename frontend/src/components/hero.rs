//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Weekly Terminal Transactions"</h1>
            <p class="subtitle">
                "Upload a transactions report PDF to extract terminal serials, "
                "payment values and days since the last transaction."
            </p>
        </div>
    }
}
