//! PDF Parser - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads a transactions report PDF to the
//! parsing backend and shows the extracted table.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadForm (POST /parse)                               │
//! │  ├── ResultPanel (info / error / table)                     │
//! │  └── DownloadButton (when a table was parsed)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Response view model, result view state, errors
//! - [`components`] - UI components
//! - [`services`] - Backend upload, JSON download, submission ordering

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Response
    ParseResponse, RowRecord, display_value,
    // View
    ResultView,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="PDF Table Parser"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Single result view and download artifact, overwritten by every submission
    let (result, set_result) = create_signal(ResultView::Empty);
    let (download, set_download) = create_signal(None::<serde_json::Value>);

    view! {
        <div class="container">
            <Hero/>

            <UploadForm set_result=set_result set_download=set_download/>

            <ResultPanel result=result/>

            <DownloadButton download=download/>
        </div>

        <Footer/>
    }
}
