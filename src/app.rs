//! Root application component and browser mount entry.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::chat_panel::ChatPanel;
use crate::state::transcript::TranscriptState;

/// Root application component.
///
/// Provides the shared transcript context and renders the chat panel.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let transcript = RwSignal::new(TranscriptState::default());
    provide_context(transcript);

    view! {
        <Title text="Chatbox"/>
        <main class="chat-app">
            <ChatPanel/>
        </main>
    }
}

/// Mount the application into `<body>`.
///
/// Installs the panic hook and console logger first so early failures are
/// visible in the browser console.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(App);
}
