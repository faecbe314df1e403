//! Root application component with shared state contexts.

use leptos::prelude::*;
use leptos_meta::{Html, Title, provide_meta_context};

use crate::components::chat_panel::ChatPanel;
use crate::components::header::Header;
use crate::components::recycler::RecyclerPanel;
use crate::config::GatewayConfig;
use crate::gateway::{ChatSession, GeminiClient};
use crate::i18n::{Locale, tr};
use crate::state::{ActiveTab, ChatState, InventoryState, UiState, WorkshopState};

/// The gateway client lives in local (non-threadsafe) storage: the wasm
/// reqwest client is not `Send`.
pub type GatewaySlot = StoredValue<Option<GeminiClient>, LocalStorage>;

/// The live chat session, `None` until the assistant tab is first opened.
/// Taken out while a send is in flight and put back afterwards.
pub type SessionSlot = StoredValue<Option<ChatSession>, LocalStorage>;

/// Root application component.
///
/// Provides all shared state contexts and switches between the two tabs.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let inventory = RwSignal::new(InventoryState::default());
    let workshop = RwSignal::new(WorkshopState::default());
    let chat = RwSignal::new(ChatState::default());

    let gateway: GatewaySlot = StoredValue::new_local(match GatewayConfig::from_build_env() {
        Ok(config) => Some(GeminiClient::new(config)),
        Err(e) => {
            log::warn!("gateway disabled: {e}");
            None
        }
    });
    let session: SessionSlot = StoredValue::new_local(None);

    provide_context(ui);
    provide_context(inventory);
    provide_context(workshop);
    provide_context(chat);
    provide_context(gateway);
    provide_context(session);

    let locale = move || ui.get().locale;

    view! {
        <Html attr:dir=move || locale().dir() attr:lang=move || locale().lang_tag()/>
        <Title text="ScrapForge"/>

        <div class="app">
            <Header/>
            <main class="app__main">
                {move || match ui.get().active_tab {
                    ActiveTab::Recycler => view! { <RecyclerPanel/> }.into_any(),
                    ActiveTab::Assistant => view! { <ChatPanel/> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Seed the greeting and lazily create the chat session the first time the
/// assistant tab is opened.
pub(crate) fn ensure_chat_session(
    locale: Locale,
    gateway: GatewaySlot,
    session: SessionSlot,
    chat: RwSignal<ChatState>,
) {
    chat.update(|c| c.seed_greeting(tr(locale, "chat.greeting")));
    if session.with_value(Option::is_none) {
        if let Some(client) = gateway.with_value(Clone::clone) {
            session.set_value(Some(ChatSession::new(client, locale)));
        }
    }
}
