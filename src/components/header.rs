//! Top bar: title, tab switch, and the language toggle.

use leptos::prelude::*;

use crate::app::{GatewaySlot, SessionSlot, ensure_chat_session};
use crate::gateway::ChatSession;
use crate::i18n::tr;
use crate::state::{ActiveTab, ChatState, InventoryState, UiState, WorkshopState};

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let inventory = expect_context::<RwSignal<InventoryState>>();
    let workshop = expect_context::<RwSignal<WorkshopState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let gateway = expect_context::<GatewaySlot>();
    let session = expect_context::<SessionSlot>();

    let locale = move || ui.get().locale;

    let open_tab = move |tab: ActiveTab| {
        ui.update(|u| u.set_tab(tab));
        if tab == ActiveTab::Assistant {
            ensure_chat_session(locale(), gateway, session, chat);
        }
    };

    // AI output is locale-bound, so flipping the language discards all of it
    // and restarts the conversation in the new locale.
    let on_toggle_language = move |_| {
        let locale = ui.try_update(UiState::toggle_language).unwrap_or_default();
        inventory.update(InventoryState::clear);
        workshop.update(WorkshopState::reset);
        session.set_value(
            gateway
                .with_value(Clone::clone)
                .map(|client| ChatSession::new(client, locale)),
        );
        chat.update(|c| c.reset_with_greeting(tr(locale, "chat.greeting")));
    };

    view! {
        <header class="header">
            <div class="header__brand">
                <h1 class="header__title">{move || tr(locale(), "app.title")}</h1>
                <p class="header__tagline">{move || tr(locale(), "app.tagline")}</p>
            </div>
            <nav class="header__tabs">
                <button
                    class="header__tab"
                    class:header__tab--active=move || ui.get().active_tab == ActiveTab::Recycler
                    on:click=move |_| open_tab(ActiveTab::Recycler)
                >
                    {move || tr(locale(), "tab.recycler")}
                </button>
                <button
                    class="header__tab"
                    class:header__tab--active=move || ui.get().active_tab == ActiveTab::Assistant
                    on:click=move |_| open_tab(ActiveTab::Assistant)
                >
                    {move || tr(locale(), "tab.assistant")}
                </button>
            </nav>
            <button class="btn header__lang" on:click=on_toggle_language>
                {move || tr(locale(), "lang.toggle")}
            </button>
        </header>
    }
}
