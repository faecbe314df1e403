//! Assistant tab: transcript plus the prompt input row.
//!
//! The streaming reply grows inside a single placeholder message; see
//! `state::chat` for the in-place update contract.

use leptos::prelude::*;

use crate::app::SessionSlot;
use crate::i18n::tr;
use crate::state::{ChatRole, ChatState, UiState};

#[component]
pub fn ChatPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let session = expect_context::<SessionSlot>();

    let input = RwSignal::new(String::new());

    let locale = move || ui.get().locale;

    let do_send = move || {
        let session_ready = session.with_value(Option::is_some);
        let Some((text, placeholder_id)) = chat
            .try_update(|c| c.begin_send(&input.get(), session_ready))
            .flatten()
        else {
            return;
        };
        input.set(String::new());

        // Take the session out for the duration of the exchange; the sending
        // flag blocks a second take until it is put back.
        let Some(mut live_session) = session.try_update_value(Option::take).flatten() else {
            chat.update(|c| c.fail_send(&placeholder_id, tr(locale(), "chat.error")));
            return;
        };
        let locale = locale();

        leptos::task::spawn_local(async move {
            let result = live_session
                .send(&text, |fragment| {
                    chat.update(|c| c.append_fragment(&placeholder_id, fragment));
                })
                .await;
            session.set_value(Some(live_session));

            match result {
                Ok(_) => chat.update(ChatState::finish_send),
                Err(e) => {
                    log::warn!("chat send failed: {e}");
                    chat.update(|c| c.fail_send(&placeholder_id, tr(locale, "chat.error")));
                }
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat">
            <div class="chat__messages">
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|message| {
                            let text = message.text.clone();
                            let role_class = match message.role {
                                ChatRole::User => "chat__message--user",
                                ChatRole::Model => "chat__message--model",
                                ChatRole::Error => "chat__message--error",
                            };
                            view! {
                                <div class=format!("chat__message {role_class}")>{text}</div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    chat.get()
                        .sending
                        .then(|| {
                            view! {
                                <div class="chat__thinking">{tr(locale(), "chat.thinking")}</div>
                            }
                        })
                }}
            </div>
            <div class="chat__input-row">
                <input
                    class="chat__input"
                    type="text"
                    placeholder=move || tr(locale(), "chat.placeholder")
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary"
                    prop:disabled=move || chat.get().sending
                    on:click=move |_| do_send()
                >
                    {move || tr(locale(), "chat.send")}
                </button>
            </div>
        </div>
    }
}
