//! Inventory entry view: the add-material form, the logged list, the
//! difficulty control, and the suggestion request trigger.

use leptos::prelude::*;

use crate::app::GatewaySlot;
use crate::i18n::tr;
use crate::state::{Difficulty, InventoryState, UiState, WorkshopState};

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[component]
pub fn InventoryForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let inventory = expect_context::<RwSignal<InventoryState>>();
    let workshop = expect_context::<RwSignal<WorkshopState>>();
    let gateway = expect_context::<GatewaySlot>();

    let name = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let unit = RwSignal::new(String::new());

    let locale = move || ui.get().locale;

    let do_add = move || {
        let Ok(qty) = quantity.get().trim().parse::<f64>() else {
            return;
        };
        let unit_value = {
            let raw = unit.get().trim().to_owned();
            if raw.is_empty() { tr(locale(), "unit.default").to_owned() } else { raw }
        };
        let added = inventory
            .try_update(|inv| inv.add(&name.get(), qty, &unit_value, now_ms()))
            .flatten();
        if added.is_some() {
            name.set(String::new());
            quantity.set(String::new());
            unit.set(String::new());
        }
    };

    let on_generate = move |_| {
        let Some(client) = gateway.with_value(Clone::clone) else {
            workshop.update(|w| w.set_error("error.no_api_key"));
            return;
        };
        let materials = inventory.with(|inv| inv.materials.clone());
        let Some(generation) = workshop
            .try_update(|w| w.begin_suggestion_request(!materials.is_empty()))
            .flatten()
        else {
            return;
        };
        let difficulty = workshop.with(|w| w.difficulty);
        let locale = locale();

        leptos::task::spawn_local(async move {
            match client.fetch_suggestions(&materials, difficulty, locale).await {
                Ok(suggestions) => {
                    workshop.update(|w| {
                        w.apply_suggestions(generation, suggestions);
                    });
                }
                Err(e) => {
                    log::warn!("suggestion request failed: {e}");
                    workshop.update(|w| {
                        w.fail_suggestions(generation, "error.suggestions");
                    });
                }
            }
        });
    };

    view! {
        <div class="inventory">
            <h2 class="inventory__title">{move || tr(locale(), "inventory.title")}</h2>

            <form
                class="inventory__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    do_add();
                }
            >
                <input
                    class="inventory__input inventory__input--name"
                    type="text"
                    placeholder=move || tr(locale(), "inventory.name_placeholder")
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="inventory__input inventory__input--qty"
                    type="number"
                    min="0"
                    step="any"
                    placeholder=move || tr(locale(), "inventory.quantity_placeholder")
                    prop:value=move || quantity.get()
                    on:input=move |ev| quantity.set(event_target_value(&ev))
                />
                <input
                    class="inventory__input inventory__input--unit"
                    type="text"
                    placeholder=move || tr(locale(), "inventory.unit_placeholder")
                    prop:value=move || unit.get()
                    on:input=move |ev| unit.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    {move || tr(locale(), "inventory.add")}
                </button>
            </form>

            {move || {
                let materials = inventory.get().materials;
                if materials.is_empty() {
                    view! { <p class="inventory__hint">{tr(locale(), "inventory.empty_hint")}</p> }
                        .into_any()
                } else {
                    view! {
                        <ul class="inventory__list">
                            {materials
                                .iter()
                                .map(|m| {
                                    let id = m.id;
                                    view! {
                                        <li class="inventory__item">
                                            <span class="inventory__item-name">{m.name.clone()}</span>
                                            <span class="inventory__item-qty">
                                                {format!("{} {}", m.quantity, m.unit)}
                                            </span>
                                            <button
                                                class="btn btn--ghost"
                                                on:click=move |_| inventory.update(|inv| inv.remove(id))
                                            >
                                                {tr(locale(), "inventory.remove")}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}

            <div class="inventory__difficulty">
                <span class="inventory__difficulty-label">
                    {move || tr(locale(), "difficulty.label")}
                </span>
                {[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
                    .into_iter()
                    .map(|level| {
                        view! {
                            <button
                                class="inventory__difficulty-option"
                                class:inventory__difficulty-option--active=move || {
                                    workshop.get().difficulty == level
                                }
                                on:click=move |_| workshop.update(|w| w.set_difficulty(level))
                            >
                                {move || tr(locale(), level.label_key())}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <button
                class="btn btn--primary inventory__generate"
                prop:disabled=move || workshop.get().loading || inventory.get().is_empty()
                on:click=on_generate
            >
                {move || tr(locale(), "inventory.generate")}
            </button>
        </div>
    }
}
