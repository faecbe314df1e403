//! Suggestion cards with generated previews; picking one fetches its plan.

use leptos::prelude::*;

use crate::app::GatewaySlot;
use crate::i18n::tr;
use crate::state::{UiState, WorkshopState};

#[component]
pub fn SuggestionGrid() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let workshop = expect_context::<RwSignal<WorkshopState>>();
    let gateway = expect_context::<GatewaySlot>();

    let locale = move || ui.get().locale;

    let on_select = move |id: String| {
        let Some(client) = gateway.with_value(Clone::clone) else {
            return;
        };
        // No-op when the id is not in the current batch.
        let Some(generation) = workshop.try_update(|w| w.begin_plan_request(&id)).flatten() else {
            return;
        };
        let Some(suggestion) = workshop.with(|w| w.selected.clone()) else {
            return;
        };
        let locale = locale();

        leptos::task::spawn_local(async move {
            match client.fetch_plan(&suggestion, locale).await {
                Ok(plan) => {
                    workshop.update(|w| {
                        w.apply_plan(generation, plan);
                    });
                }
                Err(e) => {
                    log::warn!("plan request failed: {e}");
                    workshop.update(|w| {
                        w.fail_plan(generation, "error.plan");
                    });
                }
            }
        });
    };

    view! {
        <div class="suggestions">
            <div class="suggestions__header">
                <h2 class="suggestions__title">{move || tr(locale(), "suggestions.title")}</h2>
                <button class="btn" on:click=move |_| workshop.update(WorkshopState::reset)>
                    {move || tr(locale(), "suggestions.start_over")}
                </button>
            </div>

            <div class="suggestions__grid">
                {move || {
                    workshop
                        .get()
                        .suggestions
                        .iter()
                        .map(|suggestion| {
                            let id = suggestion.id.clone();
                            let title = suggestion.title.clone();
                            let image = suggestion.image.clone();
                            view! {
                                <article class="suggestion-card">
                                    {match image {
                                        Some(image) => {
                                            view! {
                                                <img
                                                    class="suggestion-card__image"
                                                    src=image.data_url()
                                                    alt=title.clone()
                                                />
                                            }
                                                .into_any()
                                        }
                                        None => {
                                            view! {
                                                <div class="suggestion-card__placeholder">
                                                    {tr(locale(), "suggestions.no_image")}
                                                </div>
                                            }
                                                .into_any()
                                        }
                                    }}
                                    <h3 class="suggestion-card__title">{title}</h3>
                                    <p class="suggestion-card__description">
                                        {suggestion.description.clone()}
                                    </p>
                                    <div class="suggestion-card__materials">
                                        <span class="suggestion-card__materials-label">
                                            {tr(locale(), "suggestions.materials")}
                                        </span>
                                        {suggestion
                                            .materials_required
                                            .iter()
                                            .map(|req| {
                                                view! {
                                                    <span class="suggestion-card__chip">
                                                        {format!("{} {} {}", req.quantity, req.unit, req.name)}
                                                    </span>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                    <button
                                        class="btn btn--primary"
                                        prop:disabled=move || workshop.get().loading
                                        on:click=move |_| on_select(id.clone())
                                    >
                                        {tr(locale(), "suggestions.build")}
                                    </button>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
