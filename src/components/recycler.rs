//! Recycler tab: shows exactly one of the three sub-views based on which
//! state fields are populated, plus the shared error banner and loading strip.

use leptos::prelude::*;

use crate::components::inventory_form::InventoryForm;
use crate::components::plan_detail::PlanDetail;
use crate::components::suggestion_grid::SuggestionGrid;
use crate::i18n::tr;
use crate::state::{RecyclerView, UiState, WorkshopState};

#[component]
pub fn RecyclerPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let workshop = expect_context::<RwSignal<WorkshopState>>();

    let locale = move || ui.get().locale;

    view! {
        <section class="recycler">
            {move || {
                workshop
                    .get()
                    .error
                    .map(|key| view! { <div class="recycler__error">{tr(locale(), key)}</div> })
            }}
            {move || {
                workshop.get().loading.then(|| {
                    let key = if workshop.with(|w| w.selected.is_some()) {
                        "plan.loading"
                    } else {
                        "suggestions.loading"
                    };
                    view! { <div class="recycler__loading">{tr(locale(), key)}</div> }
                })
            }}
            {move || match workshop.get().view() {
                RecyclerView::Inventory => view! { <InventoryForm/> }.into_any(),
                RecyclerView::Suggestions => view! { <SuggestionGrid/> }.into_any(),
                RecyclerView::Plan => view! { <PlanDetail/> }.into_any(),
            }}
        </section>
    }
}
