//! Fabrication plan view: ordered steps plus the power budget table.

use leptos::prelude::*;

use crate::gateway::prompts::POWER_CEILING_KWH;
use crate::i18n::tr;
use crate::state::{UiState, WorkshopState};

#[component]
pub fn PlanDetail() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let workshop = expect_context::<RwSignal<WorkshopState>>();

    let locale = move || ui.get().locale;

    view! {
        <div class="plan">
            <button class="btn" on:click=move |_| workshop.update(WorkshopState::back_to_suggestions)>
                {move || tr(locale(), "plan.back")}
            </button>

            {move || {
                let state = workshop.get();
                let (Some(suggestion), Some(plan)) = (state.selected, state.plan) else {
                    return ().into_any();
                };
                let over_budget = plan.total_power_consumption_kwh > POWER_CEILING_KWH;

                view! {
                    <h2 class="plan__title">{suggestion.title.clone()}</h2>
                    <p class="plan__description">{suggestion.description.clone()}</p>

                    <section class="plan__power">
                        <h3>{tr(locale(), "plan.power_title")}</h3>
                        <table class="plan__power-table">
                            <thead>
                                <tr>
                                    <th>{tr(locale(), "plan.power_task")}</th>
                                    <th>{tr(locale(), "plan.power_kwh")}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {plan
                                    .power_consumption_breakdown
                                    .iter()
                                    .map(|draw| {
                                        view! {
                                            <tr>
                                                <td>{draw.task.clone()}</td>
                                                <td>{format!("{:.2}", draw.kwh)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                            <tfoot>
                                <tr class="plan__power-total" class:plan__power-total--over=over_budget>
                                    <td>{tr(locale(), "plan.power_total")}</td>
                                    <td>{format!("{:.2}", plan.total_power_consumption_kwh)}</td>
                                </tr>
                            </tfoot>
                        </table>
                        {over_budget
                            .then(|| {
                                view! {
                                    <p class="plan__power-warning">
                                        {tr(locale(), "plan.over_budget")}
                                    </p>
                                }
                            })}
                    </section>

                    <section class="plan__steps">
                        <h3>{tr(locale(), "plan.steps_title")}</h3>
                        <ol class="plan__step-list">
                            {plan
                                .steps
                                .iter()
                                .map(|step| {
                                    view! {
                                        <li class="plan__step">
                                            <h4 class="plan__step-title">{step.title.clone()}</h4>
                                            <p class="plan__step-description">
                                                {step.description.clone()}
                                            </p>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ol>
                    </section>
                }
                    .into_any()
            }}
        </div>
    }
}
