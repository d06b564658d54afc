//! Home Page Component
//!
//! Dashboard with catalogue statistics, filter tabs and the schedule table.

use leptos::prelude::*;

use bim_schedule::ScheduleFilter;

use crate::context::AppContext;
use crate::store::{use_app_store, DashboardStateStoreFields};

/// One headline number
#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-label">{label}</div>
            <div class="stat-value">{move || value.get()}</div>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let stats = Memo::new(move |_| store.snapshot().read().schedules.stats());
    let schedules = move || store.snapshot().read().schedules.filtered(store.filter().get());

    view! {
        <div class="home-page">
            <header class="page-header">
                <div class="page-title">
                    <h1>"BIM Schedules"</h1>
                    <span class="page-subtitle">"5D cost and 4D time schedules"</span>
                </div>
            </header>

            <div class="stats-grid">
                <StatCard label="5D Schedules" value=Signal::derive(move || stats.get().five_d.to_string()) />
                <StatCard label="4D Schedules" value=Signal::derive(move || stats.get().four_d.to_string()) />
                <StatCard label="Active" value=Signal::derive(move || stats.get().active.to_string()) />
                <StatCard label="Projects" value=Signal::derive(move || stats.get().projects.to_string()) />
            </div>

            <div class="filter-tabs">
                {ScheduleFilter::ALL.into_iter().map(|filter| {
                    let tab_class = move || {
                        if store.filter().get() == filter { "filter-tab active" } else { "filter-tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| store.filter().set(filter)>
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <table class="schedule-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Type"</th>
                        <th>"Project"</th>
                        <th>"Status"</th>
                        <th>"Last Modified"</th>
                        <th>"Cost / Duration"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=schedules
                        key=|schedule| schedule.id.clone()
                        children=move |schedule| {
                            let kind_class = format!("kind-badge kind-{}", schedule.kind.label().to_lowercase());
                            let status_class = format!("status-badge status-{}", schedule.status.label().to_lowercase().replace(' ', "-"));
                            let cells = (
                                schedule.name.clone(),
                                schedule.kind.label(),
                                schedule.project.clone(),
                                schedule.status.label(),
                                schedule.last_modified.format("%Y-%m-%d").to_string(),
                                schedule.cost_or_duration().to_string(),
                            );
                            view! {
                                <tr class="schedule-row" on:click=move |_| ctx.open_schedule(&schedule)>
                                    <td class="schedule-name">{cells.0}</td>
                                    <td><span class=kind_class>{cells.1}</span></td>
                                    <td>{cells.2}</td>
                                    <td><span class=status_class>{cells.3}</span></td>
                                    <td>{cells.4}</td>
                                    <td>{cells.5}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
