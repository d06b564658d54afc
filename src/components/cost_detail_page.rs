//! 5D Cost Detail Page
//!
//! Takeoff manager on the left, cost planner on the right. Dragging a
//! quantity row onto a BQ leaf maps it.

use leptos::prelude::*;

use crate::components::{CostPlanner, FormulaDialog, PageHeader, TakeoffManager};
use crate::store::{use_app_store, DashboardStateStoreFields};

#[component]
pub fn CostDetailPage(schedule_id: String) -> impl IntoView {
    let store = use_app_store();

    let (title, subtitle) = store
        .snapshot()
        .read_untracked()
        .schedules
        .find(&schedule_id)
        .map(|s| (s.name.clone(), format!("{} · {}", s.project, s.kind.label())))
        .unwrap_or_else(|_| (schedule_id.clone(), String::from("5D")));

    let mapped_count = move || {
        store.cost_detail().read().as_ref()
            .map(|state| state.tree().iter().filter(|item| item.mapped).count())
            .unwrap_or_default()
    };

    view! {
        <div class="cost-detail-page">
            <PageHeader title=title subtitle=subtitle>
                <span class="mapped-count">{move || format!("{} BQ items mapped", mapped_count())}</span>
            </PageHeader>
            <div class="split-layout">
                <TakeoffManager />
                <CostPlanner />
            </div>
            <FormulaDialog />
        </div>
    }
}
