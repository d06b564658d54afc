//! BIM Schedule Dashboard App
//!
//! Switches between the dashboard and the 5D/4D detail pages.

use leptos::prelude::*;
use reactive_stores::Store;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};

use bim_schedule::{QuantityDrag, View};

use crate::context::AppContext;
use crate::store::{store_update_cost_detail, DashboardState, DashboardStateStoreFields};
use crate::components::{CostDetailPage, HomePage, TimeDetailPage};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(DashboardState::load());
    provide_context(store);

    let (view, set_view) = signal(View::default());

    // Quantity drags live for the whole app so document listeners never
    // outlive their signals
    let dnd = create_dnd_signals::<QuantityDrag>();
    bind_global_mouseup(dnd, move |drag: QuantityDrag, target: String| {
        web_sys::console::log_1(&format!("[DND] Drop {} on {}", drag.drag_id(), target).into());
        match store_update_cost_detail(&store, |state| state.drop_quantity(&drag, &target)) {
            Some(Ok(())) => {
                web_sys::console::log_1(&format!("[BQ] {} mapped to {}", target, drag.quantity.id).into());
            }
            Some(Err(e)) => {
                web_sys::console::warn_1(&format!("[BQ] Drop rejected: {}", e).into());
            }
            None => {}
        }
    });

    provide_context(AppContext::new((view, set_view), store, dnd));

    view! {
        <div class="app-layout">
            {move || store.load_error().get().map(|e| view! {
                <div class="load-error">{format!("Failed to load schedule data: {}", e)}</div>
            })}
            {move || match view.get() {
                View::Home => view! { <HomePage /> }.into_any(),
                View::CostDetail { schedule_id } => view! { <CostDetailPage schedule_id=schedule_id /> }.into_any(),
                View::TimeDetail { schedule_id } => view! { <TimeDetailPage schedule_id=schedule_id /> }.into_any(),
            }}
        </div>
    }
}
