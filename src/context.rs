//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use bim_schedule::{QuantityDrag, ScheduleKind, ScheduleSummary, View};

use crate::store::{store_close_cost_detail, store_open_cost_detail, AppStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub view: ReadSignal<View>,
    /// Current page - write
    set_view: WriteSignal<View>,
    store: AppStore,
    /// Quantity drag state, shared by the takeoff manager and the cost planner
    pub dnd: DndSignals<QuantityDrag>,
}

impl AppContext {
    pub fn new(view: (ReadSignal<View>, WriteSignal<View>), store: AppStore, dnd: DndSignals<QuantityDrag>) -> Self {
        Self {
            view: view.0,
            set_view: view.1,
            store,
            dnd,
        }
    }

    /// Open the detail page matching the schedule's kind
    pub fn open_schedule(&self, schedule: &ScheduleSummary) {
        web_sys::console::log_1(&format!("[APP] Open {} schedule {}", schedule.kind.label(), schedule.id).into());
        if schedule.kind == ScheduleKind::FiveD {
            store_open_cost_detail(&self.store, &schedule.id);
        }
        self.set_view.set(View::for_schedule(schedule.id.clone(), schedule.kind));
    }

    /// Return to the dashboard; detail page state is discarded
    pub fn back(&self) {
        store_close_cost_detail(&self.store);
        let previous = self.view.get_untracked();
        self.set_view.set(previous.back());
    }
}
