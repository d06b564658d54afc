//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use bim_schedule::{CostDetailState, DashboardConfig, ScheduleFilter, Snapshot};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Bundled datasets, read-only after startup
    pub snapshot: Snapshot,
    pub config: DashboardConfig,
    /// Active tab on the dashboard
    pub filter: ScheduleFilter,
    /// State of the open 5D page (None when no cost detail page is open)
    pub cost_detail: Option<CostDetailState>,
    /// Set when the bundled datasets failed to load
    pub load_error: Option<String>,
}

impl DashboardState {
    /// Loads embedded config and datasets. Failures are logged and leave
    /// defaults in place so the shell still renders.
    pub fn load() -> Self {
        let config = match DashboardConfig::embedded() {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::error_1(&format!("[APP] Config error, using defaults: {}", e).into());
                DashboardConfig::default()
            }
        };

        match Snapshot::bundled() {
            Ok(snapshot) => {
                web_sys::console::log_1(&format!(
                    "[APP] Loaded {} schedules, {} BQ items, {} tasks",
                    snapshot.schedules.all().len(),
                    snapshot.bill_of_quantities.len(),
                    snapshot.tasks.len()
                ).into());
                Self { snapshot, config, ..Default::default() }
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[APP] Snapshot error: {}", e).into());
                Self { config, load_error: Some(e.to_string()), ..Default::default() }
            }
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<DashboardState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Start a fresh cost detail state for `schedule_id`
pub fn store_open_cost_detail(store: &AppStore, schedule_id: &str) {
    let tree = store.snapshot().read().bill_of_quantities.clone();
    let state = CostDetailState::new(schedule_id, tree, &store.config().read());
    *store.cost_detail().write() = Some(state);
}

/// Drop the cost detail state with all its mappings and formulas
pub fn store_close_cost_detail(store: &AppStore) {
    *store.cost_detail().write() = None;
}

/// Run `f` against the open cost detail state, if any
pub fn store_update_cost_detail<R>(store: &AppStore, f: impl FnOnce(&mut CostDetailState) -> R) -> Option<R> {
    store.cost_detail().write().as_mut().map(f)
}
