//! Takeoff Manager Component
//!
//! Elements with their measured quantities. Quantity rows are drag sources
//! for cost mapping.

use leptos::prelude::*;
use leptos_dragdrop::make_on_mousedown;

use bim_schedule::{format, TakeoffRow};

use crate::context::AppContext;
use crate::store::{store_update_cost_detail, use_app_store, DashboardStateStoreFields};

#[component]
pub fn TakeoffManager() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let dnd = ctx.dnd;

    let rows = move || {
        let snapshot = store.snapshot().read();
        store
            .cost_detail()
            .read()
            .as_ref()
            .map(|state| state.takeoff_rows(&snapshot.elements))
            .unwrap_or_default()
    };

    view! {
        <section class="takeoff-manager">
            <div class="panel-title">"Quantity Takeoff"</div>
            <table class="takeoff-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Type / Value"</th>
                        <th>"Unit"</th>
                        <th>"Cost"</th>
                        <th>"Task"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|row| {
                            let expanded = matches!(row, TakeoffRow::Element { expanded: true, .. });
                            (row.key(), expanded)
                        }
                        children=move |row| match row {
                            TakeoffRow::Element { element, expanded } => {
                                let id = element.id.clone();
                                view! {
                                    <tr class="element-row">
                                        <td>
                                            <button class="collapse-btn" on:click=move |_| {
                                                store_update_cost_detail(&store, |state| state.toggle_element(&id));
                                            }>
                                                {if expanded { "▼" } else { "▶" }}
                                            </button>
                                            <span class="element-name">{element.name.clone()}</span>
                                            <span class="expression-link">{element.quantity_expression.clone()}</span>
                                        </td>
                                        <td>{element.element_type.clone()}</td>
                                        <td></td>
                                        <td>{format::yes_no(element.cost_mapped)}</td>
                                        <td>{format::yes_no(element.task_mapped)}</td>
                                    </tr>
                                }.into_any()
                            }
                            TakeoffRow::Quantity(drag) => {
                                let key = drag.drag_id();
                                let on_mousedown = make_on_mousedown(dnd, key.clone(), drag.clone());
                                let row_class = move || {
                                    if dnd.is_dragging(&key) { "quantity-row dragging" } else { "quantity-row" }
                                };
                                let quantity = drag.quantity;
                                view! {
                                    <tr class=row_class on:mousedown=on_mousedown>
                                        <td class="quantity-name">{quantity.name}</td>
                                        <td class="num">{format::fixed(quantity.value, 2)}</td>
                                        <td>{quantity.unit}</td>
                                        <td>{format::yes_no(quantity.cost_mapped)}</td>
                                        <td>{format::yes_no(quantity.task_mapped)}</td>
                                    </tr>
                                }.into_any()
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
