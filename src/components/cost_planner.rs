//! Cost Planner Component
//!
//! Bill-of-quantities table. Leaf rows accept dropped quantities.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseenter};

use bim_schedule::format;

use crate::context::AppContext;
use crate::store::{store_update_cost_detail, use_app_store, DashboardStateStoreFields};

#[component]
pub fn CostPlanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let dnd = ctx.dnd;

    let rows = move || {
        store
            .cost_detail()
            .read()
            .as_ref()
            .map(|state| {
                state
                    .bq_rows()
                    .into_iter()
                    .map(|row| {
                        let indent = state.indent_for(&row.node);
                        (row, indent)
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    view! {
        <section class="cost-planner">
            <div class="panel-toolbar">
                <span class="panel-title">"Cost Planner"</span>
                <button on:click=move |_| { store_update_cost_detail(&store, |state| state.expand_all_bq()); }>
                    "Expand All"
                </button>
                <button on:click=move |_| { store_update_cost_detail(&store, |state| state.collapse_all_bq()); }>
                    "Collapse All"
                </button>
            </div>
            <table class="bq-table">
                <thead>
                    <tr>
                        <th>"Code"</th>
                        <th>"Description"</th>
                        <th>"Quantity"</th>
                        <th>"UOM"</th>
                        <th>"Unit Cost"</th>
                        <th>"Total Cost"</th>
                        <th>"Mapped"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|(row, _)| {
                            // Include every field a drop or toggle can change
                            (
                                row.node.id.clone(),
                                row.depth,
                                row.expanded,
                                row.node.mapped,
                                row.node.quantity.to_bits(),
                                row.node.mapped_quantity_id.clone(),
                            )
                        }
                        children=move |(row, indent)| {
                            let item = row.node.clone();
                            let id = item.id.clone();
                            let is_leaf = item.is_leaf();

                            // Only leaves are drop targets
                            let on_target_enter = make_on_target_mouseenter(dnd, id.clone());
                            let on_mouseenter = move |ev: web_sys::MouseEvent| {
                                if is_leaf { on_target_enter(ev) }
                            };
                            let on_mouseleave = make_on_mouseleave(dnd);

                            let drop_id = id.clone();
                            let is_mapped = item.mapped;
                            let row_class = move || {
                                let mut c = String::from("bq-row");
                                if is_mapped { c.push_str(" mapped"); }
                                if dnd.is_over(&drop_id) { c.push_str(" drop-target"); }
                                c
                            };

                            let toggle_id = id.clone();
                            let toggle = if row.has_children {
                                view! {
                                    <button class="collapse-btn" on:click=move |_| {
                                        store_update_cost_detail(&store, |state| state.toggle_bq(&toggle_id));
                                    }>
                                        {if row.expanded { "▼" } else { "▶" }}
                                    </button>
                                }.into_any()
                            } else {
                                view! { <span class="collapse-placeholder"></span> }.into_any()
                            };

                            // Positive quantities open the formula editor
                            let formula_id = id.clone();
                            let quantity = format::quantity_cell(item.quantity).map(|text| view! {
                                <button class="quantity-link" on:click=move |_| {
                                    if let Some(Err(e)) = store_update_cost_detail(&store, |state| state.open_formula(&formula_id)) {
                                        web_sys::console::warn_1(&format!("[BQ] Cannot open formula: {}", e).into());
                                    }
                                }>
                                    {text}
                                </button>
                            });

                            let mapped = if item.mapped {
                                format!("✓ {}", item.mapped_quantity_id.clone().unwrap_or_default())
                            } else {
                                String::new()
                            };

                            view! {
                                <tr class=row_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
                                    <td style=format!("padding-left: {}px;", indent)>
                                        {toggle}
                                        <span class="bq-code">{item.code.clone()}</span>
                                    </td>
                                    <td>{item.description.clone()}</td>
                                    <td class="num">{quantity}</td>
                                    <td>{item.uom.clone()}</td>
                                    <td class="num">{format::cost_cell(item.unit_cost)}</td>
                                    <td class="num">{format::cost_cell(item.total_cost)}</td>
                                    <td class="mapped-cell">{mapped}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
