//! Formula Editor Component
//!
//! Modal dialog for the formula of one BQ item. The quantity tree above the
//! input is a reference list; the formula text is saved as typed.

use leptos::prelude::*;

use crate::store::{store_update_cost_detail, use_app_store, DashboardStateStoreFields};

#[component]
pub fn FormulaDialog() -> impl IntoView {
    let store = use_app_store();

    // Small memos so typing does not rebuild the dialog
    let is_open = Memo::new(move |_| store.cost_detail().read().as_ref().is_some_and(|s| s.formula().is_some()));
    let heading = Memo::new(move |_| {
        store.cost_detail().read().as_ref()
            .and_then(|s| s.formula())
            .map(|f| (f.code().to_string(), f.description().to_string()))
            .unwrap_or_default()
    });
    let text = Memo::new(move |_| {
        store.cost_detail().read().as_ref()
            .and_then(|s| s.formula())
            .map(|f| f.text().to_string())
            .unwrap_or_default()
    });
    let evaluated = Memo::new(move |_| {
        store.cost_detail().read().as_ref()
            .and_then(|s| s.formula())
            .map(|f| f.evaluated().to_string())
            .unwrap_or_default()
    });
    let quantity_rows = move || {
        let snapshot = store.snapshot().read();
        store.cost_detail().read().as_ref()
            .and_then(|s| s.formula())
            .map(|f| f.quantity_rows(&snapshot.formula_quantities))
            .unwrap_or_default()
    };

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        store_update_cost_detail(&store, |state| {
            if let Some(editor) = state.formula_mut() {
                editor.set_text(value);
            }
        });
    };

    let on_save = move |_: web_sys::MouseEvent| {
        if let Some(Some((bq_id, formula))) = store_update_cost_detail(&store, |state| state.save_formula()) {
            web_sys::console::log_1(&format!("[BQ] Formula for {}: {}", bq_id, formula).into());
        }
    };

    let on_cancel = move |_: web_sys::MouseEvent| {
        store_update_cost_detail(&store, |state| state.close_formula());
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop">
                <div class="formula-dialog">
                    <div class="dialog-header">
                        <h2>"Formula Editor"</h2>
                        <span class="dialog-subtitle">
                            {move || { let (code, description) = heading.get(); format!("{} {}", code, description) }}
                        </span>
                    </div>

                    <div class="quantity-tree">
                        <div class="quantity-tree-header">
                            <span>"Description / Quantity"</span>
                            <span class="num">"Value"</span>
                            <span>"Unit"</span>
                        </div>
                        <For
                            each=quantity_rows
                            key=|row| (row.node.id.clone(), row.expanded)
                            children=move |row| {
                                let node = row.node.clone();
                                let id = node.id.clone();
                                let toggle = if row.has_children {
                                    view! {
                                        <button class="collapse-btn" on:click=move |_| {
                                            store_update_cost_detail(&store, |state| {
                                                if let Some(editor) = state.formula_mut() {
                                                    editor.toggle_node(&id);
                                                }
                                            });
                                        }>
                                            {if row.expanded { "▼" } else { "▶" }}
                                        </button>
                                    }.into_any()
                                } else {
                                    view! { <span class="collapse-placeholder"></span> }.into_any()
                                };
                                let leaf_cells = (!row.has_children).then(|| view! {
                                    <span class="num">{node.value.to_string()}</span>
                                    <span>{node.unit.clone()}</span>
                                });
                                view! {
                                    <div class="quantity-node" style=format!("padding-left: {}px;", row.depth * 20 + 8)>
                                        {toggle}
                                        <span class="quantity-node-name">{node.name.clone()}</span>
                                        {leaf_cells}
                                    </div>
                                }
                            }
                        />
                    </div>

                    <label class="formula-label">"Enter formula"</label>
                    <div class="formula-input">
                        <span>"fx ="</span>
                        <textarea prop:value=move || text.get() on:input=on_input></textarea>
                    </div>

                    <div class="dialog-footer">
                        <span class="evaluated-label">"Evaluated"</span>
                        <span class="evaluated-value">{move || evaluated.get()}</span>
                        <button class="cancel-btn" on:click=on_cancel>"Cancel"</button>
                        <button class="save-btn" on:click=on_save>"Save"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
