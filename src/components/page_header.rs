//! Page Header Component
//!
//! Title bar of the detail pages with a back button.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn PageHeader(
    title: String,
    subtitle: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <header class="page-header">
            <button class="back-btn" on:click=move |_| ctx.back()>"← Back"</button>
            <div class="page-title">
                <h1>{title}</h1>
                <span class="page-subtitle">{subtitle}</span>
            </div>
            <div class="page-actions">
                {children.map(|c| c())}
            </div>
        </header>
    }
}
