//! TopHeader: application top bar with the sidebar toggle and the title.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let is_sidebar_visible = move || ctx.left_open.get();

    let active_title = move || {
        let active = ctx.active.get()?;
        ctx.opened
            .with(|tabs| tabs.iter().find(|t| t.key == active).map(|t| t.title.clone()))
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Marketplace Admin"</span>
            </div>
            <div class="top-header__current">
                {move || active_title().unwrap_or_default()}
            </div>
        </div>
    }
}
