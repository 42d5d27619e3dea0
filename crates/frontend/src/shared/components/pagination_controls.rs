use crate::shared::icons::icon;
use leptos::prelude::*;

/// Prev / next controls for a 1-based paged list
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total number of records, shown next to the page label
    #[prop(optional, into)]
    total_count: MaybeProp<u64>,

    /// Called with the requested page; the list clamps it
    on_page_change: Callback<u32>,

    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let disabled = move || disabled.get().unwrap_or(false);
    let has_prev = move || current_page.get() > 1;
    let has_next = move || current_page.get() < total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || disabled() || !has_prev()
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=move || disabled() || !has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let label = format!("Page {} of {}", current_page.get(), total_pages.get().max(1));
                    match total_count.get() {
                        Some(count) => format!("{} ({})", label, count),
                        None => label,
                    }
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=move || disabled() || !has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=move || disabled() || !has_next()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
