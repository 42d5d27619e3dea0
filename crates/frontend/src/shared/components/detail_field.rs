use leptos::prelude::*;

/// Label / value pair of a read-only detail card
#[component]
pub fn DetailField(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="details__field">
            <span class="details__label">{label}</span>
            <span class="details__value">{value}</span>
        </div>
    }
}

/// Link to an uploaded file, or a dash when there is none
#[component]
pub fn FileLink(label: &'static str, url: Option<String>) -> impl IntoView {
    view! {
        <div class="details__field">
            <span class="details__label">{label}</span>
            {match url.filter(|u| !u.trim().is_empty()) {
                Some(url) => {
                    let href = url.clone();
                    view! {
                        <a class="details__value" href=href target="_blank" rel="noopener">
                            <img class="details__thumb" src=url alt=label />
                        </a>
                    }
                    .into_any()
                }
                None => view! { <span class="details__value">"-"</span> }.into_any(),
            }}
        </div>
    }
}
