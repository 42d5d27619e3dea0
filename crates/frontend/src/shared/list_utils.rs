/// List helpers: client-side search and a debounced search box
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay between the last keystroke and the search reaching the list
pub const SEARCH_DEBOUNCE_MS: u32 = 400;

/// Rows that can be matched against a free-text query
pub trait Searchable {
    /// Case-insensitive match; `needle` is already lowercased and trimmed
    fn matches_filter(&self, needle: &str) -> bool;
}

/// Keeps the rows matching `filter`; a blank filter keeps everything
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&needle))
        .cloned()
        .collect()
}

/// `true` if any of `fields` contains `needle`
pub fn any_contains<'a>(fields: impl IntoIterator<Item = Option<&'a str>>, needle: &str) -> bool {
    fields
        .into_iter()
        .flatten()
        .any(|f| f.to_lowercase().contains(needle))
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Called with the text once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // dropping the previous timeout cancels it
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str, Option<&'static str>);

    impl Searchable for Row {
        fn matches_filter(&self, needle: &str) -> bool {
            any_contains([Some(self.0), self.1], needle)
        }
    }

    #[test]
    fn blank_filter_keeps_everything() {
        let rows = vec![Row("Maruti", None), Row("Honda", Some("City"))];
        assert_eq!(filter_list(&rows, "  "), rows);
    }

    #[test]
    fn filter_is_case_insensitive_over_all_fields() {
        let rows = vec![Row("Maruti", Some("Swift")), Row("Honda", Some("City"))];
        assert_eq!(filter_list(&rows, "SWI"), vec![Row("Maruti", Some("Swift"))]);
        assert_eq!(filter_list(&rows, " honda "), vec![Row("Honda", Some("City"))]);
        assert!(filter_list(&rows, "tata").is_empty());
    }
}
