//! Tier multi-select used by the store theme and template forms

use contracts::domain::a003_tier_plan::TierPlanDto;
use contracts::shared::RecordId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a003_tier_plan::api;
use crate::shared::notifications::{use_notifications, Notify};

/// Adds `id` when absent, removes it otherwise
pub fn toggle_id(selected: &mut Vec<RecordId>, id: &RecordId) {
    if let Some(pos) = selected.iter().position(|s| s == id) {
        selected.remove(pos);
    } else {
        selected.push(id.clone());
    }
}

#[component]
pub fn TierPicker(selected: RwSignal<Vec<RecordId>>) -> impl IntoView {
    let notifier = use_notifications();
    let tiers: RwSignal<Vec<TierPlanDto>> = RwSignal::new(Vec::new());

    spawn_local(async move {
        match api::fetch_tier_plans().await {
            Ok(list) => {
                let _ = tiers.try_set(list);
            }
            Err(e) => notifier.error(e.user_message("Failed to load tier plans")),
        }
    });

    view! {
        <div class="tier-picker">
            {move || {
                tiers
                    .get()
                    .into_iter()
                    .map(|tier| {
                        let id = tier.id.clone();
                        let id_toggle = tier.id.clone();
                        view! {
                            <label class="tier-picker__option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || selected.with(|s| s.contains(&id))
                                    on:change=move |_| selected.update(|s| toggle_id(s, &id_toggle))
                                />
                                {tier.title}
                            </label>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selected = vec![RecordId::new("1")];
        toggle_id(&mut selected, &RecordId::new("2"));
        assert_eq!(selected, vec![RecordId::new("1"), RecordId::new("2")]);
        toggle_id(&mut selected, &RecordId::new("1"));
        assert_eq!(selected, vec![RecordId::new("2")]);
    }
}
