use crate::layout::global_context::{use_app_context, Tab};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Headers of the open tabs
#[component]
fn TabStrip() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="tab-strip">
            <For
                each=move || ctx.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: Tab| {
                    let key = StoredValue::new(tab.key.clone());
                    let title = move || {
                        let key = key.get_value();
                        ctx.opened.with(|tabs| {
                            tabs.iter().find(|t| t.key == key).map(|t| t.title.clone())
                        })
                    };
                    view! {
                        <div
                            class="tab-strip__item"
                            class:tab-strip__item--active=move || {
                                ctx.active.with(|a| a.as_deref() == Some(key.get_value().as_str()))
                            }
                            on:click=move |_| ctx.activate_tab(&key.get_value())
                        >
                            <span>{move || title().unwrap_or_default()}</span>
                            <button
                                class="tab-strip__close"
                                title="Close"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    ctx.close_tab(&key.get_value());
                                }
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <TabStrip />
            {children()}
        </div>
    }
}
