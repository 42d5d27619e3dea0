use crate::app_shell::MainLayout;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tab store for the whole app
    provide_context(AppGlobalContext::new());

    // Toasts raised by every page
    provide_context(NotificationService::new());

    view! {
        <MainLayout />
        <NotificationHost />
    }
}
