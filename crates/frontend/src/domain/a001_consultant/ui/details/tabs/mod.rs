//! Tab components of the consultant review screen

mod address;
mod business;
mod documents;
mod review;

pub use address::AddressTab;
pub use business::BusinessTab;
pub use documents::DocumentsTab;
pub use review::ReviewTab;

use super::view_model::{ConsultantDetailsVm, ConsultantSection, ConsultantTab};
use crate::shared::tab_cache::LoadState;
use leptos::prelude::*;
use thaw::*;

/// Spinner, error with retry, or `render` once the section is loaded
fn section_view(
    vm: ConsultantDetailsVm,
    tab: ConsultantTab,
    render: impl Fn(ConsultantSection) -> AnyView + Send + Sync + 'static,
) -> impl IntoView {
    let state = vm.section(tab);
    move || match state.get() {
        LoadState::NotLoaded | LoadState::Loading => view! {
            <Card>
                <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                    <Spinner />
                    <span>"Loading..."</span>
                </Flex>
            </Card>
        }
        .into_any(),
        LoadState::Failed(err) => view! {
            <Card>
                <div class="alert alert--error">{err}</div>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.select_tab(tab)>
                    "Retry"
                </Button>
            </Card>
        }
        .into_any(),
        LoadState::Loaded(section) => render(section),
    }
}
