//! Lazily loaded tabs: address, documents, extra details, listing steps, images

use super::super::view_model::{VehicleDetailsVm, VehicleSection, VehicleTab};
use crate::shared::components::{DetailField, FileLink};
use crate::shared::date_utils::format_date_opt;
use crate::shared::labels::{label_or_dash, num_or_dash, or_dash};
use crate::shared::tab_cache::LoadState;
use leptos::prelude::*;
use thaw::*;

fn empty(text: &'static str) -> AnyView {
    view! {
        <Card>
            <div class="details__empty">{text}</div>
        </Card>
    }
    .into_any()
}

fn render(section: VehicleSection) -> AnyView {
    match section {
        VehicleSection::Address(Some(a)) => view! {
            <Card>
                <h4 class="details-section__title">"Address"</h4>
                <DetailField label="Address" value=or_dash(a.address.as_deref()) />
                <DetailField label="City" value=or_dash(a.city_name.as_deref()) />
                <DetailField label="State" value=or_dash(a.state_name.as_deref()) />
                <DetailField label="Country" value=or_dash(a.country_name.as_deref()) />
                <DetailField label="Latitude" value=num_or_dash(a.latitude) />
                <DetailField label="Longitude" value=num_or_dash(a.longitude) />
            </Card>
        }
        .into_any(),
        VehicleSection::Address(None) => empty("No address on file"),

        VehicleSection::Document(Some(d)) => view! {
            <Card>
                <h4 class="details-section__title">"Registration"</h4>
                <DetailField label="Registration number" value=or_dash(d.reg_number.as_deref()) />
                <DetailField label="RTO passing" value=or_dash(d.rto_passing.as_deref()) />
                <DetailField label="Insurance" value=label_or_dash(d.insurance.as_deref()) />
                <DetailField label="Insurance type" value=label_or_dash(d.type_of_insurance.as_deref()) />
                <DetailField label="Insurance expiry" value=format_date_opt(d.insurance_expiry_date.as_deref()) />
                <DetailField label="PUC expiry" value=format_date_opt(d.puc_expiry_date.as_deref()) />
            </Card>
        }
        .into_any(),
        VehicleSection::Document(None) => empty("No documents on file"),

        VehicleSection::Extra(rows) if rows.is_empty() => empty("No extra details"),
        VehicleSection::Extra(rows) => view! {
            <Card>
                <h4 class="details-section__title">"Extra details"</h4>
                {rows
                    .into_iter()
                    .map(|r| {
                        let label = label_or_dash(r.detail_key.as_deref());
                        view! {
                            <div class="details__field">
                                <span class="details__label">{label}</span>
                                <span class="details__value">{or_dash(r.detail_value.as_deref())}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </Card>
        }
        .into_any(),

        VehicleSection::Steps(Some(steps)) => view! {
            <Card>
                <h4 class="details-section__title">"Listing steps"</h4>
                {steps
                    .steps()
                    .into_iter()
                    .map(|(label, status)| view! { <DetailField label=label value=label_or_dash(status) /> })
                    .collect_view()}
            </Card>
        }
        .into_any(),
        VehicleSection::Steps(None) => empty("Listing has not started"),

        VehicleSection::Images(images) if images.is_empty() => empty("No images uploaded"),
        VehicleSection::Images(images) => view! {
            <Card>
                <h4 class="details-section__title">"Images"</h4>
                <div class="image-grid">
                    {images
                        .into_iter()
                        .map(|img| {
                            let label = label_or_dash(img.image_key.as_deref());
                            view! {
                                <div class="image-grid__item">
                                    <FileLink label="Image" url=img.image_url />
                                    <span class="image-grid__caption">{label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Card>
        }
        .into_any(),
    }
}

/// Any tab other than the overview; retry re-activates the tab
#[component]
pub fn SectionTab(vm: VehicleDetailsVm, tab: VehicleTab) -> impl IntoView {
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
