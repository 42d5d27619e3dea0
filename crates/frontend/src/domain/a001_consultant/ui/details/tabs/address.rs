//! Address tab

use super::super::view_model::{ConsultantDetailsVm, ConsultantSection, ConsultantTab};
use super::section_view;
use crate::shared::components::{DetailField, RecordStatusBadge};
use crate::shared::labels::{num_or_dash, or_dash};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AddressTab(vm: ConsultantDetailsVm) -> impl IntoView {
    section_view(vm, ConsultantTab::Address, |section| match section {
        ConsultantSection::Address(Some(a)) => view! {
            <Card>
                <h4 class="details-section__title">"Address"</h4>
                <DetailField label="Address" value=or_dash(a.address.as_deref()) />
                <DetailField label="City" value=or_dash(a.city.as_deref()) />
                <DetailField label="State" value=or_dash(a.state.as_deref()) />
                <DetailField label="Country" value=or_dash(a.country.as_deref()) />
                <DetailField label="Latitude" value=num_or_dash(a.latitude) />
                <DetailField label="Longitude" value=num_or_dash(a.longitude) />
                <div class="details__field">
                    <span class="details__label">"Status"</span>
                    <RecordStatusBadge status=a.status />
                </div>
            </Card>
        }
        .into_any(),
        _ => view! {
            <Card>
                <div class="details__empty">"No address on file"</div>
            </Card>
        }
        .into_any(),
    })
}
