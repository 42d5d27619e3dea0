//! Overview tab: the listing record itself

use super::super::view_model::VehicleDetailsVm;
use crate::shared::components::{DetailField, FileLink};
use crate::shared::labels::{label_or_dash, num_or_dash, or_dash};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OverviewTab(vm: VehicleDetailsVm) -> impl IntoView {
    move || {
        vm.vehicle.get().map(|v| {
            let owner = v.owner_name();
            view! {
                <Card>
                    <h4 class="details-section__title">"Vehicle"</h4>
                    <DetailField label="Maker" value=or_dash(v.maker_name.as_deref()) />
                    <DetailField label="Model" value=or_dash(v.model_name.as_deref()) />
                    <DetailField label="Variant" value=or_dash(v.variant_name.as_deref()) />
                    <DetailField label="Year" value=num_or_dash(v.year_of_mfg) />
                    <DetailField label="Type" value=label_or_dash(v.vehicle_type.as_deref()) />
                    <DetailField label="Fuel" value=label_or_dash(v.fuel_type.as_deref()) />
                    <DetailField label="Transmission" value=label_or_dash(v.transmission_type.as_deref()) />
                    <DetailField label="Km driven" value=num_or_dash(v.km_driven) />
                    <DetailField label="Ownership" value=label_or_dash(v.ownership.as_deref()) />
                    <DetailField label="Colour" value=or_dash(v.colour.as_deref()) />
                    <DetailField label="Price" value=num_or_dash(v.price) />
                    <DetailField label="Inspection" value=label_or_dash(v.inspection_status.as_deref()) />
                    <DetailField label="Owner" value=or_dash(Some(owner.as_str())) />
                    <FileLink label="Thumbnail" url=v.thumbnail_url.clone() />
                </Card>
            }
        })
    }
}
