//! Business tab: the consultant record itself

use super::super::view_model::ConsultantDetailsVm;
use crate::shared::components::{DetailField, FileLink};
use crate::shared::date_utils::format_joined_opt;
use crate::shared::labels::{join_labels, num_or_dash, or_dash};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BusinessTab(vm: ConsultantDetailsVm) -> impl IntoView {
    move || {
        vm.consultant.get().map(|c| {
            let location = [c.city.as_deref(), c.state.as_deref()]
                .into_iter()
                .flatten()
                .filter(|s| !s.trim().is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            let name = or_dash(c.consultation_name.as_deref());
            let owner = or_dash(c.owner_name.as_deref());
            let email = or_dash(c.company_email.as_deref());
            let established = num_or_dash(c.establishment_year);
            let location = or_dash(Some(location.as_str()));
            let joined = format_joined_opt(c.joined_at());
            let tier = or_dash(c.tier_plan_id.as_ref().map(|t| t.as_str()));
            let vehicle_types = join_labels(&c.vehicle_types);
            let services = join_labels(&c.services);
            let logo = c.logo_url;
            let banner = c.banner_url;
            view! {
                <Card>
                    <h4 class="details-section__title">"Business"</h4>
                    <DetailField label="Consultation name" value=name />
                    <DetailField label="Owner" value=owner />
                    <DetailField label="Company email" value=email />
                    <DetailField label="Established" value=established />
                    <DetailField label="Location" value=location />
                    <DetailField label="Joined" value=joined />
                    <DetailField label="Tier plan" value=tier />
                </Card>
                <Card>
                    <h4 class="details-section__title">"Offering"</h4>
                    <DetailField label="Vehicle types" value=vehicle_types />
                    <DetailField label="Services" value=services />
                </Card>
                <Card>
                    <h4 class="details-section__title">"Branding"</h4>
                    <FileLink label="Logo" url=logo />
                    <FileLink label="Banner" url=banner />
                </Card>
            }
        })
    }
}
