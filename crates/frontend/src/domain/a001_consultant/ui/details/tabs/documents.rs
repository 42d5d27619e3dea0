//! Documents tab: KYC numbers and scans

use super::super::view_model::{ConsultantDetailsVm, ConsultantSection, ConsultantTab};
use super::section_view;
use crate::shared::components::{DetailField, FileLink, RecordStatusBadge};
use crate::shared::labels::or_dash;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DocumentsTab(vm: ConsultantDetailsVm) -> impl IntoView {
    section_view(vm, ConsultantTab::Documents, |section| match section {
        ConsultantSection::Documents(Some(d)) => view! {
            <Card>
                <h4 class="details-section__title">"Tax"</h4>
                <DetailField label="GST number" value=or_dash(d.gst_number.as_deref()) />
                <div class="details__field">
                    <span class="details__label">"Status"</span>
                    <RecordStatusBadge status=d.status />
                </div>
            </Card>
            <Card>
                <h4 class="details-section__title">"PAN card"</h4>
                <DetailField label="Number" value=or_dash(d.pan_card_number.as_deref()) />
                <FileLink label="Front" url=d.pan_card_front_url.clone() />
            </Card>
            <Card>
                <h4 class="details-section__title">"Aadhaar card"</h4>
                <DetailField label="Number" value=or_dash(d.aadhar_card_number.as_deref()) />
                <FileLink label="Front" url=d.aadhar_card_front_url.clone() />
                <FileLink label="Back" url=d.aadhar_card_back_url.clone() />
            </Card>
        }
        .into_any(),
        _ => view! {
            <Card>
                <div class="details__empty">"No documents uploaded"</div>
            </Card>
        }
        .into_any(),
    })
}
