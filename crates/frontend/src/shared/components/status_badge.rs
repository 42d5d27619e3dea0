use contracts::enums::{RecordStatus, VerificationStatus};
use leptos::prelude::*;

/// Badge variant for a review status
pub fn verification_variant(status: VerificationStatus) -> &'static str {
    match status {
        VerificationStatus::Verified => "success",
        VerificationStatus::Rejected => "error",
        VerificationStatus::RequestChanges => "warning",
        VerificationStatus::Requested => "primary",
    }
}

pub fn record_variant(status: RecordStatus) -> &'static str {
    match status {
        RecordStatus::Active => "success",
        RecordStatus::Inactive => "neutral",
        RecordStatus::Deleted => "error",
    }
}

/// Colored pill; variant is one of "primary", "success", "warning", "error", "neutral"
#[component]
pub fn Badge(
    #[prop(into)]
    variant: Signal<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        let modifier = match variant.get() {
            "primary" => "badge--primary",
            "success" => "badge--success",
            "warning" => "badge--warning",
            "error" => "badge--error",
            _ => "badge--neutral",
        };
        format!("badge {}", modifier)
    };

    view! { <span class=class>{children()}</span> }
}

#[component]
pub fn VerificationBadge(#[prop(into)] status: Signal<Option<VerificationStatus>>) -> impl IntoView {
    let variant = Signal::derive(move || status.get().map(verification_variant).unwrap_or("neutral"));
    view! {
        <Badge variant=variant>
            {move || status.get().map(|s| s.display_name()).unwrap_or("-")}
        </Badge>
    }
}

#[component]
pub fn RecordStatusBadge(#[prop(into)] status: Signal<Option<RecordStatus>>) -> impl IntoView {
    let variant = Signal::derive(move || status.get().map(record_variant).unwrap_or("neutral"));
    view! {
        <Badge variant=variant>
            {move || status.get().map(|s| s.display_name()).unwrap_or("-")}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_statuses_have_distinct_variants() {
        assert_eq!(verification_variant(VerificationStatus::Verified), "success");
        assert_eq!(verification_variant(VerificationStatus::Rejected), "error");
        assert_eq!(verification_variant(VerificationStatus::RequestChanges), "warning");
        assert_eq!(record_variant(RecordStatus::Inactive), "neutral");
    }
}
