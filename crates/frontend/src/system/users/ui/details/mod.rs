use contracts::shared::RecordId;
use contracts::system::users::{UserDto, UserMetaData};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::{DetailField, RecordStatusBadge};
use crate::shared::http::ApiError;
use crate::shared::icons::icon;
use crate::shared::labels::{label_or_dash, or_dash};
use crate::shared::modal_frame::ModalFrame;
use crate::system::users::api;

/// User plus profile details; the profile is optional
#[derive(Debug, Clone, PartialEq)]
pub struct UserDetails {
    pub user: UserDto,
    pub meta: Option<UserMetaData>,
}

/// A missing or failing profile does not hide the user
fn combine(
    user: Result<UserDto, ApiError>,
    meta: Result<Option<UserMetaData>, ApiError>,
) -> Result<UserDetails, ApiError> {
    let user = user?;
    let meta = meta.unwrap_or_else(|e| {
        log::warn!("meta-data of user {} unavailable: {}", user.id, e);
        None
    });
    Ok(UserDetails { user, meta })
}

#[component]
pub fn UserDetailsModal(id: RecordId, on_close: Callback<()>) -> impl IntoView {
    let details: RwSignal<Option<UserDetails>> = RwSignal::new(None);
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    let user_id = id.as_str().to_string();
    spawn_local(async move {
        let user = api::fetch_user(&user_id).await;
        let meta = api::fetch_meta_data(&user_id).await;
        match combine(user, meta) {
            Ok(loaded) => {
                let _ = details.try_set(Some(loaded));
            }
            Err(e) => {
                let _ = error.try_set(Some(e.user_message("Failed to load user")));
            }
        }
    });

    view! {
        <ModalFrame on_close=on_close modal_class="modal--details">
            <div class="details__header">
                <h3>"User details"</h3>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
            </div>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || match details.get() {
                None if error.with(|e| e.is_none()) => view! { <Spinner /> }.into_any(),
                None => ().into_any(),
                Some(UserDetails { user, meta }) => view! {
                    <Card>
                        <DetailField label="Name" value=user.full_name() />
                        <DetailField label="Email" value=or_dash(user.email.as_deref()) />
                        <DetailField label="Phone" value=user.phone().unwrap_or_else(|| "-".to_string()) />
                        <DetailField label="Role" value=label_or_dash(user.user_role.as_deref()) />
                        <div class="details__field">
                            <span class="details__label">"Status"</span>
                            <RecordStatusBadge status=Some(user.status) />
                        </div>
                    </Card>
                    {match meta {
                        Some(meta) => view! {
                            <Card>
                                <DetailField label="Profession" value=or_dash(meta.profession.as_deref()) />
                                <DetailField label="Gender" value=label_or_dash(meta.gender.as_deref()) />
                                <DetailField label="Address" value=or_dash(meta.address.as_deref()) />
                                <DetailField label="City" value=or_dash(meta.city.as_deref()) />
                                <DetailField label="State" value=or_dash(meta.state.as_deref()) />
                                <DetailField label="Country" value=or_dash(meta.country.as_deref()) />
                            </Card>
                        }.into_any(),
                        None => view! {
                            <div class="details__empty">"No additional details"</div>
                        }.into_any(),
                    }}
                }.into_any(),
            }}
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_failure_is_not_fatal() {
        let user = UserDto {
            id: "u1".into(),
            ..Default::default()
        };
        let got = combine(Ok(user.clone()), Err(ApiError::Transport("offline".into()))).unwrap();
        assert_eq!(got.user, user);
        assert_eq!(got.meta, None);
    }

    #[test]
    fn user_failure_is_fatal() {
        let err = ApiError::Status {
            status: 404,
            message: Some("User not found".into()),
        };
        let got = combine(Err(err.clone()), Ok(Some(UserMetaData::default())));
        assert_eq!(got, Err(err));
    }
}
