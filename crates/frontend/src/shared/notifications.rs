//! User-facing notifications.
//!
//! Controllers talk to the [`Notify`] port; the app root provides a
//! [`NotificationService`] through context and renders it with
//! [`NotificationHost`].

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen
const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Port controllers raise notifications through
pub trait Notify {
    fn notify(&self, kind: NoticeKind, text: String);

    fn success(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Success, text.into());
    }

    fn error(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Error, text.into());
    }

    fn info(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Info, text.into());
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|items| items.retain(|n| n.id != id));
    }

    pub fn notices(&self) -> Signal<Vec<Notice>> {
        self.notices.into()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notify for NotificationService {
    fn notify(&self, kind: NoticeKind, text: String) {
        match kind {
            NoticeKind::Error => log::warn!("notify: {}", text),
            _ => log::debug!("notify: {}", text),
        }
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.notices.update(|items| items.push(Notice { id, kind, text }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            this.dismiss(id);
        });
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Toast stack in the corner of the screen
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();
    let notices = service.notices();

    view! {
        <div class="notifications">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    let class = match notice.kind {
                        NoticeKind::Success => "notice notice--success",
                        NoticeKind::Error => "notice notice--error",
                        NoticeKind::Info => "notice notice--info",
                    };
                    view! {
                        <div class=class on:click=move |_| service.dismiss(id)>
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Collects notifications instead of showing them
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub seen: RefCell<Vec<(NoticeKind, String)>>,
    }

    impl Notify for RecordingNotifier {
        fn notify(&self, kind: NoticeKind, text: String) {
            self.seen.borrow_mut().push((kind, text));
        }
    }

    impl RecordingNotifier {
        pub fn errors(&self) -> Vec<String> {
            self.seen
                .borrow()
                .iter()
                .filter(|(kind, _)| *kind == NoticeKind::Error)
                .map(|(_, text)| text.clone())
                .collect()
        }

        pub fn count(&self) -> usize {
            self.seen.borrow().len()
        }
    }
}
