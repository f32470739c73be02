//! Toast notifications: the notification surface shared by every view.
//!
//! Views report through the [`Notifier`] trait and never hold error state of their
//! own. In the app the notifier is a `Signal<ToastQueue>` rendered by [`Toaster`];
//! tests use a bare [`ToastQueue`] and inspect what was pushed.

use std::time::Duration;

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Destructive,
}

/// A single user-visible notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub variant: Option<ToastVariant>,
    pub title: String,
    pub description: Option<String>,
    /// How long the toast stays up; None uses the configured default.
    pub duration: Option<Duration>,
}

impl Toast {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            variant: None,
            title: title.into(),
            description: None,
            duration: None,
        }
    }

    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            variant: Some(ToastVariant::Destructive),
            ..Self::new(title)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Some(ToastVariant::Destructive)
    }
}

/// Fire-and-forget sink for user-visible feedback.
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    entries: Vec<ToastEntry>,
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ToastEntry { id, toast });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter().map(|entry| &entry.toast)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, toast: Toast) {
        self.push(toast);
    }
}

impl Notifier for Signal<ToastQueue> {
    fn notify(&mut self, toast: Toast) {
        tracing::debug!("toast: {}", toast.title);
        self.write().push(toast);
    }
}

/// Create the toast queue for an app root.
pub fn use_toast_queue() -> Signal<ToastQueue> {
    use_signal(ToastQueue::default)
}

/// Renders the queue in the bottom-right corner.
#[component]
pub fn Toaster(queue: Signal<ToastQueue>, default_duration_ms: u64) -> Element {
    let entries = queue.read().entries().to_vec();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 flex flex-col gap-2 w-full max-w-sm",
            style: "z-index: 3000",
            for entry in entries {
                ToastCard {
                    key: "{entry.id}",
                    id: entry.id,
                    toast: entry.toast,
                    queue: queue,
                    default_duration_ms: default_duration_ms,
                }
            }
        }
    }
}

#[component]
fn ToastCard(id: u64, toast: Toast, queue: Signal<ToastQueue>, default_duration_ms: u64) -> Element {
    let mut queue = queue;
    let lifetime = toast
        .duration
        .unwrap_or(Duration::from_millis(default_duration_ms));

    use_future(move || async move {
        sleep(lifetime).await;
        queue.write().dismiss(id);
    });

    let class = if toast.is_destructive() {
        "rounded-xl border border-red-600 bg-red-600 text-white shadow-lg p-4"
    } else {
        "rounded-xl border border-gray-200 bg-white text-gray-900 shadow-lg p-4"
    };

    rsx! {
        div {
            class: "{class}",
            role: "status",
            onclick: move |_| queue.write().dismiss(id),
            p { class: "font-semibold text-sm", "{toast.title}" }
            if let Some(description) = &toast.description {
                p { class: "text-sm opacity-90 mt-1", "{description}" }
            }
        }
    }
}

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Toast::new("one"));
        let second = queue.push(Toast::destructive("two").with_description("boom"));
        assert_ne!(first, second);
        assert_eq!(queue.len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
        let remaining = &queue.entries()[0];
        assert_eq!(remaining.id, second);
        assert!(remaining.toast.is_destructive());
        assert_eq!(remaining.toast.description.as_deref(), Some("boom"));

        // ids are never reused
        let third = queue.push(Toast::new("three"));
        assert!(third > second);
    }

    #[test]
    fn test_builder() {
        let toast = Toast::new("Saved").with_duration(Duration::from_millis(3000));
        assert_eq!(toast.variant, None);
        assert_eq!(toast.duration, Some(Duration::from_millis(3000)));
        assert!(!toast.is_destructive());
    }
}
