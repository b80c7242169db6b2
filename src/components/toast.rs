use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// How long a toast stays on screen before auto-dismissal.
const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn accent_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "border-blue-500",
            ToastKind::Success => "border-green-500",
            ToastKind::Error => "border-red-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Allocate the next toast id from a monotonically increasing counter.
fn allocate_id(counter: &mut u64) -> u64 {
    let id = *counter;
    *counter += 1;
    id
}

/// Drop the toast with the given id, leaving the rest in place.
fn remove_toast(entries: &mut Vec<Toast>, id: u64) {
    entries.retain(|toast| toast.id != id);
}

/// Handle to the toast service. Obtained through [`use_toast`] anywhere
/// below a [`ToastProvider`]; enqueuing is a context call, not a global.
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) {
        let id = allocate_id(&mut self.next_id.write());
        self.entries.write().push(Toast {
            id,
            message: message.into(),
            kind,
        });

        // Auto-dismiss after the display window elapses
        let mut toasts = *self;
        spawn(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.dismiss(id);
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message, ToastKind::Info);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, ToastKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message, ToastKind::Error);
    }

    pub fn dismiss(&mut self, id: u64) {
        remove_toast(&mut self.entries.write(), id);
    }
}

pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

/// Wraps the application, provides the [`Toasts`] service through context
/// and renders the host region where transient notifications appear.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let entries = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);
    let toasts = use_context_provider(|| Toasts { entries, next_id });

    let visible: Vec<Toast> = entries.read().clone();

    rsx! {
        {children}

        // Toast host
        div {
            class: "fixed top-4 right-4 z-50 flex flex-col gap-2 items-end",
            for toast in visible {
                ToastItem {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    on_dismiss: move |id| {
                        let mut toasts = toasts;
                        toasts.dismiss(id);
                    }
                }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let accent = toast.kind.accent_class();
    let id = toast.id;

    rsx! {
        div {
            class: "bg-white border-l-4 {accent} rounded shadow-lg px-4 py-3 text-sm text-gray-800 cursor-pointer max-w-xs",
            onclick: move |_| on_dismiss.call(id),
            "{toast.message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64, message: &str) -> Toast {
        Toast {
            id,
            message: message.to_string(),
            kind: ToastKind::Info,
        }
    }

    #[test]
    fn test_kind_accent_classes_are_distinct() {
        assert_ne!(
            ToastKind::Info.accent_class(),
            ToastKind::Error.accent_class()
        );
        assert_ne!(
            ToastKind::Success.accent_class(),
            ToastKind::Error.accent_class()
        );
    }

    #[test]
    fn test_ids_allocate_sequentially() {
        let mut counter = 0u64;
        assert_eq!(allocate_id(&mut counter), 0);
        assert_eq!(allocate_id(&mut counter), 1);
        assert_eq!(allocate_id(&mut counter), 2);
        assert_eq!(counter, 3);
    }

    #[test]
    fn test_dismiss_removes_only_matching_toast() {
        let mut entries = vec![toast(0, "saved"), toast(1, "copied"), toast(2, "failed")];
        remove_toast(&mut entries, 1);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 0);
        assert_eq!(entries[1].id, 2);
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut entries = vec![toast(0, "saved")];
        remove_toast(&mut entries, 99);
        assert_eq!(entries, vec![toast(0, "saved")]);
    }
}
