//! Transient Toast Notifications
//!
//! Global toast stack via reactive_stores, provided through context.
//! Entries expire on their own after a fixed delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

pub const TOAST_TTL_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Global toast state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    /// Monotonic id source for toast entries
    pub next_id: u64,
}

pub type ToastStore = Store<ToastState>;

/// Create the toast store and provide it to all children.
pub fn provide_toasts() -> ToastStore {
    let store = Store::new(ToastState::default());
    provide_context(store);
    store
}

/// Get the toast store from context
pub fn use_toasts() -> ToastStore {
    expect_context::<ToastStore>()
}

pub fn push_success(store: &ToastStore, message: impl Into<String>) {
    push(store, ToastKind::Success, message.into());
}

pub fn push_error(store: &ToastStore, message: impl Into<String>) {
    push(store, ToastKind::Error, message.into());
}

fn push(store: &ToastStore, kind: ToastKind, message: String) {
    let id = {
        let next_id = store.next_id();
        let mut next = next_id.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast { id, kind, message });

    // the store lives at the app root, so expiry can write unconditionally
    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(TOAST_TTL_MS).await;
        store.toasts().write().retain(|toast| toast.id != id);
    });
}

/// Renders the toast stack. Mount once near the app root.
#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_toasts();

    view! {
        <div class="toast-stack">
            {move || {
                store
                    .toasts()
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast-success",
                            ToastKind::Error => "toast toast-error",
                        };
                        view! { <div class=class>{toast.message}</div> }
                    })
                    .collect_view()
            }}
        </div>
    }
}
