use std::{collections::HashMap, time::Duration};

use chrono::Utc;
use leptos::prelude::*;

use crate::toast::{Toast, ToastId, ToastLevel, ToastOptions, ToastQueue};

use super::providers::use_i18n;

#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
    timers: StoredValue<HashMap<ToastId, TimeoutHandle>>,
    default_ms: u64,
}

impl Toasts {
    pub fn push(&self, options: ToastOptions) -> ToastId {
        let (id, delay) = self.queue.write().push(options, Utc::now(), self.default_ms);
        if let Some(ms) = delay {
            let this = *self;
            match set_timeout_with_handle(move || this.on_timer(id), Duration::from_millis(ms)) {
                Ok(handle) => self.timers.update_value(|t| {
                    t.insert(id, handle);
                }),
                Err(e) => log::error!("couldn't schedule toast dismissal: {e:?}"),
            }
        }
        id
    }

    pub fn dismiss(&self, id: ToastId) {
        let mut handle = None;
        self.timers.update_value(|t| handle = t.remove(&id));
        if let Some(handle) = handle {
            handle.clear();
        }
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    /// Also sweeps anything else already past its deadline.
    fn on_timer(&self, id: ToastId) {
        let mut expired = Vec::new();
        self.queue.update(|q| {
            expired = q.expire(Utc::now());
            if !expired.contains(&id) {
                q.dismiss(id);
            }
        });
        self.timers.update_value(|t| {
            t.remove(&id);
            for other in &expired {
                if let Some(handle) = t.remove(other) {
                    handle.clear();
                }
            }
        });
    }

    fn clear_timers(&self) {
        self.timers.update_value(|t| {
            for (_, handle) in t.drain() {
                handle.clear();
            }
        });
    }
}

pub fn provide_toasts(default_ms: u64) -> Toasts {
    let toasts = Toasts {
        queue: RwSignal::new(ToastQueue::default()),
        timers: StoredValue::new(HashMap::new()),
        default_ms,
    };
    on_cleanup(move || toasts.clear_timers());
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed bottom-0 right-0 z-50 w-full p-4 md:max-w-sm md:bottom-4 md:right-4 flex flex-col-reverse gap-2 pointer-events-none">
            <For
                each=move || toasts.queue.get().visible().to_vec()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = use_toasts();
    let i18n = use_i18n();
    let id = toast.id;
    let level = toast.level;

    let color = match level {
        ToastLevel::Success => "bg-green-50 dark:bg-green-900/20 border-green-500/30 text-green-500",
        ToastLevel::Error => "bg-red-50 dark:bg-red-900/20 border-red-500/30 text-red-500",
        ToastLevel::Warning => "bg-amber-50 dark:bg-amber-900/20 border-amber-500/30 text-amber-500",
        ToastLevel::Info => "bg-blue-50 dark:bg-blue-900/20 border-blue-500/30 text-blue-500",
    };
    let Toast {
        title,
        message,
        duration_ms,
        ..
    } = toast;
    let has_title = title.is_some();

    view! {
        <div
            class=format!(
                "pointer-events-auto relative w-full max-w-sm rounded-lg border p-4 shadow-lg backdrop-blur-sm {color}",
            )
            role="status"
            data-level=level.as_str()
        >
            <div class="flex items-start gap-3">
                <span class="shrink-0 mt-0.5">{level.icon()}</span>
                <div class="flex-1 min-w-0 text-foreground">
                    {title
                        .map(|title| {
                            view! { <h4 class="font-medium leading-none tracking-tight">{title}</h4> }
                        })}
                    <p class=if has_title {
                        "mt-1 text-sm text-muted-foreground"
                    } else {
                        "text-sm text-muted-foreground"
                    }>{message}</p>
                </div>
                <button
                    class="ml-auto -mr-1 h-6 w-6 rounded-full hover:bg-muted flex items-center justify-center"
                    on:click=move |_| toasts.dismiss(id)
                    aria-label=move || i18n.t("common.dismiss", "Dismiss")
                >
                    "✕"
                </button>
            </div>
            {(duration_ms > 0)
                .then(|| {
                    view! {
                        <div
                            class="absolute bottom-0 left-0 h-1 bg-foreground/10 toast-progress"
                            style=format!("animation-duration: {duration_ms}ms")
                        ></div>
                    }
                })}
        </div>
    }
}
