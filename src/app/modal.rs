use leptos::{ev, html, prelude::*};
use leptos_use::{on_click_outside, use_document, use_event_listener};

use crate::modal::{CloseTrigger, ModalSize, ModalState, ScrollLock};

use super::providers::use_i18n;

/// Locks scrolling by hiding overflow on `<body>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScroll;

impl BodyScroll {
    fn set_overflow(value: &str) {
        let Some(body) = document().body() else {
            return;
        };
        if let Err(e) = body.style().set_property("overflow", value) {
            log::warn!("couldn't set body overflow: {e:?}");
        }
    }
}

impl ScrollLock for BodyScroll {
    fn lock(&mut self) {
        Self::set_overflow("hidden");
    }

    fn unlock(&mut self) {
        Self::set_overflow("");
    }
}

#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] size: ModalSize,
    children: ChildrenFn,
) -> impl IntoView {
    let i18n = use_i18n();
    let state = StoredValue::new(ModalState::new(BodyScroll));
    let dialog = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        let is_open = open.get();
        state.update_value(|m| {
            if is_open {
                m.open();
            } else {
                m.close(CloseTrigger::Explicit);
            }
        });
    });

    let close = move |trigger: CloseTrigger| {
        state.update_value(|m| {
            m.close(trigger);
        });
        open.set(false);
    };

    let _ = use_event_listener(use_document(), ev::keydown, move |e| {
        let mut closed = false;
        state.update_value(|m| closed = m.handle_key(&e.key()));
        if closed {
            open.set(false);
        }
    });
    let _ = on_click_outside(dialog, move |_| {
        if open.get_untracked() {
            close(CloseTrigger::OutsideClick);
        }
    });

    let title = StoredValue::new(title);
    let close_button = move |class: &'static str| {
        view! {
            <button
                class=class
                on:click=move |_| close(CloseTrigger::Explicit)
                aria-label=move || i18n.t("common.close", "Close")
            >
                "✕"
            </button>
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4 md:p-8">
                <div class="fixed inset-0 bg-background/60 backdrop-blur-sm"></div>
                <div
                    node_ref=dialog
                    role="dialog"
                    aria-modal="true"
                    class=format!(
                        "relative bg-card border border-border rounded-lg shadow-2xl {} w-full z-10 overflow-hidden",
                        size.max_width(),
                    )
                >
                    {match title.get_value() {
                        Some(title) => {
                            view! {
                                <div class="flex items-center justify-between p-4 border-b border-border">
                                    <h3 class="text-lg font-medium text-foreground">{title}</h3>
                                    {close_button(
                                        "p-1 rounded-full text-muted-foreground hover:text-foreground",
                                    )}
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            close_button(
                                    "absolute top-4 right-4 p-1 rounded-full bg-background/80 text-foreground z-20",
                                )
                                .into_any()
                        }
                    }}
                    <div class="p-0">{children()}</div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ImageModal(
    open: RwSignal<bool>,
    #[prop(into)] src: Signal<String>,
    #[prop(into)] alt: Signal<String>,
    #[prop(optional, into)] caption: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Modal open size=ModalSize::Lg>
            <div class="relative">
                <div class="relative w-full h-[80vh] overflow-hidden">
                    <img
                        src=move || src.get()
                        alt=move || alt.get()
                        class="w-full h-full object-contain"
                        loading="lazy"
                    />
                </div>
                {move || {
                    caption
                        .get()
                        .map(|caption| {
                            view! {
                                <div class="p-4 bg-background/90 backdrop-blur-sm">
                                    <p class="text-center text-foreground">{caption}</p>
                                </div>
                            }
                        })
                }}
            </div>
        </Modal>
    }
}
