use std::time::Duration;

use leptos::prelude::*;

use crate::{
    config::SITE,
    contact::{relay_for, ContactForm, Field, FormStatus, Submission, SubmitError},
    toast::ToastOptions,
    upload::FileMeta,
};

use super::{
    navigator::{PageSection, RevealOnScroll},
    providers::{use_i18n, I18n},
    toast::use_toasts,
    uploader::FileUploader,
};

const ATTACHMENT_TYPES: &str = "image/*,.pdf,.doc,.docx,.txt";

/// One pending timeout; scheduling again cancels the previous one.
#[derive(Debug, Clone, Copy)]
struct TimerSlot(StoredValue<Option<TimeoutHandle>>);

impl TimerSlot {
    fn new() -> Self {
        Self(StoredValue::new(None))
    }

    fn schedule(&self, ms: u64, f: impl FnOnce() + 'static) {
        self.clear();
        match set_timeout_with_handle(f, Duration::from_millis(ms)) {
            Ok(handle) => self.0.set_value(Some(handle)),
            Err(e) => log::error!("couldn't schedule contact timer: {e:?}"),
        }
    }

    fn clear(&self) {
        let mut handle = None;
        self.0.update_value(|h| handle = h.take());
        if let Some(handle) = handle {
            handle.clear();
        }
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let i18n = use_i18n();
    let contact = &SITE.contact;

    view! {
        <PageSection id="contact" class="py-20 bg-muted/30">
            <div class="container mx-auto px-4">
                <RevealOnScroll>
                    <h2 class="section-title text-center">
                        {move || i18n.t("contact.title", "Get In Touch")}
                    </h2>
                </RevealOnScroll>
                <p class="text-center text-muted-foreground mb-12 max-w-3xl mx-auto">
                    {move || i18n.t("contact.subtitle", "")}
                </p>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-10">
                    <div class="space-y-4">
                        <InfoCard icon="✉" label_key="contact.email" label="Email">
                            <a href=format!("mailto:{}", contact.email) class="hover:text-primary">
                                {contact.email.as_str()}
                            </a>
                        </InfoCard>
                        <InfoCard icon="☎" label_key="contact.phone" label="Phone">
                            <a href=contact.phone_href() class="hover:text-primary">
                                {contact.phone.as_str()}
                            </a>
                        </InfoCard>
                        <InfoCard icon="⌖" label_key="contact.location" label="Location">
                            <span>{contact.location.as_str()}</span>
                        </InfoCard>
                        {(!contact.map_embed.is_empty())
                            .then(|| {
                                view! {
                                    <iframe
                                        src=contact.map_embed.as_str()
                                        class="w-full h-64 rounded-xl border"
                                        loading="lazy"
                                        referrerpolicy="no-referrer-when-downgrade"
                                        title=contact.location.as_str()
                                    ></iframe>
                                }
                            })}
                    </div>
                    <ContactFormPanel />
                </div>
            </div>
        </PageSection>
    }
}

#[component]
fn InfoCard(
    icon: &'static str,
    label_key: &'static str,
    label: &'static str,
    children: Children,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="flex items-center gap-4 rounded-xl border bg-background p-4">
            <div class="w-10 h-10 rounded-full bg-primary/10 text-primary flex items-center justify-center text-lg">
                {icon}
            </div>
            <div>
                <p class="text-sm text-muted-foreground">{move || i18n.t(label_key, label)}</p>
                {children()}
            </div>
        </div>
    }
}

fn field_view(field: Field, form: RwSignal<ContactForm>, i18n: I18n) -> impl IntoView {
    let (key, label) = field.label();
    let error = move || {
        form.with(|f| {
            f.visible_errors()
                .into_iter()
                .find(|e| e.field() == field)
                .map(|e| i18n.t(e.key(), &e.to_string()))
        })
    };
    let class = move || {
        if error().is_some() {
            "w-full px-3 py-2 rounded-md border border-red-500 bg-background"
        } else {
            "w-full px-3 py-2 rounded-md border bg-background"
        }
    };
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| {
            // shown through visible_errors
            let _ = f.set(field, value);
        });
    };

    let input = if field == Field::Message {
        view! {
            <textarea id=field.id() rows="5" class=class prop:value=value on:input=on_input></textarea>
        }
        .into_any()
    } else {
        let kind = if field == Field::Email { "email" } else { "text" };
        view! { <input id=field.id() type=kind class=class prop:value=value on:input=on_input /> }
            .into_any()
    };

    view! {
        <div class="space-y-1">
            <label for=field.id() class="text-sm font-medium">
                {move || i18n.t(key, label)}
            </label>
            {input}
            {move || error().map(|msg| view! { <p class="text-xs text-red-500">{msg}</p> })}
        </div>
    }
}

#[component]
fn ContactFormPanel() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(Submission::default());
    let submit_timer = TimerSlot::new();
    let reset_timer = TimerSlot::new();
    // bumped after a successful send so the uploader starts empty again
    let uploads = RwSignal::new(0u32);
    let ui = &SITE.ui;
    let (submit_delay, reset_delay) = (ui.submit_delay_ms, ui.status_reset_ms);
    on_cleanup(move || {
        submit_timer.clear();
        reset_timer.clear();
    });

    let on_attachments = Callback::new(move |files: Vec<FileMeta>| {
        form.update(|f| f.attachments = files);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let message = match form.write().validate() {
            Ok(message) => message,
            Err(errors) => {
                log::debug!("{}", SubmitError::Invalid(errors.len()));
                return;
            }
        };
        let generation = match status.write().begin() {
            Ok(generation) => generation,
            Err(e) => {
                log::debug!("{e}");
                return;
            }
        };
        reset_timer.clear();

        submit_timer.schedule(submit_delay, move || {
            let relay = relay_for(SITE.contact.relay);
            let result = relay.deliver(&message);
            match &result {
                Ok(()) => {
                    log::info!("contact message delivered via {} relay", relay.name());
                    toasts.push(
                        ToastOptions::success(i18n.t(
                            "contact.form.successMessage",
                            "Your message has been sent successfully!",
                        ))
                        .with_title(i18n.t("contact.form.successTitle", "Message sent")),
                    );
                    form.update(ContactForm::reset);
                    uploads.update(|n| *n += 1);
                }
                Err(e) => {
                    log::error!("contact message not delivered via {} relay: {e}", relay.name());
                    toasts.push(
                        ToastOptions::error(i18n.t(e.key(), &e.to_string()))
                            .with_title(i18n.t("contact.form.errorTitle", "Message not sent")),
                    );
                }
            }
            status.update(|s| {
                s.finish(generation, result);
            });
            reset_timer.schedule(reset_delay, move || {
                status.update(|s| {
                    s.expire(generation);
                });
            });
        });
    };

    let submitting = move || status.with(Submission::is_submitting);

    view! {
        <form class="rounded-xl border bg-background p-6 space-y-4" on:submit=on_submit novalidate>
            {move || {
                status
                    .with(|s| match s.status() {
                        FormStatus::Error(e) => Some(e.clone()),
                        _ => None,
                    })
                    .map(|e| {
                        view! {
                            <div class="flex justify-between items-start gap-3 p-3 rounded-md bg-red-500/10 text-red-500 text-sm">
                                <span>{i18n.t(e.key(), &e.to_string())}</span>
                                <button
                                    type="button"
                                    aria-label=move || i18n.t("common.dismiss", "Dismiss")
                                    on:click=move |_| {
                                        reset_timer.clear();
                                        status.update(Submission::dismiss);
                                    }
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
            }}
            <Show when=move || status.with(|s| *s.status() == FormStatus::Success)>
                <div class="p-3 rounded-md bg-green-500/10 text-green-600 text-sm">
                    {move || i18n.t("contact.form.successMessage", "Your message has been sent successfully!")}
                </div>
            </Show>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                {field_view(Field::FirstName, form, i18n)}
                {field_view(Field::LastName, form, i18n)}
            </div>
            {field_view(Field::Email, form, i18n)}
            {field_view(Field::Message, form, i18n)}
            <div class="space-y-1">
                <p class="text-sm font-medium">{move || i18n.t("contact.attachments", "Attachments")}</p>
                {move || {
                    uploads.track();
                    view! { <FileUploader accept=ATTACHMENT_TYPES multiple=true on_change=on_attachments /> }
                }}
            </div>
            <button
                type="submit"
                class="w-full px-5 py-2.5 rounded-md bg-primary text-primary-foreground font-medium disabled:opacity-60"
                disabled=submitting
            >
                {move || {
                    if submitting() {
                        i18n.t("contact.form.sending", "Sending...")
                    } else {
                        i18n.t("contact.form.send", "Send Message")
                    }
                }}
            </button>
        </form>
    }
}
