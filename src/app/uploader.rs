use std::time::Duration;

use leptos::{ev, html, prelude::*};
use web_sys::{File, FileList, Url};

use crate::{
    config::SITE,
    upload::{human_size, FileMeta, UploadError, UploadPolicy, UploadSet},
};

use super::providers::use_i18n;

const ERROR_DISPLAY_MS: u64 = 3000;

fn file_meta(file: &File) -> FileMeta {
    let meta = FileMeta::new(file.name(), file.size() as u64, file.type_());
    if !meta.is_image() {
        return meta;
    }
    match Url::create_object_url_with_blob(file) {
        Ok(url) => meta.with_preview(url),
        Err(e) => {
            log::warn!("no preview for {}: {e:?}", meta.name);
            meta
        }
    }
}

fn collect_files(list: Option<FileList>) -> Vec<FileMeta> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| file_meta(&file))
        .collect()
}

fn revoke_previews(urls: impl IntoIterator<Item = String>) {
    for url in urls {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("couldn't revoke {url}: {e:?}");
        }
    }
}

#[component]
pub fn FileUploader(
    #[prop(optional, into)] accept: Option<String>,
    #[prop(optional)] multiple: bool,
    #[prop(into)] on_change: Callback<Vec<FileMeta>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let policy = UploadPolicy::from_ui(&SITE.ui, accept.as_deref().unwrap_or("*"), multiple);
    let accept_attr = policy.accept.clone();
    let max_files = policy.max_files;
    let max_size = policy.max_size_mb;

    let set = RwSignal::new(UploadSet::new(policy));
    let errors = RwSignal::new(Vec::<UploadError>::new());
    let dragging = RwSignal::new(false);
    let error_timer = StoredValue::new(None::<TimeoutHandle>);
    let input = NodeRef::<html::Input>::new();

    let clear_error_timer = move || {
        let mut handle = None;
        error_timer.update_value(|h| handle = h.take());
        if let Some(handle) = handle {
            handle.clear();
        }
    };
    on_cleanup(move || {
        clear_error_timer();
        if let Some(urls) = set.try_with_untracked(UploadSet::previews) {
            revoke_previews(urls);
        }
    });

    let notify = move || on_change.run(set.with(|s| s.files().to_vec()));

    let add = move |batch: Vec<FileMeta>| {
        if batch.is_empty() {
            return;
        }
        let mut known = set.with_untracked(UploadSet::previews);
        known.extend(batch.iter().filter_map(|f| f.preview.clone()));
        let rejected = set.write().add(batch);
        revoke_previews(set.with_untracked(|s| s.released_previews(known)));
        for err in &rejected {
            log::warn!("upload rejected: {err}");
        }
        notify();

        clear_error_timer();
        if !rejected.is_empty() {
            errors.set(rejected);
            match set_timeout_with_handle(
                move || errors.set(Vec::new()),
                Duration::from_millis(ERROR_DISPLAY_MS),
            ) {
                Ok(handle) => error_timer.set_value(Some(handle)),
                Err(e) => log::error!("couldn't schedule error reset: {e:?}"),
            }
        }
    };

    let on_pick = move |_: ev::Event| {
        let Some(el) = input.get_untracked() else {
            return;
        };
        add(collect_files(el.files()));
        // lets the same file be picked again after removal
        el.set_value("");
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        add(collect_files(ev.data_transfer().and_then(|dt| dt.files())));
    };

    let browse = move || {
        if let Some(el) = input.get_untracked() {
            el.click();
        }
    };

    view! {
        <div class="space-y-3">
            <input
                type="file"
                class="hidden"
                node_ref=input
                accept=accept_attr
                multiple=multiple
                on:change=on_pick
            />
            <div
                class=move || {
                    if dragging.get() {
                        "border-2 border-dashed border-primary bg-primary/5 rounded-lg p-6 text-center cursor-pointer"
                    } else {
                        "border-2 border-dashed rounded-lg p-6 text-center cursor-pointer hover:border-primary"
                    }
                }
                on:click=move |_| browse()
                on:dragover=move |ev: ev::DragEvent| {
                    ev.prevent_default();
                    dragging.set(true);
                }
                on:dragleave=move |_| dragging.set(false)
                on:drop=on_drop
            >
                <p class="text-sm">
                    {move || i18n.t("fileUploader.dragDrop", "Drag and drop files here or click to browse")}
                </p>
                <p class="text-xs text-muted-foreground mt-1">
                    {move || {
                        format!(
                            "{}: {max_size}MB · {}: {}",
                            i18n.t("fileUploader.maxSize", "Maximum file size"),
                            i18n.t("fileUploader.maxFiles", "Maximum files"),
                            if multiple { max_files } else { 1 },
                        )
                    }}
                </p>
            </div>
            <Show when=move || errors.with(|e| !e.is_empty())>
                <ul class="text-sm text-red-500 space-y-1">
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|err| {
                                let text = i18n.t(err.key(), &err.to_string());
                                let line = match err.file_name() {
                                    Some(name) => format!("{name}: {text}"),
                                    None => text,
                                };
                                view! { <li>{line}</li> }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
            <Show when=move || set.with(|s| !s.is_empty())>
                <div class="rounded-lg border p-3">
                    <div class="flex justify-between items-center mb-2">
                        <span class="text-sm font-semibold">
                            {move || i18n.t("fileUploader.selectedFiles", "Selected Files")}
                        </span>
                        <div class="flex gap-3 text-xs">
                            <Show when=move || multiple>
                                <button type="button" class="text-primary hover:underline" on:click=move |_| browse()>
                                    {move || i18n.t("fileUploader.addMore", "Add More")}
                                </button>
                            </Show>
                            <button
                                type="button"
                                class="text-red-500 hover:underline"
                                on:click=move |_| {
                                    revoke_previews(set.write().clear());
                                    notify();
                                }
                            >
                                {move || i18n.t("fileUploader.clearAll", "Clear All")}
                            </button>
                        </div>
                    </div>
                    <ul class="space-y-1">
                        {move || {
                            set.with(|s| s.files().to_vec())
                                .into_iter()
                                .enumerate()
                                .map(|(index, file)| {
                                    view! {
                                        <li class="flex justify-between items-center text-sm">
                                            <span class="flex items-center gap-2 truncate">
                                                {match file.preview {
                                                    Some(url) => {
                                                        view! {
                                                            <img src=url alt="" class="w-8 h-8 rounded object-cover" />
                                                        }
                                                            .into_any()
                                                    }
                                                    None => {
                                                        let icon = if file.is_image() { "🖼" } else { "📄" };
                                                        view! { <span>{icon}</span> }.into_any()
                                                    }
                                                }}
                                                {file.name}
                                            </span>
                                            <span class="flex items-center gap-2 text-xs text-muted-foreground">
                                                {human_size(file.size)}
                                                <button
                                                    type="button"
                                                    class="hover:text-red-500"
                                                    aria-label=move || i18n.t("fileUploader.remove", "Remove file")
                                                    on:click=move |_| {
                                                        let removed = set.write().remove(index);
                                                        revoke_previews(removed.and_then(|f| f.preview));
                                                        notify();
                                                    }
                                                >
                                                    "✕"
                                                </button>
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
