use leptos::prelude::*;

use crate::{
    content::{Project, Screenshot, CONTENT},
    filter::{project_categories, project_technologies, ProjectFilter, SortDirection, SortField},
};

use super::{
    modal::ImageModal,
    navigator::{PageSection, RevealOnScroll},
    providers::use_i18n,
};

fn chip_class(selected: bool) -> &'static str {
    if selected {
        "px-3 py-1 rounded-full text-xs border border-primary bg-primary text-primary-foreground"
    } else {
        "px-3 py-1 rounded-full text-xs border hover:border-primary"
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let i18n = use_i18n();
    let filter = RwSignal::new(ProjectFilter::default());
    let categories = project_categories(&CONTENT.projects);
    let technologies = project_technologies(&CONTENT.projects);
    let visible = Memo::new(move |_| filter.with(|f| f.apply(&CONTENT.projects)));

    let modal_open = RwSignal::new(false);
    let shot = RwSignal::new(None::<&'static Screenshot>);
    let open_shot = Callback::new(move |s: &'static Screenshot| {
        shot.set(Some(s));
        modal_open.set(true);
    });

    let sort_button = move |field: SortField, key: &'static str, fallback: &'static str| {
        view! {
            <button
                class=move || chip_class(filter.with(|f| f.sort.field == field))
                on:click=move |_| filter.update(|f| f.sort.toggle(field))
            >
                {move || i18n.t(key, fallback)}
                {move || {
                    filter
                        .with(|f| {
                            match (f.sort.field == field, f.sort.direction) {
                                (false, _) => "",
                                (true, SortDirection::Ascending) => " ↑",
                                (true, SortDirection::Descending) => " ↓",
                            }
                        })
                }}
            </button>
        }
    };

    view! {
        <PageSection id="projects" class="py-20 bg-muted/30">
            <div class="container mx-auto px-4">
                <RevealOnScroll>
                    <h2 class="section-title text-center">
                        {move || i18n.t("projects.title", "Projects")}
                    </h2>
                </RevealOnScroll>
                <p class="text-center text-muted-foreground mb-10 max-w-3xl mx-auto">
                    {move || i18n.t("projects.subtitle", "")}
                </p>

                <div class="mb-8 space-y-4 rounded-xl border bg-background p-4">
                    <div class="flex flex-wrap items-center justify-between gap-3">
                        <span class="font-semibold">
                            {move || i18n.t("common.filter", "Filter")}
                            {move || {
                                let n = filter.with(ProjectFilter::active_count);
                                (n > 0).then(|| format!(" ({n})"))
                            }}
                        </span>
                        <div class="flex gap-2">
                            {sort_button(SortField::Title, "projects.sort.name", "Name")}
                            {sort_button(SortField::Category, "projects.sort.category", "Category")}
                        </div>
                    </div>
                    <div>
                        <p class="text-sm text-muted-foreground mb-2">
                            {move || i18n.t("projects.categories", "Categories")}
                        </p>
                        <div class="flex flex-wrap gap-2">
                            {categories
                                .into_iter()
                                .map(|category| {
                                    let label = category.clone();
                                    let selected = category.clone();
                                    view! {
                                        <button
                                            class=move || chip_class(
                                                filter.with(|f| f.categories.contains(&selected)),
                                            )
                                            on:click=move |_| filter.update(|f| f.toggle_category(&category))
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <p class="text-sm text-muted-foreground mb-2">
                            {move || i18n.t("projects.technologies", "Technologies")}
                        </p>
                        <div class="flex flex-wrap gap-2">
                            {technologies
                                .into_iter()
                                .map(|tech| {
                                    let label = tech.clone();
                                    let selected = tech.clone();
                                    view! {
                                        <button
                                            class=move || chip_class(
                                                filter.with(|f| f.technologies.contains(&selected)),
                                            )
                                            on:click=move |_| filter.update(|f| f.toggle_technology(&tech))
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <Show when=move || filter.with(|f| f.active_count() > 0)>
                        <button
                            class="text-sm text-primary hover:underline"
                            on:click=move |_| filter.update(ProjectFilter::clear)
                        >
                            {move || i18n.t("common.clearAll", "Clear all")}
                        </button>
                    </Show>
                </div>

                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=move || {
                        view! {
                            <p class="text-center text-muted-foreground py-10">
                                {move || i18n.t("projects.noMatch", "No projects match your current filters.")}
                            </p>
                        }
                    }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || visible.get()
                            key=|project| project.id
                            children=move |project| view! { <ProjectCard project open_shot /> }
                        />
                    </div>
                </Show>
            </div>
            <ImageModal
                open=modal_open
                src=Signal::derive(move || shot.get().map(|s| s.src.clone()).unwrap_or_default())
                alt=Signal::derive(move || shot.get().map(|s| s.alt.clone()).unwrap_or_default())
                caption=Signal::derive(move || shot.get().and_then(|s| s.caption.clone()))
            />
        </PageSection>
    }
}

#[component]
fn ProjectCard(project: &'static Project, open_shot: Callback<&'static Screenshot>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="rounded-xl border bg-background overflow-hidden shadow-sm hover:shadow-md transition-shadow flex flex-col">
            <img
                src=project.image.as_str()
                alt=project.title.as_str()
                class="w-full h-48 object-cover"
                loading="lazy"
            />
            <div class="p-5 flex flex-col flex-1 gap-3">
                <span class="text-xs uppercase tracking-wide text-primary">{project.category.as_str()}</span>
                <h3 class="text-lg font-semibold">{project.title.as_str()}</h3>
                <p class="text-sm text-muted-foreground flex-1">{project.description.as_str()}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|t| view! { <span class="px-2 py-0.5 rounded bg-muted text-xs">{t.as_str()}</span> })
                        .collect_view()}
                </div>
                {(!project.screenshots.is_empty())
                    .then(|| {
                        view! {
                            <div>
                                <p class="text-xs text-muted-foreground mb-1">
                                    {move || i18n.t("projects.screenshots", "Screenshots")}
                                </p>
                                <div class="flex gap-2 overflow-x-auto">
                                    {project
                                        .screenshots
                                        .iter()
                                        .map(|shot| {
                                            view! {
                                                <button
                                                    class="shrink-0 rounded border hover:border-primary overflow-hidden"
                                                    on:click=move |_| open_shot.run(shot)
                                                >
                                                    <img
                                                        src=shot.src.as_str()
                                                        alt=shot.alt.as_str()
                                                        class="w-20 h-14 object-cover"
                                                        loading="lazy"
                                                    />
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })}
                <div class="flex gap-3 pt-2">
                    {project
                        .github
                        .as_deref()
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-3 py-1.5 rounded-md border text-sm hover:bg-muted"
                                >
                                    {move || i18n.t("projects.code", "Code")}
                                </a>
                            }
                        })}
                    {project
                        .demo
                        .as_deref()
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-3 py-1.5 rounded-md bg-primary text-primary-foreground text-sm"
                                >
                                    {move || i18n.t("projects.demo", "Live Demo")}
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
