use leptos::prelude::*;

use crate::content::{Service, CONTENT};

use super::{
    navigator::{PageSection, RevealOnScroll},
    providers::use_i18n,
};

fn icon(name: &str) -> &'static str {
    match name {
        "database" => "🗄",
        "cloud" => "☁",
        "chart" => "📊",
        "cpu" => "🧠",
        "code" => "</>",
        "lightbulb" => "💡",
        _ => "•",
    }
}

#[component]
pub fn Services() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <PageSection id="services" class="py-20">
            <div class="container mx-auto px-4">
                <RevealOnScroll>
                    <h2 class="section-title text-center">
                        {move || i18n.t("services.title", "My Services")}
                    </h2>
                </RevealOnScroll>
                <p class="text-center text-muted-foreground mb-12 max-w-3xl mx-auto">
                    {move || i18n.t("services.subtitle", "")}
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {CONTENT
                        .services
                        .iter()
                        .zip((0u32..).step_by(100))
                        .map(|(service, delay_ms)| {
                            view! {
                                <RevealOnScroll delay_ms class="h-full">
                                    <ServiceCard service />
                                </RevealOnScroll>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageSection>
    }
}

#[component]
fn ServiceCard(service: &'static Service) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="bg-background rounded-xl p-6 shadow-sm border hover:shadow-md hover:-translate-y-1 transition-all duration-300 h-full">
            <div class="mb-4 text-4xl text-primary">{icon(&service.icon)}</div>
            <h3 class="text-xl font-semibold mb-3">{move || i18n.text(&service.title)}</h3>
            <p class="text-muted-foreground">{move || i18n.text(&service.description)}</p>
        </div>
    }
}
