use chrono::Utc;
use leptos::{html, prelude::*};

use super::{
    motion::{motion_style, use_scroll_progress},
    SectionHeading,
};
use crate::{
    content::{Experience, EXPERIENCE},
    state::{MotionPreset, ScrollRange, Tenure},
};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let progress = use_scroll_progress(node, ScrollRange::EntryToExit);

    view! {
        <section id="experience" node_ref=node class="relative py-20 md:py-28">
            <div class="container mx-auto max-w-4xl px-4">
                <SectionHeading eyebrow="Experience" title="Where I've worked" />
                <div class="space-y-8" style=motion_style(progress, MotionPreset::fade_rise())>
                    {EXPERIENCE
                        .iter()
                        .map(|experience| view! { <ExperienceCard experience /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(experience: &'static Experience) -> impl IntoView {
    // computed in the browser so the server's clock never leaks into the markup
    let (tenure, set_tenure) = signal(None::<Tenure>);
    Effect::new(move |_| {
        let today = experience.end.unwrap_or_else(|| Utc::now().date_naive());
        set_tenure.set(Some(Tenure::between(experience.start, today)));
    });

    view! {
        <article class="rounded-2xl border border-border bg-card p-6 md:p-8">
            <div class="mb-6 flex flex-col gap-4 sm:flex-row sm:items-center">
                <img
                    src=experience.logo.clone()
                    alt=experience.company.clone()
                    class="h-14 w-14 rounded-xl object-cover"
                />
                <div class="flex-1">
                    <h3 class="text-xl font-semibold">{experience.title.clone()}</h3>
                    <p class="text-primary">{experience.company.clone()}</p>
                </div>
                <div class="text-sm text-muted-foreground sm:text-right">
                    <div>{experience.period()}</div>
                    <div>{move || tenure.get().map(|t| t.to_string())}</div>
                    <div>
                        {format!("{} · {}", experience.location, experience.arrangement)}
                    </div>
                </div>
            </div>
            <p class="mb-6 leading-relaxed text-muted-foreground">
                {experience.overview.clone()}
            </p>
            <h4 class="mb-3 font-semibold">"Responsibilities"</h4>
            <ul class="mb-6 list-inside list-disc space-y-1 text-sm text-muted-foreground">
                {experience
                    .responsibilities
                    .iter()
                    .map(|r| view! { <li>{r.clone()}</li> })
                    .collect_view()}
            </ul>
            <div class="flex flex-wrap gap-2">
                {experience
                    .technologies
                    .iter()
                    .map(|t| {
                        view! { <span class="rounded-md bg-accent px-2 py-1 text-xs">{t.clone()}</span> }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}
