use leptos::{html, prelude::*};

use super::{
    motion::{motion_style, use_scroll_progress},
    SectionHeading,
};
use crate::{
    content::{EXPERIENCE, PROFILE, SKILL_GROUPS},
    state::{MotionPreset, ScrollRange},
};

#[component]
pub fn AboutSection() -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let progress = use_scroll_progress(node, ScrollRange::EntryToExit);
    let photo_style = motion_style(progress, MotionPreset::parallax(20.0, -20.0));
    let text_style = motion_style(progress, MotionPreset::parallax(0.0, 20.0));

    let skill_count = SKILL_GROUPS.iter().map(|g| g.skills.len()).sum::<usize>();
    let stats = [
        (SKILL_GROUPS.len(), "Skill areas"),
        (skill_count, "Technologies"),
        (EXPERIENCE.len(), "Roles"),
    ];

    view! {
        <section id="about" node_ref=node class="relative py-20 md:py-28">
            <div class="container mx-auto max-w-6xl px-4">
                <SectionHeading eyebrow="About" title="Who I am" />
                <div class="grid items-center gap-12 md:grid-cols-2">
                    <div class="relative mx-auto w-64 md:w-80" style=photo_style>
                        <img
                            src=PROFILE.photo.clone()
                            alt=PROFILE.name.clone()
                            class="aspect-square w-full rounded-2xl border border-border object-cover"
                        />
                    </div>
                    <div style=text_style>
                        <h3 class="mb-4 text-2xl font-semibold">{PROFILE.role.clone()}</h3>
                        <p class="mb-6 leading-relaxed text-muted-foreground">
                            {PROFILE.tagline.clone()}
                        </p>
                        <div class="mb-8 grid grid-cols-3 gap-4">
                            {stats
                                .into_iter()
                                .map(|(n, label)| {
                                    view! {
                                        <div class="rounded-xl border border-border bg-card p-4 text-center">
                                            <div class="text-2xl font-bold text-primary">{n}</div>
                                            <div class="text-xs text-muted-foreground">{label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <a
                            href=PROFILE.resume.clone()
                            download=""
                            class="inline-block rounded-full bg-primary px-6 py-3 font-medium text-primary-foreground hover:opacity-90"
                        >
                            "Download Resume"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
