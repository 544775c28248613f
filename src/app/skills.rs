use leptos::{html, prelude::*};

use super::{
    motion::{motion_style, use_scroll_progress},
    SectionHeading,
};
use crate::{
    content::{Skill, SKILL_GROUPS},
    state::{MotionPreset, ScrollRange},
};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let progress = use_scroll_progress(node, ScrollRange::EntryToExit);

    view! {
        <section id="skills" node_ref=node class="relative py-20 md:py-28">
            <div class="container mx-auto max-w-6xl px-4">
                <SectionHeading eyebrow="Skills" title="What I work with" />
                <div class="grid gap-8 md:grid-cols-3">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div
                                    class="rounded-2xl border border-border bg-card p-6"
                                    style=motion_style(progress, MotionPreset::fade_zoom())
                                >
                                    <h3 class="mb-6 text-lg font-semibold">{group.title.clone()}</h3>
                                    <div class="grid grid-cols-3 gap-4">
                                        {group.skills.iter().map(skill_badge).collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn skill_badge(skill: &Skill) -> impl IntoView {
    let icon = match &skill.color {
        Some(_) => format!("{} text-3xl", skill.icon),
        None => format!("{} colored text-3xl", skill.icon),
    };
    let style = skill
        .color
        .as_ref()
        .map(|c| format!("color: {c}"))
        .unwrap_or_default();
    view! {
        <div class="flex flex-col items-center gap-2 text-center">
            <i class=icon style=style></i>
            <span class="text-xs text-muted-foreground">{skill.name.clone()}</span>
        </div>
    }
}
