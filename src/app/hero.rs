use leptos::{html, prelude::*};
use leptos_use::{use_interval_fn, utils::Pausable};

use super::motion::{motion_style, use_scroll_progress};
use crate::{
    content::PROFILE,
    state::{MotionPreset, ScrollRange, Typewriter, TYPE_INTERVAL_MS},
};

#[component]
pub fn HeroSection() -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let progress = use_scroll_progress(node, ScrollRange::PinnedToExit);
    let style = motion_style(progress, MotionPreset::hero());

    let role = format!("{}.", PROFILE.role.trim_end_matches('.'));
    let typed = RwSignal::new(Typewriter::new(role.clone()));
    let Pausable { pause, .. } = use_interval_fn(
        move || {
            let _ = typed.try_update(Typewriter::tick);
        },
        TYPE_INTERVAL_MS,
    );
    Effect::new(move |_| {
        if typed.with(Typewriter::is_done) {
            pause();
        }
    });

    view! {
        <section
            id="home"
            node_ref=node
            class="relative flex min-h-screen items-center justify-center overflow-hidden px-4"
        >
            <div class="container mx-auto max-w-4xl text-center" style=style>
                <p class="mb-4 text-primary">"Hello, I'm"</p>
                <h1 class="mb-4 text-4xl font-bold tracking-tight sm:text-5xl md:text-6xl">
                    {PROFILE.name.clone()}
                </h1>
                <h2 class="mb-6 text-xl text-muted-foreground sm:text-2xl" aria-label=role>
                    <span aria-hidden="true">
                        {move || typed.with(|t| t.visible().to_string())}
                    </span>
                    <span class="ml-0.5 inline-block w-[2px] animate-pulse bg-primary" aria-hidden="true">
                        "\u{200b}"
                    </span>
                </h2>
                <p class="mx-auto mb-10 max-w-2xl text-muted-foreground">
                    {PROFILE.tagline.clone()}
                </p>
                <div class="flex flex-wrap items-center justify-center gap-4">
                    <a
                        href="#contact"
                        class="rounded-full bg-primary px-6 py-3 font-medium text-primary-foreground hover:opacity-90"
                    >
                        "Get in touch"
                    </a>
                    <a
                        href="#projects"
                        class="rounded-full border border-border px-6 py-3 font-medium hover:bg-accent"
                    >
                        "View my work"
                    </a>
                </div>
                <div class="mt-10 flex items-center justify-center gap-6 text-2xl">
                    <a
                        href=PROFILE.github.clone()
                        target="_blank"
                        rel="noreferrer"
                        aria-label="GitHub"
                        class="text-muted-foreground hover:text-foreground"
                    >
                        <i class="devicon-github-original"></i>
                    </a>
                    <a
                        href=PROFILE.linkedin.clone()
                        target="_blank"
                        rel="noreferrer"
                        aria-label="LinkedIn"
                        class="text-muted-foreground hover:text-foreground"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a
                        href=PROFILE.mailto()
                        aria-label="Email"
                        class="text-muted-foreground hover:text-foreground"
                    >
                        "✉"
                    </a>
                </div>
            </div>
        </section>
    }
}
