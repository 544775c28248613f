use chrono::{Datelike, Utc};
use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::{
    content::PROFILE,
    state::{shows_back_to_top, NAV_SECTIONS},
};

fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
pub fn Footer() -> impl IntoView {
    // hidden until measured after hydration, matching the server markup
    let (show_top, set_show_top) = signal(false);
    let measure = move || {
        let visible = shows_back_to_top(window().scroll_y().unwrap_or_default());
        if show_top.get_untracked() != visible {
            set_show_top.set(visible);
        }
    };
    Effect::new(move |_| measure());
    let stop_scroll = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| measure(),
        UseEventListenerOptions::default().passive(true),
    );
    on_cleanup(stop_scroll);
    let year = Utc::now().year();

    view! {
        <footer class="border-t border-border py-12">
            <div class="container mx-auto max-w-6xl px-4">
                <div class="grid gap-8 md:grid-cols-3">
                    <div>
                        <h3 class="mb-2 text-lg font-semibold">{PROFILE.name.clone()}</h3>
                        <p class="text-sm text-muted-foreground">{PROFILE.tagline.clone()}</p>
                    </div>
                    <nav>
                        <h4 class="mb-2 font-semibold">"Quick links"</h4>
                        <ul class="space-y-1 text-sm">
                            {NAV_SECTIONS
                                .iter()
                                .map(|section| {
                                    view! {
                                        <li>
                                            <a
                                                href=section.anchor()
                                                class="text-muted-foreground hover:text-foreground"
                                            >
                                                {section.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>
                    <div>
                        <h4 class="mb-2 font-semibold">"Connect"</h4>
                        <div class="flex gap-4 text-xl">
                            <a href=PROFILE.github.clone() target="_blank" rel="noreferrer" aria-label="GitHub">
                                <i class="devicon-github-original"></i>
                            </a>
                            <a href=PROFILE.linkedin.clone() target="_blank" rel="noreferrer" aria-label="LinkedIn">
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                            <a href=PROFILE.mailto() aria-label="Email">
                                "✉"
                            </a>
                        </div>
                    </div>
                </div>
                <div class="mt-10 flex flex-col items-center justify-between gap-2 text-xs text-muted-foreground sm:flex-row">
                    <span>{format!("© {year} {}. All rights reserved.", PROFILE.name)}</span>
                    <span>{format!("Last built {}", env!("BUILD_TIME"))}</span>
                </div>
            </div>
            <button
                class=move || {
                    format!(
                        "fixed bottom-6 right-6 z-40 rounded-full bg-primary p-3 text-primary-foreground shadow-lg transition-opacity duration-300 {}",
                        if show_top.get() { "opacity-100" } else { "opacity-0 pointer-events-none" },
                    )
                }
                aria-label="Back to top"
                on:click=move |_| scroll_to_top()
            >
                "↑"
            </button>
        </footer>
    }
}
