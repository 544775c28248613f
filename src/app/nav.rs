use leptos::{either::Either, ev, prelude::*};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_window, UseEventListenerOptions,
};

use super::theme::ThemeToggle;
use crate::state::{ScrollTracker, Section, ViewState, NAV_SECTIONS};

fn section_top(section: &Section) -> Option<f64> {
    document()
        .get_element_by_id(section.id)
        .map(|el| el.get_bounding_client_rect().top())
}

fn window_width() -> Option<f64> {
    window().inner_width().ok().and_then(|w| w.as_f64())
}

#[component]
pub fn FloatingNav() -> impl IntoView {
    let tracker = RwSignal::new(ScrollTracker::new(&NAV_SECTIONS));

    let on_scroll = move || {
        let scroll_y = window().scroll_y().unwrap_or_default();
        tracker.maybe_update(|t| t.observe(scroll_y, section_top));
    };
    let on_resize = move || {
        if let Some(width) = window_width() {
            tracker.maybe_update(|t| t.resize(width));
        }
    };

    // initial read once mounted, then follow the window
    Effect::new(move |_| {
        on_resize();
        on_scroll();
    });
    let stop_scroll = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| on_scroll(),
        UseEventListenerOptions::default().passive(true),
    );
    let stop_resize = use_event_listener(use_window(), ev::resize, move |_| on_resize());
    on_cleanup(move || {
        stop_scroll();
        stop_resize();
    });

    let state = Memo::new(move |_| tracker.with(ScrollTracker::state));
    let visible = move || state.with(|s| s.past_threshold);

    view! {
        {move || {
            if state.with(|s| s.compact_layout) {
                Either::Left(
                    view! {
                        <div class=move || {
                            format!(
                                "fixed bottom-4 left-1/2 -translate-x-1/2 z-50 transition-opacity duration-300 {}",
                                if visible() { "opacity-100" } else { "opacity-0 pointer-events-none" },
                            )
                        }>
                            <nav class="bg-background/95 border border-border/40 rounded-full px-3 py-1.5 backdrop-blur flex items-center justify-center shadow-lg">
                                <NavLinks state compact=true />
                                <div class="ml-1">
                                    <ThemeToggle />
                                </div>
                            </nav>
                        </div>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <div class=move || {
                            format!(
                                "fixed right-6 bottom-24 z-50 rounded-full border border-border/40 bg-background/95 px-3 py-2 backdrop-blur transition-all duration-300 {}",
                                if visible() {
                                    "opacity-100 translate-y-0"
                                } else {
                                    "opacity-0 translate-y-24 pointer-events-none"
                                },
                            )
                        }>
                            <nav class="flex items-center gap-1">
                                <NavLinks state compact=false />
                                <div class="ml-1">
                                    <ThemeToggle />
                                </div>
                            </nav>
                        </div>
                    },
                )
            }
        }}
    }
}

#[component]
fn NavLinks(state: Memo<ViewState>, compact: bool) -> impl IntoView {
    NAV_SECTIONS
        .iter()
        .map(|section| {
            let id = section.id;
            let is_active = move || state.with(|s| s.active_section == id);
            let class = move || match (compact, is_active()) {
                (true, true) => "px-1.5 py-1 text-[10px] font-bold text-foreground",
                (true, false) => "px-1.5 py-1 text-[10px] font-medium text-muted-foreground",
                (false, true) => {
                    "relative px-3 py-1.5 text-sm font-bold text-foreground rounded-full bg-accent transition-colors"
                }
                (false, false) => {
                    "relative px-3 py-1.5 text-sm font-medium text-muted-foreground hover:text-foreground rounded-full transition-colors"
                }
            };
            view! {
                <a href=section.anchor() class=class>
                    {section.label}
                </a>
            }
        })
        .collect_view()
}
