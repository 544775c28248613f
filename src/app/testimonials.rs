use leptos::{html, prelude::*};
use leptos_use::{use_interval_fn, use_window_size, utils::Pausable};

use super::{
    motion::{motion_style, use_scroll_progress},
    SectionHeading,
};
use crate::{
    content::{Testimonial, TESTIMONIALS},
    state::{is_compact, Carousel, MotionPreset, ScrollRange, AUTOPLAY_INTERVAL_MS},
};

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let progress = use_scroll_progress(node, ScrollRange::EntryToExit);

    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));
    // the interval is dropped with the section, and a late tick on a disposed
    // signal is a no-op
    let Pausable { pause, .. } = use_interval_fn(
        move || {
            let _ = carousel.try_update(Carousel::tick);
        },
        AUTOPLAY_INTERVAL_MS,
    );
    let stop_timer = Callback::new(move |()| pause());
    let take_over = move |step: &dyn Fn(&mut Carousel)| {
        stop_timer.run(());
        carousel.update(|c| step(c));
    };

    // false on the server and on the first browser render; only the dots
    // depend on it, the card list is the same either way
    let (two_up, set_two_up) = signal(false);
    let width = use_window_size().width;
    Effect::new(move |_| set_two_up.set(!is_compact(width.get())));

    view! {
        <section id="testimonials" node_ref=node class="relative py-20 md:py-28">
            <div
                class="container mx-auto max-w-6xl px-4"
                style=motion_style(progress, MotionPreset::fade_zoom())
            >
                <SectionHeading eyebrow="Testimonials" title="What people say" />
                <Show
                    when=move || !TESTIMONIALS.is_empty()
                    fallback=|| {
                        view! { <p class="text-center text-muted-foreground">"No testimonials yet."</p> }
                    }
                >
                    <div class="grid gap-6 md:grid-cols-2">
                        {move || {
                            carousel
                                .with(Carousel::slots)
                                .into_iter()
                                .enumerate()
                                .map(|(slot, i)| {
                                    let class = if slot == 0 { "block" } else { "hidden md:block" };
                                    view! {
                                        <div class=class>
                                            <TestimonialCard testimonial=&TESTIMONIALS[i] />
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <div class="mt-8 flex items-center justify-center gap-4">
                        <button
                            class="rounded-full border border-border px-3 py-1 hover:bg-accent"
                            aria-label="Previous testimonial"
                            on:click=move |_| take_over(&Carousel::prev)
                        >
                            "‹"
                        </button>
                        {(0..TESTIMONIALS.len())
                            .map(|i| {
                                let active = move || {
                                    let two_up = two_up.get();
                                    carousel.with(|c| c.is_highlighted(i, two_up))
                                };
                                view! {
                                    <button
                                        class=move || {
                                            if active() {
                                                "h-2 w-6 rounded-full bg-primary transition-all"
                                            } else {
                                                "h-2 w-2 rounded-full bg-muted transition-all"
                                            }
                                        }
                                        aria-label=format!("Show testimonial {}", i + 1)
                                        on:click=move |_| take_over(&|c: &mut Carousel| c.go_to(i))
                                    ></button>
                                }
                            })
                            .collect_view()}
                        <button
                            class="rounded-full border border-border px-3 py-1 hover:bg-accent"
                            aria-label="Next testimonial"
                            on:click=move |_| take_over(&Carousel::next)
                        >
                            "›"
                        </button>
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    let stars = (0..5u8)
        .map(|i| if i < testimonial.rating { '★' } else { '☆' })
        .collect::<String>();
    view! {
        <figure class="rounded-2xl border border-border bg-card p-6">
            <div class="mb-4 text-yellow-500" aria-label=format!("{} out of 5", testimonial.rating)>
                {stars}
            </div>
            <blockquote class="mb-6 italic text-muted-foreground">
                {format!("\u{201c}{}\u{201d}", testimonial.quote)}
            </blockquote>
            <figcaption class="flex items-center gap-3">
                <img
                    src=testimonial.image.clone()
                    alt=testimonial.name.clone()
                    class="h-12 w-12 rounded-full object-cover"
                />
                <div>
                    <div class="font-semibold">{testimonial.name.clone()}</div>
                    <div class="text-sm text-muted-foreground">{testimonial.role.clone()}</div>
                </div>
            </figcaption>
        </figure>
    }
}
