use leptos::{either::Either, html, prelude::*};

use super::{
    motion::{motion_style, use_scroll_progress},
    SectionHeading,
};
use crate::{
    config::SITE_CONFIG,
    projects::{fetch_projects, Project, ProjectsState},
    state::{Category, FilterSelector, LoadMore, MotionPreset, ScrollRange},
};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let progress = use_scroll_progress(node, ScrollRange::EntryToExit);

    let projects = LocalResource::new(move || fetch_projects(SITE_CONFIG.projects_url.clone()));
    let filter = RwSignal::new(FilterSelector::default());
    let paging = RwSignal::new(LoadMore::new(SITE_CONFIG.projects_page_size));

    view! {
        <section id="projects" node_ref=node class="relative py-20 md:py-28">
            <div class="container mx-auto max-w-6xl px-4">
                <SectionHeading eyebrow="Portfolio" title="Featured projects" />
                <div
                    class="mb-10 flex flex-wrap justify-center gap-2"
                    style=motion_style(progress, MotionPreset::fade())
                >
                    {Category::ALL
                        .into_iter()
                        .map(|category| {
                            let active = move || filter.with(|f| f.active() == category);
                            view! {
                                <button
                                    class=move || {
                                        if active() {
                                            "rounded-full bg-primary px-4 py-2 text-sm font-medium text-primary-foreground"
                                        } else {
                                            "rounded-full border border-border px-4 py-2 text-sm font-medium hover:bg-accent"
                                        }
                                    }
                                    on:click=move |_| {
                                        filter.update(|f| f.select(category));
                                        paging.update(LoadMore::reset);
                                    }
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <Transition fallback=move || {
                    view! {
                        <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                            {(0..3)
                                .map(|_| {
                                    view! {
                                        <div class="rounded-2xl border border-border bg-card p-4">
                                            <div class="loading-skeleton mb-4 h-48 rounded-xl"></div>
                                            <div class="loading-skeleton mb-2 h-6 w-3/4 rounded"></div>
                                            <div class="loading-skeleton h-4 w-2/3 rounded"></div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        match ProjectsState::from(projects.await) {
                            ProjectsState::Loaded(list) => {
                                Either::Left(view! { <ProjectGrid list filter paging /> })
                            }
                            ProjectsState::Failed(e) => {
                                Either::Right(
                                    view! {
                                        <p class="text-center text-red-500">
                                            {format!("Failed to load projects: {e}")}
                                        </p>
                                    },
                                )
                            }
                        }
                    })}
                </Transition>
            </div>
        </section>
    }
}

#[component]
fn ProjectGrid(
    list: Vec<Project>,
    filter: RwSignal<FilterSelector>,
    paging: RwSignal<LoadMore>,
) -> impl IntoView {
    let list = StoredValue::new(list);
    let visible = move || {
        list.with_value(|all| {
            let matching = filter.with(|f| f.visible(all));
            let total = matching.len();
            let shown = paging.with(|p| p.visible_len(total));
            let cards = matching[..shown]
                .iter()
                .map(|p| (*p).clone())
                .collect::<Vec<_>>();
            (cards, paging.with(|p| p.has_more(total)))
        })
    };

    view! {
        {move || {
            let (cards, has_more) = visible();
            if cards.is_empty() {
                view! {
                    <p class="text-center text-muted-foreground">
                        "No projects in this category yet."
                    </p>
                }
                    .into_any()
            } else {
                view! {
                    <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                        {cards
                            .into_iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()}
                    </div>
                    <Show when=move || has_more>
                        <div class="mt-10 flex justify-center">
                            <button
                                class="rounded-full border border-border px-6 py-3 font-medium hover:bg-accent"
                                on:click=move |_| paging.update(LoadMore::load_more)
                            >
                                "Load more"
                            </button>
                        </div>
                    </Show>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let image = project.image_or_placeholder().to_string();
    view! {
        <article class="group overflow-hidden rounded-2xl border border-border bg-card transition-shadow hover:shadow-lg">
            <div class="relative h-48 overflow-hidden">
                <img
                    src=image
                    alt=project.title.clone()
                    class="h-full w-full object-cover transition-transform duration-500 group-hover:scale-105"
                />
            </div>
            <div class="p-6">
                <h3 class="mb-2 text-xl font-semibold">{project.title}</h3>
                <p class="mb-4 text-sm text-muted-foreground">{project.description}</p>
                <div class="mb-6 flex flex-wrap gap-2">
                    {project
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="rounded-md bg-accent px-2 py-1 text-xs">{tag}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4 text-sm">
                    {project
                        .github_link
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noreferrer" class="hover:text-primary">
                                    "Code"
                                </a>
                            }
                        })}
                    {project
                        .live_link
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noreferrer" class="hover:text-primary">
                                    "Live Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
