mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod motion;
mod nav;
mod projects;
mod skills;
mod testimonials;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;

use about::AboutSection;
use contact::ContactSection;
use experience::ExperienceSection;
use footer::Footer;
use hero::HeroSection;
use nav::FloatingNav;
use projects::ProjectsSection;
use skills::SkillsSection;
use testimonials::TestimonialsSection;
use theme::{provide_theme, ThemeContext};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();
    let theme = expect_context::<ThemeContext>();

    let title = format!("{} | {}", PROFILE.name, PROFILE.role);

    view! {
        <Title text=title />
        <Meta name="description" content=PROFILE.tagline.clone() />
        <Meta name="author" content=PROFILE.name.clone() />

        <Router>
            // `dark` on the wrapper drives tailwind's class-based dark variants
            <div class=move || {
                format!("{} relative min-h-screen bg-background text-foreground", theme.class())
            }>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </div>
        </Router>
    }
}

/// The whole single-page layout. Each section stands alone so one failing to
/// load never takes the others down.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <main class="relative">
            <div class="fixed inset-0 -z-10 bg-[radial-gradient(ellipse_at_top_right,_var(--tw-gradient-stops))] from-primary/20 via-background to-background"></div>
            <FloatingNav />
            <HeroSection />
            <AboutSection />
            <SkillsSection />
            <ProjectsSection />
            <TestimonialsSection />
            <ExperienceSection />
            <ContactSection />
            <Footer />
        </main>
    }
}

/// Eyebrow plus heading used at the top of every content section.
#[component]
fn SectionHeading(eyebrow: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-4 text-center">
            <div class="mb-2 flex items-center gap-2">
                <div class="h-[1px] w-5 bg-primary"></div>
                <span class="text-primary">{eyebrow}</span>
                <div class="h-[1px] w-5 bg-primary"></div>
            </div>
            <h2 class="mb-8 text-2xl font-bold tracking-tight sm:mb-12 sm:text-3xl md:text-4xl lg:text-5xl">
                {title}
            </h2>
        </div>
    }
}
