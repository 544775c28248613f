use std::sync::Arc;

use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::state::theme::THEME_STORAGE_KEY;
use crate::state::{
    theme::initial_preference, ResolvedTheme, ThemePreference, ThemeStore,
};

/// Local-storage backed preference, read and written through leptos-use.
#[cfg(feature = "hydrate")]
struct LocalThemeStore {
    stored: Signal<ThemePreference>,
    set_stored: WriteSignal<ThemePreference>,
}

#[cfg(feature = "hydrate")]
impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<ThemePreference> {
        self.stored.try_get_untracked()
    }

    fn save(&self, pref: ThemePreference) {
        self.set_stored.set(pref);
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// `None` until the stored preference has been read in the browser.
    preference: RwSignal<Option<ThemePreference>>,
    prefers_dark: Signal<bool>,
    store: StoredValue<Arc<dyn ThemeStore>>,
}

impl ThemeContext {
    pub fn resolved(&self) -> Option<ResolvedTheme> {
        let prefers_dark = self.prefers_dark.get();
        self.preference.get().map(|p| p.resolve(prefers_dark))
    }

    /// Root class. Before the preference is known the default is used, which
    /// matches what the server rendered.
    pub fn class(&self) -> &'static str {
        let prefers_dark = self.prefers_dark.get();
        self.preference
            .get()
            .unwrap_or_default()
            .resolve(prefers_dark)
            .class()
    }

    pub fn toggle(&self) {
        let prefers_dark = self.prefers_dark.get_untracked();
        let Some(current) = self.preference.get_untracked() else {
            return;
        };
        let next = current.toggled(prefers_dark);
        self.preference.set(Some(next));
        self.store.with_value(|s| s.save(next));
    }
}

/// Installs the theme context with the given store. The stored value is read
/// once the page is live in the browser.
pub fn provide_theme_with(store: Arc<dyn ThemeStore>) {
    let ctx = ThemeContext {
        preference: RwSignal::new(None),
        prefers_dark: use_preferred_dark(),
        store: StoredValue::new(store),
    };
    // effects only run in the browser, after hydration
    Effect::new(move |_| {
        let pref = ctx.store.with_value(|s| initial_preference(s.as_ref()));
        ctx.preference.set(Some(pref));
    });
    provide_context(ctx);
}

pub fn provide_theme() {
    #[cfg(feature = "hydrate")]
    let store: Arc<dyn ThemeStore> = {
        let (stored, set_stored, _) =
            use_local_storage::<ThemePreference, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
        Arc::new(LocalThemeStore { stored, set_stored })
    };
    #[cfg(not(feature = "hydrate"))]
    let store: Arc<dyn ThemeStore> = Arc::new(crate::state::MemoryThemeStore::default());

    provide_theme_with(store);
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        {move || match theme.resolved() {
            // neutral placeholder until the preference is known
            None => {
                view! {
                    <button class="rounded-full p-2" aria-label="Toggle theme" disabled=true>
                        <span class="inline-block h-[1.2rem] w-[1.2rem]"></span>
                    </button>
                }
                    .into_any()
            }
            Some(resolved) => {
                view! {
                    <button
                        class="rounded-full p-2 hover:bg-accent transition-colors"
                        aria-label="Toggle theme"
                        on:click=move |_| theme.toggle()
                    >
                        <span class="inline-block h-[1.2rem] w-[1.2rem] leading-none">
                            {match resolved {
                                ResolvedTheme::Dark => "☾",
                                ResolvedTheme::Light => "☀",
                            }}
                        </span>
                    </button>
                }
                    .into_any()
            }
        }}
    }
}
