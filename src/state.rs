//! Client-side view state shared by the page sections.
//!
//! Everything in here is plain data plus transitions so it can be exercised
//! without a browser; the components in `app` own the signals and feed DOM
//! measurements in.

pub mod carousel;
pub mod contact;
pub mod filter;
pub mod motion;
pub mod scroll;
pub mod tenure;
pub mod theme;
pub mod typewriter;

pub use carousel::{Carousel, AUTOPLAY_INTERVAL_MS};
pub use contact::{ContactField, ContactForm, FormState, SubmissionStatus, ValidationError};
pub use filter::{Categorized, Category, FilterSelector, LoadMore, UnknownCategory};
pub use motion::{Keyframes, KeyframeError, MotionPreset, ScrollRange};
pub use scroll::{is_compact, shows_back_to_top, Section, ScrollTracker, ViewState, NAV_SECTIONS};
pub use tenure::Tenure;
pub use theme::{MemoryThemeStore, ResolvedTheme, ThemePreference, ThemeStore};
pub use typewriter::{Typewriter, TYPE_INTERVAL_MS};
