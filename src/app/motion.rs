use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_window, UseEventListenerOptions,
};

use crate::state::{MotionPreset, ScrollRange};

/// Tracks how far `node` has travelled through the viewport.
///
/// `None` until the element has been measured in the browser, so server
/// rendered markup isn't hidden behind a zero opacity.
pub fn use_scroll_progress(
    node: NodeRef<html::Section>,
    range: ScrollRange,
) -> ReadSignal<Option<f64>> {
    let (progress, set_progress) = signal(None::<f64>);

    let measure = move || {
        let Some(el) = node.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let viewport_height = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let p = range.progress(rect.top(), rect.height(), viewport_height);
        if progress.get_untracked() != Some(p) {
            set_progress.set(Some(p));
        }
    };

    Effect::new(move |_| measure());
    let passive = UseEventListenerOptions::default().passive(true);
    let stop_scroll =
        use_event_listener_with_options(use_window(), ev::scroll, move |_| measure(), passive);
    let stop_resize = use_event_listener(use_window(), ev::resize, move |_| measure());
    on_cleanup(move || {
        stop_scroll();
        stop_resize();
    });

    progress
}

/// Inline style for `preset` at the current progress.
pub fn motion_style(
    progress: ReadSignal<Option<f64>>,
    preset: MotionPreset,
) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        progress
            .get()
            .map(|p| preset.style(p))
            .unwrap_or_default()
    }
}
