/// Distance from the viewport top (px) at which a section counts as "in view".
pub const SECTION_THRESHOLD: f64 = 200.0;
/// Scroll depth (px) after which the floating nav is shown.
pub const SCROLL_THRESHOLD: f64 = 100.0;
/// Scroll depth (px) after which the back-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;
/// Widths strictly below this use the compact navigation.
pub const COMPACT_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

impl Section {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Sections reachable from the floating nav, in document order.
pub static NAV_SECTIONS: [Section; 5] = [
    Section::new("home", "Home"),
    Section::new("about", "About"),
    Section::new("skills", "Skills"),
    Section::new("projects", "Projects"),
    Section::new("contact", "Contact"),
];

pub fn is_compact(width: f64) -> bool {
    width < COMPACT_BREAKPOINT
}

pub fn shows_back_to_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// Picks the section currently in view.
///
/// Sections are walked from the bottom of the document upwards and the first
/// one whose top edge sits at or above `SECTION_THRESHOLD` wins, so when
/// several sections qualify the one declared *last* is chosen. Sections whose
/// element can't be measured (`offset_of` returns `None`) are skipped. If
/// nothing qualifies `previous` is kept.
pub fn active_section<F>(
    sections: &[Section],
    offset_of: F,
    previous: &'static str,
) -> &'static str
where
    F: Fn(&Section) -> Option<f64>,
{
    sections
        .iter()
        .rev()
        .find(|s| offset_of(s).is_some_and(|top| top <= SECTION_THRESHOLD))
        .map(|s| s.id)
        .unwrap_or(previous)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub active_section: &'static str,
    pub past_threshold: bool,
    pub compact_layout: bool,
}

impl ViewState {
    pub fn resize(&mut self, width: f64) -> bool {
        let compact = is_compact(width);
        let changed = compact != self.compact_layout;
        self.compact_layout = compact;
        changed
    }
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    sections: &'static [Section],
    state: ViewState,
}

impl ScrollTracker {
    pub fn new(sections: &'static [Section]) -> Self {
        let first = sections.first().map(|s| s.id).unwrap_or_default();
        Self {
            sections,
            state: ViewState {
                active_section: first,
                past_threshold: false,
                compact_layout: false,
            },
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Recomputes the scroll-derived fields. Returns true if either changed.
    pub fn observe<F>(&mut self, scroll_y: f64, offset_of: F) -> bool
    where
        F: Fn(&Section) -> Option<f64>,
    {
        let past = scroll_y > SCROLL_THRESHOLD;
        let active = active_section(self.sections, offset_of, self.state.active_section);
        let changed = past != self.state.past_threshold || active != self.state.active_section;
        self.state.past_threshold = past;
        self.state.active_section = active;
        changed
    }

    pub fn resize(&mut self, width: f64) -> bool {
        self.state.resize(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Top offsets by section id; ids not listed behave as unmounted.
    fn offsets<'a>(tops: &'a [(&'static str, f64)]) -> impl Fn(&Section) -> Option<f64> + 'a {
        move |s: &Section| tops.iter().find(|(id, _)| *id == s.id).map(|(_, t)| *t)
    }

    #[test]
    fn test_last_qualifying_section_wins() {
        let tops = [
            ("home", -1400.0),
            ("about", -600.0),
            ("skills", 150.0),
            ("projects", 900.0),
            ("contact", 1700.0),
        ];
        assert_eq!(active_section(&NAV_SECTIONS, offsets(&tops), "home"), "skills");
    }

    #[test]
    fn test_threshold_boundary() {
        let at = [("home", -500.0), ("about", 200.0), ("skills", 800.0)];
        assert_eq!(active_section(&NAV_SECTIONS, offsets(&at), "home"), "about");

        let just_below = [("home", -500.0), ("about", 200.5), ("skills", 800.0)];
        assert_eq!(
            active_section(&NAV_SECTIONS, offsets(&just_below), "home"),
            "home"
        );
    }

    #[test]
    fn test_retains_previous_when_nothing_qualifies() {
        let tops = [("home", 250.0), ("about", 900.0)];
        assert_eq!(
            active_section(&NAV_SECTIONS, offsets(&tops), "projects"),
            "projects"
        );
        assert_eq!(active_section(&NAV_SECTIONS, |_| None, "about"), "about");
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        // contact isn't mounted yet; projects still qualifies
        let tops = [("home", -2000.0), ("projects", 10.0)];
        assert_eq!(
            active_section(&NAV_SECTIONS, offsets(&tops), "home"),
            "projects"
        );
    }

    #[test]
    fn test_tracker_observe() {
        let mut tracker = ScrollTracker::new(&NAV_SECTIONS);
        assert_eq!(tracker.state().active_section, "home");
        assert!(!tracker.state().past_threshold);

        let tops = [("home", -700.0), ("about", 120.0), ("skills", 1000.0)];
        assert!(tracker.observe(820.0, offsets(&tops)));
        assert_eq!(tracker.state().active_section, "about");
        assert!(tracker.state().past_threshold);

        // same position again is a no-op
        assert!(!tracker.observe(820.0, offsets(&tops)));
        assert_eq!(tracker.state().active_section, "about");

        // exactly at the scroll threshold is not past it
        let top = [("home", 0.0)];
        tracker.observe(100.0, offsets(&top));
        assert!(!tracker.state().past_threshold);
        assert_eq!(tracker.state().active_section, "home");
    }

    #[test]
    fn test_compact_layout() {
        assert!(is_compact(767.9));
        assert!(!is_compact(768.0));

        let mut tracker = ScrollTracker::new(&NAV_SECTIONS);
        assert!(tracker.resize(375.0));
        assert!(tracker.state().compact_layout);
        assert!(!tracker.resize(500.0));
        assert!(tracker.resize(1280.0));
        assert!(!tracker.state().compact_layout);
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!shows_back_to_top(0.0));
        assert!(!shows_back_to_top(500.0));
        assert!(shows_back_to_top(500.5));
    }

    #[test]
    fn test_section_anchor() {
        assert_eq!(NAV_SECTIONS[3].anchor(), "#projects");
    }
}
