use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Frontend,
    Backend,
    Fullstack,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Frontend,
        Category::Backend,
        Category::Fullstack,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Fullstack => "fullstack",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All Projects",
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Fullstack => "Full Stack",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

pub trait Categorized {
    fn category(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSelector {
    active: Category,
}

impl FilterSelector {
    pub fn active(&self) -> Category {
        self.active
    }

    pub fn select(&mut self, category: Category) {
        self.active = category;
    }

    pub fn set_category(&mut self, key: &str) -> Result<(), UnknownCategory> {
        self.active = key.parse()?;
        Ok(())
    }

    /// Items matching the active category; `All` passes everything through.
    pub fn visible<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        match self.active {
            Category::All => items.iter().collect(),
            c => items.iter().filter(|i| i.category() == c.key()).collect(),
        }
    }
}

/// Reveals an already-fetched list a page at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMore {
    step: usize,
    shown: usize,
}

impl LoadMore {
    pub fn new(step: usize) -> Self {
        let step = step.max(1);
        Self { step, shown: step }
    }

    pub fn visible_len(&self, total: usize) -> usize {
        self.shown.min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.shown < total
    }

    pub fn load_more(&mut self) {
        self.shown += self.step;
    }

    pub fn reset(&mut self) {
        self.shown = self.step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str);

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.0
        }
    }

    fn items() -> Vec<Item> {
        vec![Item("frontend"), Item("backend"), Item("frontend")]
    }

    #[test]
    fn test_filter_frontend() {
        let items = items();
        let mut f = FilterSelector::default();
        f.set_category("frontend").unwrap();
        let visible = f.visible(&items);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|i| i.category() == "frontend"));
    }

    #[test]
    fn test_all_passes_through() {
        let items = items();
        let f = FilterSelector::default();
        assert_eq!(f.active(), Category::All);
        assert_eq!(f.visible(&items).len(), items.len());
    }

    #[test]
    fn test_counts_match_for_every_category() {
        let items = items();
        let mut f = FilterSelector::default();
        for c in Category::ALL.into_iter().skip(1) {
            f.select(c);
            let expected = items.iter().filter(|i| i.0 == c.key()).count();
            let visible = f.visible(&items);
            assert_eq!(visible.len(), expected, "{c}");
            assert!(visible.iter().all(|i| i.category() == c.key()));
        }
    }

    #[test]
    fn test_no_matches_is_empty() {
        let items = items();
        let mut f = FilterSelector::default();
        f.select(Category::Fullstack);
        assert!(f.visible(&items).is_empty());
    }

    #[test]
    fn test_exact_match_only() {
        let items = vec![Item("Frontend"), Item("frontend ")];
        let mut f = FilterSelector::default();
        f.select(Category::Frontend);
        assert!(f.visible(&items).is_empty());
    }

    #[test]
    fn test_unknown_key_keeps_selection() {
        let mut f = FilterSelector::default();
        f.select(Category::Backend);
        assert_eq!(
            f.set_category("mobile"),
            Err(UnknownCategory("mobile".to_string()))
        );
        assert_eq!(f.active(), Category::Backend);
    }

    #[test]
    fn test_load_more() {
        let mut lm = LoadMore::new(6);
        assert_eq!(lm.visible_len(4), 4);
        assert!(!lm.has_more(4));
        assert_eq!(lm.visible_len(14), 6);
        assert!(lm.has_more(14));
        lm.load_more();
        assert_eq!(lm.visible_len(14), 12);
        lm.load_more();
        assert_eq!(lm.visible_len(14), 14);
        assert!(!lm.has_more(14));
        lm.reset();
        assert_eq!(lm.visible_len(14), 6);
    }
}
