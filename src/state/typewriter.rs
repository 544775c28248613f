pub const TYPE_INTERVAL_MS: u64 = 90;

/// Reveals a line of text one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    shown: usize,
    total: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self {
            text,
            shown: 0,
            total,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The revealed prefix, always ending on a char boundary.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }

    /// Timer callback. Returns whether another character appeared.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_tick() {
        let mut t = Typewriter::new("MERN Stack Developer.");
        assert_eq!(t.visible(), "");
        for _ in 0..4 {
            assert!(t.tick());
        }
        assert_eq!(t.visible(), "MERN");
        while t.tick() {}
        assert!(t.is_done());
        assert_eq!(t.visible(), t.text());
        assert!(!t.tick());
    }

    #[test]
    fn test_multibyte_text() {
        let mut t = Typewriter::new("Café ☕");
        for _ in 0..4 {
            t.tick();
        }
        assert_eq!(t.visible(), "Café");
        t.tick();
        t.tick();
        assert_eq!(t.visible(), "Café ☕");
        assert!(t.is_done());
    }

    #[test]
    fn test_empty_text_is_done() {
        let mut t = Typewriter::new("");
        assert!(t.is_done());
        assert!(!t.tick());
        assert_eq!(t.visible(), "");
    }
}
