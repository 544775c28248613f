pub const AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// Index into a fixed list that auto-advances until the visitor takes over.
///
/// `next`, `prev` and `go_to` are the visitor's controls and switch autoplay
/// off for good; `tick` is what the timer calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            autoplay: true,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Active item and the one after it, for the two-up layout.
    pub fn pair(&self) -> (usize, usize) {
        if self.len == 0 {
            return (0, 0);
        }
        (self.index, (self.index + 1) % self.len)
    }

    /// Cards to render: the active item, then its neighbour when there is
    /// one. The neighbour is hidden by CSS on compact layouts, so the list
    /// never depends on the viewport and server and browser markup agree.
    pub fn slots(&self) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        let (first, second) = self.pair();
        if second == first {
            vec![first]
        } else {
            vec![first, second]
        }
    }

    /// Whether dot `i` is lit. The two-up layout lights both visible items.
    pub fn is_highlighted(&self, i: usize, two_up: bool) -> bool {
        if self.len == 0 {
            return false;
        }
        let (first, second) = self.pair();
        i == first || (two_up && i == second)
    }

    pub fn next(&mut self) {
        self.autoplay = false;
        self.advance();
    }

    pub fn prev(&mut self) {
        self.autoplay = false;
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        self.autoplay = false;
        if self.len == 0 {
            return;
        }
        if index >= self.len {
            log::warn!(
                "carousel jump to {index} is out of range for {} items",
                self.len
            );
        }
        self.index = index.min(self.len - 1);
    }

    /// Timer callback. Returns whether the carousel moved.
    pub fn tick(&mut self) -> bool {
        if !self.autoplay || self.len == 0 {
            return false;
        }
        self.advance();
        true
    }

    fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_forward() {
        let mut c = Carousel::new(4);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.index(), 3);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_wraps_backward() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn test_next_prev_round_trip() {
        for len in 1..6 {
            for start in 0..len {
                let mut c = Carousel::new(len);
                c.go_to(start);
                c.next();
                c.prev();
                assert_eq!(c.index(), start, "next/prev len={len} start={start}");
                c.prev();
                c.next();
                assert_eq!(c.index(), start, "prev/next len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_timer_advances_until_manual_navigation() {
        let mut c = Carousel::new(4);
        assert!(c.tick());
        assert!(c.tick());
        assert_eq!(c.index(), 2);

        c.prev();
        assert!(!c.autoplay());
        assert_eq!(c.index(), 1);
        for _ in 0..10 {
            assert!(!c.tick());
        }
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_any_control_disables_autoplay() {
        let mut by_next = Carousel::new(3);
        by_next.next();
        let mut by_jump = Carousel::new(3);
        by_jump.go_to(0);
        for mut c in [by_next, by_jump] {
            let before = c.index();
            for _ in 0..10 {
                c.tick();
            }
            assert!(!c.autoplay());
            assert_eq!(c.index(), before);
        }
    }

    #[test]
    fn test_go_to_clamps() {
        let mut c = Carousel::new(4);
        c.go_to(2);
        assert_eq!(c.index(), 2);
        c.go_to(9);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn test_pair() {
        let mut c = Carousel::new(4);
        assert_eq!(c.pair(), (0, 1));
        c.go_to(3);
        assert_eq!(c.pair(), (3, 0));
        assert_eq!(Carousel::new(1).pair(), (0, 0));
    }

    #[test]
    fn test_slots_ignore_layout() {
        let mut c = Carousel::new(4);
        assert_eq!(c.slots(), vec![0, 1]);
        c.go_to(3);
        assert_eq!(c.slots(), vec![3, 0]);
        assert_eq!(Carousel::new(1).slots(), vec![0]);
        assert!(Carousel::new(0).slots().is_empty());
    }

    #[test]
    fn test_highlighted_dots() {
        let mut c = Carousel::new(4);
        c.go_to(3);
        let lit = |two_up| (0..4).filter(|&i| c.is_highlighted(i, two_up)).collect::<Vec<_>>();
        assert_eq!(lit(false), vec![3]);
        assert_eq!(lit(true), vec![0, 3]);

        let single = Carousel::new(1);
        assert!(single.is_highlighted(0, true));
        assert!(!Carousel::new(0).is_highlighted(0, true));
    }

    #[test]
    fn test_empty_is_inert() {
        let mut c = Carousel::new(0);
        assert!(c.is_empty());
        c.next();
        c.prev();
        c.go_to(3);
        assert!(!c.tick());
        assert_eq!(c.index(), 0);
    }
}
