//! View state for the interactive page sections.

/// Single-open toggle used by the feature cards and the FAQ accordion:
/// selecting the open item closes it, selecting another one switches to it.
pub fn toggle_expanded<T: PartialEq>(current: Option<T>, id: T) -> Option<T> {
    match current {
        Some(open) if open == id => None,
        _ => Some(id),
    }
}

/// Testimonial carousel position and auto-play flag.
///
/// Manual navigation stops auto-play; only the pause/resume toggle turns it back on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    auto_playing: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            auto_playing: true,
        }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    pub fn next(&mut self) {
        self.advance();
        self.auto_playing = false;
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.auto_playing = false;
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
        self.auto_playing = false;
    }

    /// Auto-play step. Returns whether the slide changed.
    pub fn tick(&mut self) -> bool {
        if !self.auto_playing || self.len < 2 {
            return false;
        }
        self.advance();
        true
    }

    pub fn toggle_auto_play(&mut self) {
        self.auto_playing = !self.auto_playing;
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
    fn test_toggle_expanded() {
        assert_eq!(toggle_expanded(None, "a"), Some("a"));
        assert_eq!(toggle_expanded(Some("a"), "a"), None);
        assert_eq!(toggle_expanded(Some("a"), "b"), Some("b"));
    }

    #[test]
    fn test_carousel_wraps_both_ways() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.current(), 3);
        c.next();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_manual_navigation_stops_auto_play() {
        let mut c = Carousel::new(4);
        assert!(c.tick());
        assert_eq!(c.current(), 1);

        c.go_to(3);
        assert!(!c.is_auto_playing());
        assert!(!c.tick());
        assert_eq!(c.current(), 3);

        c.toggle_auto_play();
        assert!(c.tick());
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_go_to_out_of_range_keeps_slide() {
        let mut c = Carousel::new(2);
        c.go_to(5);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        assert!(!c.tick());
        assert_eq!(c.current(), 0);
        assert!(c.is_empty());
    }
}
