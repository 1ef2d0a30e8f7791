//! Testimonial carousel.
//!
//! States: index `0..len`. `next`/`prev` wrap; `goto` jumps. Manual and
//! timed transitions share the same path, and a manual move does not reset
//! the auto-advance timer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// `None` for an empty slide set.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Jump to `index`. Out-of-range targets are ignored.
    pub fn goto(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.index = index;
        Some(index)
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// One flag per slide (and per dot); exactly one is `true`.
    pub fn active_flags(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| self.is_active(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_carousel() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn starts_at_zero() {
        let c = Carousel::new(3).unwrap();
        assert_eq!(c.current(), 0);
        assert_eq!(c.active_flags().collect::<Vec<_>>(), vec![true, false, false]);
    }

    #[test]
    fn wraps_both_ways() {
        let mut c = Carousel::new(3).unwrap();
        assert_eq!(c.prev(), 2);
        assert_eq!(c.next(), 0);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn next_then_prev_round_trips_from_every_index() {
        for len in 1..6 {
            for start in 0..len {
                let mut c = Carousel::new(len).unwrap();
                c.goto(start);
                c.next();
                assert_eq!(c.prev(), start);
            }
        }
    }

    #[test]
    fn arbitrary_walk_keeps_one_active() {
        let mut c = Carousel::new(4).unwrap();
        let moves = [true, true, false, false, false, true, false, true, true, true, true];
        for forward in moves {
            if forward {
                c.next();
            } else {
                c.prev();
            }
            assert!(c.current() < c.len());
            assert_eq!(c.active_flags().filter(|a| *a).count(), 1);
        }
    }

    #[test]
    fn goto_rejects_out_of_range() {
        let mut c = Carousel::new(3).unwrap();
        assert_eq!(c.goto(2), Some(2));
        assert_eq!(c.goto(3), None);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut c = Carousel::new(1).unwrap();
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
    }
}
