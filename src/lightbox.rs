use std::num::NonZeroUsize;
use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Cursor over a fixed, non-empty image sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lightbox {
    len: NonZeroUsize,
    index: usize,
    open: bool,
}

impl Lightbox {
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            len,
            index: 0,
            open: false,
        }
    }

    pub fn open(&mut self, index: usize) {
        self.index = index % self.len.get();
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len.get();
    }

    pub fn prev(&mut self) {
        let len = self.len.get();
        self.index = (self.index + len - 1) % len;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

pub enum LightboxAction {
    Open(usize),
    Close,
    Next,
    Prev,
}

impl Reducible for Lightbox {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            LightboxAction::Open(index) => next.open(index),
            LightboxAction::Close => next.close(),
            LightboxAction::Next => next.next(),
            LightboxAction::Prev => next.prev(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lightbox(len: usize) -> Lightbox {
        Lightbox::new(NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn test_six_image_walkthrough() {
        let mut lb = lightbox(6);
        lb.open(0);
        lb.next();
        lb.next();
        lb.next();
        assert_eq!(lb.index(), 3);
        lb.prev();
        assert_eq!(lb.index(), 2);
        assert!(lb.is_open());
    }

    #[test]
    fn test_next_then_prev_round_trips() {
        for len in 1..=8 {
            for start in 0..len {
                let mut lb = lightbox(len);
                lb.open(start);
                lb.next();
                lb.prev();
                assert_eq!(lb.index(), start, "len {} start {}", len, start);
                lb.prev();
                lb.next();
                assert_eq!(lb.index(), start, "len {} start {}", len, start);
            }
        }
    }

    #[test]
    fn test_len_steps_wrap_to_start() {
        for len in 1..=8 {
            for start in 0..len {
                let mut lb = lightbox(len);
                lb.open(start);
                for _ in 0..len {
                    lb.next();
                    assert!(lb.index() < len);
                }
                assert_eq!(lb.index(), start);
            }
        }
    }

    #[test]
    fn test_prev_wraps_from_first_to_last() {
        let mut lb = lightbox(4);
        lb.open(0);
        lb.prev();
        assert_eq!(lb.index(), 3);
    }

    #[test]
    fn test_open_out_of_range_wraps() {
        let mut lb = lightbox(6);
        lb.open(7);
        assert_eq!(lb.index(), 1);
    }

    #[test]
    fn test_close_keeps_cursor() {
        let mut lb = lightbox(3);
        assert!(!lb.is_open());
        lb.open(2);
        lb.close();
        assert!(!lb.is_open());
        assert_eq!(lb.index(), 2);
    }

    #[test]
    fn test_reducer_actions() {
        let state = Rc::new(lightbox(6));
        let state = state.reduce(LightboxAction::Open(5));
        let state = state.reduce(LightboxAction::Next);
        assert_eq!(state.index(), 0);
        let state = state.reduce(LightboxAction::Prev);
        assert_eq!(state.index(), 5);
        let state = state.reduce(LightboxAction::Close);
        assert!(!state.is_open());
    }
}
