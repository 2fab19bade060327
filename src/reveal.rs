//! One-shot reveal-on-scroll bookkeeping.
//!
//! A [`RevealSession`] owns the animated elements of one mounted page and
//! decides, on every sweep, which of them have entered the viewport. The
//! browser side lives in `hooks::ScrollReveal`; everything here is plain
//! data so it can be exercised without a DOM.

use std::collections::BTreeSet;
use std::str::FromStr;

use thiserror::Error;

/// Vertical extent of an element relative to the top of the viewport,
/// as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }
}

/// When an element counts as "in view".
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealThreshold {
    /// Top of the element is above the bottom of the viewport.
    AnyOverlap,
    /// Top of the element is at least this many pixels above the bottom
    /// of the viewport.
    Offset(f64),
    /// At least this share (0..=1) of the element is on screen. Elements
    /// taller than the viewport are measured against the viewport height.
    Fraction(f64),
}

impl Default for RevealThreshold {
    fn default() -> Self {
        RevealThreshold::AnyOverlap
    }
}

impl RevealThreshold {
    pub fn is_met(&self, bounds: Bounds, viewport_height: f64) -> bool {
        match *self {
            RevealThreshold::AnyOverlap => bounds.top < viewport_height,
            RevealThreshold::Offset(px) => bounds.top < viewport_height - px,
            RevealThreshold::Fraction(ratio) => {
                let height = bounds.height();
                if height == 0.0 {
                    return RevealThreshold::AnyOverlap.is_met(bounds, viewport_height);
                }
                // Already scrolled past: the user has seen it.
                if bounds.bottom <= 0.0 {
                    return true;
                }
                let shown = bounds.bottom.min(viewport_height) - bounds.top.max(0.0);
                let visible_max = height.min(viewport_height);
                shown > 0.0 && visible_max > 0.0 && shown / visible_max >= ratio
            }
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid reveal threshold `{0}` (expected `any`, `offset:<px>` or a fraction between 0 and 1)")]
pub struct ThresholdParseError(String);

impl FromStr for RevealThreshold {
    type Err = ThresholdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let invalid = || ThresholdParseError(raw.to_string());

        if raw.eq_ignore_ascii_case("any") {
            return Ok(RevealThreshold::AnyOverlap);
        }
        if let Some(px) = raw.strip_prefix("offset:") {
            let px: f64 = px.trim().parse().map_err(|_| invalid())?;
            if !px.is_finite() || px < 0.0 {
                return Err(invalid());
            }
            return Ok(RevealThreshold::Offset(px));
        }
        let ratio: f64 = raw.parse().map_err(|_| invalid())?;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(invalid());
        }
        Ok(RevealThreshold::Fraction(ratio))
    }
}

/// Animation marker for the `index`th item of a grid: left, (centre,) right.
pub fn marker_for(index: usize, columns: usize) -> &'static str {
    match (columns, index % columns.max(1)) {
        (3, 1) => "scale-in",
        (3, 2) | (2, 1) => "slide-in-right",
        _ => "slide-in-left",
    }
}

/// Something a session can measure and reveal.
pub trait RevealTarget {
    fn bounds(&self) -> Bounds;
    fn reveal(&self);
}

/// Visibility state for the animated elements of one page instance.
///
/// Targets move from hidden to revealed exactly once. A revealed target is
/// dropped from the session immediately, so the session only ever holds
/// references to elements that are still hidden.
pub struct RevealSession<T> {
    pending: Vec<(usize, T)>,
    revealed: BTreeSet<usize>,
    threshold: RevealThreshold,
    released: bool,
}

impl<T: RevealTarget> RevealSession<T> {
    pub fn new(targets: Vec<T>, threshold: RevealThreshold) -> Self {
        Self {
            pending: targets.into_iter().enumerate().collect(),
            revealed: BTreeSet::new(),
            threshold,
            released: false,
        }
    }

    /// Reveal every pending target that meets the threshold. Returns the
    /// number of targets revealed by this sweep.
    pub fn sweep(&mut self, viewport_height: f64) -> usize {
        if self.is_released() {
            return 0;
        }
        let threshold = self.threshold;
        let before = self.revealed.len();
        let revealed = &mut self.revealed;
        self.pending.retain(|(id, target)| {
            if threshold.is_met(target.bounds(), viewport_height) {
                target.reveal();
                revealed.insert(*id);
                false
            } else {
                true
            }
        });
        self.revealed.len() - before
    }

    /// Drop every element reference. Later sweeps do nothing.
    pub fn release(&mut self) {
        self.released = true;
        self.pending.clear();
        self.pending.shrink_to_fit();
    }
}

impl<T> RevealSession<T> {
    #[cfg(test)]
    pub fn is_revealed(&self, id: usize) -> bool {
        self.revealed.contains(&id)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const VIEWPORT: f64 = 800.0;

    /// Element whose position is controlled by the test through a shared
    /// scroll offset, like a real page.
    struct FakeElement {
        page_top: f64,
        height: f64,
        scroll: Rc<Cell<f64>>,
        reveals: Rc<Cell<u32>>,
    }

    impl RevealTarget for Rc<FakeElement> {
        fn bounds(&self) -> Bounds {
            let top = self.page_top - self.scroll.get();
            Bounds::new(top, top + self.height)
        }

        fn reveal(&self) {
            self.reveals.set(self.reveals.get() + 1);
        }
    }

    fn page(tops: &[f64]) -> (Rc<Cell<f64>>, Vec<Rc<FakeElement>>) {
        let scroll = Rc::new(Cell::new(0.0));
        let elements = tops
            .iter()
            .map(|&page_top| {
                Rc::new(FakeElement {
                    page_top,
                    height: 200.0,
                    scroll: Rc::clone(&scroll),
                    reveals: Rc::new(Cell::new(0)),
                })
            })
            .collect();
        (scroll, elements)
    }

    #[test]
    fn test_any_overlap_uses_viewport_bottom() {
        let t = RevealThreshold::AnyOverlap;
        assert!(t.is_met(Bounds::new(799.0, 999.0), VIEWPORT));
        assert!(!t.is_met(Bounds::new(800.0, 1000.0), VIEWPORT));
        assert!(t.is_met(Bounds::new(-500.0, -300.0), VIEWPORT));
    }

    #[test]
    fn test_offset_threshold() {
        let t = RevealThreshold::Offset(100.0);
        assert!(!t.is_met(Bounds::new(750.0, 950.0), VIEWPORT));
        assert!(t.is_met(Bounds::new(650.0, 850.0), VIEWPORT));
    }

    #[test]
    fn test_fraction_threshold() {
        let t = RevealThreshold::Fraction(0.5);
        // 100 of 200 px on screen
        assert!(t.is_met(Bounds::new(700.0, 900.0), VIEWPORT));
        // 50 of 200 px on screen
        assert!(!t.is_met(Bounds::new(750.0, 950.0), VIEWPORT));
        // scrolled past entirely
        assert!(t.is_met(Bounds::new(-400.0, -200.0), VIEWPORT));
        // zero height behaves like any overlap
        assert!(t.is_met(Bounds::new(10.0, 10.0), VIEWPORT));
        assert!(!t.is_met(Bounds::new(900.0, 900.0), VIEWPORT));
    }

    #[test]
    fn test_fraction_measures_tall_elements_against_viewport() {
        let t = RevealThreshold::Fraction(0.5);
        // 2000 px section filling the viewport
        assert!(t.is_met(Bounds::new(-100.0, 1900.0), VIEWPORT));
        // last section of the page, scrolled as far as it goes
        assert!(t.is_met(Bounds::new(-1200.0, 800.0), VIEWPORT));
        // 300 px of a tall section is less than half the viewport
        assert!(!t.is_met(Bounds::new(500.0, 2500.0), VIEWPORT));
        assert!(t.is_met(Bounds::new(400.0, 2400.0), VIEWPORT));
        assert!(RevealThreshold::Fraction(1.0).is_met(Bounds::new(0.0, 2000.0), VIEWPORT));
    }

    #[test]
    fn test_tall_final_section_reveals_at_page_end() {
        let scroll = Rc::new(Cell::new(0.0));
        let section = Rc::new(FakeElement {
            page_top: 1000.0,
            height: 2000.0,
            scroll: Rc::clone(&scroll),
            reveals: Rc::new(Cell::new(0)),
        });
        let mut session =
            RevealSession::new(vec![Rc::clone(&section)], RevealThreshold::Fraction(0.5));

        assert_eq!(session.sweep(VIEWPORT), 0);
        // page height 3000, so scrolling stops at 2200
        scroll.set(2200.0);
        assert_eq!(session.sweep(VIEWPORT), 1);
        assert_eq!(section.reveals.get(), 1);
    }

    #[test]
    fn test_grid_markers() {
        let three: Vec<_> = (0..4).map(|i| marker_for(i, 3)).collect();
        assert_eq!(three, ["slide-in-left", "scale-in", "slide-in-right", "slide-in-left"]);
        let two: Vec<_> = (0..3).map(|i| marker_for(i, 2)).collect();
        assert_eq!(two, ["slide-in-left", "slide-in-right", "slide-in-left"]);
        assert_eq!(marker_for(5, 0), "slide-in-left");
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!("any".parse::<RevealThreshold>(), Ok(RevealThreshold::AnyOverlap));
        assert_eq!(" ANY ".parse::<RevealThreshold>(), Ok(RevealThreshold::AnyOverlap));
        assert_eq!(
            "offset:80".parse::<RevealThreshold>(),
            Ok(RevealThreshold::Offset(80.0))
        );
        assert_eq!(
            "0.25".parse::<RevealThreshold>(),
            Ok(RevealThreshold::Fraction(0.25))
        );
        assert!("offset:-4".parse::<RevealThreshold>().is_err());
        assert!("1.5".parse::<RevealThreshold>().is_err());
        assert!("half".parse::<RevealThreshold>().is_err());
        assert!("".parse::<RevealThreshold>().is_err());
    }

    #[test]
    fn test_parse_error_names_the_bad_value() {
        let err = "half".parse::<RevealThreshold>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("`half`"), "{}", message);
        assert!(message.contains("offset:<px>"), "{}", message);

        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert_eq!(boxed.to_string(), message);
    }

    #[test]
    fn test_elements_below_fold_stay_hidden_until_scrolled_to() {
        let (scroll, elements) = page(&[100.0, 1200.0, 2400.0]);
        let mut session = RevealSession::new(elements.clone(), RevealThreshold::AnyOverlap);

        assert_eq!(session.sweep(VIEWPORT), 1);
        assert!(session.is_revealed(0));
        assert!(!session.is_revealed(1));
        assert!(!session.is_revealed(2));

        scroll.set(500.0);
        assert_eq!(session.sweep(VIEWPORT), 1);
        assert!(session.is_revealed(1));
        assert!(!session.is_revealed(2));
    }

    #[test]
    fn test_reveal_is_monotonic_and_fires_once() {
        let (scroll, elements) = page(&[1200.0]);
        let mut session = RevealSession::new(elements.clone(), RevealThreshold::AnyOverlap);

        scroll.set(600.0);
        session.sweep(VIEWPORT);
        assert!(session.is_revealed(0));

        // scroll back to the top: the element leaves the viewport
        scroll.set(0.0);
        assert_eq!(session.sweep(VIEWPORT), 0);
        assert!(session.is_revealed(0));

        scroll.set(700.0);
        session.sweep(VIEWPORT);
        assert_eq!(elements[0].reveals.get(), 1);
        assert_eq!(session.pending_count(), 0);
    }

    #[test]
    fn test_revealed_targets_are_not_retained() {
        let (_, elements) = page(&[0.0, 3000.0]);
        let mut session = RevealSession::new(elements.clone(), RevealThreshold::AnyOverlap);
        session.sweep(VIEWPORT);

        assert_eq!(Rc::strong_count(&elements[0]), 1);
        assert_eq!(Rc::strong_count(&elements[1]), 2);
    }

    #[test]
    fn test_release_drops_references_and_stops_reveals() {
        let (scroll, elements) = page(&[1500.0, 2500.0]);
        let mut session = RevealSession::new(elements.clone(), RevealThreshold::AnyOverlap);
        session.sweep(VIEWPORT);
        assert_eq!(session.revealed_count(), 0);

        session.release();
        assert!(session.is_released());
        assert!(elements.iter().all(|e| Rc::strong_count(e) == 1));

        scroll.set(5000.0);
        assert_eq!(session.sweep(VIEWPORT), 0);
        assert!(elements.iter().all(|e| e.reveals.get() == 0));

        // releasing twice is fine
        session.release();
    }

    #[test]
    fn test_empty_session_is_a_no_op() {
        let mut session: RevealSession<Rc<FakeElement>> =
            RevealSession::new(Vec::new(), RevealThreshold::default());
        assert_eq!(session.sweep(VIEWPORT), 0);
        session.release();
        assert_eq!(session.revealed_count(), 0);
    }
}
