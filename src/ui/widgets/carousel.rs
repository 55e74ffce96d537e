//! Carousel state machine
//!
//! Pure rotation logic for an image carousel: autoplay with hover pause,
//! manual navigation, and index wraparound. Knows nothing about iced; the
//! app layer turns [`Carousel::autoplay_timer`] into a subscription and
//! feeds events back in through the mutating methods.

use std::time::Duration;

/// Built-in slides used when no images are configured
pub const DEFAULT_IMAGES: [&str; 2] = ["assets/hero/slide-1.jpg", "assets/hero/slide-2.jpg"];

/// Default delay between automatic advances
pub const DEFAULT_INTERVAL_MS: u64 = 4500;

/// Desired autoplay timer, derived from carousel state.
///
/// The `epoch` is part of the timer's identity: whenever it changes, the
/// previously armed timer must be dropped and a fresh one armed, restarting
/// the cadence from that moment. Automatic ticks keep the same epoch, so
/// the running timer is left alone and keeps its own rhythm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoplayTimer {
    pub interval: Duration,
    pub epoch: u64,
}

/// Rotating image carousel state
#[derive(Debug, Clone)]
pub struct Carousel {
    images: Vec<String>,
    autoplay: bool,
    interval: Duration,
    current: usize,
    last: usize,
    hovered: bool,
    epoch: u64,
}

impl Carousel {
    /// Create a carousel over `images`, substituting the default pair when
    /// the list is empty so the carousel is never without a slide.
    pub fn new(images: Vec<String>, autoplay: bool, interval_ms: u64) -> Self {
        let images = if images.is_empty() {
            DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect()
        } else {
            images
        };

        Self {
            images,
            autoplay,
            interval: Duration::from_millis(interval_ms.max(1)),
            current: 0,
            last: 0,
            hovered: false,
            epoch: 0,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Index of the currently displayed slide, always `< len()`
    pub fn current(&self) -> usize {
        self.current
    }

    /// Index displayed before the most recent transition (cross-fade source)
    pub fn last(&self) -> usize {
        self.last
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Navigation and autoplay only make sense with at least two slides
    pub fn has_multiple(&self) -> bool {
        self.images.len() > 1
    }

    /// The timer the host must keep alive, if any.
    ///
    /// `Some` exactly when autoplay is enabled, there is more than one
    /// slide, and the pointer is not over the carousel.
    pub fn autoplay_timer(&self) -> Option<AutoplayTimer> {
        if self.autoplay && self.has_multiple() && !self.hovered {
            Some(AutoplayTimer {
                interval: self.interval,
                epoch: self.epoch,
            })
        } else {
            None
        }
    }

    /// Jump directly to `index` (indicator dots). Out-of-range indices are
    /// ignored; dots are generated from the image list so this only guards
    /// against stale messages.
    pub fn jump(&mut self, index: usize) {
        if index < self.images.len() {
            self.last = self.current;
            self.current = index;
            self.epoch += 1;
        }
    }

    /// Step backward one slide, wrapping from the first to the last
    pub fn previous(&mut self) {
        self.step(-1);
        self.epoch += 1;
    }

    /// Step forward one slide, wrapping from the last to the first
    pub fn next(&mut self) {
        self.step(1);
        self.epoch += 1;
    }

    /// Automatic advance from a timer tick. Same wraparound as [`next`],
    /// but the epoch is untouched so the running timer keeps its cadence.
    ///
    /// [`next`]: Self::next
    pub fn advance(&mut self) {
        self.step(1);
    }

    /// Pointer entered or left the carousel. Entering pauses autoplay,
    /// leaving resumes it with a fresh interval. A single-slide carousel
    /// ignores hover entirely since there is nothing to pause.
    pub fn set_hovered(&mut self, hovered: bool) {
        if !self.has_multiple() || hovered == self.hovered {
            return;
        }
        self.hovered = hovered;
        if !hovered {
            // Resume counts from now, not from where the paused timer was
            self.epoch += 1;
        }
    }

    fn step(&mut self, delta: i64) {
        let len = self.images.len() as i64;
        self.last = self.current;
        self.current = ((self.current as i64 + delta).rem_euclid(len)) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel {
        let images = (0..n).map(|i| format!("slide-{i}.jpg")).collect();
        Carousel::new(images, true, 1000)
    }

    #[test]
    fn empty_image_list_uses_default_pair() {
        let c = Carousel::new(Vec::new(), true, DEFAULT_INTERVAL_MS);
        assert_eq!(c.len(), 2);
        assert_eq!(c.images(), &DEFAULT_IMAGES);
    }

    #[test]
    fn next_cycles_back_to_start() {
        // Applying next() len times returns to the starting index,
        // from any starting point
        for n in 1..=5 {
            for start in 0..n {
                let mut c = carousel(n);
                c.jump(start);
                for _ in 0..n {
                    c.next();
                }
                assert_eq!(c.current(), start, "cycle broken for n={n} start={start}");
            }
        }
    }

    #[test]
    fn previous_inverts_next() {
        for n in 1..=5 {
            for start in 0..n {
                let mut c = carousel(n);
                c.jump(start);
                c.next();
                c.previous();
                assert_eq!(c.current(), start);

                c.previous();
                c.next();
                assert_eq!(c.current(), start);
            }
        }
    }

    #[test]
    fn wraparound_at_both_ends() {
        let mut c = carousel(3);
        c.previous();
        assert_eq!(c.current(), 2);
        c.next();
        assert_eq!(c.current(), 0);
        c.jump(2);
        c.next();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn single_image_never_moves_and_never_arms() {
        let mut c = carousel(1);
        assert_eq!(c.autoplay_timer(), None);

        c.next();
        c.previous();
        c.advance();
        c.jump(0);
        c.set_hovered(true);
        c.set_hovered(false);

        assert_eq!(c.current(), 0);
        assert_eq!(c.autoplay_timer(), None);
    }

    #[test]
    fn autoplay_disabled_never_arms() {
        let c = Carousel::new(
            vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()],
            false,
            1000,
        );
        assert_eq!(c.autoplay_timer(), None);
    }

    #[test]
    fn hover_suspends_timer_and_resume_restarts_it() {
        let mut c = carousel(3);
        let before = c.autoplay_timer().expect("timer armed initially");

        c.set_hovered(true);
        assert_eq!(c.autoplay_timer(), None, "paused while hovered");

        c.set_hovered(false);
        let after = c.autoplay_timer().expect("timer re-armed on leave");
        assert_ne!(
            before.epoch, after.epoch,
            "resume must restart the cadence, not continue the old timer"
        );
        assert_eq!(before.interval, after.interval);
    }

    #[test]
    fn redundant_hover_events_do_not_restart_timer() {
        let mut c = carousel(3);
        c.set_hovered(false);
        let a = c.autoplay_timer().unwrap();
        c.set_hovered(false);
        assert_eq!(a, c.autoplay_timer().unwrap());
    }

    #[test]
    fn manual_navigation_restarts_timer() {
        let mut c = carousel(3);
        let e0 = c.autoplay_timer().unwrap().epoch;
        c.next();
        let e1 = c.autoplay_timer().unwrap().epoch;
        c.previous();
        let e2 = c.autoplay_timer().unwrap().epoch;
        c.jump(1);
        let e3 = c.autoplay_timer().unwrap().epoch;
        assert!(e0 < e1 && e1 < e2 && e2 < e3);
    }

    #[test]
    fn automatic_ticks_keep_the_running_timer() {
        let mut c = carousel(3);
        let before = c.autoplay_timer().unwrap();
        c.advance();
        c.advance();
        assert_eq!(before, c.autoplay_timer().unwrap());
    }

    #[test]
    fn tick_sequence_matches_spec_example() {
        // images=[A,B,C]: 0 -> 1 -> 2 -> 0 on successive intervals
        let mut c = carousel(3);
        assert_eq!(c.current(), 0);
        c.advance();
        assert_eq!(c.current(), 1);
        c.advance();
        assert_eq!(c.current(), 2);
        c.advance();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn jump_to_active_slide_still_restarts_timer() {
        let mut c = carousel(3);
        let e0 = c.autoplay_timer().unwrap().epoch;
        c.jump(c.current());
        assert!(c.autoplay_timer().unwrap().epoch > e0);
    }

    #[test]
    fn jump_ignores_out_of_range_index() {
        let mut c = carousel(3);
        let timer = c.autoplay_timer();
        c.jump(7);
        assert_eq!(c.current(), 0);
        assert_eq!(c.autoplay_timer(), timer, "ignored jump must not re-arm");
    }

    #[test]
    fn last_tracks_previous_slide_for_cross_fade() {
        let mut c = carousel(3);
        c.next();
        assert_eq!((c.last(), c.current()), (0, 1));
        c.jump(0);
        assert_eq!((c.last(), c.current()), (1, 0));
    }

    /// A host arms/cancels timers by diffing successive `autoplay_timer()`
    /// results, the way the subscription layer does. Counts live timers
    /// across every operation and checks there is never more than one.
    #[derive(Default)]
    struct TimerProbe {
        live: Option<AutoplayTimer>,
        armed: u64,
        cancelled: u64,
    }

    impl TimerProbe {
        fn observe(&mut self, desired: Option<AutoplayTimer>) {
            if self.live != desired {
                if self.live.is_some() {
                    self.cancelled += 1;
                }
                if desired.is_some() {
                    self.armed += 1;
                }
                self.live = desired;
            }
            let live = self.armed - self.cancelled;
            assert!(live <= 1, "more than one live timer ({live})");
        }
    }

    #[test]
    fn at_most_one_timer_across_any_operation_sequence() {
        let ops: &[fn(&mut Carousel)] = &[
            |c| c.next(),
            |c| c.previous(),
            |c| c.jump(0),
            |c| c.advance(),
            |c| c.set_hovered(true),
            |c| c.set_hovered(false),
        ];

        // Exhaustive over short sequences, across sizes including N=1
        for n in [1, 2, 3] {
            for a in ops {
                for b in ops {
                    for d in ops {
                        let mut c = carousel(n);
                        let mut probe = TimerProbe::default();
                        probe.observe(c.autoplay_timer());
                        for op in [a, b, d] {
                            op(&mut c);
                            probe.observe(c.autoplay_timer());
                            assert!(c.current() < c.len());
                        }
                    }
                }
            }
        }
    }
}
