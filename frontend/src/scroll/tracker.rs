use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use crate::config::{DIRECTION_DEADBAND_PERCENT, VELOCITY_CEILING};
use super::section_catalog::{clamp_percent, scrollable_range, Section, SectionCatalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    None,
}

impl Direction {
    pub fn as_class(&self) -> &'static str {
        match self {
            Direction::Up => "scroll-up",
            Direction::Down => "scroll-down",
            Direction::None => "scroll-idle",
        }
    }
}

/// Snapshot handed to observers on every scroll sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollState {
    /// 0..=100
    pub progress_percent: f64,
    /// Percent per second, never negative.
    pub velocity: f64,
    pub direction: Direction,
    pub current_section: Option<Section>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Geometry {
    document_height: f64,
    viewport_height: f64,
}

type Observer = Rc<dyn Fn(&ScrollState)>;

#[derive(Default)]
struct Observers {
    next_id: u64,
    entries: Vec<(u64, Observer)>,
}

/// Keeps an observer registered until it is dropped or `unsubscribe`d.
#[must_use = "dropping a Subscription unregisters the observer"]
pub struct Subscription {
    id: u64,
    observers: Weak<RefCell<Observers>>,
}

impl Subscription {
    fn inert() -> Self {
        Self { id: 0, observers: Weak::new() }
    }

    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Leaves the observer registered for as long as the tracker lives.
    pub fn forget(mut self) {
        self.observers = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(observers) = self.observers.upgrade() {
            // Closures may own Subscriptions of their own; drop them after the borrow ends.
            let removed: Vec<(u64, Observer)> = {
                let mut observers = observers.borrow_mut();
                let (removed, kept) = std::mem::take(&mut observers.entries)
                    .into_iter()
                    .partition(|(id, _)| *id == self.id);
                observers.entries = kept;
                removed
            };
            drop(removed);
        }
    }
}

/// Turns raw scroll offsets into progress, velocity, direction and the
/// section currently in view.
pub struct ScrollProgressTracker {
    catalog: Rc<SectionCatalog>,
    state: ScrollState,
    geometry: Geometry,
    last_sample_at: Option<f64>,
    observers: Rc<RefCell<Observers>>,
    disposed: bool,
}

impl ScrollProgressTracker {
    pub fn new(catalog: Rc<SectionCatalog>) -> Self {
        let state = ScrollState {
            current_section: catalog.section_at(0.0).copied(),
            ..ScrollState::default()
        };
        Self {
            catalog,
            state,
            geometry: Geometry::default(),
            last_sample_at: None,
            observers: Rc::new(RefCell::new(Observers::default())),
            disposed: false,
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn catalog(&self) -> &SectionCatalog {
        &self.catalog
    }

    pub fn on_scroll(
        &mut self,
        raw_scroll_top: f64,
        document_height: f64,
        viewport_height: f64,
        now_millis: f64,
    ) {
        if self.disposed {
            return;
        }

        self.geometry = Geometry {
            document_height: if document_height.is_finite() { document_height } else { 0.0 },
            viewport_height: if viewport_height.is_finite() { viewport_height } else { 0.0 },
        };

        let range = scrollable_range(document_height, viewport_height);
        let previous = self.state.progress_percent;

        let (progress, velocity, direction) = if range == 0.0 || !raw_scroll_top.is_finite() {
            (0.0, 0.0, Direction::None)
        } else {
            let progress = clamp_percent(raw_scroll_top / range * 100.0);
            let velocity = self.velocity_since(previous, progress, now_millis);
            (progress, velocity, direction_between(previous, progress))
        };

        if now_millis.is_finite() {
            self.last_sample_at = Some(now_millis);
        }

        self.state = ScrollState {
            progress_percent: progress,
            velocity,
            direction,
            current_section: self.catalog.section_at(progress).copied(),
        };
        debug!(
            "scroll {:.1}% {:?} at {:.1}%/s",
            progress, direction, velocity
        );

        self.notify();
    }

    fn velocity_since(&self, previous: f64, progress: f64, now_millis: f64) -> f64 {
        let elapsed = match self.last_sample_at {
            Some(at) => now_millis - at,
            None => return self.state.velocity,
        };
        if !(elapsed > 0.0) || !elapsed.is_finite() {
            return self.state.velocity;
        }
        ((progress - previous).abs() / elapsed * 1000.0).min(VELOCITY_CEILING)
    }

    fn notify(&self) {
        // Copy the list first so observers may drop their own subscription.
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .entries
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer(&self.state);
        }
    }

    pub fn subscribe(&mut self, observer: impl Fn(&ScrollState) + 'static) -> Subscription {
        if self.disposed {
            return Subscription::inert();
        }
        let mut observers = self.observers.borrow_mut();
        observers.next_id += 1;
        let id = observers.next_id;
        observers.entries.push((id, Rc::new(observer)));
        Subscription {
            id,
            observers: Rc::downgrade(&self.observers),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().entries.len()
    }

    /// Scroll offset the host should move to so `section` is at the top.
    pub fn jump_to_section(&self, section: &Section) -> Option<f64> {
        if self.disposed {
            return None;
        }
        Some(self.catalog.offset_for_section(
            section,
            self.geometry.document_height,
            self.geometry.viewport_height,
        ))
    }

    pub fn jump_to_top(&self) -> Option<f64> {
        (!self.disposed).then_some(0.0)
    }

    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        let removed = std::mem::take(&mut self.observers.borrow_mut().entries);
        drop(removed);
        debug!("scroll tracker disposed");
    }
}

fn direction_between(previous: f64, current: f64) -> Direction {
    let delta = current - previous;
    if delta > DIRECTION_DEADBAND_PERCENT {
        Direction::Down
    } else if delta < -DIRECTION_DEADBAND_PERCENT {
        Direction::Up
    } else {
        Direction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    fn tracker() -> ScrollProgressTracker {
        ScrollProgressTracker::new(Rc::new(SectionCatalog::academy()))
    }

    fn section_name(state: &ScrollState) -> Option<&'static str> {
        state.current_section.map(|s| s.name)
    }

    #[test]
    fn starts_at_top_in_first_section() {
        let t = tracker();
        assert_eq!(t.state().progress_percent, 0.0);
        assert_eq!(t.state().direction, Direction::None);
        assert_eq!(section_name(t.state()), Some("Hero"));
    }

    #[test]
    fn scrolling_down_then_up() {
        let mut t = tracker();
        t.on_scroll(500.0, 2000.0, 1000.0, 1_000.0);
        assert_eq!(t.state().progress_percent, 50.0);
        assert_eq!(t.state().direction, Direction::Down);
        assert_eq!(section_name(t.state()), Some("Features"));

        t.on_scroll(250.0, 2000.0, 1000.0, 1_200.0);
        assert_eq!(t.state().progress_percent, 25.0);
        assert_eq!(t.state().direction, Direction::Up);
        assert_eq!(section_name(t.state()), Some("Programs"));
        // 25% in 200ms would be 125%/s
        assert_eq!(t.state().velocity, VELOCITY_CEILING);
    }

    #[test]
    fn velocity_is_percent_per_second() {
        let mut t = tracker();
        t.on_scroll(0.0, 2000.0, 1000.0, 0.0);
        t.on_scroll(10.0, 2000.0, 1000.0, 500.0);
        assert!((t.state().velocity - 2.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_offsets_clamp() {
        let mut t = tracker();
        t.on_scroll(5_000.0, 2000.0, 1000.0, 0.0);
        assert_eq!(t.state().progress_percent, 100.0);
        assert_eq!(section_name(t.state()), Some("Contact"));

        t.on_scroll(-40.0, 2000.0, 1000.0, 16.0);
        assert_eq!(t.state().progress_percent, 0.0);
    }

    #[test]
    fn degenerate_geometry_reports_rest() {
        let mut t = tracker();
        t.on_scroll(300.0, 2000.0, 1000.0, 0.0);
        for raw in [0.0, 120.0, -5.0, 1e9] {
            t.on_scroll(raw, 900.0, 900.0, 100.0);
            assert_eq!(t.state().progress_percent, 0.0);
            assert_eq!(t.state().velocity, 0.0);
            assert_eq!(t.state().direction, Direction::None);
        }
        t.on_scroll(50.0, 600.0, 900.0, 200.0);
        assert_eq!(t.state().progress_percent, 0.0);
    }

    #[test]
    fn duplicate_timestamp_keeps_previous_velocity() {
        let mut t = tracker();
        t.on_scroll(0.0, 2000.0, 1000.0, 0.0);
        t.on_scroll(10.0, 2000.0, 1000.0, 1_000.0);
        let before = t.state().velocity;
        t.on_scroll(80.0, 2000.0, 1000.0, 1_000.0);
        assert_eq!(t.state().velocity, before);
        assert!(t.state().velocity.is_finite());
        t.on_scroll(90.0, 2000.0, 1000.0, 900.0);
        assert_eq!(t.state().velocity, before);
    }

    #[test]
    fn tiny_moves_stay_directionless() {
        let mut t = tracker();
        t.on_scroll(500.0, 2000.0, 1000.0, 0.0);
        t.on_scroll(500.2, 2000.0, 1000.0, 100.0);
        assert_eq!(t.state().direction, Direction::None);
    }

    #[test]
    fn non_finite_input_never_leaks() {
        let mut t = tracker();
        t.on_scroll(f64::NAN, 2000.0, 1000.0, 0.0);
        t.on_scroll(100.0, f64::INFINITY, 1000.0, f64::NAN);
        let s = t.state();
        assert!(s.progress_percent.is_finite());
        assert!(s.velocity.is_finite());
    }

    #[test]
    fn observers_receive_each_snapshot() {
        let mut t = tracker();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _sub = t.subscribe(move |s| sink.borrow_mut().push(s.progress_percent));
        t.on_scroll(100.0, 2000.0, 1000.0, 0.0);
        t.on_scroll(900.0, 2000.0, 1000.0, 50.0);
        assert_eq!(*seen.borrow(), vec![10.0, 90.0]);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let mut t = tracker();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let sub = t.subscribe(move |_| counter.set(counter.get() + 1));
        t.on_scroll(100.0, 2000.0, 1000.0, 0.0);
        sub.unsubscribe();
        t.on_scroll(200.0, 2000.0, 1000.0, 16.0);
        assert_eq!(calls.get(), 1);
        assert_eq!(t.observer_count(), 0);
    }

    #[test]
    fn forgotten_subscription_stays_registered() {
        let mut t = tracker();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        t.subscribe(move |_| counter.set(counter.get() + 1)).forget();
        t.on_scroll(100.0, 2000.0, 1000.0, 0.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn observer_can_drop_its_own_subscription() {
        let mut t = tracker();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let inner = slot.clone();
        let sub = t.subscribe(move |_| {
            inner.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);
        t.on_scroll(100.0, 2000.0, 1000.0, 0.0);
        assert_eq!(t.observer_count(), 0);
    }

    #[test]
    fn dispose_drops_observer_that_owns_its_subscription() {
        let mut t = tracker();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let inner = slot.clone();
        let sub = t.subscribe(move |_| {
            inner.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);
        // The closure is now the only thing keeping `slot` alive.
        drop(slot);
        t.dispose();
        assert_eq!(t.observer_count(), 0);
    }

    #[test]
    fn unsubscribing_observer_that_holds_another_subscription() {
        let mut t = tracker();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let first = t.subscribe(move |_| counter.set(counter.get() + 1));
        let second = t.subscribe(move |_| {
            let _held = &first;
        });
        assert_eq!(t.observer_count(), 2);
        second.unsubscribe();
        assert_eq!(t.observer_count(), 0);
        t.on_scroll(100.0, 2000.0, 1000.0, 0.0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn dispose_is_idempotent_and_silences_observers() {
        let mut t = tracker();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let _sub = t.subscribe(move |_| counter.set(counter.get() + 1));
        t.dispose();
        t.dispose();
        t.on_scroll(500.0, 2000.0, 1000.0, 0.0);
        assert_eq!(calls.get(), 0);
        assert_eq!(t.state().progress_percent, 0.0);

        let late = calls.clone();
        let _late_sub = t.subscribe(move |_| late.set(late.get() + 1));
        t.on_scroll(700.0, 2000.0, 1000.0, 10.0);
        assert_eq!(calls.get(), 0);
        assert_eq!(t.jump_to_top(), None);
    }

    #[test]
    fn jump_uses_last_seen_geometry() {
        let mut t = tracker();
        let stats = *t.catalog().by_name("Stats").unwrap();
        assert_eq!(t.jump_to_section(&stats), Some(0.0));

        t.on_scroll(0.0, 3000.0, 1000.0, 0.0);
        assert_eq!(t.jump_to_section(&stats), Some(1200.0));
        assert_eq!(t.jump_to_top(), Some(0.0));

        t.dispose();
        assert_eq!(t.jump_to_section(&stats), None);
    }

    proptest! {
        #[test]
        fn progress_is_monotone_and_bounded(
            mut offsets in proptest::collection::vec(-500.0f64..5_000.0, 1..40),
            viewport in 200.0f64..1_500.0,
            extra in 1.0f64..4_000.0,
        ) {
            offsets.sort_by(|a, b| a.partial_cmp(b).unwrap());
            offsets.dedup();
            let mut t = tracker();
            let mut last = 0.0;
            for (i, raw) in offsets.iter().enumerate() {
                t.on_scroll(*raw, viewport + extra, viewport, i as f64 * 16.0);
                let p = t.state().progress_percent;
                prop_assert!((0.0..=100.0).contains(&p));
                prop_assert!(p >= last);
                prop_assert!(t.state().velocity >= 0.0);
                prop_assert!(t.state().velocity <= VELOCITY_CEILING);
                last = p;
            }
        }

        #[test]
        fn any_progress_has_a_section(raw in -1e6f64..1e6, viewport in 1.0f64..2_000.0, doc in 1.0f64..10_000.0) {
            let mut t = tracker();
            t.on_scroll(raw, doc, viewport, 0.0);
            prop_assert!(t.state().current_section.is_some());
        }
    }
}
