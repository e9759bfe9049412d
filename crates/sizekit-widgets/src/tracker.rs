#![forbid(unsafe_code)]

//! Category transition tracking.
//!
//! Builders do not remember the category they last resolved. When a caller
//! wants to react to a category change (typically to animate between
//! layouts), it reports each build's category to a [`BreakpointTracker`]
//! under a stable [`BuilderId`] and gets back the transition, if any.

use std::fmt;

use rustc_hash::FxHashMap;
use sizekit_layout::Category;

/// Caller-assigned handle for a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuilderId(u64);

impl BuilderId {
    /// Create an id from a raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BuilderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}", self.0)
    }
}

/// Counters since creation or the last [`BreakpointTracker::reset_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionStats {
    /// Calls to [`BreakpointTracker::observe`].
    pub observations: u64,
    /// Observations that reported a transition.
    pub transitions: u64,
}

/// Last observed category per builder.
#[derive(Debug, Clone)]
pub struct BreakpointTracker<C: Category> {
    last: FxHashMap<BuilderId, C>,
    stats: TransitionStats,
}

impl<C: Category> Default for BreakpointTracker<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Category> BreakpointTracker<C> {
    /// Empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: FxHashMap::default(),
            stats: TransitionStats::default(),
        }
    }

    /// Record `category` for `id`.
    ///
    /// Returns `Some((old, new))` when the builder was seen before under a
    /// different category. The first observation never reports a
    /// transition.
    pub fn observe(&mut self, id: BuilderId, category: C) -> Option<(C, C)> {
        self.stats.observations += 1;
        let previous = self.last.insert(id, category)?;
        if previous == category {
            return None;
        }
        self.stats.transitions += 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "breakpoint.transition",
            builder = id.raw(),
            from = previous.name(),
            to = category.name()
        );
        Some((previous, category))
    }

    /// The last category recorded for `id`.
    #[must_use]
    pub fn last(&self, id: BuilderId) -> Option<C> {
        self.last.get(&id).copied()
    }

    /// Stop tracking `id`, returning its last category.
    pub fn forget(&mut self, id: BuilderId) -> Option<C> {
        self.last.remove(&id)
    }

    /// Number of tracked builders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.last.len()
    }

    /// Whether no builder is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }

    /// Drop every tracked builder. Stats are kept.
    pub fn clear(&mut self) {
        self.last.clear();
    }

    /// Counters.
    #[must_use]
    pub fn stats(&self) -> TransitionStats {
        self.stats
    }

    /// Zero the counters.
    pub fn reset_stats(&mut self) {
        self.stats = TransitionStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizekit_layout::{Breakpoint, GranularBreakpoint};
    #[cfg(feature = "tracing")]
    use std::sync::{Arc, Mutex};
    #[cfg(feature = "tracing")]
    use tracing::Subscriber;
    #[cfg(feature = "tracing")]
    use tracing_subscriber::Layer;
    #[cfg(feature = "tracing")]
    use tracing_subscriber::layer::{Context, SubscriberExt};

    const A: BuilderId = BuilderId::from_raw(1);
    const B: BuilderId = BuilderId::from_raw(2);

    #[test]
    fn first_observation_is_silent() {
        let mut t = BreakpointTracker::new();
        assert_eq!(t.observe(A, Breakpoint::Small), None);
        assert_eq!(t.last(A), Some(Breakpoint::Small));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn reports_changes_only() {
        let mut t = BreakpointTracker::new();
        t.observe(A, Breakpoint::Small);
        assert_eq!(t.observe(A, Breakpoint::Small), None);
        assert_eq!(
            t.observe(A, Breakpoint::Large),
            Some((Breakpoint::Small, Breakpoint::Large))
        );
        assert_eq!(
            t.stats(),
            TransitionStats {
                observations: 3,
                transitions: 1
            }
        );
    }

    #[test]
    fn builders_are_independent() {
        let mut t = BreakpointTracker::new();
        t.observe(A, GranularBreakpoint::Tiny);
        t.observe(B, GranularBreakpoint::JumboLarge);
        assert_eq!(t.observe(B, GranularBreakpoint::JumboLarge), None);
        assert_eq!(
            t.observe(A, GranularBreakpoint::CompactSmall),
            Some((GranularBreakpoint::Tiny, GranularBreakpoint::CompactSmall))
        );
    }

    #[test]
    fn forget_and_clear() {
        let mut t = BreakpointTracker::new();
        t.observe(A, Breakpoint::Medium);
        t.observe(B, Breakpoint::Medium);
        assert_eq!(t.forget(A), Some(Breakpoint::Medium));
        assert_eq!(t.observe(A, Breakpoint::Large), None);
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.stats().observations, 3);
        t.reset_stats();
        assert_eq!(t.stats(), TransitionStats::default());
    }

    #[test]
    fn id_display() {
        assert_eq!(BuilderId::from_raw(7).to_string(), "B7");
        assert_eq!(BuilderId::from_raw(7).raw(), 7);
    }

    #[cfg(feature = "tracing")]
    struct TransitionCapture {
        seen: Arc<Mutex<Vec<String>>>,
    }

    #[cfg(feature = "tracing")]
    impl<S> Layer<S> for TransitionCapture
    where
        S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            struct Msg {
                message: Option<String>,
            }
            impl tracing::field::Visit for Msg {
                fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                    if field.name() == "message" {
                        self.message = Some(value.to_string());
                    }
                }

                fn record_debug(
                    &mut self,
                    field: &tracing::field::Field,
                    value: &dyn std::fmt::Debug,
                ) {
                    if field.name() == "message" {
                        self.message = Some(format!("{value:?}").trim_matches('"').to_string());
                    }
                }
            }
            let mut msg = Msg { message: None };
            event.record(&mut msg);
            if let Some(message) = msg.message {
                self.seen.lock().expect("transition trace lock").push(message);
            }
        }
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn transition_event_emitted() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(TransitionCapture {
            seen: Arc::clone(&seen),
        });
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut t = BreakpointTracker::new();
        t.observe(A, Breakpoint::Small);
        t.observe(A, Breakpoint::Small);
        t.observe(A, Breakpoint::ExtraLarge);

        let seen = seen.lock().expect("transition trace lock");
        let transitions = seen
            .iter()
            .filter(|m| m.as_str() == "breakpoint.transition")
            .count();
        assert_eq!(transitions, 1);
    }
}
