//! Scroll-animation dispatcher
//!
//! Owns the "has this animation already played" state for every observed
//! page region. Elements are classified by a marker class carried in the
//! markup; each one transitions `unseen -> triggered` exactly once per page
//! load and never back. The viewport-intersection wiring lives in
//! `ui::observer`; this module only decides whether an intersection fires an
//! animation and which one.

use std::collections::HashSet;

use crate::core::reveal::DEMO_PRE_DELAY_MS;

/// Delay before a step's index badge pops in
pub const STEP_BADGE_DELAY_MS: u32 = 100;

/// Delay before a step's body slides in (200 ms after the badge)
pub const STEP_BODY_DELAY_MS: u32 = 300;

/// Role of an observed page region, keyed by its marker class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    FeatureCard,
    Step,
    CodeDemo,
    Stats,
    Testimonial,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::FeatureCard,
        SectionKind::Step,
        SectionKind::CodeDemo,
        SectionKind::Stats,
        SectionKind::Testimonial,
    ];

    /// CSS marker class identifying this region in the markup.
    pub fn marker(&self) -> &'static str {
        match self {
            SectionKind::FeatureCard => "feature-card",
            SectionKind::Step => "step",
            SectionKind::CodeDemo => "code-demo",
            SectionKind::Stats => "stats",
            SectionKind::Testimonial => "testimonial-card",
        }
    }

    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.marker() == marker)
    }
}

/// Animation a triggered element should receive. The delays are part of the
/// contract so drivers stay dumb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Animation {
    /// Feature card fade-in
    CardFadeIn,
    /// Two-part step reveal: badge first, body 200 ms later
    StepReveal {
        badge_delay_ms: u32,
        body_delay_ms: u32,
    },
    /// Demo panel line reveal after a fixed pre-delay
    DemoReveal { pre_delay_ms: u32 },
    /// One counter per statistic, starts staggered by `index * stagger_ms`
    StatsBatch { stagger_ms: u32 },
    /// Testimonial fade-in
    TestimonialFadeIn,
}

/// Per-element animation state owned in one place instead of scattered
/// globals. `(kind, index)` identifies an element; the demo panel and the
/// stats section are singletons guarded by their own flags.
#[derive(Debug, Default)]
pub struct AnimationDispatcher {
    triggered: HashSet<(SectionKind, usize)>,
    demo_animated: bool,
    stats_animated: bool,
}

impl AnimationDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one element entering the viewport. Returns the animation to
    /// run, or `None` if this element already played — re-entry is a no-op.
    pub fn on_intersect(&mut self, kind: SectionKind, index: usize) -> Option<Animation> {
        match kind {
            SectionKind::CodeDemo => {
                if self.demo_animated {
                    return None;
                }
                self.demo_animated = true;
                Some(Animation::DemoReveal {
                    pre_delay_ms: DEMO_PRE_DELAY_MS,
                })
            }
            SectionKind::Stats => {
                if self.stats_animated {
                    return None;
                }
                self.stats_animated = true;
                Some(Animation::StatsBatch {
                    stagger_ms: crate::core::counter::COUNTER_STAGGER_MS,
                })
            }
            SectionKind::FeatureCard | SectionKind::Step | SectionKind::Testimonial => {
                if !self.triggered.insert((kind, index)) {
                    return None;
                }
                Some(match kind {
                    SectionKind::FeatureCard => Animation::CardFadeIn,
                    SectionKind::Step => Animation::StepReveal {
                        badge_delay_ms: STEP_BADGE_DELAY_MS,
                        body_delay_ms: STEP_BODY_DELAY_MS,
                    },
                    _ => Animation::TestimonialFadeIn,
                })
            }
        }
    }

    pub fn stats_animated(&self) -> bool {
        self.stats_animated
    }

    pub fn demo_animated(&self) -> bool {
        self.demo_animated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_round_trip() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::from_marker(kind.marker()), Some(kind));
        }
        assert_eq!(SectionKind::from_marker("hero"), None);
    }

    #[test]
    fn test_stats_batch_fires_at_most_once() {
        let mut dispatcher = AnimationDispatcher::new();

        assert!(matches!(
            dispatcher.on_intersect(SectionKind::Stats, 0),
            Some(Animation::StatsBatch { stagger_ms: 200 })
        ));
        // Scrolling the stats region back into view must be a no-op.
        assert_eq!(dispatcher.on_intersect(SectionKind::Stats, 0), None);
        assert_eq!(dispatcher.on_intersect(SectionKind::Stats, 3), None);
        assert!(dispatcher.stats_animated());
    }

    #[test]
    fn test_demo_reveal_guarded_by_its_own_flag() {
        let mut dispatcher = AnimationDispatcher::new();

        assert!(matches!(
            dispatcher.on_intersect(SectionKind::CodeDemo, 0),
            Some(Animation::DemoReveal { pre_delay_ms: 500 })
        ));
        assert_eq!(dispatcher.on_intersect(SectionKind::CodeDemo, 0), None);
        assert!(dispatcher.demo_animated());
    }

    #[test]
    fn test_cards_trigger_once_per_element() {
        let mut dispatcher = AnimationDispatcher::new();

        assert_eq!(
            dispatcher.on_intersect(SectionKind::FeatureCard, 0),
            Some(Animation::CardFadeIn)
        );
        assert_eq!(
            dispatcher.on_intersect(SectionKind::FeatureCard, 1),
            Some(Animation::CardFadeIn)
        );
        // Same element again: already triggered.
        assert_eq!(dispatcher.on_intersect(SectionKind::FeatureCard, 0), None);
    }

    #[test]
    fn test_step_reveal_staggers_badge_then_body() {
        let mut dispatcher = AnimationDispatcher::new();

        let animation = dispatcher.on_intersect(SectionKind::Step, 2).unwrap();
        let Animation::StepReveal {
            badge_delay_ms,
            body_delay_ms,
        } = animation
        else {
            panic!("expected step reveal, got {animation:?}");
        };
        assert_eq!(body_delay_ms - badge_delay_ms, 200);
    }

    #[test]
    fn test_kinds_do_not_share_flags() {
        let mut dispatcher = AnimationDispatcher::new();

        dispatcher.on_intersect(SectionKind::FeatureCard, 0);
        // A step with the same index is a different element.
        assert!(dispatcher.on_intersect(SectionKind::Step, 0).is_some());
        assert!(
            dispatcher
                .on_intersect(SectionKind::Testimonial, 0)
                .is_some()
        );
    }

    #[test]
    fn test_batch_of_entries_dispatches_independently() {
        let mut dispatcher = AnimationDispatcher::new();

        // One intersection callback can deliver several elements at once.
        let batch = [
            (SectionKind::FeatureCard, 0),
            (SectionKind::FeatureCard, 1),
            (SectionKind::Stats, 0),
            (SectionKind::Testimonial, 0),
        ];
        let fired: Vec<_> = batch
            .iter()
            .filter_map(|&(kind, index)| dispatcher.on_intersect(kind, index))
            .collect();
        assert_eq!(fired.len(), 4);
    }
}
