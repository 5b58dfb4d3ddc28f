//! Imperative swipe commands and the index transitions around them.
//!
//! [`SwipeControls`] turns a logical command (swipe, swipe back, flip)
//! into a call on the handle of the card at `floor(activeIndex)`, and owns
//! the index bookkeeping no single card can: looping back to the initial
//! index, and stepping back for an undo. Both drag releases and
//! programmatic swipes commit through [`SwipeControls::commit_at`].

mod index;

use glam::Vec2;
pub use index::{ActiveIndex, IndexSnapshot, MAX_EXACT_INDEX};

use crate::direction::SwipeDirection;
use crate::events::HostScheduler;
use crate::options::DeckConfig;

/// What a card needs while committing.
pub struct CommitContext<'a> {
    /// Resolved configuration.
    pub config: &'a DeckConfig,
    /// Shared counter the card advances.
    pub index: &'a ActiveIndex,
    /// Where the direction event goes.
    pub events: &'a mut dyn HostScheduler,
}

/// Per-card capability set driven by the coordinator.
pub trait SwipeControl {
    /// Dispatch the direction event, fling off-screen along `direction`
    /// seeded with `velocity`, then advance the shared index by one.
    fn commit(
        &mut self,
        direction: SwipeDirection,
        velocity: Vec2,
        ctx: &mut CommitContext<'_>,
    );

    /// Cancel any position animation and spring back to rest.
    fn swipe_back(&mut self, config: &DeckConfig);

    /// Toggle the flipped face. Returns `false` if the card has no back.
    fn flip(&mut self, config: &DeckConfig) -> bool;

    /// Spring back to rest without cancelling first (loop restart).
    fn reset_position(&mut self, config: &DeckConfig);
}

/// Lookup of live card handles by absolute data index.
pub trait ControlRegistry {
    /// Handle type stored per card.
    type Handle: SwipeControl;

    /// Handle of the mounted card at `index`.
    fn handle_mut(&mut self, index: usize) -> Option<&mut Self::Handle>;

    /// Visit every mounted handle.
    fn for_each_handle(&mut self, f: &mut dyn FnMut(&mut Self::Handle));
}

/// Command-time inputs that change between calls.
pub struct ControlScope<'a> {
    /// Resolved configuration.
    pub config: &'a DeckConfig,
    /// Current data length (read live, never cached).
    pub len: usize,
    /// Where direction events go.
    pub events: &'a mut dyn HostScheduler,
}

/// Coordinator owning the shared [`ActiveIndex`].
#[derive(Debug, Clone)]
pub struct SwipeControls {
    index: ActiveIndex,
}

impl SwipeControls {
    /// Coordinator over `index`.
    #[must_use]
    pub fn new(index: ActiveIndex) -> Self {
        Self { index }
    }

    /// The shared counter.
    #[must_use]
    pub fn index(&self) -> &ActiveIndex {
        &self.index
    }

    /// Commit the card at `card` towards `direction`.
    ///
    /// No-op (returns `false`) unless `card` is the active card and is
    /// mounted. When looping and `card` was the last item, the index
    /// restarts at the initial index and every mounted card springs back
    /// to rest.
    pub fn commit_at<R: ControlRegistry>(
        &self,
        registry: &mut R,
        card: usize,
        direction: SwipeDirection,
        velocity: Vec2,
        scope: &mut ControlScope<'_>,
    ) -> bool {
        if !self.index.is_active(card) {
            log::debug!("commit for inactive card {card} ignored");
            return false;
        }
        let Some(handle) = registry.handle_mut(card) else {
            log::debug!("no mounted card at {card}, {} ignored", direction.as_str());
            return false;
        };
        let mut ctx = CommitContext {
            config: scope.config,
            index: &self.index,
            events: &mut *scope.events,
        };
        handle.commit(direction, velocity, &mut ctx);
        log::debug!("committed card {card} {}", direction.as_str());

        if scope.config.looping && card + 1 >= scope.len {
            let initial = scope.config.initial_index;
            log::debug!("loop: restarting at {initial}");
            self.index.set(initial);
            let config = scope.config;
            registry.for_each_handle(&mut |h| h.reset_position(config));
        }
        true
    }

    /// Programmatic swipe of the active card.
    pub fn swipe<R: ControlRegistry>(
        &self,
        registry: &mut R,
        direction: SwipeDirection,
        scope: &mut ControlScope<'_>,
    ) -> bool {
        let card = self.index.floor();
        self.commit_at(registry, card, direction, Vec2::ZERO, scope)
    }

    /// Bring the previous card back on top.
    ///
    /// Before the initial index this is a no-op, or wraps to the last item
    /// when looping. Returns the new index if it moved.
    pub fn swipe_back<R: ControlRegistry>(
        &self,
        registry: &mut R,
        config: &DeckConfig,
        len: usize,
    ) -> Option<usize> {
        let current = self.index.floor();
        let previous = match current.checked_sub(1) {
            Some(p) if p >= config.initial_index => p,
            _ if config.looping && len > 0 => len - 1,
            _ => {
                log::debug!("swipe back at {current} ignored");
                return None;
            }
        };
        if let Some(handle) = registry.handle_mut(previous) {
            handle.swipe_back(config);
        }
        self.index.set(previous);
        log::debug!("swiped back to {previous}");
        Some(previous)
    }

    /// Flip the active card. `false` if there is none or it has no back.
    pub fn flip<R: ControlRegistry>(&self, registry: &mut R, config: &DeckConfig) -> bool {
        registry
            .handle_mut(self.index.floor())
            .is_some_and(|handle| handle.flip(config))
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;

    use super::*;
    use crate::events::DeckEvent;
    use crate::options::DeckOptions;

    #[derive(Debug, Default)]
    struct Recorder(Vec<DeckEvent>);

    impl HostScheduler for Recorder {
        fn dispatch(&mut self, event: DeckEvent) {
            self.0.push(event);
        }
    }

    #[derive(Debug, Default)]
    struct MockCard {
        index: usize,
        log: Vec<&'static str>,
        has_back: bool,
    }

    impl SwipeControl for MockCard {
        fn commit(
            &mut self,
            direction: SwipeDirection,
            _velocity: Vec2,
            ctx: &mut CommitContext<'_>,
        ) {
            ctx.events.dispatch(DeckEvent::Swiped {
                direction,
                index: self.index,
            });
            let _ = ctx.index.advance();
            self.log.push("commit");
        }

        fn swipe_back(&mut self, _config: &DeckConfig) {
            self.log.push("back");
        }

        fn flip(&mut self, _config: &DeckConfig) -> bool {
            self.log.push("flip");
            self.has_back
        }

        fn reset_position(&mut self, _config: &DeckConfig) {
            self.log.push("reset");
        }
    }

    #[derive(Debug, Default)]
    struct Cards(FxHashMap<usize, MockCard>);

    impl Cards {
        fn with(len: usize) -> Self {
            Self(
                (0..len)
                    .map(|index| {
                        (
                            index,
                            MockCard {
                                index,
                                ..MockCard::default()
                            },
                        )
                    })
                    .collect(),
            )
        }

        fn log(&self, index: usize) -> &[&'static str] {
            &self.0[&index].log
        }
    }

    impl ControlRegistry for Cards {
        type Handle = MockCard;

        fn handle_mut(&mut self, index: usize) -> Option<&mut MockCard> {
            self.0.get_mut(&index)
        }

        fn for_each_handle(&mut self, f: &mut dyn FnMut(&mut MockCard)) {
            self.0.values_mut().for_each(f);
        }
    }

    fn config(looping: bool, initial: usize, len: usize) -> DeckConfig {
        let mut opts = DeckOptions::default();
        opts.stack.loop_cards = looping;
        opts.stack.initial_index = initial;
        opts.resolve(len).unwrap()
    }

    #[test]
    fn swipe_commits_active_card_then_advances() {
        let cfg = config(false, 0, 3);
        let controls = SwipeControls::new(ActiveIndex::new(0));
        let mut cards = Cards::with(3);
        let mut events = Recorder::default();
        let mut scope = ControlScope {
            config: &cfg,
            len: 3,
            events: &mut events,
        };
        assert!(controls.swipe(&mut cards, SwipeDirection::Right, &mut scope));
        assert!(controls.swipe(&mut cards, SwipeDirection::Left, &mut scope));
        assert_eq!(controls.index().floor(), 2);
        assert_eq!(
            events.0,
            vec![
                DeckEvent::Swiped {
                    direction: SwipeDirection::Right,
                    index: 0
                },
                DeckEvent::Swiped {
                    direction: SwipeDirection::Left,
                    index: 1
                },
            ]
        );
    }

    #[test]
    fn swipe_past_the_end_is_a_noop() {
        let cfg = config(false, 0, 2);
        let controls = SwipeControls::new(ActiveIndex::new(2));
        let mut cards = Cards::with(2);
        let mut events = Recorder::default();
        let mut scope = ControlScope {
            config: &cfg,
            len: 2,
            events: &mut events,
        };
        assert!(!controls.swipe(&mut cards, SwipeDirection::Top, &mut scope));
        assert_eq!(controls.index().floor(), 2);
        assert!(events.0.is_empty());
    }

    #[test]
    fn commit_for_inactive_card_is_ignored() {
        let cfg = config(false, 0, 3);
        let controls = SwipeControls::new(ActiveIndex::new(1));
        let mut cards = Cards::with(3);
        let mut events = Recorder::default();
        let mut scope = ControlScope {
            config: &cfg,
            len: 3,
            events: &mut events,
        };
        assert!(!controls.commit_at(
            &mut cards,
            0,
            SwipeDirection::Right,
            Vec2::ZERO,
            &mut scope
        ));
        assert!(cards.log(0).is_empty());
    }

    #[test]
    fn looping_at_last_card_restarts_and_resets_all() {
        let cfg = config(true, 0, 3);
        let controls = SwipeControls::new(ActiveIndex::new(2));
        let mut cards = Cards::with(3);
        let mut events = Recorder::default();
        let mut scope = ControlScope {
            config: &cfg,
            len: 3,
            events: &mut events,
        };
        assert!(controls.swipe(&mut cards, SwipeDirection::Right, &mut scope));
        assert_eq!(controls.index().get(), 0.0);
        assert_eq!(cards.log(2), ["commit", "reset"]);
        assert_eq!(cards.log(0), ["reset"]);
        assert_eq!(cards.log(1), ["reset"]);
    }

    #[test]
    fn uses_live_length() {
        let cfg = config(true, 0, 3);
        let controls = SwipeControls::new(ActiveIndex::new(2));
        let mut cards = Cards::with(5);
        let mut events = Recorder::default();
        // The list grew to five: card 2 is no longer the last.
        let mut scope = ControlScope {
            config: &cfg,
            len: 5,
            events: &mut events,
        };
        assert!(controls.swipe(&mut cards, SwipeDirection::Right, &mut scope));
        assert_eq!(controls.index().floor(), 3);
        assert!(cards.log(0).is_empty());
    }

    #[test]
    fn swipe_back_steps_and_restores_card() {
        let cfg = config(false, 0, 3);
        let controls = SwipeControls::new(ActiveIndex::new(2));
        let mut cards = Cards::with(3);
        assert_eq!(controls.swipe_back(&mut cards, &cfg, 3), Some(1));
        assert_eq!(cards.log(1), ["back"]);
        assert_eq!(controls.index().floor(), 1);
    }

    #[test]
    fn swipe_back_before_initial_index() {
        let cfg = config(false, 1, 3);
        let controls = SwipeControls::new(ActiveIndex::new(1));
        let mut cards = Cards::with(3);
        assert_eq!(controls.swipe_back(&mut cards, &cfg, 3), None);
        assert_eq!(controls.index().floor(), 1);

        let cfg = config(true, 1, 3);
        assert_eq!(controls.swipe_back(&mut cards, &cfg, 3), Some(2));
        assert_eq!(controls.index().floor(), 2);
        assert_eq!(cards.log(2), ["back"]);
    }

    #[test]
    fn flip_targets_active_card() {
        let cfg = config(false, 0, 2);
        let controls = SwipeControls::new(ActiveIndex::new(1));
        let mut cards = Cards::with(2);
        cards.0.get_mut(&1).unwrap().has_back = true;
        assert!(controls.flip(&mut cards, &cfg));
        assert_eq!(cards.log(1), ["flip"]);
        assert!(cards.log(0).is_empty());

        let controls = SwipeControls::new(ActiveIndex::new(5));
        assert!(!controls.flip(&mut cards, &cfg));
    }
}
