//! Per-card gesture state machine.
//!
//! A [`SwipeCard`] tracks a pan 1:1 while it is the active card,
//! classifies the drag on every sample, and on release either hands a
//! commit back to the coordinator or springs home. It also owns the
//! card's stacked scale/opacity, press feedback and flip spin.

pub mod decision;
pub mod overlay;
mod state;
mod visual;

use glam::Vec2;
use web_time::Duration;

pub use decision::{classify, decide, Classification, Release};
pub use overlay::{overlay_opacity, OverlayOpacities};
pub use state::{CardState, DragState};
pub use visual::{CardVisual, FlipFaces};

use crate::animation::{AnimatedValue, SharedValue};
use crate::controls::{ActiveIndex, CommitContext, SwipeControl};
use crate::direction::SwipeDirection;
use crate::events::DeckEvent;
use crate::options::DeckConfig;
use crate::util::{interpolate_or, position};

/// Where the stack stands this frame, as seen by every card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackView {
    /// Raw active index.
    pub active: f32,
    /// Floored active index.
    pub floor: usize,
    /// Cards kept visible ahead of the active one.
    pub window: usize,
}

impl StackView {
    /// Snapshot of `index` with a prerender window of `window`.
    #[must_use]
    pub fn of(index: &ActiveIndex, window: usize) -> Self {
        let snapshot = index.snapshot();
        Self {
            active: snapshot.value,
            floor: snapshot.floor(),
            window: window.max(1),
        }
    }
}

/// Stacked scale of the card at `index` with `active` on top.
#[must_use]
pub fn stack_scale(index: usize, active: f32, step: f32) -> f32 {
    1.0 - step * (index as f32 - active)
}

/// One card of the stack.
#[derive(Debug, Clone)]
pub struct SwipeCard {
    index: usize,
    state: CardState,
    x: AnimatedValue,
    y: AnimatedValue,
    scale: AnimatedValue,
    scale_target: f32,
    opacity: AnimatedValue,
    opacity_target: f32,
    press: AnimatedValue,
    spin: AnimatedValue,
    flipped: bool,
    has_back: bool,
}

impl SwipeCard {
    /// Card for data index `index`, mounted at rest with its stack look
    /// already applied.
    #[must_use]
    pub fn new(index: usize, view: &StackView, config: &DeckConfig, has_back: bool) -> Self {
        let mut card = Self {
            index,
            state: CardState::Idle,
            x: AnimatedValue::new(0.0),
            y: AnimatedValue::new(0.0),
            scale: AnimatedValue::new(1.0),
            scale_target: 1.0,
            opacity: AnimatedValue::new(0.0),
            opacity_target: 0.0,
            press: AnimatedValue::new(1.0),
            spin: AnimatedValue::new(0.0),
            flipped: false,
            has_back,
        };
        card.scale_target = stack_scale(index, view.active, config.scale_step);
        card.scale.set(card.scale_target);
        card.opacity_target = card.target_opacity(view);
        card.opacity.set(card.opacity_target);
        card
    }

    /// Absolute data index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Gesture state.
    #[must_use]
    pub fn state(&self) -> &CardState {
        &self.state
    }

    /// Whether a pan is in progress on this card.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, CardState::Dragging(_))
    }

    /// Current offset from rest.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.x.get(), self.y.get())
    }

    /// Handles to the published X/Y translation, readable from any thread.
    #[must_use]
    pub fn shared_translation(&self) -> (SharedValue, SharedValue) {
        (self.x.shared().clone(), self.y.shared().clone())
    }

    /// Whether the back face is (or is turning) towards the viewer.
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Whether the card has alternate content.
    #[must_use]
    pub fn has_back(&self) -> bool {
        self.has_back
    }

    /// Update whether alternate content exists. Losing it snaps the card
    /// back to its front face.
    pub fn set_has_back(&mut self, has_back: bool) {
        self.has_back = has_back;
        if !has_back && (self.flipped || self.spin.get() != 0.0) {
            self.flipped = false;
            self.spin.set(0.0);
        }
    }

    /// Whether any of the card's values is still animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.position_animating()
            || self.scale.is_animating()
            || self.opacity.is_animating()
            || self.press.is_animating()
            || self.spin.is_animating()
    }

    fn position_animating(&self) -> bool {
        self.x.is_animating() || self.y.is_animating()
    }

    /// Pan began. Accepted only by the active card; an in-flight position
    /// animation is cancelled and tracking restarts from where the card is.
    pub fn begin(&mut self, active: &ActiveIndex, config: &DeckConfig) -> bool {
        if !active.is_active(self.index) {
            return false;
        }
        self.x.cancel();
        self.y.cancel();
        let origin = self.translation();
        self.state = CardState::Dragging(DragState {
            origin,
            translation: origin,
            classification: classify(origin, self.index, config),
            index: self.index,
        });
        if let Some(press) = config.press {
            self.press.timing_to(press.scale, press.duration, press.easing);
        }
        log::debug!("card {} drag begin at {origin}", self.index);
        true
    }

    /// Pan moved by `translation` since it began.
    pub fn update(&mut self, translation: Vec2, config: &DeckConfig) -> bool {
        let CardState::Dragging(drag) = &mut self.state else {
            return false;
        };
        let position = drag.origin + translation;
        drag.translation = position;
        drag.classification = classify(position, drag.index, config);
        self.x.set(position.x);
        self.y.set(position.y);
        log::trace!(
            "card {} at {position}, provisional {}",
            self.index,
            drag.classification.provisional
        );
        true
    }

    /// Pan ended. Returns the decision if this card was dragging and is
    /// still the active card.
    ///
    /// A [`Release::Reset`] has already been applied. A
    /// [`Release::Commit`] is left for the coordinator, which commits
    /// through [`SwipeControl::commit`].
    pub fn finalize(
        &mut self,
        translation: Vec2,
        velocity: Vec2,
        active: &ActiveIndex,
        config: &DeckConfig,
    ) -> Option<Release> {
        let CardState::Dragging(drag) = self.state else {
            return None;
        };
        self.release_press(config);
        if !active.is_active(drag.index) {
            log::debug!("card {} is no longer active, returning home", self.index);
            self.spring_home(config);
            return None;
        }
        let position = drag.origin + translation;
        self.x.set(position.x);
        self.y.set(position.y);
        let classification = classify(position, drag.index, config);
        let release = decide(position, velocity, classification, drag.index, config);
        log::debug!("card {} released at {position}: {release:?}", self.index);
        if release == Release::Reset {
            self.spring_home(config);
        }
        Some(release)
    }

    /// Tap on this card. Only the active card reports a press.
    #[must_use]
    pub fn tap(&self, active: &ActiveIndex) -> bool {
        active.is_active(self.index)
    }

    /// Advance all animations by `dt`. Returns whether anything is still
    /// moving.
    pub fn tick(&mut self, dt: Duration, view: &StackView, config: &DeckConfig) -> bool {
        let _ = self.x.tick(dt);
        let _ = self.y.tick(dt);
        if matches!(self.state, CardState::Committing(_) | CardState::Resetting)
            && !self.position_animating()
        {
            log::trace!("card {} settled after {}", self.index, self.state.name());
            self.state = CardState::Idle;
        }
        let _ = self.press.tick(dt);
        let _ = self.spin.tick(dt);
        self.retarget_stack(view, config);
        let _ = self.scale.tick(dt);
        let _ = self.opacity.tick(dt);
        self.is_animating()
    }

    /// Drawable state for this frame.
    #[must_use]
    pub fn visual(&self, view: &StackView, config: &DeckConfig) -> CardVisual {
        let translation = self.translation();
        let opacity = self.opacity.get();
        CardVisual {
            translation,
            rotation: interpolate_or(
                translation.x,
                &config.rotate_input_range,
                &config.rotate_output_range,
                0.0,
            ),
            scale: self.scale.get() * self.press.get(),
            opacity,
            z_index: -(self.index as i64),
            visible: opacity > 0.0,
            interactive: view.floor == self.index,
            overlays: OverlayOpacities::from_translation(translation, &config.overlays),
            flip: self
                .has_back
                .then(|| FlipFaces::at(self.spin.get(), config.flip.axis)),
        }
    }

    /// Opacity the card should head towards: shown inside the window,
    /// and just behind it only while it is still flying out or returning.
    fn target_opacity(&self, view: &StackView) -> f32 {
        let d = self.index as i64 - view.floor as i64;
        let window = i64::try_from(view.window).unwrap_or(i64::MAX);
        let in_window = (0..=window).contains(&d);
        if in_window || (d == -1 && self.position_animating()) {
            1.0
        } else {
            0.0
        }
    }

    fn retarget_stack(&mut self, view: &StackView, config: &DeckConfig) {
        let scale = stack_scale(self.index, view.active, config.scale_step);
        if (scale - self.scale_target).abs() > f32::EPSILON {
            self.scale_target = scale;
            self.scale
                .timing_to(scale, config.stack_transition, config.stack_easing);
        }
        let opacity = self.target_opacity(view);
        if opacity != self.opacity_target {
            self.opacity_target = opacity;
            self.opacity
                .timing_to(opacity, config.stack_transition, config.stack_easing);
        }
    }

    fn release_press(&mut self, config: &DeckConfig) {
        match config.press {
            Some(press) => self.press.timing_to(1.0, press.duration, press.easing),
            None if self.press.get() != 1.0 => self.press.set(1.0),
            None => {}
        }
    }

    fn spring_home(&mut self, config: &DeckConfig) {
        position::reset_position(&mut self.x, &mut self.y, &config.springs.back);
        self.state = CardState::Resetting;
    }
}

impl SwipeControl for SwipeCard {
    fn commit(
        &mut self,
        direction: SwipeDirection,
        velocity: Vec2,
        ctx: &mut CommitContext<'_>,
    ) {
        ctx.events.dispatch(DeckEvent::Swiped {
            direction,
            index: self.index,
        });
        if self.is_dragging() {
            self.release_press(ctx.config);
        }
        position::update_position(&mut self.x, &mut self.y, direction, velocity, ctx.config);
        self.state = CardState::Committing(direction);
        let now = ctx.index.advance();
        log::debug!(
            "card {} committed {}, index now {now}",
            self.index,
            direction.as_str()
        );
    }

    fn swipe_back(&mut self, config: &DeckConfig) {
        self.x.cancel();
        self.y.cancel();
        self.spring_home(config);
        log::debug!("card {} swiped back", self.index);
    }

    fn flip(&mut self, config: &DeckConfig) -> bool {
        if !self.has_back {
            log::debug!("card {} has no back, flip ignored", self.index);
            return false;
        }
        self.flipped = !self.flipped;
        let target = if self.flipped { 180.0 } else { 0.0 };
        self.spin
            .timing_to(target, config.flip.duration, config.flip.easing);
        true
    }

    fn reset_position(&mut self, config: &DeckConfig) {
        self.spring_home(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::HostScheduler;
    use crate::options::DeckOptions;

    const FRAME: Duration = Duration::from_millis(16);

    #[derive(Debug, Default)]
    struct Recorder(Vec<DeckEvent>);

    impl HostScheduler for Recorder {
        fn dispatch(&mut self, event: DeckEvent) {
            self.0.push(event);
        }
    }

    fn config() -> DeckConfig {
        let mut opts = DeckOptions::default();
        opts.viewport.width = 300.0;
        opts.viewport.height = 600.0;
        opts.resolve(3).unwrap()
    }

    fn settle(card: &mut SwipeCard, index: &ActiveIndex, cfg: &DeckConfig) {
        for _ in 0..1000 {
            let view = StackView::of(index, 2);
            if !card.tick(FRAME, &view, cfg) {
                return;
            }
        }
        panic!("card {} never settled", card.index());
    }

    fn card_at(index: usize, active: &ActiveIndex, cfg: &DeckConfig) -> SwipeCard {
        SwipeCard::new(index, &StackView::of(active, 2), cfg, false)
    }

    #[test]
    fn only_the_active_card_accepts_a_pan() {
        let cfg = config();
        let active = ActiveIndex::new(0);
        let mut behind = card_at(1, &active, &cfg);
        assert!(!behind.begin(&active, &cfg));
        assert!(!behind.update(Vec2::new(50.0, 0.0), &cfg));
        assert_eq!(behind.translation(), Vec2::ZERO);
        assert_eq!(*behind.state(), CardState::Idle);
    }

    #[test]
    fn drag_tracks_one_to_one_and_classifies() {
        let cfg = config();
        let active = ActiveIndex::new(0);
        let mut card = card_at(0, &active, &cfg);
        assert!(card.begin(&active, &cfg));
        assert!(card.update(Vec2::new(75.0, -12.0), &cfg));
        assert_eq!(card.translation(), Vec2::new(75.0, -12.0));
        let CardState::Dragging(drag) = card.state() else {
            panic!("not dragging");
        };
        assert!((drag.classification.provisional - 0.75).abs() < 1e-6);
    }

    #[test]
    fn short_release_springs_home() {
        let cfg = config();
        let active = ActiveIndex::new(0);
        let mut card = card_at(0, &active, &cfg);
        let _ = card.begin(&active, &cfg);
        let release = card.finalize(Vec2::new(30.0, 10.0), Vec2::ZERO, &active, &cfg);
        assert_eq!(release, Some(Release::Reset));
        assert_eq!(*card.state(), CardState::Resetting);
        settle(&mut card, &active, &cfg);
        assert_eq!(card.translation(), Vec2::ZERO);
        assert_eq!(*card.state(), CardState::Idle);
        assert_eq!(active.get(), 0.0);
    }

    #[test]
    fn commit_dispatches_then_advances_and_flies_out() {
        let cfg = config();
        let active = ActiveIndex::new(0);
        let mut card = card_at(0, &active, &cfg);
        let _ = card.begin(&active, &cfg);
        let release = card.finalize(Vec2::new(90.0, 0.0), Vec2::new(300.0, 0.0), &active, &cfg);
        assert_eq!(release, Some(Release::Commit(SwipeDirection::Right)));

        let mut events = Recorder::default();
        let mut ctx = CommitContext {
            config: &cfg,
            index: &active,
            events: &mut events,
        };
        card.commit(SwipeDirection::Right, Vec2::new(300.0, 0.0), &mut ctx);
        assert_eq!(
            events.0,
            vec![DeckEvent::Swiped {
                direction: SwipeDirection::Right,
                index: 0
            }]
        );
        assert_eq!(active.get(), 1.0);
        assert_eq!(*card.state(), CardState::Committing(SwipeDirection::Right));

        settle(&mut card, &active, &cfg);
        assert_eq!(card.translation().x, 450.0);
        assert_eq!(*card.state(), CardState::Idle);
        // Swiped past: fades out once it has landed.
        let view = StackView::of(&active, 2);
        assert!(!card.visual(&view, &cfg).visible);
        assert!(!card.visual(&view, &cfg).interactive);
    }

    #[test]
    fn release_after_losing_active_status_decides_nothing() {
        let cfg = config();
        let active = ActiveIndex::new(0);
        let mut card = card_at(0, &active, &cfg);
        let _ = card.begin(&active, &cfg);
        let _ = card.update(Vec2::new(200.0, 0.0), &cfg);
        active.set(1);
        assert_eq!(
            card.finalize(Vec2::new(200.0, 0.0), Vec2::ZERO, &active, &cfg),
            None
        );
        assert_eq!(active.get(), 1.0);
    }

    #[test]
    fn new_gesture_mid_animation_starts_from_current_value() {
        let cfg = config();
        let active = ActiveIndex::new(0);
        let mut card = card_at(0, &active, &cfg);
        let _ = card.begin(&active, &cfg);
        let _ = card.finalize(Vec2::new(40.0, 0.0), Vec2::ZERO, &active, &cfg);
        let view = StackView::of(&active, 2);
        for _ in 0..3 {
            let _ = card.tick(FRAME, &view, &cfg);
        }
        let mid = card.translation();
        assert!(mid.x > 0.0 && mid.x < 40.0, "{mid:?}");

        assert!(card.begin(&active, &cfg));
        // Animation is cancelled: ticking does not move the card.
        let _ = card.tick(FRAME, &view, &cfg);
        assert_eq!(card.translation(), mid);
        let _ = card.update(Vec2::new(10.0, 0.0), &cfg);
        assert_eq!(card.translation(), mid + Vec2::new(10.0, 0.0));
    }

    #[test]
    fn swipe_back_cancels_and_returns_home() {
        let cfg = config();
        let active = ActiveIndex::new(0);
        let mut card = card_at(0, &active, &cfg);
        let mut events = Recorder::default();
        let mut ctx = CommitContext {
            config: &cfg,
            index: &active,
            events: &mut events,
        };
        card.commit(SwipeDirection::Top, Vec2::ZERO, &mut ctx);
        let view = StackView::of(&active, 2);
        let _ = card.tick(FRAME, &view, &cfg);
        card.swipe_back(&cfg);
        assert_eq!(*card.state(), CardState::Resetting);
        active.set(0);
        settle(&mut card, &active, &cfg);
        assert_eq!(card.translation(), Vec2::ZERO);
        let view = StackView::of(&active, 2);
        assert!(card.visual(&view, &cfg).visible);
    }

    #[test]
    fn flip_needs_a_back() {
        let cfg = config();
        let active = ActiveIndex::new(0);
        let mut plain = card_at(0, &active, &cfg);
        assert!(!plain.flip(&cfg));
        assert!(plain.visual(&StackView::of(&active, 2), &cfg).flip.is_none());

        let mut card = SwipeCard::new(0, &StackView::of(&active, 2), &cfg, true);
        assert!(card.flip(&cfg));
        assert!(card.is_flipped());
        settle(&mut card, &active, &cfg);
        let faces = card
            .visual(&StackView::of(&active, 2), &cfg)
            .flip
            .unwrap();
        assert_eq!(faces.front_rotation, 180.0);
        assert!(faces.back_visible());
        assert!(card.flip(&cfg));
        settle(&mut card, &active, &cfg);
        assert!(!card.is_flipped());

        card.set_has_back(false);
        assert!(!card.flip(&cfg));
    }

    #[test]
    fn press_feedback_scales_while_held() {
        let mut opts = DeckOptions::default();
        opts.gesture.press_scale = Some(0.9);
        let cfg = opts.resolve(3).unwrap();
        let active = ActiveIndex::new(0);
        let mut card = card_at(0, &active, &cfg);
        let view = StackView::of(&active, 2);
        let _ = card.begin(&active, &cfg);
        for _ in 0..20 {
            let _ = card.tick(FRAME, &view, &cfg);
        }
        assert!((card.visual(&view, &cfg).scale - 0.9).abs() < 1e-5);
        let _ = card.finalize(Vec2::ZERO, Vec2::ZERO, &active, &cfg);
        settle(&mut card, &active, &cfg);
        assert!((card.visual(&view, &cfg).scale - 1.0).abs() < 1e-5);
    }

    #[test]
    fn stack_look_follows_the_active_index() {
        let cfg = config();
        let active = ActiveIndex::new(0);
        let mut card = card_at(2, &active, &cfg);
        let view = StackView::of(&active, 2);
        let visual = card.visual(&view, &cfg);
        assert!((visual.scale - 0.86).abs() < 1e-5);
        assert_eq!(visual.z_index, -2);
        assert!(visual.visible);
        assert!(!visual.interactive);

        let _ = active.advance();
        settle(&mut card, &active, &cfg);
        let visual = card.visual(&StackView::of(&active, 2), &cfg);
        assert!((visual.scale - 0.93).abs() < 1e-5);
    }

    #[test]
    fn rotation_and_overlays_follow_translation() {
        let cfg = config();
        let active = ActiveIndex::new(0);
        let mut card = card_at(0, &active, &cfg);
        let _ = card.begin(&active, &cfg);
        let _ = card.update(Vec2::new(-100.0, 0.0), &cfg);
        let visual = card.visual(&StackView::of(&active, 2), &cfg);
        assert!((visual.rotation + std::f32::consts::PI / 20.0).abs() < 1e-6);
        assert_eq!(visual.overlays.left, 1.0);
        assert_eq!(visual.overlays.right, 0.0);
    }
}
