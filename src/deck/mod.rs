//! The stack orchestrator.
//!
//! A [`Deck`] owns the item list, the resolved [`DeckConfig`], the
//! [`SwipeControls`] coordinator and the bounded window of mounted cards.
//! It routes pan/tap input to the active card, runs imperative
//! [`DeckCommand`]s, steps animations and reports what the host should
//! draw. Index-derived notifications (`IndexChanged`, `SwipedAll`) are
//! emitted by an [`IndexObserver`] after every mutation, so a commit's
//! direction event always precedes them.
//!
//! # Window
//!
//! With `f = floor(activeIndex)` and prerender width `W`, cards
//! `[f - 1, f + W]` are mounted. Cards `f..=f + W` are opaque; card `f - 1`
//! stays visible only while it is still flying out, then fades.

mod builder;
mod command;
pub mod entry;
mod handle;
mod observer;

use std::ops::Range;
use std::sync::mpsc;

pub use builder::DeckBuilder;
pub use command::DeckCommand;
use entry::{CardEntry, CardFrame, MountedCards};
pub use handle::DeckHandle;
pub use observer::IndexObserver;
use web_time::Duration;

use crate::card::{Release, StackView, SwipeCard};
use crate::controls::{ActiveIndex, ControlScope, SwipeControl, SwipeControls};
use crate::direction::SwipeDirection;
use crate::events::{DeckEvent, HostScheduler};
use crate::input::{GestureEvent, GestureProcessor, PanEvent, PointerEvent, TapEvent};
use crate::options::DeckConfig;

/// Renders one item (front or back face). Must be pure: it may run more
/// than once for the same item.
pub type Renderer<T, R> = Box<dyn Fn(&T, usize) -> R + Send>;

/// Derives a stable key for one item.
pub type KeyExtractor<T> = Box<dyn Fn(&T, usize) -> String + Send>;

/// A mounted card stack over items of type `T` rendered to `R`.
pub struct Deck<T, R> {
    items: Vec<T>,
    renderer: Renderer<T, R>,
    flipped: Option<Renderer<T, R>>,
    key_extractor: Option<KeyExtractor<T>>,
    config: DeckConfig,
    controls: SwipeControls,
    cards: MountedCards<R>,
    observer: IndexObserver,
    scheduler: Box<dyn HostScheduler>,
    command_tx: mpsc::Sender<DeckCommand>,
    command_rx: mpsc::Receiver<DeckCommand>,
    gestures: GestureProcessor,
    /// Card a raw pointer pan is locked to.
    pointer_target: Option<usize>,
}

impl<T, R> Deck<T, R> {
    /// Start configuring a deck over `items`.
    #[must_use]
    pub fn builder(
        items: Vec<T>,
        renderer: impl Fn(&T, usize) -> R + Send + 'static,
    ) -> DeckBuilder<T, R> {
        DeckBuilder::new(items, Box::new(renderer))
    }

    // ── Accessors ──────────────────────────────────────────────────────

    /// Resolved configuration.
    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// The shared active index.
    #[must_use]
    pub fn active_index(&self) -> &ActiveIndex {
        self.controls.index()
    }

    /// A `Send` handle for the host context.
    #[must_use]
    pub fn handle(&self) -> DeckHandle {
        DeckHandle::new(self.command_tx.clone(), self.controls.index().clone())
    }

    /// The data list.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the data list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The mounted card for data index `index`.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&SwipeCard> {
        self.cards.get(index).map(|entry| &entry.card)
    }

    /// All mounted cards.
    #[must_use]
    pub fn mounted(&self) -> &MountedCards<R> {
        &self.cards
    }

    /// Prerender width for the current data length.
    #[must_use]
    pub fn window(&self) -> usize {
        self.config.prerender(self.items.len())
    }

    /// Data indices that should be mounted right now.
    #[must_use]
    pub fn window_range(&self) -> Range<usize> {
        let floor = self.controls.index().floor();
        let len = self.items.len();
        let start = floor.saturating_sub(1).min(len);
        let end = floor
            .saturating_add(self.window())
            .saturating_add(1)
            .min(len);
        start..end.max(start)
    }

    fn view(&self) -> StackView {
        StackView::of(self.controls.index(), self.window())
    }

    /// Render the item at `index` with the front renderer.
    #[must_use]
    pub fn render(&self, index: usize) -> Option<R> {
        self.items.get(index).map(|item| (self.renderer)(item, index))
    }

    fn key_for(&self, item: &T, index: usize) -> String {
        self.key_extractor
            .as_ref()
            .map_or_else(|| index.to_string(), |f| f(item, index))
    }

    // ── Input ──────────────────────────────────────────────────────────

    /// Feed a pan sample to the card at data index `card`. Cards other
    /// than the active one ignore it.
    pub fn handle_pan(&mut self, card: usize, event: PanEvent) {
        let Some(entry) = self.cards.get_mut(card) else {
            return;
        };
        match event {
            PanEvent::Begin => {
                if entry.card.begin(self.controls.index(), &self.config) {
                    self.scheduler.dispatch(DeckEvent::SwipeStart);
                }
            }
            PanEvent::Update { translation } => {
                if entry.card.update(translation, &self.config) {
                    self.scheduler.dispatch(DeckEvent::SwipeActive);
                }
            }
            PanEvent::End {
                translation,
                velocity,
            } => {
                let Some(release) = entry.card.finalize(
                    translation,
                    velocity,
                    self.controls.index(),
                    &self.config,
                ) else {
                    return;
                };
                self.scheduler.dispatch(DeckEvent::SwipeEnd);
                if let Release::Commit(direction) = release {
                    let mut scope = ControlScope {
                        config: &self.config,
                        len: self.items.len(),
                        events: self.scheduler.as_mut(),
                    };
                    let committed = self.controls.commit_at(
                        &mut self.cards,
                        card,
                        direction,
                        velocity,
                        &mut scope,
                    );
                    if !committed {
                        if let Some(entry) = self.cards.get_mut(card) {
                            entry.card.reset_position(&self.config);
                        }
                    }
                    self.after_index_change();
                }
            }
        }
    }

    /// Feed a pan sample to whichever card is on top.
    pub fn handle_top_pan(&mut self, event: PanEvent) {
        self.handle_pan(self.controls.index().floor(), event);
    }

    /// A tap on the active card.
    pub fn handle_tap(&mut self, tap: TapEvent) {
        if !tap.success {
            return;
        }
        let index = self.controls.index();
        if self
            .cards
            .get(index.floor())
            .is_some_and(|entry| entry.card.tap(index))
        {
            self.scheduler.dispatch(DeckEvent::Press);
        }
    }

    /// Feed a raw pointer event. The pan is locked to the card that was on
    /// top when the pointer went down.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        for gesture in self.gestures.handle(event) {
            match gesture {
                GestureEvent::Pan(pan) => {
                    if pan == PanEvent::Begin {
                        self.pointer_target = Some(self.controls.index().floor());
                    }
                    if let Some(target) = self.pointer_target {
                        self.handle_pan(target, pan);
                    }
                    if matches!(pan, PanEvent::End { .. }) {
                        self.pointer_target = None;
                    }
                }
                GestureEvent::Tap(tap) => self.handle_tap(tap),
            }
        }
    }

    // ── Commands ───────────────────────────────────────────────────────

    /// Run one command now. Returns whether it had an effect.
    pub fn execute(&mut self, command: DeckCommand) -> bool {
        let len = self.items.len();
        let done = match command {
            DeckCommand::Swipe(direction) => {
                let mut scope = ControlScope {
                    config: &self.config,
                    len,
                    events: self.scheduler.as_mut(),
                };
                self.controls.swipe(&mut self.cards, direction, &mut scope)
            }
            DeckCommand::SwipeBack => self
                .controls
                .swipe_back(&mut self.cards, &self.config, len)
                .is_some(),
            DeckCommand::Flip => self.controls.flip(&mut self.cards, &self.config),
        };
        if !done {
            log::info!("{} ignored at {}", command.name(), self.controls.index().get());
        }
        self.after_index_change();
        done
    }

    /// Run every command queued by [`DeckHandle`]s. Returns how many ran.
    pub fn pump(&mut self) -> usize {
        let commands: Vec<DeckCommand> = self.command_rx.try_iter().collect();
        for command in &commands {
            let _ = self.execute(*command);
        }
        commands.len()
    }

    /// Swipe the active card left.
    pub fn swipe_left(&mut self) -> bool {
        self.execute(DeckCommand::Swipe(SwipeDirection::Left))
    }

    /// Swipe the active card right.
    pub fn swipe_right(&mut self) -> bool {
        self.execute(DeckCommand::Swipe(SwipeDirection::Right))
    }

    /// Swipe the active card up.
    pub fn swipe_top(&mut self) -> bool {
        self.execute(DeckCommand::Swipe(SwipeDirection::Top))
    }

    /// Swipe the active card down.
    pub fn swipe_bottom(&mut self) -> bool {
        self.execute(DeckCommand::Swipe(SwipeDirection::Bottom))
    }

    /// Bring the previous card back.
    pub fn swipe_back(&mut self) -> bool {
        self.execute(DeckCommand::SwipeBack)
    }

    /// Flip the active card.
    pub fn flip_card(&mut self) -> bool {
        self.execute(DeckCommand::Flip)
    }

    // ── Frame ──────────────────────────────────────────────────────────

    /// Step every mounted card by `dt`. Returns whether anything is still
    /// animating.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let view = self.view();
        let mut animating = false;
        for entry in self.cards.iter_mut() {
            animating |= entry.card.tick(dt, &view, &self.config);
        }
        animating
    }

    /// Mounted cards in paint order (later cards first, active card last).
    #[must_use]
    pub fn frame(&self) -> Vec<CardFrame<'_, R>> {
        let view = self.view();
        self.cards
            .indices_back_to_front()
            .into_iter()
            .filter_map(|index| self.cards.get(index))
            .map(|entry| CardFrame {
                key: &entry.key,
                index: entry.index,
                content: &entry.content,
                back: entry.back.as_ref(),
                visual: entry.card.visual(&view, &self.config),
            })
            .collect()
    }

    // ── Data ───────────────────────────────────────────────────────────

    /// Replace the data list. Mounted cards are re-rendered (remounted if
    /// their key changed), the window is re-synced and the index
    /// notifications are re-evaluated against the new length.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        let len = self.items.len();
        self.config.initial_index = self.config.initial_index.min(len.saturating_sub(1));
        let view = self.view();
        for index in self.cards.indices_back_to_front() {
            let Some(item) = self.items.get(index) else {
                continue;
            };
            let key = self.key_for(item, index);
            let content = (self.renderer)(item, index);
            let back = self.flipped.as_ref().map(|f| f(item, index));
            let Some(entry) = self.cards.get_mut(index) else {
                continue;
            };
            if entry.key == key {
                entry.card.set_has_back(back.is_some());
                entry.content = content;
                entry.back = back;
            } else {
                log::debug!("card {index} key {} -> {key}, remounting", entry.key);
                let card = SwipeCard::new(index, &view, &self.config, back.is_some());
                *entry = CardEntry {
                    key,
                    index,
                    content,
                    back,
                    card,
                };
            }
        }
        log::debug!("items replaced, {len} now");
        self.after_index_change();
    }

    /// Mount cards entering the window and drop those that left it.
    pub fn sync_window(&mut self) {
        let range = self.window_range();
        let before = self.cards.len();
        self.cards.retain(|index| range.contains(&index));
        let dropped = before - self.cards.len();
        let view = self.view();
        let mut mounted = 0;
        for index in range.clone() {
            if self.cards.contains(index) {
                continue;
            }
            let Some(item) = self.items.get(index) else {
                continue;
            };
            let back = self.flipped.as_ref().map(|f| f(item, index));
            let entry = CardEntry {
                key: self.key_for(item, index),
                index,
                content: (self.renderer)(item, index),
                card: SwipeCard::new(index, &view, &self.config, back.is_some()),
                back,
            };
            self.cards.insert(entry);
            mounted += 1;
        }
        if dropped > 0 || mounted > 0 {
            log::debug!("window {range:?}: mounted {mounted}, dropped {dropped}");
        }
    }

    fn after_index_change(&mut self) {
        let floor = self.controls.index().floor();
        self.observer.observe(
            floor,
            self.items.len(),
            self.config.looping,
            self.scheduler.as_mut(),
        );
        self.sync_window();
    }
}
