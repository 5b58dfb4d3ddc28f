use std::sync::mpsc;

use super::observer::IndexObserver;
use super::{Deck, KeyExtractor, Renderer};
use crate::controls::{ActiveIndex, SwipeControls};
use crate::deck::entry::MountedCards;
use crate::error::DeckError;
use crate::events::{HostScheduler, InlineScheduler, SwipeCallbacks};
use crate::input::GestureProcessor;
use crate::options::DeckOptions;

/// Configures and mounts a [`Deck`].
///
/// ```ignore
/// let (scheduler, events) = swipe_deck::events::queued();
/// let mut deck = Deck::builder(items, |item: &Item, _| item.title.clone())
///     .options(DeckOptions::load(Path::new("deck.toml"))?)
///     .key_extractor(|item, _| item.id.to_string())
///     .scheduler(scheduler)
///     .build()?;
/// ```
pub struct DeckBuilder<T, R> {
    items: Vec<T>,
    renderer: Renderer<T, R>,
    flipped: Option<Renderer<T, R>>,
    key_extractor: Option<KeyExtractor<T>>,
    options: DeckOptions,
    scheduler: Option<Box<dyn HostScheduler>>,
}

impl<T, R> DeckBuilder<T, R> {
    pub(super) fn new(items: Vec<T>, renderer: Renderer<T, R>) -> Self {
        Self {
            items,
            renderer,
            flipped: None,
            key_extractor: None,
            options: DeckOptions::default(),
            scheduler: None,
        }
    }

    /// Use `options` instead of the defaults.
    #[must_use]
    pub fn options(mut self, options: DeckOptions) -> Self {
        self.options = options;
        self
    }

    /// Derive stable card keys from the items instead of their index.
    #[must_use]
    pub fn key_extractor(
        mut self,
        f: impl Fn(&T, usize) -> String + Send + 'static,
    ) -> Self {
        self.key_extractor = Some(Box::new(f));
        self
    }

    /// Render alternate content for the back face. Without it, flip is a
    /// no-op.
    #[must_use]
    pub fn flipped_content(
        mut self,
        f: impl Fn(&T, usize) -> R + Send + 'static,
    ) -> Self {
        self.flipped = Some(Box::new(f));
        self
    }

    /// Run `callbacks` directly on the animation context.
    #[must_use]
    pub fn callbacks(self, callbacks: SwipeCallbacks) -> Self {
        self.scheduler(InlineScheduler::new(callbacks))
    }

    /// Deliver events through `scheduler`.
    #[must_use]
    pub fn scheduler(mut self, scheduler: impl HostScheduler + 'static) -> Self {
        self.scheduler = Some(Box::new(scheduler));
        self
    }

    /// Resolve the options and mount the initial window.
    ///
    /// # Errors
    ///
    /// [`DeckError::MissingCapability`] if no scheduler or callbacks were
    /// given, [`DeckError::InvalidOptions`] if the options do not resolve.
    pub fn build(self) -> Result<Deck<T, R>, DeckError> {
        let Some(scheduler) = self.scheduler else {
            return Err(DeckError::MissingCapability("host scheduler"));
        };
        let len = self.items.len();
        let config = self.options.resolve(len)?;
        let index = ActiveIndex::new(config.initial_index);
        let observer = IndexObserver::new(index.floor(), len, config.looping);
        let (command_tx, command_rx) = mpsc::channel();
        log::info!(
            "mounting deck of {len} items at {} (window {}, loop {})",
            config.initial_index,
            config.prerender(len),
            config.looping
        );

        let mut deck = Deck {
            items: self.items,
            renderer: self.renderer,
            flipped: self.flipped,
            key_extractor: self.key_extractor,
            config,
            controls: SwipeControls::new(index),
            cards: MountedCards::default(),
            observer,
            scheduler,
            command_tx,
            command_rx,
            gestures: GestureProcessor::default(),
            pointer_target: None,
        };
        deck.sync_window();
        Ok(deck)
    }
}
