// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Headless core of a swipeable card stack.
//!
//! Given an ordered list of items, a [`deck::Deck`] keeps a bounded window
//! of stacked cards mounted, lets the host drag the topmost one, and
//! commits a directional swipe once the drag crosses a threshold. The
//! crate owns the gesture state machine, the shared active index, and the
//! spring/timing animation of every card; the host owns drawing.
//!
//! # Key entry points
//!
//! - [`deck::Deck`] - the stack orchestrator, built with
//!   [`deck::DeckBuilder`]
//! - [`deck::DeckHandle`] - `Send` command handle for the host context
//! - [`options::DeckOptions`] - configuration (TOML presets, JSON schema)
//! - [`card::SwipeCard`] - per-card gesture state machine
//! - [`controls::SwipeControls`] - index bookkeeping and looping
//!
//! # Contexts
//!
//! The deck lives in the gesture/animation context: the host feeds it pan
//! samples and frame ticks. Everything the host needs to observe crosses
//! over as [`events::DeckEvent`]s delivered through a
//! [`events::HostScheduler`], or as atomic snapshots of
//! [`controls::ActiveIndex`] and card transforms.

pub mod animation;
pub mod card;
pub mod controls;
pub mod deck;
pub mod direction;
pub mod error;
pub mod events;
pub mod input;
pub mod options;
pub mod util;

pub use deck::{Deck, DeckBuilder, DeckCommand, DeckHandle};
pub use direction::SwipeDirection;
pub use error::DeckError;
pub use events::{DeckEvent, HostScheduler, SwipeCallbacks};
pub use options::{DeckConfig, DeckOptions};
