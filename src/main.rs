//! Headless deck simulator.
//!
//! Reads a small script (one command per line) from a file or stdin, drives
//! a deck of numbered cards with it and logs every event and frame summary.
//! Run with `RUST_LOG=info` (or `debug` for the state machine).
//!
//! ```text
//! swipe-deck-sim [SCRIPT] [--options deck.toml] [--items N]
//! ```
//!
//! Script commands: `left`, `right`, `top`, `bottom`, `back`, `flip`,
//! `tap`, `drag DX DY [VX VY]`, `tick MS`, `play MS`, `items N`. Lines
//! starting with `#` are ignored.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use glam::Vec2;
use swipe_deck::events::{queued, EventQueue};
use swipe_deck::input::{PanEvent, TapEvent};
use swipe_deck::util::FrameClock;
use swipe_deck::{Deck, DeckCommand, DeckOptions, SwipeDirection};
use web_time::Duration;

const FRAME: Duration = Duration::from_millis(16);

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = "swipe-deck-sim", about = "Replay a swipe script against a headless deck")]
struct Cli {
    /// Script file to replay (defaults to stdin).
    script: Option<PathBuf>,

    /// TOML deck options.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Number of cards in the deck.
    #[arg(long, default_value_t = 10)]
    items: usize,
}

fn read_script(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))
        }
        None => {
            let mut script = String::new();
            let _ = std::io::stdin()
                .read_to_string(&mut script)
                .map_err(|e| format!("stdin: {e}"))?;
            Ok(script)
        }
    }
}

fn numbered(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("card {i}")).collect()
}

fn number(word: Option<&str>, what: &str) -> Result<f32, String> {
    let word = word.ok_or_else(|| format!("missing {what}"))?;
    let value: f32 = word.parse().map_err(|e| format!("{what} '{word}': {e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{what} must be finite, got '{word}'"))
    }
}

struct Sim {
    deck: Deck<String, String>,
    events: EventQueue,
}

impl Sim {
    fn new(items: usize, options: DeckOptions) -> Result<Self, String> {
        let (scheduler, events) = queued();
        let deck = Deck::builder(numbered(items), |item: &String, _| item.clone())
            .flipped_content(|item, index| format!("{item} (back, #{index})"))
            .options(options)
            .scheduler(scheduler)
            .build()
            .map_err(|e| e.to_string())?;
        Ok(Self { deck, events })
    }

    fn run_line(&mut self, line: &str) -> Result<(), String> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(());
        };
        match command {
            "left" | "right" | "top" | "bottom" => {
                let direction = match command {
                    "left" => SwipeDirection::Left,
                    "right" => SwipeDirection::Right,
                    "top" => SwipeDirection::Top,
                    _ => SwipeDirection::Bottom,
                };
                let _ = self.deck.execute(DeckCommand::Swipe(direction));
            }
            "back" => {
                let _ = self.deck.execute(DeckCommand::SwipeBack);
            }
            "flip" => {
                let _ = self.deck.execute(DeckCommand::Flip);
            }
            "tap" => {
                self.deck.handle_top_pan(PanEvent::Begin);
                self.deck.handle_top_pan(PanEvent::End {
                    translation: Vec2::ZERO,
                    velocity: Vec2::ZERO,
                });
                self.deck.handle_tap(TapEvent { success: true });
            }
            "drag" => {
                let translation =
                    Vec2::new(number(words.next(), "dx")?, number(words.next(), "dy")?);
                let velocity = match words.next() {
                    Some(vx) => Vec2::new(number(Some(vx), "vx")?, number(words.next(), "vy")?),
                    None => Vec2::ZERO,
                };
                self.deck.handle_top_pan(PanEvent::Begin);
                self.deck.handle_top_pan(PanEvent::Update { translation });
                self.deck.handle_top_pan(PanEvent::End {
                    translation,
                    velocity,
                });
            }
            "tick" => {
                let ms = number(words.next(), "milliseconds")?;
                let frames = (ms / FRAME.as_millis() as f32).ceil() as usize;
                for _ in 0..frames {
                    let _ = self.deck.tick(FRAME);
                }
            }
            "play" => {
                let ms = number(words.next(), "milliseconds")?.max(0.0);
                let span = Duration::try_from_secs_f32(ms / 1000.0)
                    .map_err(|e| format!("play {ms}: {e}"))?;
                self.play(span);
            }
            "items" => {
                let word = words.next().ok_or("missing count")?;
                let n: usize = word.parse().map_err(|e| format!("count '{word}': {e}"))?;
                self.deck.set_items(numbered(n));
            }
            other => return Err(format!("unknown command '{other}'")),
        }
        Ok(())
    }

    /// Tick against the wall clock for `span`.
    fn play(&mut self, span: Duration) {
        let mut clock = FrameClock::default();
        let mut elapsed = Duration::ZERO;
        while elapsed < span {
            std::thread::sleep(FRAME);
            let dt = clock.next_delta();
            elapsed += dt;
            if !self.deck.tick(dt) {
                break;
            }
        }
        log::info!("played {elapsed:?} at {:.0} fps", clock.fps());
    }

    fn report(&self, line: &str) {
        for event in self.events.try_iter() {
            log::info!("  event {event:?}");
        }
        let visible: Vec<String> = self
            .deck
            .frame()
            .iter()
            .filter(|f| f.visual.visible)
            .map(|f| {
                format!(
                    "{}@({:.0},{:.0})x{:.2}",
                    f.content, f.visual.translation.x, f.visual.translation.y, f.visual.scale
                )
            })
            .collect();
        log::info!(
            "{line:<16} index {:.2} visible [{}]",
            self.deck.active_index().get(),
            visible.join(", ")
        );
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let options = match &cli.options {
        Some(path) => DeckOptions::load(path).map_err(|e| e.to_string())?,
        None => DeckOptions::default(),
    };
    let script = read_script(cli.script.as_deref())?;

    let mut sim = Sim::new(cli.items, options)?;
    sim.report("start");

    for (n, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        sim.run_line(line).map_err(|e| format!("line {}: {e}", n + 1))?;
        sim.report(line);
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(items: usize) -> Sim {
        Sim::new(items, DeckOptions::default()).unwrap()
    }

    #[test]
    fn cli_reads_script_and_flags() {
        let cli = Cli::try_parse_from([
            "swipe-deck-sim",
            "demo.txt",
            "--options",
            "deck.toml",
            "--items",
            "4",
        ])
        .unwrap();
        assert_eq!(cli.script, Some(PathBuf::from("demo.txt")));
        assert_eq!(cli.options, Some(PathBuf::from("deck.toml")));
        assert_eq!(cli.items, 4);

        let defaults = Cli::try_parse_from(["swipe-deck-sim"]).unwrap();
        assert_eq!(defaults.script, None);
        assert_eq!(defaults.items, 10);
        assert!(Cli::try_parse_from(["swipe-deck-sim", "--items", "many"]).is_err());
    }

    #[test]
    fn non_finite_script_numbers_are_rejected() {
        let mut sim = sim(3);
        assert!(sim.run_line("play inf").is_err());
        assert!(sim.run_line("tick NaN").is_err());
        assert!(sim.run_line("drag 10 inf").is_err());
        assert!(sim.run_line("items -2").is_err());
        assert_eq!(sim.deck.active_index().floor(), 0);
    }

    #[test]
    fn script_lines_drive_the_deck() {
        let mut sim = sim(3);
        sim.run_line("right").unwrap();
        sim.run_line("drag 100 0").unwrap();
        sim.run_line("tick 50").unwrap();
        assert_eq!(sim.deck.active_index().floor(), 2);
        sim.run_line("back").unwrap();
        assert_eq!(sim.deck.active_index().floor(), 1);
        sim.run_line("items 6").unwrap();
        assert_eq!(sim.deck.len(), 6);
        assert!(sim.run_line("sideways").is_err());
    }
}
