//! Turns raw pointer events into pan and tap gestures.
//!
//! The `GestureProcessor` owns all transient pointer state (press origin,
//! slop detection, recent samples for velocity) and sits between the
//! platform's pointer stream and the deck's pan/tap entry points.

use std::collections::VecDeque;

use glam::Vec2;
use web_time::Duration;

use super::event::{GestureEvent, PanEvent, PointerEvent, TapEvent};

/// Movement below this distance (px) still counts as a tap.
pub const DEFAULT_SLOP: f32 = 8.0;

/// Samples older than this are ignored when estimating release velocity.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// Pointer state between a down and the matching up.
#[derive(Debug, Clone)]
struct Press {
    origin: Vec2,
    translation: Vec2,
    panning: bool,
    samples: VecDeque<(Duration, Vec2)>,
}

/// Converts [`PointerEvent`]s into [`GestureEvent`]s.
///
/// A press emits `Pan(Begin)` immediately. Moves past the slop distance
/// emit `Pan(Update)`. Release always emits `Pan(End)` with a velocity
/// estimated from the last 100 ms of samples, followed by a
/// successful `Tap` if the pointer never left the slop radius.
///
/// # Usage
///
/// ```ignore
/// for gesture in processor.handle(event) {
///     match gesture {
///         GestureEvent::Pan(pan) => deck.handle_top_pan(pan),
///         GestureEvent::Tap(tap) => deck.handle_tap(tap),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GestureProcessor {
    slop: f32,
    press: Option<Press>,
}

impl Default for GestureProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_SLOP)
    }
}

impl GestureProcessor {
    /// Processor treating movement under `slop` px as a tap.
    #[must_use]
    pub fn new(slop: f32) -> Self {
        Self {
            slop: slop.max(0.0),
            press: None,
        }
    }

    /// Whether a pointer is currently held.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Process one pointer event.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<GestureEvent> {
        match event {
            PointerEvent::Down { position, time } => self.down(position, time),
            PointerEvent::Move { position, time } => self.moved(position, time),
            PointerEvent::Up { position, time } => self.up(position, time),
            PointerEvent::Cancel => self.cancel(),
        }
    }

    fn down(&mut self, position: Vec2, time: Duration) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        // A second down without an up: close the stale pan first.
        if self.press.is_some() {
            events.extend(self.cancel());
        }
        let mut samples = VecDeque::new();
        samples.push_back((time, position));
        self.press = Some(Press {
            origin: position,
            translation: Vec2::ZERO,
            panning: false,
            samples,
        });
        events.push(GestureEvent::Pan(PanEvent::Begin));
        events
    }

    fn moved(&mut self, position: Vec2, time: Duration) -> Vec<GestureEvent> {
        let slop = self.slop;
        let Some(press) = self.press.as_mut() else {
            return Vec::new();
        };
        press.record(position, time);
        press.translation = position - press.origin;
        if !press.panning && press.translation.length() > slop {
            press.panning = true;
            log::trace!("pan recognized at {:?}", press.translation);
        }
        if press.panning {
            vec![GestureEvent::Pan(PanEvent::Update {
                translation: press.translation,
            })]
        } else {
            Vec::new()
        }
    }

    fn up(&mut self, position: Vec2, time: Duration) -> Vec<GestureEvent> {
        let Some(mut press) = self.press.take() else {
            return Vec::new();
        };
        press.record(position, time);
        press.translation = position - press.origin;
        let tapped = !press.panning && press.translation.length() <= self.slop;
        let mut events = vec![GestureEvent::Pan(PanEvent::End {
            translation: press.translation,
            velocity: press.velocity(),
        })];
        if tapped {
            events.push(GestureEvent::Tap(TapEvent { success: true }));
        }
        events
    }

    fn cancel(&mut self) -> Vec<GestureEvent> {
        let Some(press) = self.press.take() else {
            return Vec::new();
        };
        vec![
            GestureEvent::Pan(PanEvent::End {
                translation: press.translation,
                velocity: Vec2::ZERO,
            }),
            GestureEvent::Tap(TapEvent { success: false }),
        ]
    }
}

impl Press {
    fn record(&mut self, position: Vec2, time: Duration) {
        self.samples.push_back((time, position));
        while let Some(&(oldest, _)) = self.samples.front() {
            if time.saturating_sub(oldest) > VELOCITY_WINDOW && self.samples.len() > 2 {
                let _ = self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Average velocity over the retained samples, px/s.
    fn velocity(&self) -> Vec2 {
        let (Some(&(t0, p0)), Some(&(t1, p1))) = (self.samples.front(), self.samples.back())
        else {
            return Vec2::ZERO;
        };
        let dt = t1.saturating_sub(t0).as_secs_f32();
        if dt <= f32::EPSILON {
            return Vec2::ZERO;
        }
        (p1 - p0) / dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn pans(events: &[GestureEvent]) -> Vec<PanEvent> {
        events
            .iter()
            .filter_map(|e| match e {
                GestureEvent::Pan(p) => Some(*p),
                GestureEvent::Tap(_) => None,
            })
            .collect()
    }

    #[test]
    fn press_and_release_in_place_is_a_tap() {
        let mut p = GestureProcessor::default();
        let down = p.handle(PointerEvent::Down {
            position: Vec2::new(100.0, 100.0),
            time: ms(0),
        });
        assert_eq!(down, vec![GestureEvent::Pan(PanEvent::Begin)]);
        let _ = p.handle(PointerEvent::Move {
            position: Vec2::new(102.0, 101.0),
            time: ms(30),
        });
        let up = p.handle(PointerEvent::Up {
            position: Vec2::new(102.0, 101.0),
            time: ms(60),
        });
        assert_eq!(up.len(), 2);
        assert_eq!(up[1], GestureEvent::Tap(TapEvent { success: true }));
        assert!(!p.is_pressed());
    }

    #[test]
    fn drag_emits_updates_and_release_velocity() {
        let mut p = GestureProcessor::default();
        let _ = p.handle(PointerEvent::Down {
            position: Vec2::ZERO,
            time: ms(0),
        });
        let mut updates = Vec::new();
        for i in 1..=10_u64 {
            updates.extend(p.handle(PointerEvent::Move {
                position: Vec2::new(i as f32 * 10.0, 0.0),
                time: ms(i * 10),
            }));
        }
        assert_eq!(
            pans(&updates).last(),
            Some(&PanEvent::Update {
                translation: Vec2::new(100.0, 0.0)
            })
        );
        let up = p.handle(PointerEvent::Up {
            position: Vec2::new(110.0, 0.0),
            time: ms(110),
        });
        assert_eq!(up.len(), 1);
        let PanEvent::End {
            translation,
            velocity,
        } = pans(&up)[0]
        else {
            panic!("expected end");
        };
        assert_eq!(translation, Vec2::new(110.0, 0.0));
        // 10 px every 10 ms.
        assert!((velocity.x - 1000.0).abs() < 1.0, "{velocity:?}");
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn stale_samples_do_not_dilute_velocity() {
        let mut p = GestureProcessor::default();
        let _ = p.handle(PointerEvent::Down {
            position: Vec2::ZERO,
            time: ms(0),
        });
        // Hold still for a second, then flick.
        let _ = p.handle(PointerEvent::Move {
            position: Vec2::ZERO,
            time: ms(1000),
        });
        let _ = p.handle(PointerEvent::Move {
            position: Vec2::new(0.0, 40.0),
            time: ms(1040),
        });
        let up = p.handle(PointerEvent::Up {
            position: Vec2::new(0.0, 80.0),
            time: ms(1080),
        });
        let PanEvent::End { velocity, .. } = pans(&up)[0] else {
            panic!("expected end");
        };
        assert!((velocity.y - 1000.0).abs() < 1.0, "{velocity:?}");
    }

    #[test]
    fn cancel_ends_without_tap() {
        let mut p = GestureProcessor::default();
        let _ = p.handle(PointerEvent::Down {
            position: Vec2::ZERO,
            time: ms(0),
        });
        let events = p.handle(PointerEvent::Cancel);
        assert_eq!(events[1], GestureEvent::Tap(TapEvent { success: false }));
        assert!(p.handle(PointerEvent::Cancel).is_empty());
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut p = GestureProcessor::default();
        assert!(p
            .handle(PointerEvent::Move {
                position: Vec2::ONE,
                time: ms(5),
            })
            .is_empty());
    }
}
