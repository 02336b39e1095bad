use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::events::{HostEvents, Subscription};

const PERSPECTIVE_PX: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn normalize(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !self.has_area() {
            return None;
        }

        let nx = ((x - self.left) / self.width).clamp(0.0, 1.0);
        let ny = ((y - self.top) / self.height).clamp(0.0, 1.0);
        if nx.is_nan() || ny.is_nan() {
            return None;
        }

        Some((nx, ny))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn is_neutral(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Tilt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "perspective({PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Tilts toward the pointer: the edge under the pointer dips away from the
/// viewer. A box without area yields [`Tilt::NEUTRAL`].
pub fn compute_tilt(pointer_x: f64, pointer_y: f64, bounds: BoundingBox, max_degrees: f64) -> Tilt {
    let Some((nx, ny)) = bounds.normalize(pointer_x, pointer_y) else {
        return Tilt::NEUTRAL;
    };

    Tilt {
        rotate_x: (ny - 0.5) * max_degrees,
        rotate_y: (0.5 - nx) * max_degrees,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowOrigin {
    pub x_percent: f64,
    pub y_percent: f64,
}

impl GlowOrigin {
    pub const CENTER: GlowOrigin = GlowOrigin {
        x_percent: 50.0,
        y_percent: 50.0,
    };

    pub fn to_css_vars(&self) -> String {
        format!(
            "--mouse-x: {:.1}%; --mouse-y: {:.1}%;",
            self.x_percent, self.y_percent
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltState {
    max_degrees: f64,
    tilt: Tilt,
    glow: GlowOrigin,
}

impl TiltState {
    pub fn new(max_degrees: f64) -> Self {
        Self {
            max_degrees,
            tilt: Tilt::NEUTRAL,
            glow: GlowOrigin::CENTER,
        }
    }

    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    pub fn glow(&self) -> GlowOrigin {
        self.glow
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64, bounds: BoundingBox) -> Tilt {
        self.tilt = compute_tilt(x, y, bounds, self.max_degrees);
        self.glow = bounds
            .normalize(x, y)
            .map(|(nx, ny)| GlowOrigin {
                x_percent: nx * 100.0,
                y_percent: ny * 100.0,
            })
            .unwrap_or(GlowOrigin::CENTER);
        self.tilt
    }

    pub fn pointer_left(&mut self) -> Tilt {
        self.tilt = Tilt::NEUTRAL;
        self.glow = GlowOrigin::CENTER;
        self.tilt
    }
}

/// Wires a [`TiltState`] to a host's pointer notifications and forwards every
/// recomputed state to `sink`. Dropping the binding unsubscribes both
/// handlers.
pub struct TiltBinding {
    state: Rc<RefCell<TiltState>>,
    _subscriptions: [Subscription; 2],
}

impl TiltBinding {
    pub fn attach<H, F>(host: &H, max_degrees: f64, sink: F) -> Self
    where
        H: HostEvents + ?Sized,
        F: FnMut(TiltState) + 'static,
    {
        let state = Rc::new(RefCell::new(TiltState::new(max_degrees)));
        let sink = Rc::new(RefCell::new(sink));

        let move_state = Rc::clone(&state);
        let move_sink = Rc::clone(&sink);
        let on_move = host.on_pointer_move(Box::new(move |sample| {
            let next = {
                let mut state = move_state.borrow_mut();
                state.pointer_moved(sample.x, sample.y, sample.bounds);
                *state
            };
            (*move_sink.borrow_mut())(next);
        }));

        let leave_state = Rc::clone(&state);
        let leave_sink = sink;
        let on_leave = host.on_pointer_leave(Box::new(move || {
            let next = {
                let mut state = leave_state.borrow_mut();
                state.pointer_left();
                *state
            };
            (*leave_sink.borrow_mut())(next);
        }));

        Self {
            state,
            _subscriptions: [on_move, on_leave],
        }
    }

    pub fn current(&self) -> TiltState {
        *self.state.borrow()
    }
}

impl fmt::Debug for TiltBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TiltBinding")
            .field("state", &self.current())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ManualHost, PointerSample};

    fn card() -> BoundingBox {
        BoundingBox::new(100.0, 50.0, 200.0, 100.0)
    }

    #[test]
    fn center_of_box_is_neutral_for_any_intensity() {
        for max_degrees in [1.0, 12.0, 20.0, 45.0] {
            assert_eq!(compute_tilt(200.0, 100.0, card(), max_degrees), Tilt::NEUTRAL);
        }
    }

    #[test]
    fn top_left_corner_tilts_by_half_the_maximum() {
        let tilt = compute_tilt(100.0, 50.0, card(), 20.0);
        assert_eq!(
            tilt,
            Tilt {
                rotate_x: -10.0,
                rotate_y: 10.0
            }
        );
    }

    #[test]
    fn pointer_outside_box_is_clamped_to_edge() {
        let tilt = compute_tilt(1_000.0, -400.0, card(), 20.0);
        assert_eq!(
            tilt,
            Tilt {
                rotate_x: -10.0,
                rotate_y: -10.0
            }
        );
    }

    #[test]
    fn degenerate_box_yields_neutral_tilt() {
        let zero_width = BoundingBox::new(0.0, 0.0, 0.0, 100.0);
        let zero_height = BoundingBox::new(0.0, 0.0, 100.0, 0.0);
        let nan_width = BoundingBox::new(0.0, 0.0, f64::NAN, 100.0);

        assert_eq!(compute_tilt(10.0, 10.0, zero_width, 20.0), Tilt::NEUTRAL);
        assert_eq!(compute_tilt(10.0, 10.0, zero_height, 20.0), Tilt::NEUTRAL);
        assert_eq!(compute_tilt(10.0, 10.0, nan_width, 20.0), Tilt::NEUTRAL);
    }

    #[test]
    fn css_transform_uses_fixed_perspective() {
        let tilt = Tilt {
            rotate_x: -10.0,
            rotate_y: 2.5,
        };
        assert_eq!(
            tilt.to_css(),
            "perspective(1000px) rotateX(-10.00deg) rotateY(2.50deg)"
        );
        assert_eq!(
            Tilt::NEUTRAL.to_css(),
            "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg)"
        );
    }

    #[test]
    fn state_tracks_glow_and_resets_on_leave() {
        let mut state = TiltState::new(12.0);

        state.pointer_moved(150.0, 75.0, card());
        assert_eq!(
            state.glow(),
            GlowOrigin {
                x_percent: 25.0,
                y_percent: 25.0
            }
        );
        assert!(!state.tilt().is_neutral());

        state.pointer_left();
        assert!(state.tilt().is_neutral());
        assert_eq!(state.glow(), GlowOrigin::CENTER);
        assert_eq!(GlowOrigin::CENTER.to_css_vars(), "--mouse-x: 50.0%; --mouse-y: 50.0%;");
    }

    #[test]
    fn binding_forwards_updates_until_dropped() {
        let host = ManualHost::new();
        let received = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&received);
        let binding = TiltBinding::attach(&host, 20.0, move |state: TiltState| {
            sink.borrow_mut().push(state.tilt());
        });
        assert_eq!(host.handler_count(), 2);

        host.pointer_move(PointerSample {
            x: 100.0,
            y: 50.0,
            bounds: card(),
        });
        assert_eq!(
            binding.current().tilt(),
            Tilt {
                rotate_x: -10.0,
                rotate_y: 10.0
            }
        );
        host.pointer_leave();

        drop(binding);
        assert_eq!(host.handler_count(), 0);
        host.pointer_move(PointerSample {
            x: 300.0,
            y: 150.0,
            bounds: card(),
        });

        let received = received.borrow();
        assert_eq!(received.len(), 2);
        assert!(received[1].is_neutral());
    }
}
