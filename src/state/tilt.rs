// Pointer-driven tilt for interactive cards.
use std::rc::Rc;
use yew::Reducible;

/// Largest rotation applied on either axis, in degrees.
pub const MAX_TILT_DEG: f64 = 8.0;
/// Scale applied while the card is tilted.
pub const TILTED_SCALE: f64 = 1.02;

/// Rotation pair in degrees: `x` around the horizontal axis, `y` around the vertical one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt { x: 0.0, y: 0.0 };

    /// Tilt for a pointer at (`sample_x`, `sample_y`) over a `width` x `height` surface.
    ///
    /// Samples outside the surface are accepted as-is; the result is clamped to
    /// `MAX_TILT_DEG` on both axes. A zero-size surface or a non-finite sample
    /// yields `Tilt::NEUTRAL`.
    pub fn from_pointer(sample_x: f64, sample_y: f64, width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        if center_x == 0.0 || center_y == 0.0 {
            return Self::NEUTRAL;
        }
        let norm_x = (sample_x - center_x) / center_x;
        let norm_y = (sample_y - center_y) / center_y;
        let tilt = Self {
            x: clamp_deg(norm_y * -MAX_TILT_DEG),
            y: clamp_deg(norm_x * MAX_TILT_DEG),
        };
        if tilt.x.is_finite() && tilt.y.is_finite() {
            tilt
        } else {
            Self::NEUTRAL
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

fn clamp_deg(v: f64) -> f64 {
    // NaN passes through clamp untouched and is caught by the caller.
    v.clamp(-MAX_TILT_DEG, MAX_TILT_DEG)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltPhase {
    Idle,
    Tilted,
}

/// What the renderer needs to draw a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub scale: f64,
    pub elevated: bool,
}

impl VisualState {
    pub fn derive(tilt: Tilt, interactive: bool) -> Self {
        Self {
            rotation_x: tilt.x,
            rotation_y: tilt.y,
            scale: if tilt.is_neutral() { 1.0 } else { TILTED_SCALE },
            elevated: interactive,
        }
    }

    /// Inline CSS transform for this state.
    pub fn transform_css(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.3}deg) rotateY({:.3}deg) scale({})",
            self.rotation_x, self.rotation_y, self.scale
        )
    }
}

/// Tilt state owned by a single card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltSurface {
    /// Pointer movement is ignored unless the card has an activation target.
    pub interactive: bool,
    pub tilt: Tilt,
}

pub enum TiltAction {
    PointerMove {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    PointerLeave,
    SetInteractive(bool),
}

impl TiltSurface {
    pub fn new(interactive: bool) -> Self {
        Self {
            interactive,
            tilt: Tilt::NEUTRAL,
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, width: f64, height: f64) -> Tilt {
        if self.interactive {
            self.tilt = Tilt::from_pointer(x, y, width, height);
        }
        self.tilt
    }

    pub fn on_pointer_leave(&mut self) -> Tilt {
        self.tilt = Tilt::NEUTRAL;
        self.tilt
    }

    pub fn phase(&self) -> TiltPhase {
        if self.tilt.is_neutral() {
            TiltPhase::Idle
        } else {
            TiltPhase::Tilted
        }
    }

    pub fn visual_state(&self) -> VisualState {
        VisualState::derive(self.tilt, self.interactive)
    }
}

impl Reducible for TiltSurface {
    type Action = TiltAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = *self;
        match action {
            TiltAction::PointerMove {
                x,
                y,
                width,
                height,
            } => {
                new.on_pointer_move(x, y, width, height);
            }
            TiltAction::PointerLeave => {
                new.on_pointer_leave();
            }
            TiltAction::SetInteractive(interactive) => {
                new.interactive = interactive;
                if !interactive {
                    new.tilt = Tilt::NEUTRAL;
                }
            }
        }
        if new == *self { self } else { Rc::new(new) }
    }
}
