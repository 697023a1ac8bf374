// SPDX: CC0-1.0

use crate::{frame::decay_velocity, Circle, Number, Point, Velocity};
use core::fmt;

/// A circle with a velocity, mutated in place every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MovableCircle {
    pub x: Number,
    pub y: Number,
    pub r: Number,
    pub vx: Number,
    pub vy: Number,
}

impl MovableCircle {
    pub const fn new(circle: Circle, velocity: Velocity) -> Self {
        Self {
            x: circle.center.x,
            y: circle.center.y,
            r: circle.r,
            vx: velocity.vx,
            vy: velocity.vy,
        }
    }

    pub const fn circle(&self) -> Circle {
        Circle::new(self.x, self.y, self.r)
    }

    pub const fn center(&self) -> Point<Number> {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    pub const fn velocity(&self, axis: Axis) -> Number {
        match axis {
            Axis::X => self.vx,
            Axis::Y => self.vy,
        }
    }

    /// Moves the center by one step of the velocity.
    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    fn axis_mut(&mut self, axis: Axis) -> (&mut Number, &mut Number) {
        match axis {
            Axis::X => (&mut self.x, &mut self.vx),
            Axis::Y => (&mut self.y, &mut self.vy),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    const fn sides(&self) -> (Side, Side) {
        // (low, high); pixel y grows downward
        match self {
            Self::X => (Side::Left, Side::Right),
            Self::Y => (Side::Top, Side::Bottom),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Left,
    Bottom,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Right => "right",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecayEvent {
    /// the body hit this wall; its velocity has already been reflected
    Collision(Side),
    /// the body moved freely along the axis
    Friction,
}

/// Chooses a body's new velocity along one axis after a wall hit or a free
/// step.
pub trait SpeedDecay {
    fn decay(&self, body: &MovableCircle, axis: Axis, event: DecayEvent) -> Number;
}

impl<F> SpeedDecay for F
where
    F: Fn(&MovableCircle, Axis, DecayEvent) -> Number,
{
    fn decay(&self, body: &MovableCircle, axis: Axis, event: DecayEvent) -> Number {
        self(body, axis, event)
    }
}

/// Scales the velocity by `collision` on impact and takes `friction` off its
/// magnitude otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Damping {
    pub collision: Number,
    pub friction: Number,
}

impl SpeedDecay for Damping {
    fn decay(&self, body: &MovableCircle, axis: Axis, event: DecayEvent) -> Number {
        let v = body.velocity(axis);
        match event {
            DecayEvent::Collision(_) => v * self.collision,
            DecayEvent::Friction => decay_velocity(v, self.friction),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// [left, right]
    pub w_box: [Number; 2],
    /// [top, bottom]
    pub h_box: [Number; 2],
}

/// Keeps `body` inside `bounds` for one tick, reflecting its velocity off any
/// wall it has crossed. Each axis is handled on its own.
pub fn update_in_box(
    body: &mut MovableCircle,
    bounds: &BoundingBox,
    speed_decay: Option<&dyn SpeedDecay>,
) {
    update_axis(body, Axis::X, bounds.w_box, speed_decay);
    update_axis(body, Axis::Y, bounds.h_box, speed_decay);
}

fn update_axis(
    body: &mut MovableCircle,
    axis: Axis,
    [low, high]: [Number; 2],
    speed_decay: Option<&dyn SpeedDecay>,
) {
    let r = body.r;
    let (low_side, high_side) = axis.sides();
    let (pos, vel) = body.axis_mut(axis);
    let event = if *pos + r > high {
        *pos = high - r;
        *vel = -*vel;
        DecayEvent::Collision(high_side)
    } else if *pos - r < low {
        *pos = low + r;
        *vel = -*vel;
        DecayEvent::Collision(low_side)
    } else {
        DecayEvent::Friction
    };

    if let Some(speed_decay) = speed_decay {
        let v = speed_decay.decay(body, axis, event);
        *body.axis_mut(axis).1 = v;
    }
}
