// SPDX: CC0-1.0

pub mod coord;
pub mod curves;
pub mod draw;
pub mod error;
pub mod frame;
pub mod geom;
pub mod helix;
pub mod motion;
pub mod sample;
pub mod shell;
pub mod style;
pub mod surface;
pub mod svg;

use core::fmt;

pub use error::{ConfigError, RenderError, SampleError};

pub type Number = f64;

/// A 2D coordinate. Whether it lives in mathematical or pixel space depends on
/// where it came from; the two are never mixed within one structure.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point<Number> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point<Number>,
    // > 0
    pub r: Number,
}

impl Circle {
    #[inline]
    pub const fn new(x: Number, y: Number, r: Number) -> Self {
        Self {
            center: Point { x, y },
            r,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub vx: Number,
    pub vy: Number,
}
